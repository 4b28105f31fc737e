use contracts::domain::a004_shortage::aggregate::{Shortage, ShortageId};
use contracts::domain::common::AggregateId;

use super::form::ShortageForm;
use crate::shared::data::{Repository, Store};
use crate::shared::display_id::display_id;

const CODE_PREFIX: &str = "SH";

/// Author and time labels of a freshly registered shortage
const CURRENT_USER: &str = "You";
const JUST_NOW: &str = "Now";

/// Register the form contents as a new shortage, listed first
///
/// On success the power fields are emptied and the quantity goes back to 1.
pub async fn register(
    store: &Store,
    form: &mut ShortageForm,
    company: &str,
) -> anyhow::Result<ShortageId> {
    if !form.can_submit() {
        anyhow::bail!("Fix the cylinder value before saving");
    }

    let mut aggregate = Shortage::new_for_insert(
        display_id(CODE_PREFIX),
        form.material.clone(),
        form.esf_cil(),
        CURRENT_USER.to_string(),
        form.coating.clone(),
        company.to_string(),
        JUST_NOW.to_string(),
        form.quantity,
        form.lens_type.clone(),
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.base.before_write();

    let id = store.shortages.create(aggregate).await?;
    tracing::info!("Shortage registered: {}", id.as_string());
    form.reset_after_submit();
    Ok(id)
}

pub async fn list_all(store: &Store) -> anyhow::Result<Vec<Shortage>> {
    store.shortages.list().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed;
    use contracts::enums::LensField;
    use std::time::Duration;

    #[tokio::test]
    async fn test_register_normalized_entry() {
        let store = seed::seeded_store(Duration::ZERO);
        let mut form = ShortageForm::default();
        form.change(LensField::Sphere, "-1.6");
        form.blur(LensField::Sphere).unwrap();
        form.change(LensField::Cylinder, "125");
        form.blur(LensField::Cylinder).unwrap();
        form.quantity = 2;

        register(&store, &mut form, "Matriz").await.unwrap();

        let shortages = list_all(&store).await.unwrap();
        assert_eq!(shortages.len(), 5);
        let newest = &shortages[0];
        assert_eq!(newest.index, "1.56");
        assert_eq!(newest.esf_cil, "-1.50 -1.25");
        assert_eq!(newest.treatment, "HMC");
        assert_eq!(newest.user, "You");
        assert_eq!(newest.time, "Now");
        assert_eq!(newest.quantity, 2);
        assert!(newest.base.code.starts_with("SH-"));

        assert_eq!(form.sphere.value, "");
        assert_eq!(form.cylinder.value, "");
        assert_eq!(form.quantity, 1);
        assert_eq!(form.material, "1.56");
    }

    #[tokio::test]
    async fn test_flagged_cylinder_blocks_register() {
        let store = Store::default();
        let mut form = ShortageForm::default();
        form.change(LensField::Cylinder, "-1.1");
        assert!(form.blur(LensField::Cylinder).is_err());

        let err = register(&store, &mut form, "Matriz").await.unwrap_err();
        assert!(err.to_string().contains("cylinder"));
        assert!(list_all(&store).await.unwrap().is_empty());
        assert_eq!(form.cylinder.value, "-1.1");
    }

    #[tokio::test]
    async fn test_zero_quantity_is_rejected() {
        let store = Store::default();
        let mut form = ShortageForm::default();
        form.quantity = 0;
        assert!(register(&store, &mut form, "Matriz").await.is_err());
        assert_eq!(form.quantity, 0);
    }
}
