use contracts::domain::a003_purchase::aggregate::{
    Purchase, PurchaseDto, PurchaseId, PurchaseStatus,
};
use contracts::domain::common::AggregateId;

use crate::shared::data::{Repository, Store};
use crate::shared::display_id::display_id;
use crate::shared::format::parse_leading_float;

const DISPLAY_PREFIX: &str = "#PO";
const DEFAULT_SUPPLIER: &str = "Supplier";
const NO_ITEMS: &str = "-";

/// Amount typed on the purchase form; blank reads as zero
pub fn parse_amount(raw: &str) -> anyhow::Result<f64> {
    if raw.trim().is_empty() {
        return Ok(0.0);
    }
    parse_leading_float(raw).ok_or_else(|| anyhow::anyhow!("Invalid amount: {}", raw))
}

/// Register a purchase order
pub async fn create(store: &Store, dto: PurchaseDto) -> anyhow::Result<PurchaseId> {
    let amount = parse_amount(&dto.amount)
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    let supplier = dto
        .supplier
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SUPPLIER.to_string());
    let items = dto
        .items_description
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| NO_ITEMS.to_string());

    let mut aggregate = Purchase::new_for_insert(
        display_id(DISPLAY_PREFIX),
        supplier,
        dto.date,
        items,
        amount,
        dto.status,
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.base.before_write();

    let id = store.purchases.create(aggregate).await?;
    tracing::info!("Purchase created: {}", id.as_string());
    Ok(id)
}

pub async fn list_all(store: &Store) -> anyhow::Result<Vec<Purchase>> {
    store.purchases.list().await
}

/// Purchases with the given status, or all of them for `None`
pub async fn list_by_status(
    store: &Store,
    status: Option<PurchaseStatus>,
) -> anyhow::Result<Vec<Purchase>> {
    let purchases = list_all(store).await?;
    Ok(match status {
        Some(status) => purchases.into_iter().filter(|p| p.status == status).collect(),
        None => purchases,
    })
}

/// Sum of all purchase amounts
pub fn total_cost(purchases: &[Purchase]) -> f64 {
    purchases.iter().map(|p| p.amount).sum()
}

pub fn received_count(purchases: &[Purchase]) -> usize {
    purchases
        .iter()
        .filter(|p| p.status == PurchaseStatus::Received)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed;
    use crate::shared::format::format_money;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn dto(supplier: Option<&str>, amount: &str) -> PurchaseDto {
        PurchaseDto {
            supplier: supplier.map(Into::into),
            date: NaiveDate::from_ymd_opt(2023, 11, 2).unwrap(),
            items_description: None,
            amount: amount.into(),
            status: PurchaseStatus::Pending,
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("").unwrap(), 0.0);
        assert_eq!(parse_amount("1500.75").unwrap(), 1500.75);
        assert_eq!(parse_amount("99abc").unwrap(), 99.0);
        assert!(parse_amount("abc").is_err());
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let store = Store::default();
        create(&store, dto(None, "")).await.unwrap();

        let purchase = list_all(&store).await.unwrap().remove(0);
        assert_eq!(purchase.supplier(), "Supplier");
        assert_eq!(purchase.supplier_initials, "S");
        assert_eq!(purchase.items_description, "-");
        assert_eq!(purchase.amount, 0.0);
        assert!(purchase.display_id().starts_with("#PO-"));
        assert_eq!(purchase.display_id().len(), 8);
    }

    #[tokio::test]
    async fn test_create_rejects_bad_amounts() {
        let store = Store::default();
        assert!(create(&store, dto(Some("Zeiss"), "R$ 10")).await.is_err());
        assert!(create(&store, dto(Some("Zeiss"), "-5")).await.is_err());
        assert!(list_all(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seeded_totals() {
        let store = seed::seeded_store(Duration::ZERO);
        let all = list_by_status(&store, None).await.unwrap();
        assert_eq!(format_money(total_cost(&all)), "R$ 6600.50");
        assert_eq!(received_count(&all), 1);

        let pending = list_by_status(&store, Some(PurchaseStatus::Pending))
            .await
            .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].display_id(), "#PO-1002");

        let cancelled = list_by_status(&store, Some(PurchaseStatus::Cancelled))
            .await
            .unwrap();
        assert!(cancelled.is_empty());
    }
}
