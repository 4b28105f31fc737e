use contracts::domain::a002_company::aggregate::{Company, CompanyDto, CompanyId, CompanyStatus};
use contracts::domain::common::AggregateId;

use crate::shared::data::{Repository, Store};
use crate::shared::display_id::display_id;

const DISPLAY_PREFIX: &str = "#CP";

/// Placeholder for contact fields left blank
const NO_CONTACT: &str = "-";

fn contact_or_default(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| NO_CONTACT.to_string())
}

/// Create a new company
pub async fn create(store: &Store, dto: CompanyDto) -> anyhow::Result<CompanyId> {
    let status = if dto.is_active {
        CompanyStatus::Active
    } else {
        CompanyStatus::Inactive
    };

    let mut aggregate = Company::new_for_insert(
        display_id(DISPLAY_PREFIX),
        dto.name,
        dto.kind,
        contact_or_default(dto.contact_name),
        contact_or_default(dto.contact_email),
        status,
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.base.before_write();

    let id = store.companies.create(aggregate).await?;
    tracing::info!("Company created: {}", id.as_string());
    Ok(id)
}

/// Keep the company but mark it inactive
pub async fn deactivate(store: &Store, id: CompanyId) -> anyhow::Result<()> {
    let mut aggregate = store
        .companies
        .get(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.status = CompanyStatus::Inactive;
    aggregate.base.before_write();
    store.companies.update(aggregate).await?;
    Ok(())
}

/// Remove the company permanently
pub async fn delete(store: &Store, id: CompanyId) -> anyhow::Result<bool> {
    store.companies.delete(id).await
}

pub async fn list_all(store: &Store) -> anyhow::Result<Vec<Company>> {
    store.companies.list().await
}

pub async fn count_active(store: &Store) -> anyhow::Result<usize> {
    Ok(list_all(store)
        .await?
        .iter()
        .filter(|c| c.is_active())
        .count())
}
