use contracts::domain::a001_user::aggregate::{User, UserDto, UserId, UserStatus};
use contracts::domain::common::AggregateId;

use crate::shared::data::{Repository, Store};
use crate::shared::display_id::display_id;

/// Mailbox domain of generated user emails
const EMAIL_DOMAIN: &str = "visulab.com";

/// Company shown when the form leaves it blank
const NO_COMPANY: &str = "N/A";

/// `{first word of the name, lowercased}@visulab.com`
pub fn auto_email(name: &str) -> String {
    let lowered = name.to_lowercase();
    let first = lowered.trim().split(' ').next().unwrap_or("");
    let local = if first.is_empty() { "usuario" } else { first };
    format!("{}@{}", local, EMAIL_DOMAIN)
}

/// Create a new user
pub async fn create(store: &Store, dto: UserDto) -> anyhow::Result<UserId> {
    let email = dto
        .email
        .clone()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| auto_email(&dto.name));
    let company = if dto.company.trim().is_empty() {
        NO_COMPANY.to_string()
    } else {
        dto.company.clone()
    };
    let status = if dto.is_active {
        UserStatus::Active
    } else {
        UserStatus::Inactive
    };

    let mut aggregate = User::new_for_insert(
        display_id("USR"),
        dto.name,
        email,
        company,
        dto.role,
        status,
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.base.before_write();

    let id = store.users.create(aggregate).await?;
    tracing::info!("User created: {}", id.as_string());
    Ok(id)
}

/// Update an existing user
pub async fn update(store: &Store, dto: UserDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| UserId::from_string(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = store
        .users
        .get(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.update(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.base.before_write();

    store.users.update(aggregate).await?;
    Ok(())
}

/// Keep the user but mark it inactive
pub async fn deactivate(store: &Store, id: UserId) -> anyhow::Result<()> {
    let mut aggregate = store
        .users
        .get(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.status = UserStatus::Inactive;
    aggregate.base.before_write();
    store.users.update(aggregate).await?;
    tracing::info!("User deactivated: {}", id.as_string());
    Ok(())
}

/// Remove the user permanently
pub async fn delete(store: &Store, id: UserId) -> anyhow::Result<bool> {
    store.users.delete(id).await
}

pub async fn get_by_id(store: &Store, id: UserId) -> anyhow::Result<Option<User>> {
    store.users.get(id).await
}

pub async fn list_all(store: &Store) -> anyhow::Result<Vec<User>> {
    store.users.list().await
}

/// Number of users with `Active` status
pub async fn count_active(store: &Store) -> anyhow::Result<usize> {
    Ok(list_all(store).await?.iter().filter(|u| u.is_active()).count())
}
