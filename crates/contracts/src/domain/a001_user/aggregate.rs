use crate::domain::common::{initials_of, AggregateRoot, BaseAggregate};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::uuid_aggregate_id!(
    /// Unique user id
    UserId
);

// ============================================================================
// Enums
// ============================================================================

/// Access level of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Administrator,
    User,
}

impl UserRole {
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Administrator => "Administrator",
            UserRole::User => "User",
        }
    }
}

/// Presence/lifecycle state of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Offline,
    Pending,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Offline => "Offline",
            UserStatus::Pending => "Pending",
            UserStatus::Inactive => "Inactive",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Back office user. `base.description` holds the user's full name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub base: BaseAggregate<UserId>,

    pub email: String,

    /// Company name the user belongs to
    pub company: String,

    pub role: UserRole,
    pub status: UserStatus,

    /// Human label of the last activity ("Now", "2 hours ago")
    #[serde(rename = "lastActive")]
    pub last_active: String,

    pub initials: String,
}

impl User {
    /// Create a new user for insertion
    pub fn new_for_insert(
        code: String,
        name: String,
        email: String,
        company: String,
        role: UserRole,
        status: UserStatus,
    ) -> Self {
        let initials = initials_of(&name);
        Self {
            base: BaseAggregate::new(UserId::new_v4(), code, name),
            email,
            company,
            role,
            status,
            last_active: "Now".into(),
            initials,
        }
    }

    pub fn name(&self) -> &str {
        &self.base.description
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Apply the editable fields of a DTO
    pub fn update(&mut self, dto: &UserDto) {
        self.base.description = dto.name.clone();
        if let Some(email) = &dto.email {
            self.email = email.clone();
        }
        self.company = dto.company.clone();
        self.role = dto.role;
        self.status = if dto.is_active {
            UserStatus::Active
        } else {
            UserStatus::Inactive
        };
    }

    /// Validate the data
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Name cannot be empty".into());
        }
        if !self.email.contains('@') {
            return Err("Invalid email format".into());
        }
        Ok(())
    }
}

impl AggregateRoot for User {
    type Id = UserId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "user"
    }

    fn element_name() -> &'static str {
        "User"
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Payload of the user form (create and edit)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Option<String>,
    pub name: String,
    /// Generated from the first name when absent on create
    pub email: Option<String>,
    pub company: String,
    pub role: UserRole,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User::new_for_insert(
            "USR-0001".into(),
            "Maria Souza".into(),
            "maria@lab.com".into(),
            "Laboratório Central".into(),
            UserRole::User,
            UserStatus::Active,
        )
    }

    #[test]
    fn test_new_user_derives_initials() {
        let user = sample();
        assert_eq!(user.initials, "MA");
        assert_eq!(user.name(), "Maria Souza");
        assert_eq!(user.last_active, "Now");
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_update_toggles_status() {
        let mut user = sample();
        user.update(&UserDto {
            id: None,
            name: "Maria S.".into(),
            email: None,
            company: "Matriz".into(),
            role: UserRole::Administrator,
            is_active: false,
        });
        assert_eq!(user.status, UserStatus::Inactive);
        assert_eq!(user.email, "maria@lab.com");
        assert_eq!(user.role, UserRole::Administrator);
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let mut user = sample();
        user.email = "maria".into();
        assert!(user.validate().is_err());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(User::full_name(), "a001_user");
    }
}
