use crate::domain::common::{initials_of, AggregateRoot, BaseAggregate};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Unique company id
    CompanyId
);

/// Role of a company in the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyKind {
    /// Head office
    Headquarters,
    Branch,
    Supplier,
}

impl CompanyKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            CompanyKind::Headquarters => "Headquarters",
            CompanyKind::Branch => "Branch",
            CompanyKind::Supplier => "Supplier",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyStatus {
    Active,
    Inactive,
    Pending,
}

/// Company registered in the network. `base.code` is the display id
/// (`#CP-0001`), `base.description` the company name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(flatten)]
    pub base: BaseAggregate<CompanyId>,

    #[serde(rename = "type")]
    pub kind: CompanyKind,

    #[serde(rename = "contactName")]
    pub contact_name: String,

    #[serde(rename = "contactEmail")]
    pub contact_email: String,

    pub status: CompanyStatus,
    pub initials: String,
}

impl Company {
    pub fn new_for_insert(
        display_id: String,
        name: String,
        kind: CompanyKind,
        contact_name: String,
        contact_email: String,
        status: CompanyStatus,
    ) -> Self {
        let initials = initials_of(&name);
        Self {
            base: BaseAggregate::new(CompanyId::new_v4(), display_id, name),
            kind,
            contact_name,
            contact_email,
            status,
            initials,
        }
    }

    pub fn name(&self) -> &str {
        &self.base.description
    }

    pub fn display_id(&self) -> &str {
        &self.base.code
    }

    pub fn is_active(&self) -> bool {
        self.status == CompanyStatus::Active
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Company name cannot be empty".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Company {
    type Id = CompanyId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "company"
    }

    fn element_name() -> &'static str {
        "Company"
    }
}

/// Payload of the new company form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyDto {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CompanyKind,
    #[serde(rename = "contactName")]
    pub contact_name: Option<String>,
    #[serde(rename = "contactEmail")]
    pub contact_email: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape_uses_ui_field_names() {
        let company = Company::new_for_insert(
            "#CP-0002".into(),
            "Óticas Vision".into(),
            CompanyKind::Branch,
            "Gerente João".into(),
            "contato@vision.com".into(),
            CompanyStatus::Active,
        );
        let json = serde_json::to_value(&company).unwrap();
        assert_eq!(json["type"], "Branch");
        assert_eq!(json["contactName"], "Gerente João");
        assert_eq!(json["code"], "#CP-0002");
        assert_eq!(company.initials, "ÓT");
    }

    #[test]
    fn test_blank_name_is_invalid() {
        let company = Company::new_for_insert(
            "#CP-0009".into(),
            "   ".into(),
            CompanyKind::Supplier,
            "-".into(),
            "-".into(),
            CompanyStatus::Pending,
        );
        assert!(company.validate().is_err());
    }
}
