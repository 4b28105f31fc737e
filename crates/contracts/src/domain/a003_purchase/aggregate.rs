use crate::domain::common::{initials_of, AggregateRoot, BaseAggregate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Unique purchase order id
    PurchaseId
);

/// Delivery state of a purchase order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseStatus {
    Received,
    Pending,
    Cancelled,
}

impl PurchaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseStatus::Received => "Received",
            PurchaseStatus::Pending => "Pending",
            PurchaseStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Purchase order placed with a supplier. `base.code` is the display id
/// (`#PO-1001`), `base.description` the supplier name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    #[serde(flatten)]
    pub base: BaseAggregate<PurchaseId>,

    #[serde(rename = "supplierInitials")]
    pub supplier_initials: String,

    pub date: NaiveDate,

    #[serde(rename = "itemsDescription")]
    pub items_description: String,

    pub amount: f64,
    pub status: PurchaseStatus,
}

impl Purchase {
    pub fn new_for_insert(
        display_id: String,
        supplier: String,
        date: NaiveDate,
        items_description: String,
        amount: f64,
        status: PurchaseStatus,
    ) -> Self {
        let supplier_initials = initials_of(&supplier).chars().take(1).collect();
        Self {
            base: BaseAggregate::new(PurchaseId::new_v4(), display_id, supplier),
            supplier_initials,
            date,
            items_description,
            amount,
            status,
        }
    }

    pub fn display_id(&self) -> &str {
        &self.base.code
    }

    pub fn supplier(&self) -> &str {
        &self.base.description
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Supplier cannot be empty".into());
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err("Amount must be a non-negative number".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Purchase {
    type Id = PurchaseId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "purchase"
    }

    fn element_name() -> &'static str {
        "Purchase"
    }
}

/// Payload of the new purchase form. `amount` is the raw text typed by
/// the user; an empty string means zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseDto {
    pub supplier: Option<String>,
    pub date: NaiveDate,
    #[serde(rename = "itemsDescription")]
    pub items_description: Option<String>,
    pub amount: String,
    pub status: PurchaseStatus,
}
