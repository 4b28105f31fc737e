use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Fields shared by every aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Unique record id
    pub id: Id,
    /// Business code shown to users (e.g. "#PO-1001", "#CP-0002")
    pub code: String,
    /// Display name of the record
    pub description: String,
    /// Lifecycle metadata
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            metadata: EntityMetadata::new(),
        }
    }

    /// Hook to run before every write
    pub fn before_write(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }
}
