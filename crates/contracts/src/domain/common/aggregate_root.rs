use super::AggregateId;

/// Aggregate root contract
///
/// Repositories key records by [`AggregateRoot::id`] and use the code and
/// static names for errors and logging.
pub trait AggregateRoot {
    /// Identifier type
    type Id: AggregateId;

    // ============================================================================
    // Instance data
    // ============================================================================

    fn id(&self) -> Self::Id;

    /// Business code (e.g. "#PO-1001")
    fn code(&self) -> &str;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Aggregate index (e.g. "a003")
    fn aggregate_index() -> &'static str;

    /// Collection name (e.g. "purchase")
    fn collection_name() -> &'static str;

    /// Singular UI name
    fn element_name() -> &'static str;

    /// Full system name (e.g. "a003_purchase")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
