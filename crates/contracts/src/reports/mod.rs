//! Report DTOs consumed by the export pipeline

pub mod filter;
pub mod item;
pub mod record;

pub use filter::ReportFilter;
pub use item::ReportItem;
pub use record::ReportRecord;
