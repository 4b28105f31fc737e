pub mod adapters;
pub mod executor;

pub use executor::ExportExecutor;
