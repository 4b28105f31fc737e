pub mod memory_store;
pub mod seed;
pub mod store;

pub use memory_store::{InMemoryRepository, Repository};
pub use store::Store;
