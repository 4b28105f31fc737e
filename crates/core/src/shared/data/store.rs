use std::time::Duration;

use contracts::domain::a001_user::aggregate::User;
use contracts::domain::a002_company::aggregate::Company;
use contracts::domain::a003_purchase::aggregate::Purchase;
use contracts::domain::a004_shortage::aggregate::Shortage;

use super::InMemoryRepository;
use crate::shared::config::MockConfig;

/// Every mock collection of the application
#[derive(Debug, Default)]
pub struct Store {
    pub users: InMemoryRepository<User>,
    pub companies: InMemoryRepository<Company>,
    pub purchases: InMemoryRepository<Purchase>,
    pub shortages: InMemoryRepository<Shortage>,
}

impl Store {
    /// Empty collections sharing one simulated latency
    pub fn empty(latency: Duration) -> Self {
        Self {
            users: InMemoryRepository::new(latency),
            companies: InMemoryRepository::new(latency),
            purchases: InMemoryRepository::new(latency),
            shortages: InMemoryRepository::new(latency),
        }
    }

    pub fn latency_from(config: &MockConfig) -> Duration {
        Duration::from_millis(config.latency_ms)
    }
}
