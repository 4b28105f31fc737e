use async_trait::async_trait;
use contracts::domain::common::AggregateRoot;
use std::time::Duration;
use tokio::sync::RwLock;

/// Storage of one aggregate collection
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: AggregateRoot + Clone + Send + Sync,
    T::Id: Send + Sync,
{
    /// All records, in storage order
    async fn list(&self) -> anyhow::Result<Vec<T>>;

    async fn get(&self, id: T::Id) -> anyhow::Result<Option<T>>;

    /// Insert at the front; newest records are listed first
    async fn create(&self, item: T) -> anyhow::Result<T::Id>;

    /// Replace the record with the same id; `false` when it does not exist
    async fn update(&self, item: T) -> anyhow::Result<bool>;

    /// Remove permanently; `false` when it does not exist
    async fn delete(&self, id: T::Id) -> anyhow::Result<bool>;
}

/// Mock records kept in memory, with an optional simulated round-trip delay
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    items: RwLock<Vec<T>>,
    latency: Duration,
}

impl<T> InMemoryRepository<T>
where
    T: AggregateRoot + Clone + Send + Sync,
{
    pub fn new(latency: Duration) -> Self {
        Self::with_items(Vec::new(), latency)
    }

    pub fn with_items(items: Vec<T>, latency: Duration) -> Self {
        Self {
            items: RwLock::new(items),
            latency,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl<T> Default for InMemoryRepository<T>
where
    T: AggregateRoot + Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl<T> Repository<T> for InMemoryRepository<T>
where
    T: AggregateRoot + Clone + Send + Sync,
    T::Id: Send + Sync,
{
    async fn list(&self) -> anyhow::Result<Vec<T>> {
        self.simulate_latency().await;
        Ok(self.items.read().await.clone())
    }

    async fn get(&self, id: T::Id) -> anyhow::Result<Option<T>> {
        self.simulate_latency().await;
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    async fn create(&self, item: T) -> anyhow::Result<T::Id> {
        self.simulate_latency().await;
        let id = item.id();
        let mut items = self.items.write().await;
        if items.iter().any(|existing| existing.id() == id) {
            anyhow::bail!("{} {} already exists", T::element_name(), item.code());
        }
        tracing::debug!("{}: inserted {}", T::full_name(), item.code());
        items.insert(0, item);
        Ok(id)
    }

    async fn update(&self, item: T) -> anyhow::Result<bool> {
        self.simulate_latency().await;
        let id = item.id();
        let mut items = self.items.write().await;
        match items.iter_mut().find(|existing| existing.id() == id) {
            Some(slot) => {
                *slot = item;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: T::Id) -> anyhow::Result<bool> {
        self.simulate_latency().await;
        let mut items = self.items.write().await;
        match items.iter().position(|item| item.id() == id) {
            Some(pos) => {
                let removed = items.remove(pos);
                tracing::debug!("{}: deleted {}", T::full_name(), removed.code());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
