use async_trait::async_trait;

use crate::domain::order::Order;

#[derive(thiserror::Error, Debug)]
pub enum RepoError {
    #[error("storage error: {0}")]
    Storage(String),
}

/// Ordered ledger of placed orders.
///
/// Positions passed to [`OrderRepository::remove`] are 0-based; the bounds check
/// and the removal happen as one step so concurrent callers never remove an
/// order they did not see.
#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    async fn append(&self, order: Order) -> Result<(), RepoError>;
    async fn list(&self) -> Result<Vec<Order>, RepoError>;
    async fn remove(&self, position: usize) -> Result<Option<Order>, RepoError>;
}
