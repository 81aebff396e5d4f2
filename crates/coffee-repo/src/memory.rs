use async_trait::async_trait;
use coffee_types::domain::order::Order;
use coffee_types::ports::order_repository::{OrderRepository, RepoError};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct InMemoryRepo {
    pub orders: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryRepo {
    async fn append(&self, order: Order) -> Result<(), RepoError> {
        self.orders.write().await.push(order);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Order>, RepoError> {
        Ok(self.orders.read().await.clone())
    }

    async fn remove(&self, position: usize) -> Result<Option<Order>, RepoError> {
        let mut orders = self.orders.write().await;
        if position >= orders.len() {
            return Ok(None);
        }
        Ok(Some(orders.remove(position)))
    }
}
