use std::collections::BTreeMap;

use crate::errors::{AppError, COFFEE_NOT_FOUND, DELETE_FORBIDDEN, NOT_PAID, ORDER_NOT_FOUND};
use coffee_types::domain::coffee::{self, Coffee, PriceQuote};
use coffee_types::domain::order::Order;
use coffee_types::ports::order_repository::{OrderRepository, RepoError};

pub struct CoffeeShopService<R: OrderRepository> {
    repo: R,
    delete_token: String,
}

fn storage(e: RepoError) -> AppError {
    AppError::Internal(anyhow::anyhow!(e.to_string()))
}

fn coffee_or_not_found(id: i64) -> Result<&'static Coffee, AppError> {
    coffee::find_coffee(id).ok_or_else(|| AppError::NotFound(COFFEE_NOT_FOUND.into()))
}

impl<R: OrderRepository> CoffeeShopService<R> {
    pub fn new(repo: R, delete_token: impl Into<String>) -> Self {
        Self {
            repo,
            delete_token: delete_token.into(),
        }
    }

    pub fn get_menu(&self) -> BTreeMap<u32, String> {
        coffee::menu()
    }

    pub fn describe_coffee(&self, id: i64) -> Result<&'static str, AppError> {
        Ok(coffee_or_not_found(id)?.description)
    }

    pub fn price_coffee(&self, id: i64) -> Result<PriceQuote, AppError> {
        Ok(PriceQuote::for_coffee(coffee_or_not_found(id)?))
    }

    /// Records one order for `id`. `quantity` is accepted for compatibility
    /// with existing clients but a single ledger entry is written regardless.
    pub async fn place_order(&self, id: i64, quantity: i64, paid: bool) -> Result<(), AppError> {
        let coffee = coffee_or_not_found(id)?;
        if !paid {
            tracing::warn!(coffee_id = coffee.id, "order rejected: not paid");
            return Err(AppError::PaymentRequired(NOT_PAID.into()));
        }
        let order = Order::new(coffee);
        tracing::info!(
            coffee_id = coffee.id,
            quantity,
            placed_at = %order.placed_at,
            "order placed"
        );
        self.repo.append(order).await.map_err(storage)
    }

    /// Coffee ids of every open order, oldest first.
    pub async fn list_orders(&self) -> Result<Vec<u32>, AppError> {
        let orders = self.repo.list().await.map_err(storage)?;
        Ok(orders.into_iter().map(|o| o.coffee_id).collect())
    }

    /// Removes the order at 1-based `order_number`. The token is checked
    /// before the order number so an unauthorised caller learns nothing about
    /// the ledger.
    pub async fn delete_order(&self, order_number: i64, token: &str) -> Result<(), AppError> {
        if token != self.delete_token {
            tracing::warn!(order_number, "delete rejected: bad token");
            return Err(AppError::Forbidden(DELETE_FORBIDDEN.into()));
        }
        let position = usize::try_from(order_number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(|| AppError::NotFound(ORDER_NOT_FOUND.into()))?;
        match self.repo.remove(position).await.map_err(storage)? {
            Some(order) => {
                tracing::info!(order_number, coffee_id = order.coffee_id, "order deleted");
                Ok(())
            }
            None => Err(AppError::NotFound(ORDER_NOT_FOUND.into())),
        }
    }
}
