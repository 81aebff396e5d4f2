use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::coffee::Coffee;

/// One placed order. Orders carry no identifier of their own; callers address
/// them by 1-based position in the ledger, which shifts when earlier orders are
/// removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub coffee_id: u32,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    pub fn new(coffee: &Coffee) -> Self {
        Self {
            coffee_id: coffee.id,
            placed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coffee::CATALOG;

    #[test]
    fn new_order_references_catalog_entry() {
        let order = Order::new(&CATALOG[2]);
        assert_eq!(order.coffee_id, 3);
    }

    #[test]
    fn placement_time_is_monotonic_across_orders() {
        let first = Order::new(&CATALOG[0]);
        let second = Order::new(&CATALOG[1]);
        assert!(second.placed_at >= first.placed_at);
    }
}
