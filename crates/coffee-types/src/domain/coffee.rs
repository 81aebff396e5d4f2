use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const CURRENCY: &str = "USD";
pub const TAX_RATE: f64 = 0.1;
/// Applied to the base price as-is; totals are never rounded.
pub const TAX_MULTIPLIER: f64 = 1.1;

/// A fixed menu entry. Ids are 1-based and match the position in [`CATALOG`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coffee {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub price: f64,
}

pub static CATALOG: [Coffee; 4] = [
    Coffee {
        id: 1,
        name: "latte",
        description: "A latte is a coffee drink made with espresso and steamed milk. It is a single shot of espresso served in a tall glass, with a layer of steamed milk on top, and a layer of microfoam on top of that.",
        price: 2.5,
    },
    Coffee {
        id: 2,
        name: "cappuccino",
        description: "A cappuccino is an espresso-based coffee drink that originated in Italy, and is traditionally prepared with steamed milk foam.",
        price: 3.5,
    },
    Coffee {
        id: 3,
        name: "espresso",
        description: "An espresso is a coffee drink that is prepared by forcing a small amount of boiling water under pressure through finely ground coffee beans. Espresso is generally thicker than coffee brewed by other methods, and has cream on top.",
        price: 4.5,
    },
    Coffee {
        id: 4,
        name: "normal",
        description: "Your average cup of joe made by putting boiled water through some freshly ground coffee beans, nothing special.",
        price: 1.5,
    },
];

/// Looks up a catalog entry by its public id.
pub fn find_coffee(id: i64) -> Option<&'static Coffee> {
    let idx = usize::try_from(id).ok()?.checked_sub(1)?;
    CATALOG.get(idx)
}

pub fn menu() -> BTreeMap<u32, String> {
    CATALOG.iter().map(|c| (c.id, c.name.to_string())).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceQuote {
    pub price: f64,
    pub currency: String,
    pub tax: f64,
    pub total: f64,
}

impl PriceQuote {
    pub fn for_coffee(coffee: &Coffee) -> Self {
        Self {
            price: coffee.price,
            currency: CURRENCY.to_string(),
            tax: TAX_RATE,
            total: coffee.price * TAX_MULTIPLIER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_catalog_positions() {
        for (idx, coffee) in CATALOG.iter().enumerate() {
            assert_eq!(coffee.id as usize, idx + 1);
            assert_eq!(find_coffee(coffee.id as i64), Some(coffee));
        }
    }

    #[test]
    fn out_of_range_ids_are_not_found() {
        for id in [i64::MIN, -1, 0, 5, 6, 100, i64::MAX] {
            assert!(find_coffee(id).is_none(), "id {id} should not resolve");
        }
    }

    #[test]
    fn menu_lists_every_entry_by_name() {
        let m = menu();
        assert_eq!(m.len(), 4);
        assert_eq!(m[&1], "latte");
        assert_eq!(m[&2], "cappuccino");
        assert_eq!(m[&3], "espresso");
        assert_eq!(m[&4], "normal");
    }

    #[test]
    fn quote_total_is_unrounded_price_times_multiplier() {
        for coffee in CATALOG.iter() {
            let quote = PriceQuote::for_coffee(coffee);
            assert_eq!(quote.price, coffee.price);
            assert_eq!(quote.currency, "USD");
            assert_eq!(quote.tax, 0.1);
            assert_eq!(quote.total, coffee.price * 1.1);
        }
        // 1.5 * 1.1 is not exactly 1.65 in binary floating point.
        assert_eq!(PriceQuote::for_coffee(&CATALOG[3]).total, 1.6500000000000001);
    }

    #[test]
    fn latte_quote_serializes_like_the_menu_board() {
        let quote = PriceQuote::for_coffee(&CATALOG[0]);
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"price": 2.5, "currency": "USD", "tax": 0.1, "total": 2.75})
        );
    }
}
