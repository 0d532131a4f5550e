//! Port market: buying and selling single units of commodities

use super::{format_credits, require_credits, require_port, ActionError, ActionResult, Notice};
use crate::game::GameStore;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commodity {
    pub name: &'static str,
    pub price: u64,
    pub stock: u64,
}

impl Commodity {
    /// What the port pays for one unit: 80% of the asking price
    pub fn sale_price(&self) -> u64 {
        self.price * 4 / 5
    }
}

pub const COMMODITIES: &[Commodity] = &[
    Commodity {
        name: "Fuel",
        price: 12,
        stock: 1500,
    },
    Commodity {
        name: "Organics",
        price: 18,
        stock: 800,
    },
    Commodity {
        name: "Equipment",
        price: 35,
        stock: 450,
    },
];

/// Case-insensitive catalog lookup
pub fn find_commodity(name: &str) -> Result<&'static Commodity, ActionError> {
    COMMODITIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| ActionError::UnknownCommodity(name.to_string()))
}

pub fn buy<S: KeyValueStore>(game: &mut GameStore<S>, commodity: &str) -> ActionResult {
    let item = find_commodity(commodity)?;
    require_port(game)?;
    require_credits(game, item.price)?;

    game.update_credits(-(item.price as i64));
    Ok(Notice::new(
        "Trade Complete",
        format!(
            "Bought 1 unit of {} for {} credits.",
            item.name,
            format_credits(item.price)
        ),
    ))
}

pub fn sell<S: KeyValueStore>(game: &mut GameStore<S>, commodity: &str) -> ActionResult {
    let item = find_commodity(commodity)?;
    require_port(game)?;

    let proceeds = item.sale_price();
    game.update_credits(proceeds as i64);
    Ok(Notice::new(
        "Trade Complete",
        format!(
            "Sold 1 unit of {} for {} credits.",
            item.name,
            format_credits(proceeds)
        ),
    ))
}
