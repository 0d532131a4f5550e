//! Ship upgrades and renaming

use std::str::FromStr;

use super::{format_credits, require_credits, ActionError, ActionResult, Notice};
use crate::game::GameStore;
use crate::model::Ship;
use crate::storage::KeyValueStore;

/// Flat fee for a new name
pub const RENAME_COST: u64 = 500;

/// Longest name a ship can carry
pub const MAX_NAME_LEN: usize = 30;

/// Upgradeable ship systems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipStat {
    Holds,
    Shields,
    Fighters,
    Torpedoes,
}

impl ShipStat {
    pub const ALL: [ShipStat; 4] = [
        ShipStat::Holds,
        ShipStat::Shields,
        ShipStat::Fighters,
        ShipStat::Torpedoes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShipStat::Holds => "Cargo Holds",
            ShipStat::Shields => "Shields",
            ShipStat::Fighters => "Fighters",
            ShipStat::Torpedoes => "Torpedoes",
        }
    }

    pub fn value(&self, ship: &Ship) -> u32 {
        match self {
            ShipStat::Holds => ship.holds,
            ShipStat::Shields => ship.shields,
            ShipStat::Fighters => ship.fighters,
            ShipStat::Torpedoes => ship.torps,
        }
    }

    fn value_mut<'a>(&self, ship: &'a mut Ship) -> &'a mut u32 {
        match self {
            ShipStat::Holds => &mut ship.holds,
            ShipStat::Shields => &mut ship.shields,
            ShipStat::Fighters => &mut ship.fighters,
            ShipStat::Torpedoes => &mut ship.torps,
        }
    }
}

impl FromStr for ShipStat {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "holds" | "cargo" | "cargo-holds" => Ok(ShipStat::Holds),
            "shields" => Ok(ShipStat::Shields),
            "fighters" => Ok(ShipStat::Fighters),
            "torps" | "torpedoes" => Ok(ShipStat::Torpedoes),
            _ => Err(ActionError::UnknownShipStat(s.to_string())),
        }
    }
}

/// `floor(1000 * 1.4^level)`, saturating for absurd levels
pub fn upgrade_cost(level: u32) -> u64 {
    let cost = (1000.0 * 1.4_f64.powi(level.min(i32::MAX as u32) as i32)).floor();
    if cost >= u64::MAX as f64 {
        u64::MAX
    } else {
        cost as u64
    }
}

/// Raise a ship system, named as typed by the player, by a level
pub fn upgrade<S: KeyValueStore>(game: &mut GameStore<S>, stat: &str) -> ActionResult {
    upgrade_stat(game, stat.parse()?)
}

pub fn upgrade_stat<S: KeyValueStore>(game: &mut GameStore<S>, stat: ShipStat) -> ActionResult {
    let ship = game.ship().ok_or(ActionError::NotInitialized)?;

    let level = stat.value(ship);
    let cost = upgrade_cost(level);
    require_credits(game, cost)?;

    game.update_credits(-(cost.min(i64::MAX as u64) as i64));
    game.modify_ship(|ship| {
        let value = stat.value_mut(ship);
        *value = value.saturating_add(1);
    });

    Ok(Notice::new(
        "Upgrade Complete",
        format!(
            "{} upgraded to {} for {} credits.",
            stat.label(),
            level.saturating_add(1),
            format_credits(cost)
        ),
    ))
}

pub fn rename<S: KeyValueStore>(game: &mut GameStore<S>, new_name: &str) -> ActionResult {
    let name = new_name.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
        return Err(ActionError::InvalidName);
    }
    if game.ship().is_none() {
        return Err(ActionError::NotInitialized);
    }
    require_credits(game, RENAME_COST)?;

    game.update_credits(-(RENAME_COST as i64));
    game.modify_ship(|ship| ship.name = name.to_string());

    Ok(Notice::new(
        "Ship Renamed",
        format!("Your ship is now called \"{}\".", name),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn started() -> GameStore<MemoryStore> {
        let mut game = GameStore::open_seeded(MemoryStore::new(), 8);
        game.initialize_game();
        game
    }

    #[test]
    fn test_upgrade_cost_curve() {
        assert_eq!(upgrade_cost(0), 1000);
        assert_eq!(upgrade_cost(1), 1400);
        assert!((1..20).all(|level| upgrade_cost(level) > upgrade_cost(level - 1)));
        assert_eq!(upgrade_cost(u32::MAX), u64::MAX);
    }

    #[test]
    fn test_upgrade_torpedoes_from_zero() {
        let mut game = started();
        upgrade(&mut game, "torps").unwrap();
        assert_eq!(game.ship().unwrap().torps, 1);
        assert_eq!(game.credits(), 9_000);

        upgrade(&mut game, "torpedoes").unwrap();
        assert_eq!(game.ship().unwrap().torps, 2);
        assert_eq!(game.credits(), 7_600);
    }

    #[test]
    fn test_stat_names() {
        assert_eq!("Cargo".parse::<ShipStat>(), Ok(ShipStat::Holds));
        assert_eq!(" TORPS ".parse::<ShipStat>(), Ok(ShipStat::Torpedoes));

        let mut game = started();
        assert_eq!(
            upgrade(&mut game, "lasers").unwrap_err(),
            ActionError::UnknownShipStat("lasers".to_string())
        );
        assert_eq!(game.credits(), 10_000);
    }

    #[test]
    fn test_upgrade_too_expensive() {
        let mut game = started();
        let err = upgrade(&mut game, "shields").unwrap_err();
        assert!(matches!(err, ActionError::InsufficientCredits { .. }));
        assert_eq!(game.ship().unwrap().shields, 20);
        assert_eq!(game.credits(), 10_000);
    }

    #[test]
    fn test_rename_charges_fee() {
        let mut game = started();
        rename(&mut game, "  Star Nomad ").unwrap();
        assert_eq!(game.ship().unwrap().name, "Star Nomad");
        assert_eq!(game.credits(), 9_500);
    }

    #[test]
    fn test_rename_validation() {
        let mut game = started();
        assert_eq!(rename(&mut game, "   ").unwrap_err(), ActionError::InvalidName);
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert_eq!(rename(&mut game, &long).unwrap_err(), ActionError::InvalidName);
        assert_eq!(game.credits(), 10_000);
    }
}
