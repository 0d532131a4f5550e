//! Map actions: moving between sectors, scanning and docking

use super::{require_port, require_sector, ActionError, ActionResult, Notice};
use crate::game::GameStore;
use crate::model::normalize_sector_id;
use crate::storage::KeyValueStore;

/// Turns spent by a move, a scan or docking
pub const TURN_COST: i32 = 1;

/// Move to a sector connected to the current one
pub fn warp<S: KeyValueStore>(game: &mut GameStore<S>, target: &str) -> ActionResult {
    let target = normalize_sector_id(target);
    let sector = require_sector(game)?;

    if game.turns() == 0 {
        return Err(ActionError::OutOfTurns);
    }
    if !sector.connected_sectors.contains(&target) {
        return Err(ActionError::NotConnected(target));
    }

    if !game.move_to(&target) {
        return Err(ActionError::OutOfTurns);
    }

    let arrived = game.current_sector().ok_or(ActionError::NotInitialized)?;
    Ok(Notice::new(
        "Moved",
        format!("Arrived at {} in the {}.", arrived.name, arrived.region),
    ))
}

/// Scan the neighbourhood for one turn
pub fn scan<S: KeyValueStore>(game: &mut GameStore<S>) -> ActionResult {
    require_sector(game)?;
    if game.turns() == 0 {
        return Err(ActionError::OutOfTurns);
    }

    game.update_turns(-TURN_COST);
    Ok(Notice::new(
        "Scan Results",
        "No significant anomalies detected in nearby sectors.",
    ))
}

/// Dock at the local port for one turn
pub fn dock<S: KeyValueStore>(game: &mut GameStore<S>) -> ActionResult {
    require_port(game)?;
    if game.turns() == 0 {
        return Err(ActionError::OutOfTurns);
    }

    game.update_turns(-TURN_COST);
    Ok(Notice::new("Docked", "You have successfully docked at the port."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn started() -> GameStore<MemoryStore> {
        let mut game = GameStore::open_seeded(MemoryStore::new(), 9);
        game.initialize_game();
        game
    }

    #[test]
    fn test_warp_accepts_bare_numbers() {
        let mut game = started();
        let notice = warp(&mut game, "2").unwrap();
        assert_eq!(notice.title, "Moved");
        assert_eq!(game.current_sector().unwrap().id, "sector_2");
        assert_eq!(game.turns(), 249);
    }

    #[test]
    fn test_warp_rejects_unconnected_sector() {
        let mut game = started();
        let err = warp(&mut game, "sector_99").unwrap_err();
        assert_eq!(err, ActionError::NotConnected("sector_99".to_string()));
        assert_eq!(game.turns(), 250);
    }

    #[test]
    fn test_warp_without_game() {
        let mut game = GameStore::open(MemoryStore::new());
        assert_eq!(warp(&mut game, "2").unwrap_err(), ActionError::NotInitialized);
    }

    #[test]
    fn test_out_of_turns_blocks_everything() {
        let mut game = started();
        game.update_turns(-250);
        assert_eq!(warp(&mut game, "2").unwrap_err(), ActionError::OutOfTurns);
        assert_eq!(scan(&mut game).unwrap_err(), ActionError::OutOfTurns);
        assert_eq!(dock(&mut game).unwrap_err(), ActionError::OutOfTurns);
    }

    #[test]
    fn test_scan_and_dock_cost_a_turn() {
        let mut game = started();
        scan(&mut game).unwrap();
        dock(&mut game).unwrap();
        assert_eq!(game.turns(), 248);
    }

    #[test]
    fn test_dock_needs_port() {
        let mut game = started();
        while game.current_sector().unwrap().has_port {
            let next = game.current_sector().unwrap().connected_sectors[0].clone();
            warp(&mut game, &next).unwrap();
        }
        let turns = game.turns();
        assert_eq!(dock(&mut game).unwrap_err(), ActionError::NoPort);
        assert_eq!(game.turns(), turns);
    }
}
