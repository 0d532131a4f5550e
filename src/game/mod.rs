//! Game state store
//!
//! Holds the player, ship and current sector plus the turn and credit
//! counters. Every mutation writes the whole snapshot through to storage
//! under [`GAME_DATA_KEY`]; a failed write is logged and the in-memory state
//! is kept.

pub mod sector;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::model::{Faction, GameData, Player, Sector, Ship, ShipStatus};
use crate::storage::{load_json, save_json, KeyValueStore, GAME_DATA_KEY};

pub use sector::{generate_sector, starting_sector};

/// Turns granted by a new game and by each reset
pub const STARTING_TURNS: u32 = 250;

/// Credits granted by a new game
pub const STARTING_CREDITS: u64 = 10_000;

pub struct GameStore<S: KeyValueStore> {
    storage: S,
    rng: StdRng,
    player: Option<Player>,
    ship: Option<Ship>,
    current_sector: Option<Sector>,
    turns: u32,
    credits: u64,
}

impl<S: KeyValueStore> GameStore<S> {
    /// Load the persisted game, if any
    pub fn open(storage: S) -> Self {
        Self::with_rng(storage, StdRng::from_entropy())
    }

    /// Same as [`GameStore::open`] with a reproducible sector generator
    pub fn open_seeded(storage: S, seed: u64) -> Self {
        Self::with_rng(storage, StdRng::seed_from_u64(seed))
    }

    fn with_rng(storage: S, rng: StdRng) -> Self {
        let mut store = Self {
            storage,
            rng,
            player: None,
            ship: None,
            current_sector: None,
            turns: STARTING_TURNS,
            credits: STARTING_CREDITS,
        };

        match load_json::<GameData>(&store.storage, GAME_DATA_KEY) {
            Ok(Some(data)) => {
                log::info!(
                    "Loaded game data ({} turns, {} credits)",
                    data.turns,
                    data.credits
                );
                store.player = data.player;
                store.ship = data.ship;
                store.current_sector = data.current_sector;
                store.turns = data.turns;
                store.credits = data.credits;
            }
            Ok(None) => log::debug!("No stored game data"),
            Err(err) => log::error!("Error loading game data: {:#}", err),
        }

        store
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn ship(&self) -> Option<&Ship> {
        self.ship.as_ref()
    }

    pub fn current_sector(&self) -> Option<&Sector> {
        self.current_sector.as_ref()
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn credits(&self) -> u64 {
        self.credits
    }

    /// Whether a game has been started
    pub fn is_initialized(&self) -> bool {
        self.player.is_some()
    }

    /// Current state in its persisted shape
    pub fn snapshot(&self) -> GameData {
        GameData {
            player: self.player.clone(),
            ship: self.ship.clone(),
            current_sector: self.current_sector.clone(),
            turns: self.turns,
            credits: self.credits,
        }
    }

    /// Start over with a fresh player, ship and home sector
    pub fn initialize_game(&mut self) {
        self.player = Some(starting_player());
        self.ship = Some(starting_ship());
        self.current_sector = Some(starting_sector());
        self.turns = STARTING_TURNS;
        self.credits = STARTING_CREDITS;
        log::info!("Initialized new game");
        self.persist();
    }

    /// Travel to `sector_id`, spending one turn.
    ///
    /// Returns `false` without touching state or storage when no turns are
    /// left.
    pub fn move_to(&mut self, sector_id: &str) -> bool {
        if self.turns == 0 {
            log::debug!("Move to {} refused: out of turns", sector_id);
            return false;
        }

        let sector = generate_sector(sector_id, &mut self.rng);
        log::info!("Moved to {} ({})", sector.name, sector.region);
        self.current_sector = Some(sector);
        self.turns -= 1;

        if let Some(player) = &mut self.player {
            player.current_sector_id = sector_id.to_string();
        }
        self.sync_player();
        self.persist();
        true
    }

    /// `credits = max(0, credits + amount)`
    pub fn update_credits(&mut self, amount: i64) {
        self.credits = self.credits.saturating_add_signed(amount);
        self.sync_player();
        self.persist();
    }

    /// `turns = max(0, turns + amount)`
    pub fn update_turns(&mut self, amount: i32) {
        self.turns = self.turns.saturating_add_signed(amount);
        self.sync_player();
        self.persist();
    }

    pub fn reset_turns(&mut self) {
        self.turns = STARTING_TURNS;
        self.sync_player();
        self.persist();
    }

    /// Move credits between wallet and bank: positive deposits, negative
    /// withdraws.
    ///
    /// Returns `false` without changes when there is no player or the
    /// transfer would overdraw either side.
    pub fn transfer_to_bank(&mut self, amount: i64) -> bool {
        let Some(player) = &mut self.player else {
            return false;
        };

        let magnitude = amount.unsigned_abs();
        if amount >= 0 {
            if self.credits < magnitude {
                return false;
            }
            self.credits -= magnitude;
            player.bank += magnitude;
        } else {
            if player.bank < magnitude {
                return false;
            }
            player.bank -= magnitude;
            self.credits += magnitude;
        }

        self.sync_player();
        self.persist();
        true
    }

    /// Apply `edit` to the ship and persist; `false` when there is no ship
    pub fn modify_ship(&mut self, edit: impl FnOnce(&mut Ship)) -> bool {
        let Some(ship) = &mut self.ship else {
            return false;
        };
        edit(ship);
        self.persist();
        true
    }

    /// Hand the storage back
    pub fn close(self) -> S {
        self.storage
    }

    fn sync_player(&mut self) {
        if let Some(player) = &mut self.player {
            player.credits = self.credits;
            player.turns = self.turns;
        }
    }

    fn persist(&mut self) {
        let data = self.snapshot();
        if let Err(err) = save_json(&mut self.storage, GAME_DATA_KEY, &data) {
            log::error!("Error saving game data: {:#}", err);
        }
    }
}

fn starting_player() -> Player {
    Player {
        id: "player_1".to_string(),
        credits: STARTING_CREDITS,
        bank: 0,
        turns: STARTING_TURNS,
        current_sector_id: "sector_1".to_string(),
        ship_id: "ship_1".to_string(),
        alignment: 0,
        faction: Faction::Neutral,
    }
}

fn starting_ship() -> Ship {
    Ship {
        id: "ship_1".to_string(),
        class_key: "rustbucket_mk1".to_string(),
        name: "My First Ship".to_string(),
        holds: 50,
        shields: 20,
        fighters: 20,
        torps: 0,
        status: ShipStatus::Ok,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use anyhow::{bail, Result};
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts writes and can be told to fail them
    struct CountingStore {
        inner: MemoryStore,
        writes: Rc<Cell<usize>>,
        fail_writes: bool,
    }

    impl CountingStore {
        fn new(writes: Rc<Cell<usize>>) -> Self {
            Self {
                inner: MemoryStore::new(),
                writes,
                fail_writes: false,
            }
        }
    }

    impl KeyValueStore for CountingStore {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            self.inner.get_item(key)
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
            self.writes.set(self.writes.get() + 1);
            if self.fail_writes {
                bail!("storage unavailable");
            }
            self.inner.set_item(key, value)
        }

        fn remove_item(&mut self, key: &str) -> Result<()> {
            self.inner.remove_item(key)
        }
    }

    fn new_game() -> GameStore<MemoryStore> {
        let mut game = GameStore::open_seeded(MemoryStore::new(), 42);
        game.initialize_game();
        game
    }

    #[test]
    fn test_defaults_before_any_game() {
        let game = GameStore::open(MemoryStore::new());
        assert!(!game.is_initialized());
        assert_eq!(game.turns(), STARTING_TURNS);
        assert_eq!(game.credits(), STARTING_CREDITS);
        assert!(game.current_sector().is_none());
    }

    #[test]
    fn test_initialize_game_sets_starting_values() {
        let game = new_game();
        let player = game.player().unwrap();
        assert_eq!(player.current_sector_id, "sector_1");
        assert_eq!(player.faction, Faction::Neutral);
        assert_eq!(game.ship().unwrap().class_key, "rustbucket_mk1");
        assert_eq!(game.current_sector().unwrap().name, "Stardock Alpha");
        assert_eq!(game.turns(), 250);
        assert_eq!(game.credits(), 10_000);
    }

    #[test]
    fn test_move_spends_a_turn_and_updates_player() {
        let mut game = new_game();
        assert!(game.move_to("sector_2"));
        assert_eq!(game.turns(), 249);
        assert_eq!(game.current_sector().unwrap().id, "sector_2");
        assert_eq!(game.player().unwrap().current_sector_id, "sector_2");
        assert_eq!(game.player().unwrap().turns, 249);
    }

    #[test]
    fn test_move_without_turns_is_noop() {
        let writes = Rc::new(Cell::new(0));
        let mut game = GameStore::open_seeded(CountingStore::new(writes.clone()), 1);
        game.initialize_game();
        game.update_turns(-(STARTING_TURNS as i32));
        let before = game.snapshot();
        let writes_before = writes.get();

        assert!(!game.move_to("sector_3"));
        assert_eq!(game.snapshot(), before);
        assert_eq!(writes.get(), writes_before);
    }

    #[test]
    fn test_reset_turns_restores_full_allowance() {
        let mut game = new_game();
        game.update_turns(-100);
        game.reset_turns();
        assert_eq!(game.turns(), STARTING_TURNS);
        game.update_turns(40);
        game.reset_turns();
        assert_eq!(game.turns(), STARTING_TURNS);
    }

    #[test]
    fn test_credit_updates_write_through() {
        let mut game = new_game();
        game.update_credits(-2_500);

        let reopened = GameStore::open(game.close());
        assert_eq!(reopened.credits(), 7_500);
        assert_eq!(reopened.player().unwrap().credits, 7_500);
    }

    #[test]
    fn test_bank_transfers_respect_balances() {
        let mut game = new_game();
        assert!(game.transfer_to_bank(4_000));
        assert_eq!(game.credits(), 6_000);
        assert_eq!(game.player().unwrap().bank, 4_000);

        assert!(!game.transfer_to_bank(-5_000));
        assert!(game.transfer_to_bank(-1_000));
        assert_eq!(game.credits(), 7_000);
        assert_eq!(game.player().unwrap().bank, 3_000);

        assert!(!game.transfer_to_bank(7_001));
    }

    #[test]
    fn test_bank_transfer_needs_a_player() {
        let mut game = GameStore::open(MemoryStore::new());
        assert!(!game.transfer_to_bank(10));
        assert_eq!(game.credits(), STARTING_CREDITS);
    }

    #[test]
    fn test_modify_ship_persists() {
        let mut game = new_game();
        assert!(game.modify_ship(|ship| ship.name = "Dusty".to_string()));

        let reopened = GameStore::open(game.close());
        assert_eq!(reopened.ship().unwrap().name, "Dusty");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut game = new_game();
        game.move_to("sector_77");
        game.update_credits(123);
        let saved = game.snapshot();

        let reopened = GameStore::open(game.close());
        assert_eq!(reopened.snapshot(), saved);
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let writes = Rc::new(Cell::new(0));
        let mut storage = CountingStore::new(writes.clone());
        storage.fail_writes = true;

        let mut game = GameStore::open_seeded(storage, 5);
        game.initialize_game();
        game.update_credits(500);
        assert_eq!(game.credits(), 10_500);
        assert_eq!(writes.get(), 2);

        let reopened = GameStore::open(game.close());
        assert!(!reopened.is_initialized());
    }

    proptest! {
        #[test]
        fn prop_update_credits_clamps_at_zero(
            start in 0u64..1_000_000,
            amount in -2_000_000i64..2_000_000,
        ) {
            let mut game = GameStore::open(MemoryStore::new());
            game.update_credits(start as i64 - STARTING_CREDITS as i64);
            prop_assert_eq!(game.credits(), start);

            game.update_credits(amount);
            let expected = (start as i64 + amount).max(0) as u64;
            prop_assert_eq!(game.credits(), expected);
        }

        #[test]
        fn prop_update_turns_clamps_at_zero(amount in -1_000i32..1_000) {
            let mut game = GameStore::open(MemoryStore::new());
            game.update_turns(amount);
            let expected = (STARTING_TURNS as i64 + amount as i64).max(0) as u32;
            prop_assert_eq!(game.turns(), expected);
        }
    }
}
