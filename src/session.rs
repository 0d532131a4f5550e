//! Client session: both stores over one storage backend

use anyhow::Result;

use crate::game::GameStore;
use crate::identity::IdentityStore;
use crate::storage::{DataDir, KeyValueStore, SharedStore, SqliteStore};

/// Which part of the client a user lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Nobody signed in
    Auth,
    /// Signed in, but no galaxy chosen or no game started
    GalaxyHub,
    /// Ready to play
    Game,
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Auth => write!(f, "Sign in"),
            Route::GalaxyHub => write!(f, "Galaxy hub"),
            Route::Game => write!(f, "In game"),
        }
    }
}

pub struct Session<S: KeyValueStore> {
    pub identity: IdentityStore<S>,
    pub game: GameStore<S>,
}

impl Session<SharedStore<SqliteStore>> {
    /// Open the on-disk session under `data_dir`
    pub fn open_in(data_dir: &DataDir) -> Result<Self> {
        let store = SqliteStore::open(&data_dir.database_path())?;
        log::debug!("Opened session at {:?}", data_dir.database_path());
        Ok(Self::open(SharedStore::new(store)))
    }
}

impl<S: KeyValueStore + Clone> Session<S> {
    /// Load both stores from `storage`
    pub fn open(storage: S) -> Self {
        Self {
            identity: IdentityStore::open(storage.clone()),
            game: GameStore::open(storage),
        }
    }

    /// Same as [`Session::open`] with a reproducible sector generator
    pub fn open_seeded(storage: S, seed: u64) -> Self {
        Self {
            identity: IdentityStore::open(storage.clone()),
            game: GameStore::open_seeded(storage, seed),
        }
    }
}

impl<S: KeyValueStore> Session<S> {
    pub fn route(&self) -> Route {
        match self.identity.user() {
            None => Route::Auth,
            Some(user) if user.galaxy_id.is_none() || !self.game.is_initialized() => {
                Route::GalaxyHub
            }
            Some(_) => Route::Game,
        }
    }

    /// Tear down both stores, returning the game store's storage handle
    pub fn close(self) -> S {
        drop(self.identity.close());
        self.game.close()
    }
}
