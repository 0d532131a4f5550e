//! Galaxy selection
//!
//! Joining binds the profile to a galaxy and starts a fresh game there.

use super::{ActionError, ActionResult, Notice};
use crate::game::GameStore;
use crate::identity::IdentityStore;
use crate::model::ProfileUpdate;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalaxyKind {
    Friendly,
    Standard,
    Pirate,
}

impl GalaxyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalaxyKind::Friendly => "Friendly",
            GalaxyKind::Standard => "Standard",
            GalaxyKind::Pirate => "Pirate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalaxyOption {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: GalaxyKind,
    pub description: &'static str,
    pub players: u32,
    pub difficulty: &'static str,
}

pub const GALAXIES: &[GalaxyOption] = &[
    GalaxyOption {
        id: "galaxy_friendly",
        name: "Peaceful Sector",
        kind: GalaxyKind::Friendly,
        description: "PvP disabled, perfect for learning the ropes",
        players: 1247,
        difficulty: "Easy",
    },
    GalaxyOption {
        id: "galaxy_standard",
        name: "Core Galaxy",
        kind: GalaxyKind::Standard,
        description: "Balanced gameplay with optional PvP zones",
        players: 3891,
        difficulty: "Medium",
    },
    GalaxyOption {
        id: "galaxy_pirate",
        name: "Lawless Expanse",
        kind: GalaxyKind::Pirate,
        description: "Full PvP, high risk and high reward",
        players: 2156,
        difficulty: "Hard",
    },
];

/// Look up by id (`galaxy_pirate`), short id (`pirate`) or name
pub fn find_galaxy(query: &str) -> Result<&'static GalaxyOption, ActionError> {
    let query = query.trim();
    GALAXIES
        .iter()
        .find(|g| {
            g.id.eq_ignore_ascii_case(query)
                || g.id.trim_start_matches("galaxy_").eq_ignore_ascii_case(query)
                || g.name.eq_ignore_ascii_case(query)
        })
        .ok_or_else(|| ActionError::UnknownGalaxy(query.to_string()))
}

pub fn join_galaxy<S: KeyValueStore, G: KeyValueStore>(
    identity: &mut IdentityStore<S>,
    game: &mut GameStore<G>,
    query: &str,
) -> ActionResult {
    let galaxy = find_galaxy(query)?;
    if !identity.is_signed_in() {
        return Err(ActionError::NotSignedIn);
    }

    if !identity.update_profile(&ProfileUpdate::galaxy(galaxy.id)) {
        return Err(ActionError::ProfileNotSaved);
    }
    game.initialize_game();

    Ok(Notice::new(
        "Galaxy Joined",
        format!("Welcome to {}. Your journey begins at Stardock Alpha.", galaxy.name),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, USER_KEY};
    use anyhow::{bail, Result};

    /// Accepts everything except a profile carrying a galaxy
    struct NoGalaxyStore(MemoryStore);

    impl KeyValueStore for NoGalaxyStore {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            self.0.get_item(key)
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
            if key == USER_KEY && value.contains("galaxyId") {
                bail!("disk full");
            }
            self.0.set_item(key, value)
        }

        fn remove_item(&mut self, key: &str) -> Result<()> {
            self.0.remove_item(key)
        }
    }

    #[test]
    fn test_find_galaxy_forms() {
        assert_eq!(find_galaxy("galaxy_pirate").unwrap().name, "Lawless Expanse");
        assert_eq!(find_galaxy("friendly").unwrap().id, "galaxy_friendly");
        assert_eq!(find_galaxy("core galaxy").unwrap().id, "galaxy_standard");
        assert!(find_galaxy("andromeda").is_err());
    }

    #[test]
    fn test_join_requires_sign_in() {
        let mut identity = IdentityStore::open(MemoryStore::new());
        let mut game = GameStore::open(MemoryStore::new());
        assert_eq!(
            join_galaxy(&mut identity, &mut game, "pirate").unwrap_err(),
            ActionError::NotSignedIn
        );
        assert!(!game.is_initialized());
    }

    #[test]
    fn test_join_sets_profile_and_starts_game() {
        let mut identity = IdentityStore::open(MemoryStore::new());
        let mut game = GameStore::open(MemoryStore::new());
        identity.sign_up("nova@example.com", "pw", "Nova");

        join_galaxy(&mut identity, &mut game, "pirate").unwrap();
        assert_eq!(
            identity.user().unwrap().galaxy_id.as_deref(),
            Some("galaxy_pirate")
        );
        assert!(game.is_initialized());
        assert_eq!(game.turns(), 250);
    }

    #[test]
    fn test_join_fails_when_profile_is_not_saved() {
        let mut identity = IdentityStore::open(NoGalaxyStore(MemoryStore::new()));
        let mut game = GameStore::open(MemoryStore::new());
        assert!(identity.sign_up("nova@example.com", "pw", "Nova"));

        assert_eq!(
            join_galaxy(&mut identity, &mut game, "pirate").unwrap_err(),
            ActionError::ProfileNotSaved
        );
        assert!(identity.user().unwrap().galaxy_id.is_none());
        assert!(!game.is_initialized());
    }
}
