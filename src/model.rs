//! Persisted record shapes
//!
//! Field names serialize in camelCase so the stored JSON blobs keep the
//! shape the rest of the game tooling expects.

use serde::{Deserialize, Serialize};

/// Signed-in user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub galaxy_id: Option<String>,
}

/// Partial profile edit, merged field by field into the current user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub galaxy_id: Option<String>,
}

impl ProfileUpdate {
    pub fn galaxy(galaxy_id: impl Into<String>) -> Self {
        Self {
            galaxy_id: Some(galaxy_id.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.email.is_none() && self.galaxy_id.is_none()
    }

    /// Shallow merge into `user`
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.display_name {
            user.display_name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = Some(email.clone());
        }
        if let Some(galaxy_id) = &self.galaxy_id {
            user.galaxy_id = Some(galaxy_id.clone());
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Faction {
    Federation,
    Pirate,
    Neutral,
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Faction::Federation => write!(f, "Federation"),
            Faction::Pirate => write!(f, "Pirate"),
            Faction::Neutral => write!(f, "Neutral"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub credits: u64,
    pub bank: u64,
    pub turns: u32,
    pub current_sector_id: String,
    pub ship_id: String,
    pub alignment: i32,
    pub faction: Faction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "DISABLED")]
    Disabled,
}

impl std::fmt::Display for ShipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShipStatus::Ok => write!(f, "OK"),
            ShipStatus::Disabled => write!(f, "DISABLED"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub id: String,
    pub class_key: String,
    pub name: String,
    pub holds: u32,
    pub shields: u32,
    pub fighters: u32,
    pub torps: u32,
    pub status: ShipStatus,
}

impl Ship {
    /// Class key as shown to players, e.g. `rustbucket_mk1` -> `RUSTBUCKET MK1`
    pub fn class_label(&self) -> String {
        self.class_key.replacen('_', " ", 1).to_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    pub id: String,
    pub region: String,
    pub name: String,
    pub has_port: bool,
    pub has_planet: bool,
    pub connected_sectors: Vec<String>,
    pub players: u32,
}

/// Everything stored under the game-data key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    pub player: Option<Player>,
    pub ship: Option<Ship>,
    pub current_sector: Option<Sector>,
    pub turns: u32,
    pub credits: u64,
}

/// Number shown after `sector_`, or the whole id when it has no prefix
pub fn sector_number(sector_id: &str) -> &str {
    sector_id
        .split_once('_')
        .map(|(_, rest)| rest)
        .unwrap_or(sector_id)
}

/// Accepts `sector_42` or `42`
pub fn normalize_sector_id(input: &str) -> String {
    let input = input.trim();
    if input.chars().all(|c| c.is_ascii_digit()) && !input.is_empty() {
        format!("sector_{}", input)
    } else {
        input.to_string()
    }
}
