//! Player actions behind the client's screens
//!
//! Each action validates against the current stores, applies its effect
//! through the store operations and returns a [`Notice`] for the front-end
//! to display. Rejections come back as [`ActionError`].

pub mod bank;
pub mod feed;
pub mod galaxy;
pub mod missions;
pub mod navigation;
pub mod shipyard;
pub mod trade;

use thiserror::Error;

use crate::game::GameStore;
use crate::model::Sector;
use crate::storage::KeyValueStore;

/// Confirmation shown after a successful action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    pub fn new(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("No game in progress. Join a galaxy first.")]
    NotInitialized,
    #[error("You need to sign in first.")]
    NotSignedIn,
    #[error("Your profile could not be saved. Please try again.")]
    ProfileNotSaved,
    #[error("You are out of turns. Wait for the daily reset at 00:00 UTC.")]
    OutOfTurns,
    #[error("There is no port in this sector.")]
    NoPort,
    #[error("You need {needed} credits but only have {available}.")]
    InsufficientCredits { needed: u64, available: u64 },
    #[error("Your bank balance is {available} credits.")]
    InsufficientBankBalance { needed: u64, available: u64 },
    #[error("Please enter a valid amount.")]
    InvalidAmount,
    #[error("Please enter a valid ship name.")]
    InvalidName,
    #[error("{0} is not connected to this sector.")]
    NotConnected(String),
    #[error("Unknown commodity: {0}")]
    UnknownCommodity(String),
    #[error("Unknown ship system: {0}")]
    UnknownShipStat(String),
    #[error("Unknown mission: {0}")]
    UnknownMission(String),
    #[error("Unknown galaxy: {0}")]
    UnknownGalaxy(String),
    #[error("Unknown feed category: {0}")]
    UnknownFeedCategory(String),
}

impl ActionError {
    /// Dialog title for this rejection
    pub fn title(&self) -> &'static str {
        match self {
            ActionError::NotInitialized => "No Game",
            ActionError::NotSignedIn => "Not Signed In",
            ActionError::ProfileNotSaved => "Profile Error",
            ActionError::OutOfTurns => "No Turns",
            ActionError::NoPort => "No Port",
            ActionError::InsufficientCredits { .. } => "Insufficient Credits",
            ActionError::InsufficientBankBalance { .. } => "Insufficient Funds",
            ActionError::InvalidAmount => "Invalid Amount",
            ActionError::InvalidName => "Invalid Name",
            ActionError::NotConnected(_) => "No Route",
            ActionError::UnknownCommodity(_)
            | ActionError::UnknownShipStat(_)
            | ActionError::UnknownMission(_)
            | ActionError::UnknownGalaxy(_)
            | ActionError::UnknownFeedCategory(_) => "Not Found",
        }
    }
}

pub type ActionResult = Result<Notice, ActionError>;

/// Current sector of a started game
fn require_sector<S: KeyValueStore>(game: &GameStore<S>) -> Result<&Sector, ActionError> {
    if !game.is_initialized() {
        return Err(ActionError::NotInitialized);
    }
    game.current_sector().ok_or(ActionError::NotInitialized)
}

/// Current sector, which must have a port
fn require_port<S: KeyValueStore>(game: &GameStore<S>) -> Result<&Sector, ActionError> {
    let sector = require_sector(game)?;
    if !sector.has_port {
        return Err(ActionError::NoPort);
    }
    Ok(sector)
}

fn require_credits<S: KeyValueStore>(game: &GameStore<S>, needed: u64) -> Result<(), ActionError> {
    if game.credits() < needed {
        return Err(ActionError::InsufficientCredits {
            needed,
            available: game.credits(),
        });
    }
    Ok(())
}

/// Credits as shown in the client, e.g. `10,000`
pub fn format_credits(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
