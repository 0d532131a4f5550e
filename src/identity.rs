//! Identity store: the signed-in user profile
//!
//! There is no credential check. Signing in fabricates a profile from the
//! email address and persists it under [`USER_KEY`]. Storage failures are
//! logged and the in-memory user is left untouched.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::model::{ProfileUpdate, User};
use crate::storage::{load_json, save_json, KeyValueStore, USER_KEY};

/// Galaxy assigned to users who sign in without choosing one
pub const DEFAULT_GALAXY_ID: &str = "galaxy_standard";

pub struct IdentityStore<S: KeyValueStore> {
    storage: S,
    user: Option<User>,
}

impl<S: KeyValueStore> IdentityStore<S> {
    /// Load the persisted user, if any
    pub fn open(storage: S) -> Self {
        let user = match load_json::<User>(&storage, USER_KEY) {
            Ok(user) => user,
            Err(err) => {
                log::error!("Error loading user: {:#}", err);
                None
            }
        };

        match &user {
            Some(u) => log::info!("Loaded user {}", u.id),
            None => log::debug!("No stored user"),
        }

        Self { storage, user }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn sign_in(&mut self, email: &str, _password: &str) -> bool {
        let display_name = email.split('@').next().unwrap_or(email).to_string();
        let user = User {
            id: new_user_id(),
            display_name,
            email: Some(email.to_string()),
            galaxy_id: Some(DEFAULT_GALAXY_ID.to_string()),
        };
        self.replace_user(user)
    }

    pub fn sign_up(&mut self, email: &str, _password: &str, display_name: &str) -> bool {
        let user = User {
            id: new_user_id(),
            display_name: display_name.to_string(),
            email: Some(email.to_string()),
            galaxy_id: None,
        };
        self.replace_user(user)
    }

    pub fn sign_out(&mut self) -> bool {
        if let Err(err) = self.storage.remove_item(USER_KEY) {
            log::error!("Error signing out: {:#}", err);
            return false;
        }
        self.user = None;
        log::info!("Signed out");
        true
    }

    /// Merge `updates` into the current user; does nothing when signed out
    pub fn update_profile(&mut self, updates: &ProfileUpdate) -> bool {
        let Some(current) = &self.user else {
            return false;
        };

        let mut updated = current.clone();
        updates.apply_to(&mut updated);
        self.replace_user(updated)
    }

    /// Hand the storage back
    pub fn close(self) -> S {
        self.storage
    }

    fn replace_user(&mut self, user: User) -> bool {
        if let Err(err) = save_json(&mut self.storage, USER_KEY, &user) {
            log::error!("Error saving user: {:#}", err);
            return false;
        }
        log::info!("Saved user {}", user.id);
        self.user = Some(user);
        true
    }
}

fn new_user_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("user_{}", millis)
}
