//! Player-side inputs to the encounter and the persisted profile.

#![allow(unused_imports)]

pub mod types;

pub use types::*;

use crate::core::constants::PROFILE_FILE;
use crate::error::GameError;
use crate::utils::persistence;

/// Load the saved profile, or a fresh one if none exists.
pub fn load_profile() -> PlayerProfile {
    persistence::load_json_or_default(PROFILE_FILE)
}

pub fn save_profile(profile: &PlayerProfile) -> Result<(), GameError> {
    persistence::save_json(PROFILE_FILE, profile)?;
    tracing::debug!(name = %profile.name, currency = profile.currency, "profile saved");
    Ok(())
}
