//! # Player Module
//!
//! - `record` - per-player statistics accumulator
//! - `roster` - per-tick / per-event view of every car on the field

pub mod record;
pub mod roster;

pub use record::{
    BoostLedger, DefenseLedger, OffenseLedger, PlayerStatRecord, RotationLedger, ShotAttempt,
    COOLDOWN_SENTINEL,
};
pub use roster::{PlayerFrame, Roster};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable player key supplied by the host.
///
/// Hosts without a stable id fall back to the display name, in which case
/// two players sharing a name in one match share a record.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
