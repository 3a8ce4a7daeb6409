//! Per-player statistics accumulator.
//!
//! One record per [`PlayerId`], created on first observation and cleared at
//! match start. Counters only ever grow within a match. Unknown baselines are
//! `None` rather than sentinel numbers; cooldown timestamps start at
//! [`COOLDOWN_SENTINEL`] so the first trigger is never suppressed.

use serde::{Deserialize, Serialize};

use super::PlayerId;
use crate::arena::Team;
use crate::shot::ShotTags;

/// Initial value of every cooldown timestamp.
pub const COOLDOWN_SENTINEL: f32 = -10.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoostLedger {
    pub pickups: u32,
    /// Pickups collected while already at or above the wasted fill ratio
    pub wasted: u32,
    pub small_pads: u32,
    pub big_pads: u32,
    /// Last observed tank amount, `None` until first observed
    pub last_boost: Option<f32>,
}

/// One detected shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotAttempt {
    pub time: f32,
    pub xg: f32,
    pub tags: ShotTags,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OffenseLedger {
    pub goals: u32,
    pub assists: u32,
    /// Stays 0 unless the host can flag shots on goal; see report fallback
    pub shots_on_target: u32,
    pub offensive_demos: u32,
    pub ball_touches: u32,
    pub aerial_touches: u32,
    pub useful_passes: u32,
    pub clean_clears: u32,
    pub missed_open_goals: u32,
    pub shots: Vec<ShotAttempt>,
}

impl OffenseLedger {
    pub fn xg_total(&self) -> f32 {
        self.shots.iter().map(|s| s.xg).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefenseLedger {
    pub clearances: u32,
    pub challenges_won: u32,
    pub defensive_demos: u32,
    /// Seconds spent in the own half
    pub defense_time: f32,
    pub clutch_saves: u32,
    pub blocks: u32,
    pub high_pressings: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationLedger {
    /// Seconds spent as role 1 (closest), 2 and 3 (farthest)
    pub role_time: [f32; 3],
    pub cuts: u32,
    pub aggressive_time: f32,
    pub passive_time: f32,
    pub ballchase_time: f32,
    pub double_commits: u32,
    /// Role assigned on the previous tick
    pub last_role: Option<u8>,
    /// Length of the ongoing role-1 streak
    pub first_streak: f32,
    /// Length of the ongoing role-3 streak
    pub third_streak: f32,
}

impl RotationLedger {
    pub fn total_role_time(&self) -> f32 {
        self.role_time.iter().sum()
    }
}

/// Edge-detection and de-duplication state; never reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransientGuards {
    pub in_attack: bool,
    pub time_since_attack: f32,
    pub prev_saves: u32,
    pub last_touch_time: Option<f32>,
    pub last_duel_time: f32,
    pub last_missed_open_goal_time: f32,
    pub last_high_press_time: f32,
}

impl Default for TransientGuards {
    fn default() -> Self {
        Self {
            in_attack: false,
            time_since_attack: 0.0,
            prev_saves: 0,
            last_touch_time: None,
            last_duel_time: COOLDOWN_SENTINEL,
            last_missed_open_goal_time: COOLDOWN_SENTINEL,
            last_high_press_time: COOLDOWN_SENTINEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatRecord {
    pub id: PlayerId,
    pub name: Option<String>,
    pub team: Option<Team>,
    pub boost: BoostLedger,
    pub offense: OffenseLedger,
    pub defense: DefenseLedger,
    pub rotation: RotationLedger,
    pub guards: TransientGuards,
}

impl PlayerStatRecord {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: None,
            team: None,
            boost: BoostLedger::default(),
            offense: OffenseLedger::default(),
            defense: DefenseLedger::default(),
            rotation: RotationLedger::default(),
            guards: TransientGuards::default(),
        }
    }

    /// Display name, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.id.as_str())
    }

    /// True once `now` is at least `window` past `last`.
    #[inline]
    pub(crate) fn cooldown_elapsed(last: f32, now: f32, window: f32) -> bool {
        now - last >= window
    }
}
