//! Event and tick thresholds.
//!
//! Distances are in uu, windows and cooldowns in seconds of match time.

use serde::{Deserialize, Serialize};

/// Boost pad accounting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostThresholds {
    /// Fill ratio at or above which a pickup counts as wasted
    pub wasted_fill_ratio: f32,
    /// Gain above which a pickup is classified as a big pad
    pub big_pad_gain: f32,
}

impl Default for BoostThresholds {
    fn default() -> Self {
        Self {
            wasted_fill_ratio: 0.8,
            big_pad_gain: 90.0,
        }
    }
}

/// Ball-touch heuristics (clearance, duel, pass, double commit)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TouchThresholds {
    /// How deep in its own half the ball must have been for a clearance
    pub clearance_depth: f32,
    /// Opponent-to-ball radius for a contested touch
    pub challenge_radius: f32,
    /// Max gap since the opposing team's last touch for a duel
    pub challenge_window_s: f32,
    pub duel_cooldown_s: f32,
    /// Max gap between teammate touches for a useful pass
    pub pass_window_s: f32,
    pub double_commit_radius: f32,
    pub double_commit_window_s: f32,
}

impl Default for TouchThresholds {
    fn default() -> Self {
        Self {
            clearance_depth: 2000.0,
            challenge_radius: 800.0,
            challenge_window_s: 0.2,
            duel_cooldown_s: 1.0,
            pass_window_s: 2.0,
            double_commit_radius: 800.0,
            double_commit_window_s: 0.5,
        }
    }
}

/// Role tracker windows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationThresholds {
    /// Roles beyond this rank accrue no occupancy time
    pub tracked_roles: u8,
    /// Role-1 / role-3 streaks longer than this fold into aggressive / passive time
    pub streak_fold_s: f32,
    /// Time after a touch before staying forward counts as ballchasing
    pub ballchase_after_s: f32,
    /// Time after a touch before reaching role 3 ends the attack
    pub attack_release_s: f32,
}

impl Default for RotationThresholds {
    fn default() -> Self {
        Self {
            tracked_roles: 3,
            streak_fold_s: 5.0,
            ballchase_after_s: 3.0,
            attack_release_s: 1.0,
        }
    }
}

/// High-pressing detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressingThresholds {
    /// Max distance to the opposing ball carrier
    pub carrier_radius: f32,
    /// Players who touched the ball this recently are not pressing
    pub recent_touch_s: f32,
    pub cooldown_s: f32,
}

impl Default for PressingThresholds {
    fn default() -> Self {
        Self {
            carrier_radius: 2000.0,
            recent_touch_s: 0.5,
            cooldown_s: 2.0,
        }
    }
}

/// Shot detection and context tagging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotThresholds {
    /// Max angle (rad) between ball travel and the goal direction (~20°)
    pub max_angle_rad: f32,
    /// Max |x| of the ball for a shot
    pub max_lateral: f32,
    /// Opponents within this distance of the shooter are defenders
    pub defender_radius: f32,
    /// Lateral band in which a goal-side opponent closes the net
    pub open_net_lane: f32,
    /// Goal-side opponents need more boost than this to close the net
    pub open_net_min_boost: f32,
    pub open_goal_cooldown_s: f32,
    pub double_tap_window_s: f32,
    pub panic_boost: f32,
    pub panic_speed: f32,
    /// Distance from the backboard plane for a backboard read
    pub backboard_band: f32,
    pub backboard_min_height: f32,
    pub center_window_s: f32,
    pub center_lateral: f32,
    pub hard_rebound_speed: f32,
    pub hard_rebound_vertical: f32,
}

impl Default for ShotThresholds {
    fn default() -> Self {
        Self {
            max_angle_rad: 0.35,
            max_lateral: 900.0,
            defender_radius: 2000.0,
            open_net_lane: 800.0,
            open_net_min_boost: 5.0,
            open_goal_cooldown_s: 2.0,
            double_tap_window_s: 1.0,
            panic_boost: 5.0,
            panic_speed: 2500.0,
            backboard_band: 300.0,
            backboard_min_height: 800.0,
            center_window_s: 1.5,
            center_lateral: 700.0,
            hard_rebound_speed: 2000.0,
            hard_rebound_vertical: 500.0,
        }
    }
}
