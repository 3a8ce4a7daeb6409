//! Shot context tags.

use serde::{Deserialize, Serialize};

use crate::arena::Team;
use crate::config::ShotThresholds;
use crate::geometry::Vec3;
use crate::player::PlayerId;
use crate::session::TouchMark;

/// Situational tags attached to a shot. Rendered in a fixed order joined by `" + "`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotTags {
    pub double_tap: bool,
    pub panic_shot: bool,
    pub backboard: bool,
    pub perfect_center: bool,
    pub open_net: bool,
    pub aerial: bool,
}

impl ShotTags {
    pub fn labels(&self) -> Vec<&'static str> {
        [
            (self.double_tap, "double_tap"),
            (self.panic_shot, "panic_shot"),
            (self.backboard, "backboard"),
            (self.perfect_center, "perfect_center"),
            (self.open_net, "open_net"),
            (self.aerial, "aerial"),
        ]
        .into_iter()
        .filter_map(|(set, label)| set.then_some(label))
        .collect()
    }

    /// Set-up plays that earn the xG quality bonus.
    pub fn is_quality_action(&self) -> bool {
        self.double_tap || self.perfect_center
    }
}

impl std::fmt::Display for ShotTags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.labels().join(" + "))
    }
}

/// What the context detector needs to know about the shot.
#[derive(Debug, Clone, Copy)]
pub struct ContextInput<'a> {
    pub shooter: &'a PlayerId,
    pub team: Team,
    pub now: f32,
    pub is_aerial: bool,
    pub player_boost: f32,
    pub ball_speed: f32,
    pub ball_position: Vec3,
    pub ball_position_before: Vec3,
    /// Touch that preceded this one, if any
    pub previous_touch: Option<&'a TouchMark>,
    pub open_net: bool,
}

pub fn detect_context(input: &ContextInput<'_>, cfg: &ShotThresholds) -> ShotTags {
    let mut tags = ShotTags {
        open_net: input.open_net,
        aerial: input.is_aerial,
        ..ShotTags::default()
    };

    if let Some(prev) = input.previous_touch {
        let gap = input.now - prev.time;
        if &prev.player == input.shooter {
            tags.double_tap = gap < cfg.double_tap_window_s && prev.aerial && input.is_aerial;
        } else {
            tags.perfect_center = prev.team == input.team
                && gap < cfg.center_window_s
                && input.ball_position.x.abs() < cfg.center_lateral;
        }
    }

    tags.panic_shot = input.player_boost < cfg.panic_boost && input.ball_speed > cfg.panic_speed;

    let backboard_y = input.team.opponent_goal().y;
    tags.backboard = (input.ball_position_before.y - backboard_y).abs() < cfg.backboard_band
        && input.ball_position_before.z.abs() > cfg.backboard_min_height;

    tags
}
