//! # Shot & xG Evaluation
//!
//! - `detect` - geometric shot trigger, defenders, open-net read
//! - `context` - situational tags (double tap, backboard, ...)
//! - `xg` - expected-goals model
//!
//! [`evaluate_shot`] chains the three for one ball touch.

pub mod context;
pub mod detect;
pub mod xg;

pub use context::{detect_context, ContextInput, ShotTags};
pub use detect::{find_defenders, is_open_net, is_shot_attempt, shot_angle};
pub use xg::{compute_xg, DefenderInfo, XgInput};

use crate::arena::Team;
use crate::config::EngineConfig;
use crate::geometry::{distance, Vec3};
use crate::player::{PlayerId, Roster};
use crate::session::TouchMark;

/// Touch data needed to evaluate a potential shot.
#[derive(Debug, Clone, Copy)]
pub struct ShotInput<'a> {
    pub shooter: &'a PlayerId,
    pub team: Team,
    pub now: f32,
    pub car_position: Vec3,
    pub ball_position: Vec3,
    pub ball_position_before: Vec3,
    pub ball_velocity: Vec3,
    pub player_boost: f32,
    pub is_aerial: bool,
    pub previous_touch: Option<&'a TouchMark>,
    pub roster: &'a Roster,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShotOutcome {
    pub xg: f32,
    pub tags: ShotTags,
    pub open_net: bool,
    pub defenders: Vec<DefenderInfo>,
}

/// Returns `None` when the touch does not qualify as a shot.
pub fn evaluate_shot(input: &ShotInput<'_>, cfg: &EngineConfig) -> Option<ShotOutcome> {
    if !is_shot_attempt(input.team, input.ball_position, input.ball_velocity, &cfg.shot) {
        return None;
    }

    let defenders = find_defenders(input.team, input.car_position, input.roster, &cfg.shot);
    let open_net = is_open_net(input.team, input.ball_position, input.roster, &cfg.shot);
    let ball_speed = input.ball_velocity.norm();

    let tags = detect_context(
        &ContextInput {
            shooter: input.shooter,
            team: input.team,
            now: input.now,
            is_aerial: input.is_aerial,
            player_boost: input.player_boost,
            ball_speed,
            ball_position: input.ball_position,
            ball_position_before: input.ball_position_before,
            previous_touch: input.previous_touch,
            open_net,
        },
        &cfg.shot,
    );

    let hard_rebound = ball_speed > cfg.shot.hard_rebound_speed
        && input.ball_velocity.z.abs() > cfg.shot.hard_rebound_vertical;

    let xg = compute_xg(
        &XgInput {
            distance: distance(input.car_position, input.team.opponent_goal()),
            angle: shot_angle(input.team, input.ball_position, input.ball_velocity),
            ball_speed,
            player_boost: input.player_boost,
            is_aerial: input.is_aerial,
            defenders: &defenders,
            hard_rebound,
            panic_shot: tags.panic_shot,
            open_net,
            quality_action: tags.is_quality_action(),
        },
        &cfg.xg,
    );

    Some(ShotOutcome {
        xg,
        tags,
        open_net,
        defenders,
    })
}
