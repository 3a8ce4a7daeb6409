//! Geometric shot detection and defensive read.
//!
//! The host cannot say whether a touch was a shot on goal, so a touch counts
//! as a shot when the ball leaves it heading (in the ground plane) within
//! `max_angle_rad` of the attacked goal center from a central lane.

use super::xg::DefenderInfo;
use crate::arena::Team;
use crate::config::ShotThresholds;
use crate::geometry::{angle_between, distance, flatten, Vec3};
use crate::player::Roster;

pub fn is_shot_attempt(
    team: Team,
    ball_position: Vec3,
    ball_velocity: Vec3,
    cfg: &ShotThresholds,
) -> bool {
    if team.depth(ball_velocity.y) <= 0.0 {
        return false;
    }
    let to_goal = flatten(team.opponent_goal() - ball_position);
    match angle_between(flatten(ball_velocity), to_goal) {
        Some(angle) => angle < cfg.max_angle_rad && ball_position.x.abs() < cfg.max_lateral,
        None => false,
    }
}

/// Full 3D angle between ball travel and the goal direction; 0 when undefined.
pub fn shot_angle(team: Team, ball_position: Vec3, ball_velocity: Vec3) -> f32 {
    angle_between(ball_velocity, team.opponent_goal() - ball_position).unwrap_or(0.0)
}

/// Opponents of `team` within the defender radius of the shooter, roster order.
pub fn find_defenders(
    team: Team,
    shooter_position: Vec3,
    roster: &Roster,
    cfg: &ShotThresholds,
) -> Vec<DefenderInfo> {
    roster
        .opponents(team)
        .filter_map(|opp| {
            let d = distance(opp.position, shooter_position);
            (d < cfg.defender_radius).then(|| DefenderInfo {
                position: opp.position,
                boost: opp.boost_or_empty(),
                distance: d,
            })
        })
        .collect()
}

/// The net is open unless a boosted opponent sits goal-side of the ball in its lane.
pub fn is_open_net(team: Team, ball_position: Vec3, roster: &Roster, cfg: &ShotThresholds) -> bool {
    !roster.opponents(team).any(|opp| {
        team.depth(opp.position.y) > team.depth(ball_position.y)
            && (opp.position.x - ball_position.x).abs() < cfg.open_net_lane
            && opp.boost_or_empty() > cfg.open_net_min_boost
    })
}
