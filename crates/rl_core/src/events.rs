//! # Match Events
//!
//! Closed set of inputs the session consumes. Hosts either call the typed
//! handlers on [`crate::session::MatchSession`] directly or push
//! [`MatchEvent`] values through `MatchSession::handle`.
//!
//! JSON form is internally tagged, e.g.
//! `{"type": "goal", "time": 42.0, "blue_score": 1, "orange_score": 0}`.

use serde::{Deserialize, Serialize};

use crate::arena::Team;
use crate::geometry::{zero, Vec3};
use crate::player::{PlayerId, Roster};

/// Tick timing. `dt` is 0 on the first tick of a match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameClock {
    pub now: f32,
    pub dt: f32,
}

impl GameClock {
    pub fn new(now: f32, dt: f32) -> Self {
        Self { now, dt }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub position: Vec3,
    #[serde(default = "zero")]
    pub velocity: Vec3,
}

impl BallState {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: zero(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchStartEvent {
    pub ball_position: Vec3,
    /// Initial cars, used to seed boost baselines
    #[serde(default)]
    pub roster: Roster,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickEvent {
    /// Host match clock in seconds
    pub time: f32,
    /// Explicit delta; derived from the previous tick when absent
    #[serde(default)]
    pub dt: Option<f32>,
    pub ball: BallState,
    pub roster: Roster,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallTouchEvent {
    pub time: f32,
    pub player: PlayerId,
    pub team: Team,
    pub car_position: Vec3,
    #[serde(default)]
    pub car_velocity: Option<Vec3>,
    /// Ball location before the hit; defaults to the location tracked at the previous touch
    #[serde(default)]
    pub ball_position_before: Option<Vec3>,
    /// Ball location right after the hit
    pub ball_position: Vec3,
    /// Ball velocity before the hit; defaults to the velocity seen on the last tick
    #[serde(default)]
    pub ball_velocity_before: Option<Vec3>,
    /// Ball velocity right after the hit
    pub ball_velocity: Vec3,
    #[serde(default)]
    pub player_boost: f32,
    #[serde(default)]
    pub is_aerial: bool,
    /// Every car at touch time (shooter included)
    #[serde(default)]
    pub roster: Roster,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemolitionAttacker {
    pub player: PlayerId,
    pub team: Team,
    pub position: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemolitionEvent {
    pub time: f32,
    pub victim: PlayerId,
    /// `None` when the host could not resolve who caused the demolition
    #[serde(default)]
    pub attacker: Option<DemolitionAttacker>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostPickupEvent {
    pub time: f32,
    pub player: PlayerId,
    pub current_boost: f32,
    pub max_boost: f32,
}

/// Fired by the host whenever it thinks a goal happened; may repeat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalEvent {
    pub time: f32,
    pub blue_score: u32,
    pub orange_score: u32,
}

impl GoalEvent {
    pub fn total(&self) -> u32 {
        self.blue_score + self.orange_score
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEvent {
    MatchStart(MatchStartEvent),
    Tick(TickEvent),
    BallTouch(BallTouchEvent),
    Goal(GoalEvent),
    Demolition(DemolitionEvent),
    BoostPickup(BoostPickupEvent),
}

impl MatchEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            MatchEvent::MatchStart(_) => "match_start",
            MatchEvent::Tick(_) => "tick",
            MatchEvent::BallTouch(_) => "ball_touch",
            MatchEvent::Goal(_) => "goal",
            MatchEvent::Demolition(_) => "demolition",
            MatchEvent::BoostPickup(_) => "boost_pickup",
        }
    }
}
