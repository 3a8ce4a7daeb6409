//! # rl_core - Car-Soccer Telemetry Engine
//!
//! Turns a live stream of match events (ball touches, goals, demolitions,
//! boost pickups and a fixed-cadence tick) into per-player statistics and an
//! end-of-match report.
//!
//! ## Features
//! - Event classification: clearances, blocks, challenges, passes, double commits
//! - Tactical role tracking: roles 1/2/3, cuts, streaks, ballchase, high press
//! - Shot detection with an expected-goals (xG) model and context tags
//! - Serializable report with rotation quality and team analysis
//! - JSON replay API for hosts that only speak JSON
//!
//! ## Usage
//! ```rust
//! use rl_core::{MatchSession, Roster, TeamPair};
//! use rl_core::geometry::zero;
//! use rl_core::report::default_team_names;
//!
//! let mut session = MatchSession::new();
//! session.on_match_start(zero(), &Roster::default());
//! // ... feed events ...
//! let report = session.build_match_report(&[], TeamPair::new(0, 0), &default_team_names(), 300.0);
//! assert!(report.players.is_empty());
//! ```

pub mod api;
pub mod arena;
pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod player;
pub mod report;
pub mod rotation;
pub mod session;
pub mod shot;

pub use api::{replay_match, replay_match_json, ReplayRequest, ReplayResponse};
pub use arena::{Team, TeamPair};
pub use config::EngineConfig;
pub use error::{CoreError, Result};
pub use events::{
    BallState, BallTouchEvent, BoostPickupEvent, DemolitionAttacker, DemolitionEvent, GameClock,
    GoalEvent, MatchEvent, MatchStartEvent, TickEvent,
};
pub use player::{PlayerFrame, PlayerId, PlayerStatRecord, Roster};
pub use report::{HostPlayerStats, MatchReportSnapshot, PlayerMetrics, TeamAnalysis};
pub use session::{MatchSession, PlayerBook, SessionPhase, TouchMark};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Version of the JSON request format accepted by [`replay_match_json`].
pub const SCHEMA_VERSION: u8 = 1;
