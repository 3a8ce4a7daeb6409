//! Replay an ordered event log through a fresh session and return the report.
//!
//! ```json
//! {
//!   "schema_version": 1,
//!   "config": { "touch": { "pass_window_s": 1.5 } },
//!   "events": [ { "type": "match_start", "ball_position": [0, 0, 93] }, ... ],
//!   "context": {
//!     "roster": [ { "id": "p1", "team": 0, "score": 320 }, ... ],
//!     "scores": { "blue": 2, "orange": 1 },
//!     "total_game_time": 300.0
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::arena::{Team, TeamPair};
use crate::config::EngineConfig;
use crate::error::{CoreError, Result};
use crate::events::MatchEvent;
use crate::player::PlayerId;
use crate::report::{
    analyze_team, default_team_names, player_of_the_match, HostPlayerStats, MatchReportSnapshot,
    TeamAnalysis,
};
use crate::session::MatchSession;
use crate::SCHEMA_VERSION;

/// Fewer scoreboard entries than this cannot be analyzed as a match.
pub const MIN_REPORT_PLAYERS: usize = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub config: Option<EngineConfig>,
    pub events: Vec<MatchEvent>,
    pub context: MatchContext,
}

/// End-of-match facts only the host knows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchContext {
    pub roster: Vec<HostPlayerStats>,
    #[serde(default)]
    pub scores: TeamPair<u32>,
    #[serde(default = "default_team_names")]
    pub team_names: TeamPair<String>,
    pub total_game_time: f32,
    /// Match clock including overtime
    #[serde(default)]
    pub seconds_elapsed: Option<f32>,
    #[serde(default)]
    pub map: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayResponse {
    pub report: MatchReportSnapshot,
    pub team_analysis: TeamPair<TeamAnalysis>,
    pub player_of_the_match: Option<PlayerId>,
}

/// Finish `session` and build the report plus analyses from it.
pub fn report_from_context(session: &mut MatchSession, context: &MatchContext) -> Result<ReplayResponse> {
    if context.roster.len() < MIN_REPORT_PLAYERS {
        return Err(CoreError::NotEnoughPlayers {
            found: context.roster.len(),
            required: MIN_REPORT_PLAYERS,
        });
    }
    session.finish();

    let mut report = session.build_match_report(
        &context.roster,
        context.scores,
        &context.team_names,
        context.total_game_time,
    );
    if context.map.is_some() || context.seconds_elapsed.is_some() {
        let elapsed = context.seconds_elapsed.unwrap_or(context.total_game_time);
        report = report.with_match_info(context.map.clone(), elapsed);
    }

    let team_analysis = TeamPair::new(
        analyze_team(&report, Team::Blue),
        analyze_team(&report, Team::Orange),
    );
    let player_of_the_match = player_of_the_match(&report).map(|p| p.id.clone());

    Ok(ReplayResponse {
        report,
        team_analysis,
        player_of_the_match,
    })
}

pub fn replay_match(request: ReplayRequest) -> Result<ReplayResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(CoreError::UnsupportedSchema {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }
    let config = match request.config {
        Some(config) => {
            config.validate()?;
            config
        }
        None => EngineConfig::default(),
    };

    let mut session = MatchSession::with_config(config);
    for event in &request.events {
        session.handle(event);
    }
    log::debug!("Replayed {} events", request.events.len());

    report_from_context(&mut session, &request.context)
}

pub fn replay_match_json(request_json: &str) -> Result<String> {
    let request: ReplayRequest = serde_json::from_str(request_json)?;
    let response = replay_match(request)?;
    Ok(serde_json::to_string(&response)?)
}
