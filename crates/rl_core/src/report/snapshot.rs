//! Serialized end-of-match payload.
//!
//! Field names are the wire contract consumed downstream; keep them camelCase.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::arena::Team;
use crate::player::PlayerId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMetrics {
    pub id: PlayerId,
    pub name: String,
    #[schemars(with = "u8")]
    pub team: Team,

    // Host counters, or local ones when non-zero
    pub goals: u32,
    pub assists: u32,
    pub shots: u32,
    pub saves: u32,
    pub score: i32,

    pub boost_pickups: u32,
    pub wasted_boost_pickups: u32,
    pub small_pads: u32,
    pub big_pads: u32,
    /// Pickups per second of game time
    pub boost_frequency: f32,

    /// 0..=1
    pub rotation_quality: f32,
    pub role1_frequency: f32,
    pub role2_frequency: f32,
    pub role3_frequency: f32,
    pub cuts: u32,
    pub aggressive_time: f32,
    pub passive_time: f32,
    pub ballchase_time: f32,
    pub double_commits: u32,

    pub clearances: u32,
    #[serde(rename = "defensiveChallenges")]
    pub challenges_won: u32,
    pub defensive_demos: u32,
    pub defense_time: f32,
    pub clutch_saves: u32,
    pub blocks: u32,
    pub high_pressings: u32,

    pub offensive_demos: u32,
    pub ball_touches: u32,
    pub aerial_touches: u32,
    pub useful_passes: u32,
    pub clean_clears: u32,
    pub missed_open_goals: u32,
    pub xg: f32,
    pub xg_attempts: Vec<f32>,
    /// Parallel to `xg_attempts`, tags joined with `" + "`
    pub xg_context: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchReportSnapshot {
    pub score_blue: u32,
    pub score_orange: u32,
    pub team_blue: String,
    pub team_orange: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
    /// Distinct display names of players with at least one goal
    pub scorers: Vec<String>,
    /// Highest host match score, first one wins ties
    pub mvp: Option<String>,
    pub players: Vec<PlayerMetrics>,
    /// Whole seconds beyond regulation
    #[serde(default)]
    pub overtime: u32,
    pub total_game_time: f32,
}

impl MatchReportSnapshot {
    /// Players of one team, in report order.
    pub fn team_players(&self, team: Team) -> impl Iterator<Item = &PlayerMetrics> + '_ {
        self.players.iter().filter(move |p| p.team == team)
    }

    pub fn player(&self, id: &PlayerId) -> Option<&PlayerMetrics> {
        self.players.iter().find(|p| &p.id == id)
    }
}
