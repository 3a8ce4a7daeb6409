//! # Match Report
//!
//! - `snapshot` - serialized payload types
//! - `builder` - record book + host counters -> snapshot
//! - `rotation_score` - rotation quality and role shares
//! - `analysis` - player of the match and team review

pub mod analysis;
pub mod builder;
pub mod rotation_score;
pub mod snapshot;

pub use analysis::{
    analyze_team, error_ratio, match_value, performance_score, player_of_the_match,
    team_rotation_score, Recommendation, Strength, TeamAnalysis, Verdict, Weakness,
};
pub use builder::{build_match_report, default_team_names, HostPlayerStats};
pub use rotation_score::{role_frequencies, rotation_quality};
pub use snapshot::{MatchReportSnapshot, PlayerMetrics};
