//! JSON entry points for hosts that cannot link against the session directly.

pub mod replay_json;

pub use replay_json::{
    replay_match, replay_match_json, report_from_context, MatchContext, ReplayRequest,
    ReplayResponse, MIN_REPORT_PLAYERS,
};
