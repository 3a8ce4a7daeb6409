//! # Tactical Role Tracking
//!
//! Pure pieces of the per-tick tracker; `session::tick` drives them.
//!
//! - `roles` - rank-by-ball-distance roles, cuts, streaks, ballchase
//! - `pressing` - high press and last-defender reads

pub mod pressing;
pub mod roles;

pub use pressing::{is_high_pressing, is_last_defender};
pub use roles::rank_by_ball_distance;
