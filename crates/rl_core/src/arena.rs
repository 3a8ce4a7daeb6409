//! # Arena Model
//!
//! Standard soccar arena in unreal units (uu):
//! - goal lines at y = ±5120
//! - x is lateral, z is height, kickoff at the origin
//!
//! Blue (team 0) attacks +y, Orange (team 1) attacks -y. Most predicates are
//! expressed through [`Team::depth`], the y coordinate seen from the team's
//! point of view (positive = toward the opponent goal).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::geometry::{vec3, Vec3};

/// Distance from midfield to each goal line.
pub const GOAL_LINE_Y: f32 = 5120.0;

/// Regulation match length in seconds; anything beyond is overtime.
pub const REGULATION_SECONDS: f32 = 300.0;

/// Default boost tank capacity.
pub const DEFAULT_MAX_BOOST: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Team {
    Blue,
    Orange,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::Blue, Team::Orange];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Team::Blue => 0,
            Team::Orange => 1,
        }
    }

    #[inline]
    pub fn opponent(self) -> Team {
        match self {
            Team::Blue => Team::Orange,
            Team::Orange => Team::Blue,
        }
    }

    /// +1 for the team attacking +y, -1 otherwise.
    #[inline]
    pub fn attack_sign(self) -> f32 {
        match self {
            Team::Blue => 1.0,
            Team::Orange => -1.0,
        }
    }

    /// Team-relative depth of an axis coordinate.
    #[inline]
    pub fn depth(self, coord: f32) -> f32 {
        self.attack_sign() * coord
    }

    #[inline]
    pub fn in_own_half(self, y: f32) -> bool {
        self.depth(y) < 0.0
    }

    #[inline]
    pub fn in_opponent_half(self, y: f32) -> bool {
        self.depth(y) > 0.0
    }

    /// True when `a` is strictly closer to this team's own goal than `b`.
    #[inline]
    pub fn is_behind(self, a_y: f32, b_y: f32) -> bool {
        self.depth(a_y) < self.depth(b_y)
    }

    /// Center of the goal this team attacks.
    pub fn opponent_goal(self) -> Vec3 {
        vec3(0.0, self.attack_sign() * GOAL_LINE_Y, 0.0)
    }

    /// Center of the goal this team defends.
    pub fn own_goal(self) -> Vec3 {
        vec3(0.0, -self.attack_sign() * GOAL_LINE_Y, 0.0)
    }

    pub fn label(self) -> &'static str {
        match self {
            Team::Blue => "blue",
            Team::Orange => "orange",
        }
    }
}

impl From<Team> for u8 {
    fn from(team: Team) -> u8 {
        team.index() as u8
    }
}

impl TryFrom<u8> for Team {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Team::Blue),
            1 => Ok(Team::Orange),
            other => Err(CoreError::InvalidTeam(other)),
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One value per team, indexed by [`Team`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamPair<T> {
    pub blue: T,
    pub orange: T,
}

impl<T> TeamPair<T> {
    pub fn new(blue: T, orange: T) -> Self {
        Self { blue, orange }
    }

    pub fn get(&self, team: Team) -> &T {
        match team {
            Team::Blue => &self.blue,
            Team::Orange => &self.orange,
        }
    }

    pub fn get_mut(&mut self, team: Team) -> &mut T {
        match team {
            Team::Blue => &mut self.blue,
            Team::Orange => &mut self.orange,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(Team, T) -> U) -> TeamPair<U> {
        TeamPair {
            blue: f(Team::Blue, self.blue),
            orange: f(Team::Orange, self.orange),
        }
    }
}
