//! Field roster snapshot: every car the host could resolve at one instant.
//!
//! Cars the host could not resolve (no car, no PRI) are simply absent.

use serde::{Deserialize, Serialize};

use super::PlayerId;
use crate::arena::{Team, DEFAULT_MAX_BOOST};
use crate::geometry::{zero, Vec3};

fn default_max_boost() -> f32 {
    DEFAULT_MAX_BOOST
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerFrame {
    pub id: PlayerId,
    #[serde(default)]
    pub name: Option<String>,
    pub team: Team,
    pub position: Vec3,
    #[serde(default = "zero")]
    pub velocity: Vec3,
    /// `None` when the car has no boost component
    #[serde(default)]
    pub boost: Option<f32>,
    #[serde(default = "default_max_boost")]
    pub max_boost: f32,
    /// Host save counter for this player
    #[serde(default)]
    pub match_saves: u32,
}

impl PlayerFrame {
    pub fn new(id: impl Into<PlayerId>, team: Team, position: Vec3) -> Self {
        Self {
            id: id.into(),
            name: None,
            team,
            position,
            velocity: zero(),
            boost: None,
            max_boost: DEFAULT_MAX_BOOST,
            match_saves: 0,
        }
    }

    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_saves(mut self, saves: u32) -> Self {
        self.match_saves = saves;
        self
    }

    /// Boost amount with missing components read as empty.
    pub fn boost_or_empty(&self) -> f32 {
        self.boost.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<PlayerFrame>);

impl Roster {
    pub fn new(frames: Vec<PlayerFrame>) -> Self {
        Self(frames)
    }

    pub fn frames(&self) -> &[PlayerFrame] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: &PlayerId) -> Option<&PlayerFrame> {
        self.0.iter().find(|f| &f.id == id)
    }

    /// Same-team players other than `id`, in roster order.
    pub fn teammates<'a>(
        &'a self,
        team: Team,
        id: &'a PlayerId,
    ) -> impl Iterator<Item = &'a PlayerFrame> + 'a {
        self.0.iter().filter(move |f| f.team == team && &f.id != id)
    }

    /// Players of the team opposing `team`, in roster order.
    pub fn opponents(&self, team: Team) -> impl Iterator<Item = &PlayerFrame> + '_ {
        self.0.iter().filter(move |f| f.team != team)
    }
}

impl From<Vec<PlayerFrame>> for Roster {
    fn from(frames: Vec<PlayerFrame>) -> Self {
        Self(frames)
    }
}
