//! # Match Session
//!
//! Owns all mutable match state: the per-player record book, the rolling
//! "last touch" marks and the ball/score baselines. Handlers are split by
//! event family:
//!
//! - `boost` - boost pad accounting
//! - `touch` - ball touch classification and shot hand-off
//! - `demolition` - offensive/defensive demo attribution
//! - `goal` - goal/assist attribution
//! - `tick` - roles, rotation, pressing, saves
//!
//! The host must call handlers serially; nothing here locks. Once
//! [`MatchSession::finish`] is called the session ignores further events
//! until the next match start.

mod boost;
mod demolition;
mod goal;
mod tick;
mod touch;

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::arena::{Team, TeamPair};
use crate::config::EngineConfig;
use crate::events::{GameClock, MatchEvent};
use crate::geometry::{zero, Vec3};
use crate::player::{PlayerId, PlayerStatRecord, Roster};

/// Who touched the ball, for which team, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchMark {
    pub player: PlayerId,
    pub team: Team,
    pub time: f32,
    pub aerial: bool,
}

/// Rolling touch identity shared by the touch, goal and tick handlers.
#[derive(Debug, Clone, Default)]
pub(crate) struct TouchState {
    /// Most recent touch by anyone
    pub last: Option<TouchMark>,
    /// Most recent touch per team
    pub per_team: TeamPair<Option<TouchMark>>,
    /// Last teammate touch before the current team toucher
    pub assist_candidate: TeamPair<Option<TouchMark>>,
}

impl TouchState {
    fn register(&mut self, mark: TouchMark) {
        let team_slot = self.per_team.get_mut(mark.team);
        if let Some(prev) = team_slot.as_ref() {
            if prev.player != mark.player {
                *self.assist_candidate.get_mut(mark.team) = Some(prev.clone());
            }
        }
        *team_slot = Some(mark.clone());
        self.last = Some(mark);
    }
}

/// Player records keyed by [`PlayerId`], created on first observation.
#[derive(Debug, Clone, Default)]
pub struct PlayerBook {
    records: FxHashMap<PlayerId, PlayerStatRecord>,
}

impl PlayerBook {
    pub fn get(&self, id: &PlayerId) -> Option<&PlayerStatRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records ordered by id.
    pub fn sorted(&self) -> Vec<&PlayerStatRecord> {
        let mut records: Vec<_> = self.records.values().collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }

    pub(crate) fn entry(&mut self, id: &PlayerId) -> &mut PlayerStatRecord {
        self.records
            .entry(id.clone())
            .or_insert_with(|| PlayerStatRecord::new(id.clone()))
    }

    fn clear(&mut self) {
        self.records.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Live,
    /// Report taken; late events are dropped
    Finished,
}

#[derive(Debug, Clone)]
pub struct MatchSession {
    config: EngineConfig,
    phase: SessionPhase,
    records: PlayerBook,
    touch: TouchState,
    last_ball_location: Vec3,
    last_ball_velocity: Vec3,
    last_update: Option<f32>,
    last_total_score: u32,
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchSession {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            phase: SessionPhase::Live,
            records: PlayerBook::default(),
            touch: TouchState::default(),
            last_ball_location: zero(),
            last_ball_velocity: zero(),
            last_update: None,
            last_total_score: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn records(&self) -> &PlayerBook {
        &self.records
    }

    pub fn record(&self, id: &PlayerId) -> Option<&PlayerStatRecord> {
        self.records.get(id)
    }

    pub fn last_touch(&self) -> Option<&TouchMark> {
        self.touch.last.as_ref()
    }

    /// Discard everything from the previous match.
    ///
    /// Cars in `roster` seed their boost baseline so the first pickup is counted.
    pub fn on_match_start(&mut self, ball_position: Vec3, roster: &Roster) {
        self.phase = SessionPhase::Live;
        self.records.clear();
        self.touch = TouchState::default();
        self.last_ball_location = ball_position;
        self.last_ball_velocity = zero();
        self.last_update = None;
        self.last_total_score = 0;

        for frame in roster.frames() {
            let Some(boost) = frame.boost else {
                continue;
            };
            let record = self.records.entry(&frame.id);
            record.team = Some(frame.team);
            record.name = frame.name.clone();
            record.boost.last_boost = Some(boost);
        }
        log::info!("Match started with {} tracked cars", self.records.len());
    }

    /// Derive a tick clock from the host match time. The first tick has `dt = 0`.
    pub fn advance_clock(&mut self, now: f32) -> GameClock {
        let dt = self.last_update.map(|last| (now - last).max(0.0)).unwrap_or(0.0);
        self.last_update = Some(now);
        GameClock::new(now, dt)
    }

    /// Mark the session read-only; events until the next match start are dropped.
    pub fn finish(&mut self) {
        self.phase = SessionPhase::Finished;
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    /// Single entry point for every event kind.
    pub fn handle(&mut self, event: &MatchEvent) {
        match event {
            MatchEvent::MatchStart(start) => self.on_match_start(start.ball_position, &start.roster),
            MatchEvent::Tick(tick) => {
                if !self.accepting(event.kind()) {
                    return;
                }
                let clock = match tick.dt {
                    Some(dt) => {
                        self.last_update = Some(tick.time);
                        GameClock::new(tick.time, dt.max(0.0))
                    }
                    None => self.advance_clock(tick.time),
                };
                self.on_tick(clock, &tick.roster, &tick.ball);
            }
            MatchEvent::BallTouch(touch) => self.on_ball_touch(touch),
            MatchEvent::Goal(goal) => self.on_goal_scored(goal),
            MatchEvent::Demolition(demo) => self.on_demolition(demo),
            MatchEvent::BoostPickup(pickup) => self.on_boost_pickup(pickup),
        }
    }

    fn accepting(&self, kind: &str) -> bool {
        if self.is_finished() {
            log::debug!("Dropping late {} event", kind);
            return false;
        }
        true
    }
}
