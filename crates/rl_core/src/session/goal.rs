//! Goal and assist attribution.

use super::{MatchSession, TouchState};
use crate::events::GoalEvent;

impl MatchSession {
    /// Attribute a goal to the last toucher, and an assist to the last other
    /// teammate who touched before them within the pass window.
    ///
    /// Repeated notifications carrying the same total score are ignored.
    pub fn on_goal_scored(&mut self, event: &GoalEvent) {
        if !self.accepting("goal") {
            return;
        }
        let total = event.total();
        if total == self.last_total_score {
            log::trace!("Duplicate goal notification at {}", total);
            return;
        }
        self.last_total_score = total;

        let Some(scorer) = self.touch.last.clone() else {
            log::debug!("Goal at {:.1}s with no recorded touch", event.time);
            return;
        };
        self.records.entry(&scorer.player).offense.goals += 1;

        let window = self.config.touch.pass_window_s;
        let assister = self
            .touch
            .assist_candidate
            .get(scorer.team)
            .as_ref()
            .filter(|mark| scorer.time - mark.time <= window)
            .map(|mark| mark.player.clone());
        match assister {
            Some(assister) if assister != scorer.player => {
                self.records.entry(&assister).offense.assists += 1;
                log::info!("Goal {} (assist {})", scorer.player, assister);
            }
            _ => log::info!("Goal {}", scorer.player),
        }

        // Kickoff follows: touch chains never span a goal
        self.touch = TouchState::default();
    }
}
