//! Demolition attribution.

use super::MatchSession;
use crate::events::DemolitionEvent;

impl MatchSession {
    /// Credit the attacker by the half it was in. Demos without an attacker are ignored.
    pub fn on_demolition(&mut self, event: &DemolitionEvent) {
        if !self.accepting("demolition") {
            return;
        }
        let Some(attacker) = &event.attacker else {
            log::trace!("Demolition of {} without attacker", event.victim);
            return;
        };
        let team = attacker.team;
        let y = attacker.position.y;
        let record = self.records.entry(&attacker.player);
        record.team = Some(team);

        // Both halves are checked on their own; y == 0 counts as neither
        if team.in_own_half(y) {
            record.defense.defensive_demos += 1;
        }
        if team.in_opponent_half(y) {
            record.offense.offensive_demos += 1;
        }
        log::debug!("{} demolished {}", attacker.player, event.victim);
    }
}
