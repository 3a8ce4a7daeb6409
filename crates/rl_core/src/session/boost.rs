//! Boost pad accounting.

use super::MatchSession;
use crate::events::BoostPickupEvent;

impl MatchSession {
    /// Count a pad pickup against the last observed boost amount.
    ///
    /// The first observation for a player only sets the baseline.
    pub fn on_boost_pickup(&mut self, event: &BoostPickupEvent) {
        if !self.accepting("boost_pickup") {
            return;
        }
        let cfg = &self.config.boost;
        let ledger = &mut self.records.entry(&event.player).boost;

        if let Some(last) = ledger.last_boost {
            let gained = event.current_boost - last;
            if gained > 0.0 {
                ledger.pickups += 1;
                if last >= event.max_boost * cfg.wasted_fill_ratio {
                    ledger.wasted += 1;
                }
                if gained > cfg.big_pad_gain {
                    ledger.big_pads += 1;
                } else {
                    ledger.small_pads += 1;
                }
                log::trace!("{} picked up {:.0} boost", event.player, gained);
            }
        }
        ledger.last_boost = Some(event.current_boost.clamp(0.0, event.max_boost.max(0.0)));
    }
}
