//! Role ranking and rotation bookkeeping.
//!
//! Within a team, players are ranked by ball distance: role 1 is closest.
//! Equal distances keep roster order (stable sort, no secondary key).

use crate::arena::Team;
use crate::config::RotationThresholds;
use crate::geometry::{distance, Vec3};
use crate::player::{PlayerStatRecord, Roster};

/// Roster indices of one team ordered by ball distance; position + 1 is the role.
pub fn rank_by_ball_distance(roster: &Roster, team: Team, ball: Vec3) -> Vec<usize> {
    let mut ranked: Vec<(usize, f32)> = roster
        .frames()
        .iter()
        .enumerate()
        .filter(|(_, f)| f.team == team)
        .map(|(i, f)| (i, distance(f.position, ball)))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.into_iter().map(|(i, _)| i).collect()
}

impl PlayerStatRecord {
    /// Apply one tick spent in `role` (1-based).
    pub fn advance_role(&mut self, role: u8, dt: f32, cfg: &RotationThresholds) {
        let rot = &mut self.rotation;
        let guards = &mut self.guards;

        if (1..=cfg.tracked_roles).contains(&role) {
            // Three slots at most, whatever the config claims
            if let Some(slot) = rot.role_time.get_mut(usize::from(role - 1)) {
                *slot += dt;
            }
        }

        guards.time_since_attack += dt;

        if let Some(last) = rot.last_role {
            if i16::from(role) < i16::from(last) - 1 {
                rot.cuts += 1;
            }
        }

        if role == 1 {
            rot.first_streak += dt;
        } else {
            if rot.first_streak > cfg.streak_fold_s {
                rot.aggressive_time += rot.first_streak;
            }
            rot.first_streak = 0.0;
        }

        if role == 3 {
            rot.third_streak += dt;
        } else {
            if rot.third_streak > cfg.streak_fold_s {
                rot.passive_time += rot.third_streak;
            }
            rot.third_streak = 0.0;
        }

        if guards.in_attack {
            if guards.time_since_attack > cfg.ballchase_after_s && role != 3 {
                rot.ballchase_time += dt;
            }
            if role == 3 && guards.time_since_attack > cfg.attack_release_s {
                guards.in_attack = false;
            }
        }

        rot.last_role = Some(role);
    }
}
