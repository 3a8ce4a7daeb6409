//! High-pressing and last-defender reads taken once per tick.

use crate::config::PressingThresholds;
use crate::geometry::{distance, Vec3};
use crate::player::{PlayerFrame, Roster};
use crate::session::TouchMark;

/// Whether `player` is pressing the opposing ball carrier this tick.
///
/// The carrier is whoever touched the ball last. Cooldown is checked by the caller.
pub fn is_high_pressing(
    player: &PlayerFrame,
    ball: Vec3,
    last_touch: Option<&TouchMark>,
    roster: &Roster,
    now: f32,
    cfg: &PressingThresholds,
) -> bool {
    let team = player.team;
    if !team.in_opponent_half(player.position.y) || !team.in_opponent_half(ball.y) {
        return false;
    }
    let Some(touch) = last_touch else {
        return false;
    };
    if touch.player == player.id && now - touch.time < cfg.recent_touch_s {
        return false;
    }
    if touch.team == team {
        return false;
    }
    let Some(carrier) = roster.get(&touch.player) else {
        return false;
    };
    distance(carrier.position, player.position) < cfg.carrier_radius
        && team.is_behind(carrier.position.y, player.position.y)
}

/// True when no teammate of `player` is closer to their own goal.
pub fn is_last_defender(player: &PlayerFrame, roster: &Roster) -> bool {
    !roster
        .teammates(player.team, &player.id)
        .any(|mate| player.team.is_behind(mate.position.y, player.position.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Team;
    use crate::geometry::vec3;
    use crate::player::PlayerId;

    fn carrier_touch(player: &str, team: Team, time: f32) -> TouchMark {
        TouchMark {
            player: PlayerId::from(player),
            team,
            time,
            aerial: false,
        }
    }

    #[test]
    fn test_pressing_carrier_in_opponent_half() {
        let cfg = PressingThresholds::default();
        let presser = PlayerFrame::new("p", Team::Blue, vec3(0.0, 3000.0, 17.0));
        let carrier = PlayerFrame::new("c", Team::Orange, vec3(0.0, 2000.0, 17.0));
        let roster = Roster::new(vec![presser.clone(), carrier]);
        let touch = carrier_touch("c", Team::Orange, 9.8);
        assert!(is_high_pressing(
            &presser,
            vec3(0.0, 2100.0, 93.0),
            Some(&touch),
            &roster,
            10.0,
            &cfg
        ));
    }

    #[test]
    fn test_no_press_when_carrier_is_behind_the_presser_goal_side() {
        let cfg = PressingThresholds::default();
        // Carrier deeper toward its own goal than the presser: presser is beaten
        let presser = PlayerFrame::new("p", Team::Blue, vec3(0.0, 1000.0, 17.0));
        let carrier = PlayerFrame::new("c", Team::Orange, vec3(0.0, 2500.0, 17.0));
        let roster = Roster::new(vec![presser.clone(), carrier]);
        let touch = carrier_touch("c", Team::Orange, 9.8);
        assert!(!is_high_pressing(
            &presser,
            vec3(0.0, 2500.0, 93.0),
            Some(&touch),
            &roster,
            10.0,
            &cfg
        ));
    }

    #[test]
    fn test_no_press_without_opposing_carrier() {
        let cfg = PressingThresholds::default();
        let presser = PlayerFrame::new("p", Team::Blue, vec3(0.0, 3000.0, 17.0));
        let mate = PlayerFrame::new("m", Team::Blue, vec3(0.0, 2000.0, 17.0));
        let roster = Roster::new(vec![presser.clone(), mate]);
        let touch = carrier_touch("m", Team::Blue, 9.8);
        assert!(!is_high_pressing(&presser, vec3(0.0, 2000.0, 93.0), Some(&touch), &roster, 10.0, &cfg));
        assert!(!is_high_pressing(&presser, vec3(0.0, 2000.0, 93.0), None, &roster, 10.0, &cfg));
    }

    #[test]
    fn test_last_defender() {
        let keeper = PlayerFrame::new("k", Team::Orange, vec3(0.0, 5000.0, 17.0));
        let mid = PlayerFrame::new("m", Team::Orange, vec3(0.0, 1000.0, 17.0));
        let roster = Roster::new(vec![keeper.clone(), mid.clone()]);
        assert!(is_last_defender(&keeper, &roster));
        assert!(!is_last_defender(&mid, &roster));
    }
}
