//! Ball touch classification.

use super::{MatchSession, TouchMark};
use crate::events::BallTouchEvent;
use crate::geometry::distance;
use crate::player::{PlayerStatRecord, ShotAttempt};
use crate::shot::{evaluate_shot, ShotInput};

impl MatchSession {
    /// Classify one ball touch.
    ///
    /// Order matters: pass/challenge reads use the touch identity from
    /// *before* this touch, so it is updated only after them.
    pub fn on_ball_touch(&mut self, event: &BallTouchEvent) {
        if !self.accepting("ball_touch") {
            return;
        }
        let cfg = &self.config;
        let now = event.time;
        let team = event.team;
        let ball_before = event.ball_position_before.unwrap_or(self.last_ball_location);
        let velocity_before = event.ball_velocity_before.unwrap_or(self.last_ball_velocity);
        let previous_touch = self.touch.last.clone();

        {
            let record = self.records.entry(&event.player);
            record.team = Some(team);
            if let Some(name) = event.roster.get(&event.player).and_then(|f| f.name.as_ref()) {
                if record.name.as_ref() != Some(name) {
                    record.name = Some(name.clone());
                }
            }
        }

        // Clearance out of the defensive third
        if team.depth(ball_before.y) < -cfg.touch.clearance_depth
            && team.in_opponent_half(event.ball_position.y)
        {
            self.records.entry(&event.player).defense.clearances += 1;
            log::debug!("Clearance by {}", event.player);
        }

        // 50/50 won
        let opponent_close = event
            .roster
            .opponents(team)
            .any(|o| distance(o.position, event.ball_position) < cfg.touch.challenge_radius);
        let opponent_just_touched = self
            .touch
            .per_team
            .get(team.opponent())
            .as_ref()
            .map(|mark| (now - mark.time).abs() < cfg.touch.challenge_window_s)
            .unwrap_or(false);
        if opponent_close && opponent_just_touched {
            let record = self.records.entry(&event.player);
            if PlayerStatRecord::cooldown_elapsed(
                record.guards.last_duel_time,
                now,
                cfg.touch.duel_cooldown_s,
            ) {
                record.defense.challenges_won += 1;
                record.guards.last_duel_time = now;
                log::debug!("Challenge won by {}", event.player);
            }
        }

        // Block: incoming toward own goal, turned away
        if team.depth(velocity_before.y) < 0.0
            && team.depth(event.ball_velocity.y) >= 0.0
            && team.in_own_half(event.car_position.y)
        {
            self.records.entry(&event.player).defense.blocks += 1;
            log::debug!("Block by {}", event.player);
        }

        if let Some(prev) = &previous_touch {
            if prev.player != event.player
                && prev.team == team
                && now - prev.time < cfg.touch.pass_window_s
            {
                self.records.entry(&prev.player).offense.useful_passes += 1;
                log::debug!("Useful pass {} -> {}", prev.player, event.player);
            }
        }

        self.touch.register(TouchMark {
            player: event.player.clone(),
            team,
            time: now,
            aerial: event.is_aerial,
        });

        {
            let record = self.records.entry(&event.player);
            record.offense.ball_touches += 1;
            record.guards.in_attack = true;
            record.guards.time_since_attack = 0.0;
            record.guards.last_touch_time = Some(now);
            if event.is_aerial {
                record.offense.aerial_touches += 1;
            }
            // Switch across the lateral center line
            if team.depth(ball_before.x) < 0.0 && team.depth(event.ball_position.x) > 0.0 {
                record.offense.clean_clears += 1;
            }
        }

        let shot = evaluate_shot(
            &ShotInput {
                shooter: &event.player,
                team,
                now,
                car_position: event.car_position,
                ball_position: event.ball_position,
                ball_position_before: ball_before,
                ball_velocity: event.ball_velocity,
                player_boost: event.player_boost,
                is_aerial: event.is_aerial,
                previous_touch: previous_touch.as_ref(),
                roster: &event.roster,
            },
            cfg,
        );
        if let Some(outcome) = shot {
            let record = self.records.entry(&event.player);
            if outcome.open_net
                && PlayerStatRecord::cooldown_elapsed(
                    record.guards.last_missed_open_goal_time,
                    now,
                    cfg.shot.open_goal_cooldown_s,
                )
            {
                record.offense.missed_open_goals += 1;
                record.guards.last_missed_open_goal_time = now;
            }
            log::debug!(
                "Shot by {} xG {:.3} [{}]",
                event.player,
                outcome.xg,
                outcome.tags
            );
            record.offense.shots.push(ShotAttempt {
                time: now,
                xg: outcome.xg,
                tags: outcome.tags,
            });
        }

        let partner = event
            .roster
            .teammates(team, &event.player)
            .find(|mate| {
                distance(mate.position, event.car_position) < cfg.touch.double_commit_radius
                    && self
                        .records
                        .get(&mate.id)
                        .and_then(|r| r.guards.last_touch_time)
                        .map(|t| (now - t).abs() < cfg.touch.double_commit_window_s)
                        .unwrap_or(false)
            })
            .map(|mate| mate.id.clone());
        if let Some(partner) = partner {
            self.records.entry(&event.player).rotation.double_commits += 1;
            self.records.entry(&partner).rotation.double_commits += 1;
            log::debug!("Double commit {} / {}", event.player, partner);
        }

        self.last_ball_location = event.ball_position;
    }
}

#[cfg(test)]
mod tests {
    use crate::arena::Team;
    use crate::events::BallTouchEvent;
    use crate::geometry::{vec3, zero, Vec3};
    use crate::player::{PlayerFrame, PlayerId, Roster};
    use crate::session::MatchSession;

    fn touch(player: &str, team: Team, time: f32, car: Vec3, before: Vec3, after: Vec3) -> BallTouchEvent {
        BallTouchEvent {
            time,
            player: PlayerId::from(player),
            team,
            car_position: car,
            car_velocity: None,
            ball_position_before: Some(before),
            ball_position: after,
            ball_velocity_before: None,
            ball_velocity: zero(),
            player_boost: 50.0,
            is_aerial: false,
            roster: Roster::default(),
        }
    }

    fn stats<'a>(session: &'a MatchSession, id: &str) -> &'a crate::player::PlayerStatRecord {
        session.record(&PlayerId::from(id)).expect("tracked")
    }

    #[test]
    fn test_clearance_from_defensive_third() {
        let mut session = MatchSession::new();
        session.on_ball_touch(&touch(
            "a",
            Team::Blue,
            1.0,
            vec3(0.0, -3000.0, 17.0),
            vec3(0.0, -3000.0, 93.0),
            vec3(0.0, 100.0, 93.0),
        ));
        assert_eq!(stats(&session, "a").defense.clearances, 1);

        // Orange mirrors the sign
        session.on_ball_touch(&touch(
            "b",
            Team::Orange,
            2.0,
            vec3(0.0, 3000.0, 17.0),
            vec3(0.0, 3000.0, 93.0),
            vec3(0.0, -100.0, 93.0),
        ));
        assert_eq!(stats(&session, "b").defense.clearances, 1);
    }

    #[test]
    fn test_useful_pass_credits_previous_toucher() {
        let mut session = MatchSession::new();
        let spot = vec3(0.0, 0.0, 93.0);
        session.on_ball_touch(&touch("a", Team::Blue, 10.0, spot, spot, spot));
        session.on_ball_touch(&touch("b", Team::Blue, 11.5, spot, spot, spot));
        assert_eq!(stats(&session, "a").offense.useful_passes, 1);
        assert_eq!(stats(&session, "b").offense.useful_passes, 0);

        // Too late
        session.on_ball_touch(&touch("a", Team::Blue, 14.0, spot, spot, spot));
        assert_eq!(stats(&session, "b").offense.useful_passes, 0);
    }

    #[test]
    fn test_challenge_respects_duel_cooldown() {
        let mut session = MatchSession::new();
        let roster = Roster::new(vec![
            PlayerFrame::new("a", Team::Blue, vec3(0.0, -200.0, 17.0)),
            PlayerFrame::new("o", Team::Orange, vec3(0.0, 200.0, 17.0)),
        ]);
        let spot = vec3(0.0, 0.0, 93.0);
        let duel = |session: &mut MatchSession, time: f32| {
            let mut opp = touch("o", Team::Orange, time - 0.1, spot, spot, spot);
            opp.roster = roster.clone();
            session.on_ball_touch(&opp);
            let mut mine = touch("a", Team::Blue, time, spot, spot, spot);
            mine.roster = roster.clone();
            session.on_ball_touch(&mine);
        };
        duel(&mut session, 5.0);
        duel(&mut session, 5.5);
        assert_eq!(stats(&session, "a").defense.challenges_won, 1);
        duel(&mut session, 6.5);
        assert_eq!(stats(&session, "a").defense.challenges_won, 2);
    }

    #[test]
    fn test_block_uses_cached_velocity() {
        let mut session = MatchSession::new();
        session.last_ball_velocity = vec3(0.0, -1500.0, 0.0);
        let spot = vec3(0.0, -2000.0, 93.0);
        let mut event = touch("a", Team::Blue, 1.0, vec3(0.0, -2100.0, 17.0), spot, spot);
        event.ball_velocity = vec3(0.0, 800.0, 0.0);
        session.on_ball_touch(&event);
        assert_eq!(stats(&session, "a").defense.blocks, 1);
    }

    #[test]
    fn test_clean_clear_crosses_lateral_center() {
        let mut session = MatchSession::new();
        let car = vec3(0.0, 0.0, 17.0);
        session.on_ball_touch(&touch(
            "a",
            Team::Blue,
            1.0,
            car,
            vec3(-100.0, 0.0, 93.0),
            vec3(100.0, 0.0, 93.0),
        ));
        session.on_ball_touch(&touch(
            "b",
            Team::Orange,
            5.0,
            car,
            vec3(100.0, 0.0, 93.0),
            vec3(-100.0, 0.0, 93.0),
        ));
        // Stays on one side
        session.on_ball_touch(&touch(
            "c",
            Team::Blue,
            9.0,
            car,
            vec3(100.0, 0.0, 93.0),
            vec3(300.0, 0.0, 93.0),
        ));
        assert_eq!(stats(&session, "a").offense.clean_clears, 1);
        assert_eq!(stats(&session, "b").offense.clean_clears, 1);
        assert_eq!(stats(&session, "c").offense.clean_clears, 0);
    }

    #[test]
    fn test_aerial_touch_and_attack_flag() {
        let mut session = MatchSession::new();
        let spot = vec3(0.0, 0.0, 900.0);
        let mut event = touch("a", Team::Blue, 1.0, spot, spot, spot);
        event.is_aerial = true;
        session.on_ball_touch(&event);
        let a = stats(&session, "a");
        assert_eq!(a.offense.ball_touches, 1);
        assert_eq!(a.offense.aerial_touches, 1);
        assert!(a.guards.in_attack);
        assert_eq!(a.guards.time_since_attack, 0.0);
    }

    #[test]
    fn test_double_commit_counts_both_players() {
        let mut session = MatchSession::new();
        let roster = Roster::new(vec![
            PlayerFrame::new("a", Team::Blue, vec3(0.0, -500.0, 17.0)),
            PlayerFrame::new("b", Team::Blue, vec3(300.0, -500.0, 17.0)),
        ]);
        let spot = vec3(0.0, -400.0, 93.0);
        let mut first = touch("b", Team::Blue, 3.0, vec3(300.0, -500.0, 17.0), spot, spot);
        first.roster = roster.clone();
        session.on_ball_touch(&first);
        let mut second = touch("a", Team::Blue, 3.2, vec3(0.0, -500.0, 17.0), spot, spot);
        second.roster = roster;
        session.on_ball_touch(&second);
        assert_eq!(stats(&session, "a").rotation.double_commits, 1);
        assert_eq!(stats(&session, "b").rotation.double_commits, 1);
    }

    #[test]
    fn test_open_net_shot_recorded_once_per_cooldown() {
        let mut session = MatchSession::new();
        let shot = |time: f32| {
            let mut event = touch(
                "s",
                Team::Blue,
                time,
                vec3(0.0, 3800.0, 17.0),
                vec3(0.0, 3850.0, 93.0),
                vec3(0.0, 3900.0, 93.0),
            );
            event.ball_velocity = vec3(0.0, 1800.0, 0.0);
            event
        };
        session.on_ball_touch(&shot(20.0));
        session.on_ball_touch(&shot(21.0));
        let s = stats(&session, "s");
        assert_eq!(s.offense.shots.len(), 2);
        assert_eq!(s.offense.missed_open_goals, 1);
        assert!(s.offense.shots.iter().all(|a| (0.0..=0.95).contains(&a.xg)));
        // Same-player aerial re-touch is not required for this shot: no double tap
        assert!(!s.offense.shots[1].tags.double_tap);
    }
}
