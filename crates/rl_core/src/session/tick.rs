//! Per-tick tracking: roles, rotation, pressing, defensive time, saves.

use super::MatchSession;
use crate::arena::Team;
use crate::events::{BallState, GameClock};
use crate::player::{PlayerStatRecord, Roster};
use crate::rotation::{is_high_pressing, is_last_defender, rank_by_ball_distance};

impl MatchSession {
    pub fn on_tick(&mut self, clock: GameClock, roster: &Roster, ball: &BallState) {
        if !self.accepting("tick") {
            return;
        }
        let cfg = &self.config;
        let GameClock { now, dt } = clock;

        for frame in roster.frames() {
            let pressing = is_high_pressing(
                frame,
                ball.position,
                self.touch.last.as_ref(),
                roster,
                now,
                &cfg.pressing,
            );

            let record = self.records.entry(&frame.id);
            record.team = Some(frame.team);
            if let Some(name) = &frame.name {
                if record.name.as_ref() != Some(name) {
                    record.name = Some(name.clone());
                }
            }
            if let Some(boost) = frame.boost {
                record.boost.last_boost = Some(boost.clamp(0.0, frame.max_boost.max(0.0)));
            }

            if pressing
                && PlayerStatRecord::cooldown_elapsed(
                    record.guards.last_high_press_time,
                    now,
                    cfg.pressing.cooldown_s,
                )
            {
                record.defense.high_pressings += 1;
                record.guards.last_high_press_time = now;
                log::debug!("High press by {}", frame.id);
            }

            if frame.team.in_own_half(frame.position.y) {
                record.defense.defense_time += dt;
            }

            if frame.match_saves > record.guards.prev_saves {
                record.guards.prev_saves = frame.match_saves;
                if is_last_defender(frame, roster) {
                    record.defense.clutch_saves += 1;
                    log::debug!("Clutch save by {}", frame.id);
                }
            }
        }

        self.last_ball_velocity = ball.velocity;

        for team in Team::ALL {
            let ranked = rank_by_ball_distance(roster, team, ball.position);
            for (rank, index) in ranked.into_iter().enumerate() {
                let frame = &roster.frames()[index];
                let role = u8::try_from(rank + 1).unwrap_or(u8::MAX);
                self.records
                    .entry(&frame.id)
                    .advance_role(role, dt, &cfg.rotation);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::arena::Team;
    use crate::events::{BallState, BallTouchEvent, GameClock};
    use crate::geometry::{vec3, zero};
    use crate::player::{PlayerFrame, PlayerId, Roster};
    use crate::session::MatchSession;

    fn three_blue(ball_y: f32) -> (Roster, BallState) {
        let roster = Roster::new(vec![
            PlayerFrame::new("first", Team::Blue, vec3(0.0, ball_y - 200.0, 17.0)),
            PlayerFrame::new("second", Team::Blue, vec3(0.0, ball_y - 1500.0, 17.0)),
            PlayerFrame::new("third", Team::Blue, vec3(0.0, ball_y - 3000.0, 17.0)),
        ]);
        (roster, BallState::at(vec3(0.0, ball_y, 93.0)))
    }

    #[test]
    fn test_first_tick_accrues_nothing() {
        let mut session = MatchSession::new();
        let (roster, ball) = three_blue(0.0);
        let clock = session.advance_clock(0.0);
        session.on_tick(clock, &roster, &ball);
        let first = session.record(&PlayerId::from("first")).unwrap();
        assert_eq!(first.rotation.total_role_time(), 0.0);
        assert_eq!(first.rotation.last_role, Some(1));
    }

    #[test]
    fn test_roles_and_defense_time() {
        let mut session = MatchSession::new();
        let (roster, ball) = three_blue(-500.0);
        for i in 0..=10 {
            let clock = session.advance_clock(i as f32 * 0.1);
            session.on_tick(clock, &roster, &ball);
        }
        let third = session.record(&PlayerId::from("third")).unwrap();
        assert!((third.rotation.role_time[2] - 1.0).abs() < 1e-3);
        assert!((third.defense.defense_time - 1.0).abs() < 1e-3);
        let first = session.record(&PlayerId::from("first")).unwrap();
        assert!((first.rotation.role_time[0] - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_clutch_save_only_for_last_defender() {
        let mut session = MatchSession::new();
        let (roster, ball) = three_blue(-3000.0);
        session.on_tick(GameClock::new(0.0, 0.0), &roster, &ball);

        let saved: Vec<_> = roster
            .frames()
            .iter()
            .map(|f| f.clone().with_saves(1))
            .collect();
        session.on_tick(GameClock::new(0.1, 0.1), &Roster::new(saved), &ball);

        let third = session.record(&PlayerId::from("third")).unwrap();
        let first = session.record(&PlayerId::from("first")).unwrap();
        assert_eq!(third.defense.clutch_saves, 1);
        assert_eq!(first.defense.clutch_saves, 0);
        assert_eq!(first.guards.prev_saves, 1);
    }

    #[test]
    fn test_high_press_cooldown() {
        let mut session = MatchSession::new();
        let roster = Roster::new(vec![
            PlayerFrame::new("p", Team::Blue, vec3(0.0, 3000.0, 17.0)),
            PlayerFrame::new("c", Team::Orange, vec3(0.0, 2000.0, 17.0)),
        ]);
        let ball = BallState::at(vec3(0.0, 2100.0, 93.0));
        session.on_ball_touch(&BallTouchEvent {
            time: 9.9,
            player: PlayerId::from("c"),
            team: Team::Orange,
            car_position: vec3(0.0, 2000.0, 17.0),
            car_velocity: None,
            ball_position_before: None,
            ball_position: ball.position,
            ball_velocity_before: None,
            ball_velocity: zero(),
            player_boost: 30.0,
            is_aerial: false,
            roster: roster.clone(),
        });
        for i in 0..30 {
            let clock = GameClock::new(10.0 + i as f32 * 0.1, 0.1);
            session.on_tick(clock, &roster, &ball);
        }
        // 3 s of continuous pressing with a 2 s cooldown
        let p = session.record(&PlayerId::from("p")).unwrap();
        assert_eq!(p.defense.high_pressings, 2);
    }

    #[test]
    fn test_four_player_team_with_unvalidated_config() {
        let mut cfg = crate::config::EngineConfig::default();
        cfg.rotation.tracked_roles = 4;
        let mut session = MatchSession::with_config(cfg);
        let roster = Roster::new(
            (0..4)
                .map(|i| PlayerFrame::new(format!("b{i}"), Team::Blue, vec3(0.0, -500.0 * i as f32, 17.0)))
                .collect(),
        );
        let ball = BallState::at(vec3(0.0, 0.0, 93.0));
        session.on_tick(GameClock::new(0.0, 0.0), &roster, &ball);
        session.on_tick(GameClock::new(0.1, 0.1), &roster, &ball);
        let last = session.record(&PlayerId::from("b3")).unwrap();
        assert_eq!(last.rotation.last_role, Some(4));
        assert_eq!(last.rotation.total_role_time(), 0.0);
    }

    #[test]
    fn test_tick_refreshes_boost_baseline() {
        let mut session = MatchSession::new();
        let roster = Roster::new(vec![
            PlayerFrame::new("p", Team::Orange, vec3(0.0, 0.0, 17.0)).with_boost(12.0),
        ]);
        session.on_tick(GameClock::new(0.0, 0.0), &roster, &BallState::at(zero()));
        let p = session.record(&PlayerId::from("p")).unwrap();
        assert_eq!(p.boost.last_boost, Some(12.0));
    }
}
