//! End-of-match snapshot assembly.

use serde::{Deserialize, Serialize};

use super::rotation_score::{role_frequencies, rotation_quality};
use super::snapshot::{MatchReportSnapshot, PlayerMetrics};
use crate::arena::{Team, TeamPair, REGULATION_SECONDS};
use crate::player::{PlayerId, PlayerStatRecord};
use crate::session::{MatchSession, PlayerBook};

/// Counters the host keeps for each player on the final scoreboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostPlayerStats {
    pub id: PlayerId,
    #[serde(default)]
    pub name: Option<String>,
    pub team: Team,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub shots: u32,
    #[serde(default)]
    pub saves: u32,
    #[serde(default)]
    pub score: i32,
}

impl HostPlayerStats {
    pub fn new(id: impl Into<PlayerId>, team: Team) -> Self {
        Self {
            id: id.into(),
            name: None,
            team,
            goals: 0,
            assists: 0,
            shots: 0,
            saves: 0,
            score: 0,
        }
    }
}

impl MatchSession {
    /// Snapshot the session. Pure read; the session can keep running.
    pub fn build_match_report(
        &self,
        roster: &[HostPlayerStats],
        scores: TeamPair<u32>,
        names: &TeamPair<String>,
        total_game_time: f32,
    ) -> MatchReportSnapshot {
        build_match_report(self.records(), roster, scores, names, total_game_time)
    }
}

/// Build the report from a record book.
///
/// Roster players come first, in roster order; tracked players the host no
/// longer lists follow by id with zeroed host counters.
pub fn build_match_report(
    book: &PlayerBook,
    roster: &[HostPlayerStats],
    scores: TeamPair<u32>,
    names: &TeamPair<String>,
    total_game_time: f32,
) -> MatchReportSnapshot {
    let mut players = Vec::with_capacity(book.len().max(roster.len()));
    let mut mvp: Option<&str> = None;
    let mut best_score = -1;

    for host in roster {
        let fallback;
        let record = match book.get(&host.id) {
            Some(record) => record,
            None => {
                fallback = PlayerStatRecord::new(host.id.clone());
                &fallback
            }
        };
        players.push(player_metrics(record, host, total_game_time));

        if host.score > best_score {
            best_score = host.score;
            mvp = Some(host.name.as_deref().unwrap_or_else(|| host.id.as_str()));
        }
    }

    for record in book.sorted() {
        if roster.iter().any(|h| h.id == record.id) {
            continue;
        }
        let Some(team) = record.team else {
            log::trace!("Skipping {} with unknown team", record.id);
            continue;
        };
        let host = HostPlayerStats::new(record.id.clone(), team);
        players.push(player_metrics(record, &host, total_game_time));
    }

    let mut scorers: Vec<String> = Vec::new();
    for p in players.iter().filter(|p| p.goals > 0) {
        if !scorers.contains(&p.name) {
            scorers.push(p.name.clone());
        }
    }

    log::info!(
        "Match report built: {} {} - {} {} ({} players)",
        names.blue,
        scores.blue,
        scores.orange,
        names.orange,
        players.len()
    );

    MatchReportSnapshot {
        score_blue: scores.blue,
        score_orange: scores.orange,
        team_blue: names.blue.clone(),
        team_orange: names.orange.clone(),
        map: None,
        scorers,
        mvp: mvp.map(str::to_owned),
        players,
        overtime: 0,
        total_game_time,
    }
}

impl MatchReportSnapshot {
    /// Attach map name and overtime derived from the elapsed match clock.
    pub fn with_match_info(mut self, map: Option<String>, seconds_elapsed: f32) -> Self {
        self.map = map;
        self.overtime = (seconds_elapsed - REGULATION_SECONDS).round().max(0.0) as u32;
        self
    }
}

fn prefer_local(local: u32, host: u32) -> u32 {
    if local > 0 {
        local
    } else {
        host
    }
}

fn player_metrics(record: &PlayerStatRecord, host: &HostPlayerStats, total_game_time: f32) -> PlayerMetrics {
    let rotation = &record.rotation;
    let [role1, role2, role3] = role_frequencies(rotation);
    let boost_frequency = if total_game_time > 0.0 {
        record.boost.pickups as f32 / total_game_time
    } else {
        0.0
    };
    let name = host
        .name
        .clone()
        .unwrap_or_else(|| record.display_name().to_owned());

    PlayerMetrics {
        id: host.id.clone(),
        name,
        team: host.team,
        goals: prefer_local(record.offense.goals, host.goals),
        assists: prefer_local(record.offense.assists, host.assists),
        shots: prefer_local(record.offense.shots_on_target, host.shots),
        saves: host.saves,
        score: host.score,
        boost_pickups: record.boost.pickups,
        wasted_boost_pickups: record.boost.wasted,
        small_pads: record.boost.small_pads,
        big_pads: record.boost.big_pads,
        boost_frequency,
        rotation_quality: rotation_quality(rotation, record.defense.defense_time, total_game_time),
        role1_frequency: role1,
        role2_frequency: role2,
        role3_frequency: role3,
        cuts: rotation.cuts,
        aggressive_time: rotation.aggressive_time,
        passive_time: rotation.passive_time,
        ballchase_time: rotation.ballchase_time,
        double_commits: rotation.double_commits,
        clearances: record.defense.clearances,
        challenges_won: record.defense.challenges_won,
        defensive_demos: record.defense.defensive_demos,
        defense_time: record.defense.defense_time,
        clutch_saves: record.defense.clutch_saves,
        blocks: record.defense.blocks,
        high_pressings: record.defense.high_pressings,
        offensive_demos: record.offense.offensive_demos,
        ball_touches: record.offense.ball_touches,
        aerial_touches: record.offense.aerial_touches,
        useful_passes: record.offense.useful_passes,
        clean_clears: record.offense.clean_clears,
        missed_open_goals: record.offense.missed_open_goals,
        xg: record.offense.xg_total(),
        xg_attempts: record.offense.shots.iter().map(|s| s.xg).collect(),
        xg_context: record.offense.shots.iter().map(|s| s.tags.to_string()).collect(),
    }
}

/// Display names of both teams, defaulting to the colors.
pub fn default_team_names() -> TeamPair<String> {
    TeamPair::new(Team::Blue.label().to_owned(), Team::Orange.label().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::BoostPickupEvent;
    use crate::events::DemolitionAttacker;
    use crate::events::DemolitionEvent;
    use crate::geometry::vec3;

    fn host(id: &str, team: Team, score: i32) -> HostPlayerStats {
        HostPlayerStats {
            score,
            ..HostPlayerStats::new(id, team)
        }
    }

    #[test]
    fn test_empty_session_uses_host_counters() {
        let session = MatchSession::new();
        let roster = vec![
            HostPlayerStats {
                goals: 2,
                shots: 4,
                saves: 1,
                ..host("a", Team::Blue, 420)
            },
            host("b", Team::Orange, 180),
        ];
        let report = session.build_match_report(&roster, TeamPair::new(2, 0), &default_team_names(), 300.0);
        assert_eq!(report.players.len(), 2);
        let a = &report.players[0];
        assert_eq!((a.goals, a.shots, a.saves), (2, 4, 1));
        assert_eq!(a.xg, 0.0);
        assert!(a.xg_attempts.is_empty());
        assert_eq!(report.scorers, vec!["a".to_owned()]);
        assert_eq!(report.mvp.as_deref(), Some("a"));
    }

    #[test]
    fn test_mvp_first_wins_ties() {
        let session = MatchSession::new();
        let roster = vec![host("a", Team::Blue, 300), host("b", Team::Orange, 300)];
        let report = session.build_match_report(&roster, TeamPair::new(0, 0), &default_team_names(), 300.0);
        assert_eq!(report.mvp.as_deref(), Some("a"));
    }

    #[test]
    fn test_departed_players_are_appended() {
        let mut session = MatchSession::new();
        session.on_demolition(&DemolitionEvent {
            time: 3.0,
            victim: PlayerId::from("a"),
            attacker: Some(DemolitionAttacker {
                player: PlayerId::from("gone"),
                team: Team::Orange,
                position: vec3(0.0, -1000.0, 17.0),
            }),
        });
        // Known player but team never observed
        session.on_boost_pickup(&BoostPickupEvent {
            time: 4.0,
            player: PlayerId::from("ghost"),
            current_boost: 10.0,
            max_boost: 100.0,
        });
        let report = session.build_match_report(
            &[host("a", Team::Blue, 100)],
            TeamPair::new(0, 0),
            &default_team_names(),
            300.0,
        );
        let ids: Vec<_> = report.players.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "gone"]);
        assert_eq!(report.players[1].offensive_demos, 1);
        assert_eq!(report.players[1].score, 0);
        assert_eq!(report.mvp.as_deref(), Some("a"));
    }

    #[test]
    fn test_overtime_rounding() {
        let session = MatchSession::new();
        let report = session.build_match_report(&[], TeamPair::new(0, 0), &default_team_names(), 0.0);
        assert_eq!(report.clone().with_match_info(None, 250.0).overtime, 0);
        let report = report.with_match_info(Some("Stadium_P".into()), 342.6);
        assert_eq!(report.overtime, 43);
        assert_eq!(report.map.as_deref(), Some("Stadium_P"));
        assert_eq!(report.mvp, None);
    }

    #[test]
    fn test_wire_names() {
        let session = MatchSession::new();
        let report = session.build_match_report(
            &[host("a", Team::Orange, 10)],
            TeamPair::new(1, 3),
            &TeamPair::new("Lions".to_owned(), "Tigers".to_owned()),
            300.0,
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["scoreOrange"], 3);
        assert_eq!(json["teamBlue"], "Lions");
        let player = &json["players"][0];
        assert_eq!(player["team"], 1);
        assert!(player.get("defensiveChallenges").is_some());
        assert!(player.get("wastedBoostPickups").is_some());
        assert!(player.get("role1Frequency").is_some());
        assert!(player.get("xgAttempts").is_some());
    }
}
