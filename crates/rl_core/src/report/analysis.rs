//! Post-match reading of a snapshot: player of the match, per-player
//! performance and a short team review.

use serde::{Deserialize, Serialize};

use super::snapshot::{MatchReportSnapshot, PlayerMetrics};
use crate::arena::Team;

/// Rotation-quality share above which a team is credited for its rotation.
const GOOD_ROTATION: u32 = 70;
const ERROR_PENALTY: f32 = 20.0;

fn positive_rotation(p: &PlayerMetrics) -> f32 {
    if p.rotation_quality > 0.0 {
        p.rotation_quality
    } else {
        0.0
    }
}

/// Weighted value used to pick the player of the match.
pub fn match_value(p: &PlayerMetrics) -> f32 {
    p.score as f32
        + p.goals as f32 * 100.0
        + p.assists as f32 * 50.0
        + p.saves as f32 * 50.0
        + p.shots as f32 * 10.0
        + positive_rotation(p) * 100.0
}

/// Highest [`match_value`]; the first maximum wins.
pub fn player_of_the_match(report: &MatchReportSnapshot) -> Option<&PlayerMetrics> {
    let mut best: Option<(&PlayerMetrics, f32)> = None;
    for p in &report.players {
        let value = match_value(p);
        if best.map(|(_, v)| value > v).unwrap_or(true) {
            best = Some((p, value));
        }
    }
    best.map(|(p, _)| p)
}

fn error_count(p: &PlayerMetrics) -> u32 {
    p.missed_open_goals + p.double_commits
}

/// [`match_value`] minus a flat penalty per error.
pub fn performance_score(p: &PlayerMetrics) -> f32 {
    match_value(p) - error_count(p) as f32 * ERROR_PENALTY
}

/// Errors per hundred touches.
pub fn error_ratio(p: &PlayerMetrics) -> f32 {
    if p.ball_touches == 0 {
        return 0.0;
    }
    error_count(p) as f32 / p.ball_touches as f32 * 100.0
}

/// Mean positive rotation quality as a rounded percentage; 0 if nobody rotated.
pub fn team_rotation_score<'a>(players: impl IntoIterator<Item = &'a PlayerMetrics>) -> u32 {
    let rated: Vec<f32> = players
        .into_iter()
        .map(|p| p.rotation_quality)
        .filter(|q| *q > 0.0)
        .collect();
    if rated.is_empty() {
        return 0;
    }
    let mean = rated.iter().sum::<f32>() / rated.len() as f32;
    (mean * 100.0).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Excellent,
    Good,
    Average,
    Disorganized,
}

impl Verdict {
    pub fn from_note(note: u32) -> Self {
        match note {
            80.. => Verdict::Excellent,
            60..=79 => Verdict::Good,
            40..=59 => Verdict::Average,
            _ => Verdict::Disorganized,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Verdict::Excellent => "Excellent cohesion and fluid rotations",
            Verdict::Good => "Good cohesion but too many double commits",
            Verdict::Average => "Average cohesion, defense needs work",
            Verdict::Disorganized => "Disorganized team",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Rotation,
    CleanClears,
    ConstantPressure,
    DefensiveCoverage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weakness {
    DoubleCommits,
    BoostManagement,
    MissedOpenNets,
    DefensiveCoverage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    DrillRotations,
    Communicate,
    OptimizeBoost,
    DefendTogether,
}

impl Recommendation {
    pub fn description(self) -> &'static str {
        match self {
            Recommendation::DrillRotations => "Work on rotations in scrims",
            Recommendation::Communicate => "Communicate more to avoid double commits",
            Recommendation::OptimizeBoost => "Optimize boost collection",
            Recommendation::DefendTogether => "Strengthen team defense",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAnalysis {
    pub team: Team,
    pub rotation_score: u32,
    /// 0..=100
    pub note: u32,
    pub verdict: Verdict,
    pub strengths: Vec<Strength>,
    pub weaknesses: Vec<Weakness>,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Default)]
struct TeamTotals {
    players: u32,
    goals: u32,
    saves: u32,
    double_commits: u32,
    clean_clears: u32,
    high_pressings: u32,
    boost_pickups: u32,
    wasted_boost_pickups: u32,
    missed_open_goals: u32,
    challenges_won: u32,
}

impl TeamTotals {
    fn add(&mut self, p: &PlayerMetrics) {
        self.players += 1;
        self.goals += p.goals;
        self.saves += p.saves;
        self.double_commits += p.double_commits;
        self.clean_clears += p.clean_clears;
        self.high_pressings += p.high_pressings;
        self.boost_pickups += p.boost_pickups;
        self.wasted_boost_pickups += p.wasted_boost_pickups;
        self.missed_open_goals += p.missed_open_goals;
        self.challenges_won += p.challenges_won;
    }

    fn too_many_double_commits(&self) -> bool {
        self.double_commits as f32 > self.players as f32 / 2.0
    }

    fn boost_mismanaged(&self) -> bool {
        // No pickups at all reads as a single pickup
        let pickups = self.boost_pickups.max(1);
        self.wasted_boost_pickups as f32 > pickups as f32 / 2.0
    }

    fn thin_defense(&self) -> bool {
        self.challenges_won < self.players
    }
}

pub fn analyze_team(report: &MatchReportSnapshot, team: Team) -> TeamAnalysis {
    let mut totals = TeamTotals::default();
    for p in report.team_players(team) {
        totals.add(p);
    }
    let rotation_score = team_rotation_score(report.team_players(team));

    let raw = i64::from(rotation_score) - i64::from(totals.double_commits) * 5
        + i64::from(totals.goals) * 2;
    let note = raw.clamp(0, 100) as u32;

    let mut strengths = Vec::new();
    if rotation_score > GOOD_ROTATION {
        strengths.push(Strength::Rotation);
    }
    if totals.clean_clears > totals.players {
        strengths.push(Strength::CleanClears);
    }
    if totals.high_pressings >= totals.players {
        strengths.push(Strength::ConstantPressure);
    }
    if totals.saves >= totals.players {
        strengths.push(Strength::DefensiveCoverage);
    }

    let mut weaknesses = Vec::new();
    if totals.too_many_double_commits() {
        weaknesses.push(Weakness::DoubleCommits);
    }
    if totals.boost_mismanaged() {
        weaknesses.push(Weakness::BoostManagement);
    }
    if totals.missed_open_goals > 0 {
        weaknesses.push(Weakness::MissedOpenNets);
    }
    if totals.thin_defense() {
        weaknesses.push(Weakness::DefensiveCoverage);
    }

    let mut recommendations = Vec::new();
    if rotation_score < GOOD_ROTATION {
        recommendations.push(Recommendation::DrillRotations);
    }
    if totals.too_many_double_commits() {
        recommendations.push(Recommendation::Communicate);
    }
    if totals.boost_mismanaged() {
        recommendations.push(Recommendation::OptimizeBoost);
    }
    if totals.thin_defense() {
        recommendations.push(Recommendation::DefendTogether);
    }

    TeamAnalysis {
        team,
        rotation_score,
        note,
        verdict: Verdict::from_note(note),
        strengths,
        weaknesses,
        recommendations,
    }
}
