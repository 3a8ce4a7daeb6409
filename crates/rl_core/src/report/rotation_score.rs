//! Rotation quality score.

use crate::player::RotationLedger;

/// Rotation quality in `0..=1`.
///
/// Starts at 100 and loses points for uneven role occupancy, cuts, long
/// first/third-man streaks, ballchasing, double commits and a defensive
/// share far from one half.
pub fn rotation_quality(rotation: &RotationLedger, defense_time: f32, total_game_time: f32) -> f32 {
    let total = rotation.total_role_time();
    let imbalance = if total > 0.0 {
        let ideal = total / 3.0;
        rotation.role_time.iter().map(|t| (t - ideal).abs()).sum::<f32>() / total
    } else {
        0.0
    };
    let defense_ratio = if total_game_time > 0.0 {
        defense_time / total_game_time
    } else {
        0.0
    };

    let score = 100.0
        - imbalance * 40.0
        - rotation.cuts as f32 * 5.0
        - rotation.aggressive_time * 10.0
        - rotation.passive_time * 10.0
        - rotation.ballchase_time * 15.0
        - rotation.double_commits as f32 * 3.0
        - (defense_ratio - 0.5).abs() * 30.0;
    score.clamp(0.0, 100.0) / 100.0
}

/// Share of tracked role time spent in roles 1, 2 and 3.
pub fn role_frequencies(rotation: &RotationLedger) -> [f32; 3] {
    let total = rotation.total_role_time();
    if total <= 0.0 {
        return [0.0; 3];
    }
    rotation.role_time.map(|t| t / total)
}
