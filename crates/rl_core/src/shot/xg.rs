//! Expected-goals model.
//!
//! ```text
//! xg = base
//!    + exp(-distance / scale) * w_dist
//!    + clamp(1 - angle / range, 0, 1) * w_angle
//!    + clamp(speed / ref, 0, 1) * w_speed
//!    + boost bonus
//!    + open-net bonus (minus tiered defender penalties, only if still positive)
//!    - pressure penalty per close boosted defender (capped)
//!    - hard rebound / panic penalties
//!    + quality bonus
//! ```
//! clamped to `[0, max_xg]`.

use serde::{Deserialize, Serialize};

use crate::config::XgWeights;
use crate::geometry::Vec3;

/// Opponent near the shooter at shot time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefenderInfo {
    pub position: Vec3,
    pub boost: f32,
    /// Distance to the shooter
    pub distance: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct XgInput<'a> {
    /// Shooter distance to the attacked goal center
    pub distance: f32,
    /// Radians between ball travel and the ball-to-goal direction
    pub angle: f32,
    pub ball_speed: f32,
    pub player_boost: f32,
    pub is_aerial: bool,
    pub defenders: &'a [DefenderInfo],
    pub hard_rebound: bool,
    pub panic_shot: bool,
    pub open_net: bool,
    pub quality_action: bool,
}

pub fn compute_xg(input: &XgInput<'_>, w: &XgWeights) -> f32 {
    let mut xg = w.base;
    xg += (-input.distance / w.distance_scale).exp() * w.distance_weight;
    xg += (1.0 - input.angle / w.angle_range).clamp(0.0, 1.0) * w.angle_weight;
    xg += (input.ball_speed / w.speed_reference).clamp(0.0, 1.0) * w.speed_weight;
    if input.player_boost > w.boost_bonus_threshold {
        xg += w.boost_bonus;
    }

    if input.open_net {
        let mut bonus = w.open_net_bonus;
        for d in input.defenders {
            if d.distance < w.open_net_close_radius {
                bonus -= w.open_net_close_penalty;
            } else if d.distance < w.open_net_near_radius {
                bonus -= w.open_net_near_penalty;
            }
        }
        if bonus > 0.0 {
            xg += bonus;
        }
    }

    let pressuring = input
        .defenders
        .iter()
        .filter(|d| d.distance < w.pressure_radius && d.boost > w.pressure_min_boost)
        .take(w.pressure_max_defenders)
        .count();
    xg -= pressuring as f32 * w.pressure_penalty;

    if input.hard_rebound {
        xg -= w.hard_rebound_penalty;
    }
    if input.panic_shot {
        xg -= w.panic_penalty;
    }
    if input.quality_action {
        xg += w.quality_bonus;
    }

    xg.clamp(0.0, w.max_xg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::zero;
    use proptest::prelude::*;

    fn base_input(defenders: &[DefenderInfo]) -> XgInput<'_> {
        XgInput {
            distance: 1000.0,
            angle: 0.0,
            ball_speed: 4000.0,
            player_boost: 50.0,
            is_aerial: false,
            defenders,
            hard_rebound: false,
            panic_shot: false,
            open_net: false,
            quality_action: false,
        }
    }

    fn defender(distance: f32, boost: f32) -> DefenderInfo {
        DefenderInfo {
            position: zero(),
            boost,
            distance,
        }
    }

    #[test]
    fn test_reference_shot() {
        let xg = compute_xg(&base_input(&[]), &XgWeights::default());
        // 0.05 + exp(-0.4)*0.25 + 0.2 + 0.05 + 0.02
        assert!((xg - 0.4876).abs() < 1e-3, "xg = {xg}");
    }

    #[test]
    fn test_open_net_bonus_reduced_by_defenders() {
        let w = XgWeights::default();
        let clean = compute_xg(&XgInput { open_net: true, ..base_input(&[]) }, &w);
        let defenders = [defender(900.0, 0.0), defender(1200.0, 0.0)];
        let crowded = compute_xg(&XgInput { open_net: true, ..base_input(&defenders) }, &w);
        assert!((clean - (0.4876 + 0.25)).abs() < 1e-3);
        // 0.25 - 0.1 - 0.05 = 0.10 remains
        assert!((crowded - (0.4876 + 0.10)).abs() < 1e-3);
    }

    #[test]
    fn test_open_net_bonus_never_negative() {
        let w = XgWeights::default();
        let defenders = [defender(500.0, 0.0), defender(600.0, 0.0), defender(700.0, 0.0)];
        let xg = compute_xg(&XgInput { open_net: true, ..base_input(&defenders) }, &w);
        assert!((xg - 0.4876).abs() < 1e-3);
    }

    #[test]
    fn test_pressure_penalty_capped_at_three() {
        let w = XgWeights::default();
        let four = [
            defender(500.0, 50.0),
            defender(600.0, 50.0),
            defender(700.0, 50.0),
            defender(800.0, 50.0),
        ];
        let xg = compute_xg(&base_input(&four), &w);
        assert!((xg - (0.4876 - 0.12)).abs() < 1e-3);

        // Low-boost defenders apply no pressure
        let empty_tanks = [defender(500.0, 10.0)];
        let xg = compute_xg(&base_input(&empty_tanks), &w);
        assert!((xg - 0.4876).abs() < 1e-3);
    }

    #[test]
    fn test_penalties_and_quality() {
        let w = XgWeights::default();
        let xg = compute_xg(
            &XgInput {
                hard_rebound: true,
                panic_shot: true,
                quality_action: true,
                ..base_input(&[])
            },
            &w,
        );
        assert!((xg - (0.4876 - 0.05)).abs() < 1e-3);
    }

    #[test]
    fn test_far_wide_shot_clamps_at_zero_floor() {
        let w = XgWeights::default();
        let defenders = [defender(100.0, 100.0); 3];
        let xg = compute_xg(
            &XgInput {
                distance: 20_000.0,
                angle: 3.0,
                ball_speed: 0.0,
                player_boost: 0.0,
                hard_rebound: true,
                panic_shot: true,
                ..base_input(&defenders)
            },
            &w,
        );
        assert_eq!(xg, 0.0);
    }

    proptest! {
        #[test]
        fn prop_xg_within_bounds(
            distance in 0.0f32..12000.0,
            angle in 0.0f32..3.2,
            speed in 0.0f32..6000.0,
            boost in 0.0f32..100.0,
            open_net: bool,
            hard_rebound: bool,
            panic_shot: bool,
            quality_action: bool,
            defender_count in 0usize..5,
        ) {
            let w = XgWeights::default();
            let defenders: Vec<_> = (0..defender_count)
                .map(|i| defender(400.0 * i as f32, 20.0 * i as f32))
                .collect();
            let xg = compute_xg(&XgInput {
                distance,
                angle,
                ball_speed: speed,
                player_boost: boost,
                is_aerial: false,
                defenders: &defenders,
                hard_rebound,
                panic_shot,
                open_net,
                quality_action,
            }, &w);
            prop_assert!((0.0..=0.95).contains(&xg));
        }
    }
}
