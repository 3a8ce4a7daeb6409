//! Expected-goals constant set.
//!
//! Exponential distance decay with tiered open-net defender penalties.
//! The linear `1 - d/5000` family is not supported.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XgWeights {
    pub base: f32,
    /// Distance term: `exp(-d / distance_scale) * distance_weight`
    pub distance_scale: f32,
    pub distance_weight: f32,
    /// Angle term: `clamp(1 - angle / angle_range, 0, 1) * angle_weight`
    pub angle_range: f32,
    pub angle_weight: f32,
    /// Speed term: `clamp(speed / speed_reference, 0, 1) * speed_weight`
    pub speed_reference: f32,
    pub speed_weight: f32,
    pub boost_bonus_threshold: f32,
    pub boost_bonus: f32,

    pub open_net_bonus: f32,
    pub open_net_close_radius: f32,
    pub open_net_close_penalty: f32,
    pub open_net_near_radius: f32,
    pub open_net_near_penalty: f32,

    /// Defenders closer than this with more boost than `pressure_min_boost` cost `pressure_penalty`
    pub pressure_radius: f32,
    pub pressure_min_boost: f32,
    pub pressure_penalty: f32,
    pub pressure_max_defenders: usize,

    pub hard_rebound_penalty: f32,
    pub panic_penalty: f32,
    pub quality_bonus: f32,
    /// Upper clamp
    pub max_xg: f32,
}

impl Default for XgWeights {
    fn default() -> Self {
        Self {
            base: 0.05,
            distance_scale: 2500.0,
            distance_weight: 0.25,
            angle_range: 1.57,
            angle_weight: 0.2,
            speed_reference: 4000.0,
            speed_weight: 0.05,
            boost_bonus_threshold: 20.0,
            boost_bonus: 0.02,
            open_net_bonus: 0.25,
            open_net_close_radius: 1000.0,
            open_net_close_penalty: 0.1,
            open_net_near_radius: 1500.0,
            open_net_near_penalty: 0.05,
            pressure_radius: 1500.0,
            pressure_min_boost: 30.0,
            pressure_penalty: 0.04,
            pressure_max_defenders: 3,
            hard_rebound_penalty: 0.05,
            panic_penalty: 0.05,
            quality_bonus: 0.05,
            max_xg: 0.95,
        }
    }
}
