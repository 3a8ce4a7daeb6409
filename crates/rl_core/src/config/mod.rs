//! # Engine Configuration
//!
//! Every tuning constant used by the classifiers, grouped by concern.
//!
//! ## Usage
//! ```rust
//! use rl_core::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert_eq!(config.rotation.tracked_roles, 3);
//!
//! let tuned = EngineConfig::from_yaml_str("touch:\n  pass_window_s: 1.5\n").unwrap();
//! assert_eq!(tuned.touch.pass_window_s, 1.5);
//! assert_eq!(tuned.touch.duel_cooldown_s, 1.0);
//! ```
//!
//! ## Environment Variables
//!
//! - `RL_ENGINE_CONFIG`: path to a YAML or JSON file loaded by
//!   [`EngineConfig::from_env_or_default`]

mod thresholds;
mod xg_weights;

pub use thresholds::{
    BoostThresholds, PressingThresholds, RotationThresholds, ShotThresholds, TouchThresholds,
};
pub use xg_weights::XgWeights;

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};

use crate::error::{CoreError, Result};

pub const CONFIG_PATH_ENV: &str = "RL_ENGINE_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub boost: BoostThresholds,
    pub touch: TouchThresholds,
    pub rotation: RotationThresholds,
    pub pressing: PressingThresholds,
    pub shot: ShotThresholds,
    pub xg: XgWeights,
}

impl EngineConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; `.json` is parsed as JSON, anything else as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_yaml_str(&text)
        }
    }

    /// Load from `RL_ENGINE_CONFIG` or fall back to defaults.
    ///
    /// A path that is set but unreadable or invalid is logged and ignored.
    pub fn from_env_or_default() -> Self {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Self::default();
        };
        let path = path.trim();
        if path.is_empty() {
            return Self::default();
        }
        match Self::from_path(path) {
            Ok(config) => {
                log::info!("Loaded engine config from {}", path);
                config
            }
            Err(e) => {
                log::warn!("Ignoring engine config {}='{}': {}", CONFIG_PATH_ENV, path, e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("touch.challenge_radius", self.touch.challenge_radius),
            ("touch.double_commit_radius", self.touch.double_commit_radius),
            ("pressing.carrier_radius", self.pressing.carrier_radius),
            ("shot.defender_radius", self.shot.defender_radius),
            ("shot.max_angle_rad", self.shot.max_angle_rad),
            ("shot.max_lateral", self.shot.max_lateral),
            ("xg.distance_scale", self.xg.distance_scale),
            ("xg.angle_range", self.xg.angle_range),
            ("xg.speed_reference", self.xg.speed_reference),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(CoreError::InvalidConfig(format!(
                    "{name} must be > 0, got {value}"
                )));
            }
        }

        let windows = [
            ("touch.challenge_window_s", self.touch.challenge_window_s),
            ("touch.duel_cooldown_s", self.touch.duel_cooldown_s),
            ("touch.pass_window_s", self.touch.pass_window_s),
            ("touch.double_commit_window_s", self.touch.double_commit_window_s),
            ("rotation.streak_fold_s", self.rotation.streak_fold_s),
            ("rotation.ballchase_after_s", self.rotation.ballchase_after_s),
            ("rotation.attack_release_s", self.rotation.attack_release_s),
            ("pressing.recent_touch_s", self.pressing.recent_touch_s),
            ("pressing.cooldown_s", self.pressing.cooldown_s),
            ("shot.open_goal_cooldown_s", self.shot.open_goal_cooldown_s),
        ];
        for (name, value) in windows {
            if !(value >= 0.0) {
                return Err(CoreError::InvalidConfig(format!(
                    "{name} must be >= 0, got {value}"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.boost.wasted_fill_ratio) {
            return Err(CoreError::InvalidConfig(format!(
                "boost.wasted_fill_ratio must be within 0..=1, got {}",
                self.boost.wasted_fill_ratio
            )));
        }
        if !(self.xg.max_xg > 0.0 && self.xg.max_xg <= 1.0) {
            return Err(CoreError::InvalidConfig(format!(
                "xg.max_xg must be within (0, 1], got {}",
                self.xg.max_xg
            )));
        }
        if self.rotation.tracked_roles == 0 || self.rotation.tracked_roles > 3 {
            return Err(CoreError::InvalidConfig(format!(
                "rotation.tracked_roles must be within 1..=3, got {}",
                self.rotation.tracked_roles
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = EngineConfig::default();
        assert!(cfg.validate().is_ok());
        assert!((cfg.xg.max_xg - 0.95).abs() < 1e-6);
        assert!((cfg.shot.max_angle_rad - 0.35).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = EngineConfig::from_json_str(r#"{"xg": {"base": 0.1}}"#).unwrap();
        assert!((cfg.xg.base - 0.1).abs() < 1e-6);
        assert!((cfg.xg.distance_scale - 2500.0).abs() < 1e-6);
        assert_eq!(cfg.touch, TouchThresholds::default());
    }

    #[test]
    fn test_invalid_ratio_rejected() {
        let err = EngineConfig::from_yaml_str("boost:\n  wasted_fill_ratio: 1.5\n").unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn test_tracked_roles_bounds() {
        let err = EngineConfig::from_yaml_str("rotation:\n  tracked_roles: 4\n").unwrap_err();
        assert!(err.to_string().contains("tracked_roles"));
    }

    #[test]
    fn test_from_path_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("engine.json");
        let mut file = fs::File::create(&json_path).unwrap();
        write!(file, r#"{{"pressing": {{"cooldown_s": 3.0}}}}"#).unwrap();
        let cfg = EngineConfig::from_path(&json_path).unwrap();
        assert!((cfg.pressing.cooldown_s - 3.0).abs() < 1e-6);

        let yaml_path = dir.path().join("engine.yaml");
        fs::write(&yaml_path, "shot:\n  max_lateral: 1000\n").unwrap();
        let cfg = EngineConfig::from_path(&yaml_path).unwrap();
        assert!((cfg.shot.max_lateral - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = EngineConfig::from_path("/nonexistent/engine.yaml").unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
        assert!(!err.is_input_error());
    }
}
