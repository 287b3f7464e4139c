//! Game settings, loaded from an optional JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

pub const MIN_SELECT: usize = 1;
pub const MAX_SELECT_LIMIT: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Slider position for a fresh game.
    pub default_max_select: usize,
    /// How long the dice announcement stays up.
    pub roll_notice_secs: f32,
    pub warning_secs: f32,
    /// Fixed RNG seed; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_max_select: 5,
            roll_notice_secs: 1.0,
            warning_secs: 2.0,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "loading game config");
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SELECT..=MAX_SELECT_LIMIT).contains(&self.default_max_select) {
            return Err(ConfigError::OutOfRange {
                field: "default_max_select",
                reason: format!(
                    "{} not in {}..={}",
                    self.default_max_select, MIN_SELECT, MAX_SELECT_LIMIT
                ),
            });
        }
        for (field, secs) in [
            ("roll_notice_secs", self.roll_notice_secs),
            ("warning_secs", self.warning_secs),
        ] {
            if !secs.is_finite() || secs < 0.0 {
                return Err(ConfigError::OutOfRange {
                    field,
                    reason: format!("{secs} is not a non-negative duration"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_game() {
        let c = GameConfig::default();
        assert_eq!(c.default_max_select, 5);
        assert_eq!(c.roll_notice_secs, 1.0);
        assert!(c.seed.is_none());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c = GameConfig::from_json(r#"{ "seed": 9, "default_max_select": 12 }"#).unwrap();
        assert_eq!(c.seed, Some(9));
        assert_eq!(c.default_max_select, 12);
        assert_eq!(c.warning_secs, 2.0);
    }

    #[test]
    fn rejects_out_of_range_cap() {
        let err = GameConfig::from_json(r#"{ "default_max_select": 31 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "default_max_select", .. }));
        assert!(GameConfig::from_json(r#"{ "default_max_select": 0 }"#).is_err());
    }

    #[test]
    fn rejects_negative_durations_and_bad_json() {
        assert!(GameConfig::from_json(r#"{ "roll_notice_secs": -1.0 }"#).is_err());
        assert!(matches!(GameConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
