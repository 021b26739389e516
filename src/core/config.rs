//! Game configuration
//!
//! Every tunable of a session lives here. Configs are saved and loaded in
//! RON (Rusty Object Notation) or JSON; missing fields fall back to the
//! defaults of the campus game.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World and UI canvas sizes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// World width in units
    pub width: f32,
    /// World height in units
    pub height: f32,
    /// UI canvas width in pixels
    pub ui_width: f32,
    /// UI canvas height in pixels
    pub ui_height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 16.0,
            height: 9.0,
            ui_width: 1920.0,
            ui_height: 1080.0,
        }
    }
}

impl WorldConfig {
    /// World size as a vector
    #[must_use]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// UI canvas size as a vector
    #[must_use]
    pub fn ui_size(&self) -> Vec2 {
        Vec2::new(self.ui_width, self.ui_height)
    }
}

/// Player tunables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Starting speed in world units per second
    pub speed: f32,
    /// Sprite width
    pub width: f32,
    /// Sprite height
    pub height: f32,
    /// Minimum distance between the player's center and a world edge
    pub edge_limit: f32,
    /// Distance from the entry edge the player is placed at after a room change
    pub entry_inset: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 3.0,
            width: 1.0,
            height: 1.0,
            edge_limit: 1.0,
            entry_inset: 2.0,
        }
    }
}

/// Countdown tunables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimerConfig {
    /// Seconds available to escape
    pub time_limit: f32,
    /// Seconds a freeze pickup stops the clock for
    pub freeze_duration: f32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            time_limit: 300.0,
            freeze_duration: 30.0,
        }
    }
}

/// A true/false quiz question
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    /// Question text shown to the player
    pub text: String,
    /// The correct choice
    pub answer: bool,
}

impl Question {
    /// Create a question
    pub fn new(text: impl Into<String>, answer: bool) -> Self {
        Self {
            text: text.into(),
            answer,
        }
    }
}

/// Room event tunables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EventConfig {
    /// Distance at which pickups are collected
    pub pickup_radius: f32,
    /// Distance at which hidden figures reveal themselves
    pub reveal_radius: f32,
    /// Distance within which props can be used
    pub interact_radius: f32,
    /// Permanent speed gain from a boost pickup
    pub boost_amount: f32,
    /// Score gained for a correct quiz answer
    pub quiz_bonus: i32,
    /// Speed lost for a wrong quiz answer
    pub quiz_speed_penalty: f32,
    /// Seconds the quiz feedback stays up before the event ends
    pub quiz_answer_delay: f32,
    /// Question bank, handed out to quiz rooms in order
    pub questions: Vec<Question>,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            pickup_radius: 1.0,
            reveal_radius: 3.0,
            interact_radius: 1.0,
            boost_amount: 2.0,
            quiz_bonus: 500,
            quiz_speed_penalty: 2.0,
            quiz_answer_delay: 1.0,
            questions: vec![Question::new(
                "True or False:\nThe self-accepting problem SA \nis semi-decidable.",
                true,
            )],
        }
    }
}

/// Final score tunables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points per second left on the clock when the player escapes
    pub time_bonus_per_second: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            time_bonus_per_second: 10,
        }
    }
}

/// Complete session configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Canvas sizes
    pub world: WorldConfig,
    /// Player tunables
    pub player: PlayerConfig,
    /// Countdown tunables
    pub timer: TimerConfig,
    /// Event tunables
    pub events: EventConfig,
    /// Scoring tunables
    pub scoring: ScoringConfig,
}

impl GameConfig {
    /// Check that sizes, durations and radii make sense
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("world.width", self.world.width),
            ("world.height", self.world.height),
            ("world.ui_width", self.world.ui_width),
            ("world.ui_height", self.world.ui_height),
            ("player.width", self.player.width),
            ("player.height", self.player.height),
            ("timer.time_limit", self.timer.time_limit),
            ("timer.freeze_duration", self.timer.freeze_duration),
            ("events.pickup_radius", self.events.pickup_radius),
            ("events.reveal_radius", self.events.reveal_radius),
            ("events.interact_radius", self.events.interact_radius),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{field} must be positive")));
            }
        }
        if self.player.speed < 0.0 || self.events.quiz_answer_delay < 0.0 {
            return Err(ConfigError::Invalid(
                "speeds and delays must not be negative".to_string(),
            ));
        }
        if self.player.edge_limit * 2.0 >= self.world.width.min(self.world.height) {
            return Err(ConfigError::Invalid(
                "player.edge_limit leaves no room to move".to_string(),
            ));
        }
        if self.events.questions.is_empty() {
            return Err(ConfigError::Invalid(
                "events.questions must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a config from a RON string
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Render the config as pretty RON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Save the config to a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_ron(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, self.to_ron_string()?)?;
        Ok(())
    }

    /// Load a config from a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    /// Save the config to a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json_string = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(path, json_string)?;
        Ok(())
    }

    /// Load a config from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)
            .map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Errors that can occur while loading or saving configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_campus_game() {
        let config = GameConfig::default();

        assert_eq!(config.world.size(), Vec2::new(16.0, 9.0));
        assert!((config.timer.time_limit - 300.0).abs() < f32::EPSILON);
        assert!((config.timer.freeze_duration - 30.0).abs() < f32::EPSILON);
        assert_eq!(config.events.quiz_bonus, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_ron_round_trip() {
        let mut config = GameConfig::default();
        config.timer.time_limit = 120.0;
        config.events.questions.push(Question::new("2 + 2 = 5", false));

        let ron_str = config.to_ron_string().unwrap();
        assert!(ron_str.contains("time_limit"));

        let loaded = GameConfig::from_ron_str(&ron_str).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let loaded = GameConfig::from_ron_str("(timer: (time_limit: 60.0))").unwrap();

        assert!((loaded.timer.time_limit - 60.0).abs() < f32::EPSILON);
        assert!((loaded.timer.freeze_duration - 30.0).abs() < f32::EPSILON);
        assert_eq!(loaded.player, PlayerConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = GameConfig::from_ron_str("(events: (reveal_radius: 0.0))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("reveal_radius")));

        let err = GameConfig::from_ron_str("(timer: (").unwrap_err();
        assert!(matches!(err, ConfigError::Deserialize(_)));
    }

    #[test]
    fn test_nan_sizes_rejected() {
        let mut config = GameConfig::default();
        config.events.pickup_radius = f32::NAN;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("pickup_radius")));
    }

    #[test]
    fn test_config_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::default();

        let ron_path = dir.path().join("game.ron");
        config.save_ron(&ron_path).unwrap();
        assert_eq!(GameConfig::load_ron(&ron_path).unwrap(), config);

        let json_path = dir.path().join("game.json");
        config.save_json(&json_path).unwrap();
        assert_eq!(GameConfig::load_json(&json_path).unwrap(), config);

        let missing = GameConfig::load_ron(dir.path().join("missing.ron"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
