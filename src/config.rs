//! Game configuration.
//!
//! Every field has a default, so a TOML file only needs the values it
//! changes:
//!
//! ```
//! use bartok_rs::config::GameConfig;
//!
//! let cfg = GameConfig::from_toml_str("hand_size = 5\nseed = 9").unwrap();
//! assert_eq!(cfg.hand_size, 5);
//! assert_eq!(cfg.seed, Some(9));
//! assert_eq!(cfg.num_players, 4);
//! ```

use crate::deck::DECK_SIZE;
use crate::geometry::Vec3;
use crate::layout::HandLayout;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[non_exhaustive]
pub struct GameConfig {
    pub num_players: usize,
    /// Cards dealt to each seat.
    pub hand_size: usize,
    /// Angle between neighbouring cards in a fan, in degrees.
    pub fan_degrees: f32,
    pub seed: Option<u64>,
    /// Seconds per card move.
    pub move_duration: f32,
    /// Delay between consecutive cards of the initial deal, in seconds.
    pub deal_stagger: f32,
    /// Seat driven by input; `None` lets every seat play itself.
    pub human_seat: Option<usize>,
    pub hand_layouts: Vec<HandLayout>,
    pub draw_pile: Vec3,
    pub target: Vec3,
    pub discard: Vec3,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_players: 4,
            hand_size: 7,
            fan_degrees: 10.0,
            seed: None,
            move_duration: 0.5,
            deal_stagger: 0.1,
            human_seat: Some(0),
            hand_layouts: default_hand_layouts(),
            draw_pile: Vec3::new(-4.0, 0.0, 0.0),
            target: Vec3::new(0.0, 0.0, 0.0),
            discard: Vec3::new(4.0, 0.0, 0.0),
        }
    }
}

/// Four seats clockwise from the bottom, each fan pointing at the centre.
pub fn default_hand_layouts() -> Vec<HandLayout> {
    vec![
        HandLayout::new(Vec3::new(0.0, -11.0, 0.0), 0.0, "Hand 0"),
        HandLayout::new(Vec3::new(-14.0, 0.0, 0.0), -90.0, "Hand 1"),
        HandLayout::new(Vec3::new(0.0, 11.0, 0.0), 180.0, "Hand 2"),
        HandLayout::new(Vec3::new(14.0, 0.0, 0.0), 90.0, "Hand 3"),
    ]
}

impl GameConfig {
    /// Set a deterministic seed for shuffles and automated decisions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_players(mut self, n: usize) -> Self {
        self.num_players = n;
        self
    }

    pub fn with_hand_size(mut self, n: usize) -> Self {
        self.hand_size = n;
        self
    }

    pub fn with_human_seat(mut self, seat: Option<usize>) -> Self {
        self.human_seat = seat;
        self
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.num_players) {
            return Err(ConfigError::Invalid(format!(
                "num_players must be {MIN_PLAYERS}..={MAX_PLAYERS}, got {}",
                self.num_players
            )));
        }
        if self.hand_layouts.len() < self.num_players {
            return Err(ConfigError::Invalid(format!(
                "need a hand layout per seat: {} seats, {} layouts",
                self.num_players,
                self.hand_layouts.len()
            )));
        }
        // at least one card must stay behind for the first target
        if self.hand_size == 0 || self.hand_size * self.num_players >= DECK_SIZE {
            return Err(ConfigError::Invalid(format!(
                "hand_size {} does not fit {} seats in a {DECK_SIZE}-card deck",
                self.hand_size, self.num_players
            )));
        }
        if let Some(seat) = self.human_seat {
            if seat >= self.num_players {
                return Err(ConfigError::Invalid(format!(
                    "human_seat {seat} out of range for {} seats",
                    self.num_players
                )));
            }
        }
        if !self.fan_degrees.is_finite() {
            return Err(ConfigError::Invalid("fan_degrees must be finite".into()));
        }
        let timings = [("move_duration", self.move_duration), ("deal_stagger", self.deal_stagger)];
        for (name, v) in timings {
            if !v.is_finite() || v < 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be >= 0, got {v}")));
            }
        }
        let slots_finite =
            self.draw_pile.is_finite() && self.target.is_finite() && self.discard.is_finite();
        if !slots_finite || !self.hand_layouts.iter().all(HandLayout::is_finite) {
            return Err(ConfigError::Invalid("positions must be finite".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        GameConfig::default().validate().unwrap();
        assert_eq!(GameConfig::default().hand_layouts.len(), MAX_PLAYERS);
    }

    #[test]
    fn toml_overrides_layouts() {
        let text = r#"
            num_players = 2
            fan_degrees = 12.5
            human_seat = 1

            [[hand_layouts]]
            position = { x = 0.0, y = -9.0 }
            layer_name = "South"

            [[hand_layouts]]
            position = { x = 0.0, y = 9.0 }
            rotation = 180.0
            layer_name = "North"
        "#;
        let cfg = GameConfig::from_toml_str(text).unwrap();
        assert_eq!(cfg.num_players, 2);
        assert_eq!(cfg.fan_degrees, 12.5);
        assert_eq!(cfg.human_seat, Some(1));
        assert_eq!(cfg.hand_layouts[1].layer_name, "North");
        assert_eq!(cfg.hand_layouts[1].rotation, 180.0);
        assert_eq!(cfg.hand_layouts[0].rotation, 0.0);
    }

    #[test]
    fn rejects_bad_values() {
        let too_many = GameConfig::default().with_players(5);
        assert!(matches!(too_many.validate(), Err(ConfigError::Invalid(_))));

        let too_big = GameConfig::default().with_hand_size(13);
        assert!(matches!(too_big.validate(), Err(ConfigError::Invalid(_))));

        let bad_seat = GameConfig::default().with_players(3).with_human_seat(Some(3));
        assert!(matches!(bad_seat.validate(), Err(ConfigError::Invalid(_))));

        let mut slow = GameConfig::default();
        slow.move_duration = -1.0;
        assert!(matches!(slow.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn unknown_keys_are_parse_errors() {
        assert!(matches!(
            GameConfig::from_toml_str("players = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = GameConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
