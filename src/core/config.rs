//! Board configuration.
//!
//! The engine never hardcodes board size or match length; callers describe
//! the board with a `BoardConfig` and the engine validates it once at
//! construction.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::token::Palette;

/// Default minimum length of a run.
pub const DEFAULT_MIN_RUN_LENGTH: usize = 3;

/// Board configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// Minimum number of aligned same-colored tokens that count as a run.
    pub min_run_length: usize,

    /// Colors used when filling the board.
    pub palette: Palette,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            min_run_length: DEFAULT_MIN_RUN_LENGTH,
            palette: Palette::standard(),
        }
    }
}

impl BoardConfig {
    /// Create a config for a board of the given size with default rules.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the board width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the board height.
    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Set the minimum run length.
    #[must_use]
    pub fn with_min_run_length(mut self, length: usize) -> Self {
        self.min_run_length = length;
        self
    }

    /// Set the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_run_length < 2 {
            return Err(ConfigError::MinRunLength(self.min_run_length));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Token;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 10);
        assert_eq!(config.min_run_length, 3);
        assert_eq!(config.palette, Palette::standard());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let palette = Palette::new(vec![Token::Red, Token::Blue]).unwrap();
        let config = BoardConfig::new(4, 6)
            .with_min_run_length(4)
            .with_palette(palette.clone());

        assert_eq!(config.width, 4);
        assert_eq!(config.height, 6);
        assert_eq!(config.min_run_length, 4);
        assert_eq!(config.palette, palette);

        let config = config.with_width(8).with_height(2);
        assert_eq!((config.width, config.height), (8, 2));
    }

    #[test]
    fn test_validate_dimensions() {
        assert_eq!(
            BoardConfig::new(0, 5).validate(),
            Err(ConfigError::InvalidDimensions { width: 0, height: 5 })
        );
        assert_eq!(
            BoardConfig::new(5, 0).validate(),
            Err(ConfigError::InvalidDimensions { width: 5, height: 0 })
        );
        assert!(BoardConfig::new(1, 1).validate().is_ok());
    }

    #[test]
    fn test_validate_min_run_length() {
        assert_eq!(
            BoardConfig::default().with_min_run_length(1).validate(),
            Err(ConfigError::MinRunLength(1))
        );
        assert!(BoardConfig::default().with_min_run_length(2).validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = BoardConfig::new(7, 9).with_min_run_length(4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
