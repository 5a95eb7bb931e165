use thiserror::Error;

use crate::domain::{Algorithm, Ruleset, Seed};

/// Default drawing area and cell size
pub const DEFAULT_SCREEN_WIDTH: u32 = 810;
pub const DEFAULT_SCREEN_HEIGHT: u32 = 610;
pub const DEFAULT_CELL_SIZE: u32 = 10;

/// Longest accepted ruleset text ("255")
pub const RULESET_MAX_CHARS: usize = 3;

/// Errors raised while validating configuration or user input
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Text could not be parsed as an integer
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// Ruleset outside 0..=255
    #[error("ruleset {0} is out of range (0-255)")]
    RulesetOutOfRange(i64),

    /// Cell size of zero
    #[error("cell size must be positive")]
    ZeroCellSize,

    /// Cell size wider than the drawing area, leaving no cells
    #[error("cell size {cell_size} is wider than the screen ({screen_width})")]
    CellSizeTooLarge { cell_size: u32, screen_width: u32 },

    /// Zero-sized drawing area
    #[error("screen must be at least 1x1, got {width}x{height}")]
    EmptyScreen { width: u32, height: u32 },

    /// Random seed density that is not a probability
    #[error("density {0} must be between 0 and 1")]
    InvalidDensity(f64),
}

/// Everything needed to (re)start a simulation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub cell_size: u32,
    pub ruleset: Ruleset,
    pub algorithm: Algorithm,
    pub seed: Seed,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            ruleset: Ruleset::default(),
            algorithm: Algorithm::default(),
            seed: Seed::default(),
        }
    }
}

impl SimulationConfig {
    /// Check that the configuration yields at least one cell and one row
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::EmptyScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.cell_size > self.screen_width {
            return Err(ConfigError::CellSizeTooLarge {
                cell_size: self.cell_size,
                screen_width: self.screen_width,
            });
        }
        if let Seed::Random { density, .. } = self.seed {
            if !Seed::is_valid_density(density) {
                return Err(ConfigError::InvalidDensity(density));
            }
        }
        Ok(())
    }

    /// Number of cells per row (`screen_width / cell_size`)
    pub fn row_len(&self) -> usize {
        (self.screen_width / self.cell_size.max(1)) as usize
    }

    /// Number of generations that fit the drawing area
    pub fn generation_count(&self) -> usize {
        self.screen_height.div_ceil(self.cell_size.max(1)) as usize
    }

    /// Builder-style setters
    pub fn with_ruleset(mut self, ruleset: Ruleset) -> Self {
        self.ruleset = ruleset;
        self
    }

    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_screen(mut self, width: u32, height: u32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }
}

fn parse_integer(text: &str) -> Result<i64, ConfigError> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| ConfigError::NotANumber(trimmed.to_string()))
}

/// Parse a ruleset typed by the user. Values outside 0..=255 are rejected.
pub fn parse_ruleset(text: &str) -> Result<Ruleset, ConfigError> {
    let value = parse_integer(text)?;
    u8::try_from(value)
        .map(Ruleset)
        .map_err(|_| ConfigError::RulesetOutOfRange(value))
}

/// Parse a cell size typed by the user, checked against the screen width
pub fn parse_cell_size(text: &str, screen_width: u32) -> Result<u32, ConfigError> {
    let value = parse_integer(text)?;
    if value <= 0 {
        return Err(ConfigError::ZeroCellSize);
    }
    let cell_size = u32::try_from(value).unwrap_or(u32::MAX);
    if cell_size > screen_width {
        return Err(ConfigError::CellSizeTooLarge { cell_size, screen_width });
    }
    Ok(cell_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.ruleset, Ruleset(30));
        assert_eq!(config.row_len(), 81);
        assert_eq!(config.generation_count(), 61);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generation_count_rounds_up() {
        let config = SimulationConfig::default().with_screen(100, 25).with_cell_size(10);
        assert_eq!(config.generation_count(), 3);
        assert_eq!(config.row_len(), 10);
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        let base = SimulationConfig::default();
        assert_eq!(base.with_cell_size(0).validate(), Err(ConfigError::ZeroCellSize));
        assert_eq!(
            base.with_cell_size(900).validate(),
            Err(ConfigError::CellSizeTooLarge { cell_size: 900, screen_width: 810 })
        );
        assert_eq!(
            base.with_screen(0, 10).validate(),
            Err(ConfigError::EmptyScreen { width: 0, height: 10 })
        );
        // Exactly one cell wide is fine
        assert!(base.with_cell_size(810).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_density() {
        let random = |density| {
            SimulationConfig::default().with_seed(Seed::Random { density, rng_seed: Some(1) })
        };
        assert!(random(0.0).validate().is_ok());
        assert!(random(1.0).validate().is_ok());
        assert_eq!(random(1.5).validate(), Err(ConfigError::InvalidDensity(1.5)));
        assert_eq!(random(-0.2).validate(), Err(ConfigError::InvalidDensity(-0.2)));
        assert!(matches!(random(f64::NAN).validate(), Err(ConfigError::InvalidDensity(d)) if d.is_nan()));
    }

    #[test]
    fn test_parse_ruleset() {
        assert_eq!(parse_ruleset("30"), Ok(Ruleset(30)));
        assert_eq!(parse_ruleset(" 110 "), Ok(Ruleset(110)));
        assert_eq!(parse_ruleset("0"), Ok(Ruleset(0)));
        assert_eq!(parse_ruleset("255"), Ok(Ruleset(255)));
        assert_eq!(parse_ruleset("256"), Err(ConfigError::RulesetOutOfRange(256)));
        assert_eq!(parse_ruleset("-1"), Err(ConfigError::RulesetOutOfRange(-1)));
        assert_eq!(parse_ruleset("abc"), Err(ConfigError::NotANumber("abc".into())));
        assert_eq!(parse_ruleset(""), Err(ConfigError::NotANumber(String::new())));
    }

    #[test]
    fn test_parse_cell_size() {
        assert_eq!(parse_cell_size("5", 810), Ok(5));
        assert_eq!(parse_cell_size("0", 810), Err(ConfigError::ZeroCellSize));
        assert_eq!(parse_cell_size("-3", 810), Err(ConfigError::ZeroCellSize));
        assert_eq!(
            parse_cell_size("1000", 810),
            Err(ConfigError::CellSizeTooLarge { cell_size: 1000, screen_width: 810 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::RulesetOutOfRange(300).to_string(),
            "ruleset 300 is out of range (0-255)"
        );
        assert_eq!(ConfigError::NotANumber("x".into()).to_string(), "'x' is not a number");
    }
}
