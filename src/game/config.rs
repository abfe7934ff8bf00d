use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use super::state::Position;

/// Initial length of the snake when a game starts
pub const INITIAL_BODY_PARTS: usize = 6;
/// Base delay between game ticks in milliseconds
pub const BASE_DELAY_MS: u64 = 75;
/// Largest play area side, in grid cells
pub const MAX_GRID_CELLS: i32 = 1000;

/// Reasons a configuration cannot be used to build a play area
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unit size must be positive, got {0}")]
    InvalidUnitSize(i32),

    #[error("{axis} of {value}px is not a positive multiple of the {unit}px unit size")]
    NotGridAligned {
        axis: &'static str,
        value: i32,
        unit: i32,
    },

    #[error("start position ({x}, {y}) is not on the grid")]
    StartOffGrid { x: i32, y: i32 },

    #[error("{axis} of {cells} cells exceeds the {max} cell limit")]
    AreaTooLarge {
        axis: &'static str,
        cells: usize,
        max: i32,
    },
}

/// Pixel length of `cells` grid cells, refusing anything past the limit
fn span(axis: &'static str, cells: usize, unit: i32) -> Result<i32, ConfigError> {
    let too_large = ConfigError::AreaTooLarge {
        axis,
        cells,
        max: MAX_GRID_CELLS,
    };
    let count = i32::try_from(cells).map_err(|_| too_large.clone())?;
    if count > MAX_GRID_CELLS {
        return Err(too_large);
    }
    count.checked_mul(unit).ok_or(too_large)
}

/// Configuration for the game
///
/// Dimensions are in pixels, the way the play area is described to the
/// renderer. The snake always moves one `unit_size` per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the play area
    pub screen_width: i32,
    /// Height of the play area
    pub screen_height: i32,
    /// Size of one grid cell
    pub unit_size: i32,
    /// Seed for apple placement; entropy when absent
    pub seed: Option<u64>,

    // Fixed game rules, never read from a file.
    /// Initial length of the snake
    #[serde(skip, default = "default_body_parts")]
    pub initial_body_parts: usize,
    /// Tick interval before any speed-up
    #[serde(skip, default = "default_base_delay")]
    pub base_delay_ms: u64,
    /// Where the head (and the stacked body) starts
    #[serde(skip, default = "default_start")]
    pub start: Position,
}

fn default_body_parts() -> usize {
    INITIAL_BODY_PARTS
}

fn default_base_delay() -> u64 {
    BASE_DELAY_MS
}

fn default_start() -> Position {
    Position::new(0, 0)
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 600,
            screen_height: 600,
            unit_size: 25,
            seed: None,
            initial_body_parts: default_body_parts(),
            base_delay_ms: default_base_delay(),
            start: default_start(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a play area of the given size in grid units
    ///
    /// Sizes past [`MAX_GRID_CELLS`] are clamped; use [`GameConfig::resize`]
    /// to get an error instead.
    pub fn new(columns: usize, rows: usize) -> Self {
        let defaults = Self::default();
        let clamp = |cells: usize| {
            let cells = i32::try_from(cells).unwrap_or(MAX_GRID_CELLS).min(MAX_GRID_CELLS);
            cells * defaults.unit_size
        };
        Self {
            screen_width: clamp(columns),
            screen_height: clamp(rows),
            ..defaults
        }
    }

    /// Set the play area size in grid units at the current unit size
    pub fn resize(&mut self, columns: Option<usize>, rows: Option<usize>) -> Result<(), ConfigError> {
        if self.unit_size <= 0 {
            return Err(ConfigError::InvalidUnitSize(self.unit_size));
        }
        if let Some(columns) = columns {
            self.screen_width = span("width", columns, self.unit_size)?;
        }
        if let Some(rows) = rows {
            self.screen_height = span("height", rows, self.unit_size)?;
        }
        Ok(())
    }

    /// Same configuration with a fixed RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a small play area for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Parse a TOML document, falling back to defaults for missing keys
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Check that the play area is made of whole grid cells
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = self.unit_size;
        if unit <= 0 {
            return Err(ConfigError::InvalidUnitSize(unit));
        }

        for (axis, value) in [("width", self.screen_width), ("height", self.screen_height)] {
            if value <= 0 || value % unit != 0 {
                return Err(ConfigError::NotGridAligned { axis, value, unit });
            }
            if value / unit > MAX_GRID_CELLS {
                return Err(ConfigError::AreaTooLarge {
                    axis,
                    cells: (value / unit) as usize,
                    max: MAX_GRID_CELLS,
                });
            }
        }

        let Position { x, y } = self.start;
        let on_grid = x % unit == 0 && y % unit == 0;
        let inside = (0..self.screen_width).contains(&x) && (0..self.screen_height).contains(&y);
        if !on_grid || !inside {
            return Err(ConfigError::StartOffGrid { x, y });
        }

        Ok(())
    }

    /// Number of grid columns an apple can be placed in
    pub fn columns(&self) -> i32 {
        self.screen_width / self.unit_size
    }

    /// Number of grid rows an apple can be placed in
    pub fn rows(&self) -> i32 {
        self.screen_height / self.unit_size
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }
}
