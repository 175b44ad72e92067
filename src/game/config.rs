use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width and height of the square grid
    pub grid_size: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,

    /// Tick interval at the start of a session
    pub initial_speed_ms: u64,
    /// How much faster each food makes the game
    pub speed_decrement_ms: u64,
    /// Fastest stored tick interval
    pub min_speed_ms: u64,
    /// Score for eating food
    pub points_per_food: u32,

    /// Number of past games kept in the history
    pub history_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_snake_length: 3,
            initial_speed_ms: 150,
            speed_decrement_ms: 2,
            min_speed_ms: 50,
            points_per_food: 10,
            history_capacity: 50,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Read a TOML file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Validate configuration parameters
    ///
    /// The snake starts at the centre of the grid with its body trailing
    /// downwards, so the grid must be tall enough to hold it.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_snake_length == 0 {
            return Err("initial_snake_length must be at least 1".to_string());
        }

        if self.grid_size / 2 + self.initial_snake_length > self.grid_size {
            return Err(format!(
                "grid_size {} is too small for a snake of length {}",
                self.grid_size, self.initial_snake_length
            ));
        }

        if self.grid_size * self.grid_size <= self.initial_snake_length {
            return Err(format!(
                "grid_size {} leaves no free cell for food",
                self.grid_size
            ));
        }

        if self.min_speed_ms == 0 {
            return Err("min_speed_ms must be positive".to_string());
        }

        if self.initial_speed_ms < self.min_speed_ms {
            return Err(format!(
                "initial_speed_ms ({}) cannot be below min_speed_ms ({})",
                self.initial_speed_ms, self.min_speed_ms
            ));
        }

        if self.history_capacity == 0 {
            return Err("history_capacity must be at least 1".to_string());
        }

        Ok(())
    }
}
