use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width and height of the square game grid, in cells
    pub grid_size: usize,
    /// Simulation tick interval in milliseconds
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 15,
            tick_ms: 170,
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

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(8)
    }

    /// Override the tick interval
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    /// The fixed simulation tick interval
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// The cell the snake starts on (grid centre)
    pub fn start_position(&self) -> super::Position {
        let centre = (self.grid_size / 2) as i32;
        super::Position::new(centre, centre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 15);
        assert_eq!(config.tick_ms, 170);
        assert_eq!(config.tick_interval(), Duration::from_millis(170));
    }

    #[test]
    fn test_start_position_is_centre() {
        let config = GameConfig::default();
        assert_eq!(config.start_position(), crate::game::Position::new(7, 7));

        let config = GameConfig::new(10);
        assert_eq!(config.start_position(), crate::game::Position::new(5, 5));
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(20).with_tick_ms(100);
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.tick_ms, 100);
    }

    #[test]
    fn test_small_config() {
        let config = GameConfig::small();
        assert_eq!(config.grid_size, 8);
        assert_eq!(config.start_position(), crate::game::Position::new(4, 4));
    }
}
