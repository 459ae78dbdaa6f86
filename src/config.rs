use std::time::Duration;

use crate::constants::{BLOCK_SIZE, BOARD_HEIGHT, BOARD_WIDTH, TICKS_PER_SECOND};
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub ticks_per_second: u32,
    pub block_size: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            ticks_per_second: TICKS_PER_SECOND,
            block_size: BLOCK_SIZE,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.ticks_per_second.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_reference_instance() {
        let config = GameConfig::default();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 20);
        assert_eq!(config.tick_interval(), Duration::from_millis(200));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        let config = GameConfig { width: 0, ..GameConfig::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDimension { width: 0, height: 20 })
        );
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let config = GameConfig { ticks_per_second: 0, ..GameConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickRate));
    }
}
