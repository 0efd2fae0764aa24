use crate::MAINTENANCE_INTERVAL;
use crate::OPENING_HAND;
use crate::TURN_TIMEOUT;
use std::time::Duration;

/// Tunables for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    seed: u64,
    opening: usize,
    tick: Duration,
    timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: rand::random(),
            opening: OPENING_HAND,
            tick: MAINTENANCE_INTERVAL,
            timeout: TURN_TIMEOUT,
        }
    }
}

impl Config {
    /// Seed for the deck shuffle.
    pub fn seed(&self) -> u64 {
        self.seed
    }
    /// Cards dealt to each player before the first turn.
    pub fn opening(&self) -> usize {
        self.opening
    }
    /// Interval between maintenance passes while waiting on a player.
    pub fn tick(&self) -> Duration {
        self.tick
    }
    /// How long a player may think before its turn is forfeited.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }
    pub fn with_opening(self, opening: usize) -> Self {
        Self { opening, ..self }
    }
    pub fn with_tick(self, tick: Duration) -> Self {
        Self { tick, ..self }
    }
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_constants() {
        let config = Config::default();
        assert_eq!(config.opening(), OPENING_HAND);
        assert_eq!(config.tick(), MAINTENANCE_INTERVAL);
        assert_eq!(config.timeout(), TURN_TIMEOUT);
    }

    #[test]
    fn setters_override_one_field() {
        let config = Config::default()
            .with_seed(7)
            .with_tick(Duration::from_millis(1));
        assert_eq!(config.seed(), 7);
        assert_eq!(config.tick(), Duration::from_millis(1));
        assert_eq!(config.opening(), OPENING_HAND);
    }
}
