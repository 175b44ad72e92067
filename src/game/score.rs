use std::time::Duration;

use super::config::GameConfig;

/// Score and tick speed for one session
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBoard {
    score: u32,
    speed_ms: u64,
    dashing: bool,
    initial_speed_ms: u64,
    speed_decrement_ms: u64,
    min_speed_ms: u64,
    points_per_food: u32,
}

impl ScoreBoard {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            speed_ms: config.initial_speed_ms,
            dashing: false,
            initial_speed_ms: config.initial_speed_ms,
            speed_decrement_ms: config.speed_decrement_ms,
            min_speed_ms: config.min_speed_ms,
            points_per_food: config.points_per_food,
        }
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.speed_ms = self.initial_speed_ms;
        self.dashing = false;
    }

    /// Add the food bonus and speed the game up, down to the floor
    pub fn on_food_eaten(&mut self) {
        self.score += self.points_per_food;
        self.speed_ms = self
            .speed_ms
            .saturating_sub(self.speed_decrement_ms)
            .max(self.min_speed_ms);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Stored tick interval in milliseconds, ignoring dash
    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn is_dashing(&self) -> bool {
        self.dashing
    }

    pub fn set_dashing(&mut self, dashing: bool) {
        self.dashing = dashing;
    }

    /// Interval the clock should use right now
    pub fn effective_interval(&self) -> Duration {
        let base = Duration::from_millis(self.speed_ms);
        if self.dashing {
            base / 2
        } else {
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_values() {
        let board = ScoreBoard::new(&GameConfig::default());
        assert_eq!(board.score(), 0);
        assert_eq!(board.speed_ms(), 150);
        assert_eq!(board.effective_interval(), Duration::from_millis(150));
    }

    #[test]
    fn test_food_adds_points_and_speed() {
        let mut board = ScoreBoard::new(&GameConfig::default());

        board.on_food_eaten();
        assert_eq!(board.score(), 10);
        assert_eq!(board.speed_ms(), 148);

        board.on_food_eaten();
        assert_eq!(board.score(), 20);
        assert_eq!(board.speed_ms(), 146);
    }

    #[test]
    fn test_speed_floor() {
        let mut board = ScoreBoard::new(&GameConfig::default());

        for _ in 0..100 {
            board.on_food_eaten();
        }
        assert_eq!(board.speed_ms(), 50);
        assert_eq!(board.score(), 1000);
    }

    #[test]
    fn test_dash_halves_without_touching_speed() {
        let mut board = ScoreBoard::new(&GameConfig::default());
        board.on_food_eaten();

        board.set_dashing(true);
        assert_eq!(board.effective_interval(), Duration::from_millis(74));
        assert_eq!(board.speed_ms(), 148);

        board.set_dashing(false);
        assert_eq!(board.effective_interval(), Duration::from_millis(148));
        assert_eq!(board.speed_ms(), 148);
    }

    #[test]
    fn test_odd_speed_halves_exactly() {
        let config = GameConfig {
            initial_speed_ms: 149,
            ..Default::default()
        };
        let mut board = ScoreBoard::new(&config);
        board.set_dashing(true);

        assert_eq!(board.effective_interval(), Duration::from_micros(74_500));
    }

    #[test]
    fn test_reset() {
        let mut board = ScoreBoard::new(&GameConfig::default());
        board.on_food_eaten();
        board.set_dashing(true);
        board.reset();

        assert_eq!(board.score(), 0);
        assert_eq!(board.speed_ms(), 150);
        assert!(!board.is_dashing());
    }
}
