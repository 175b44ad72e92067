use rand::Rng;

use super::state::{Position, Snake};

/// Source of candidate food cells.
pub trait CellSampler {
    /// Return a cell with both coordinates in `[0, grid_size)`.
    fn sample(&mut self, grid_size: usize) -> Position;
}

/// Uniform sampling from any `rand` generator
pub struct RandomSampler<R> {
    rng: R,
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSampler<rand::rngs::ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> CellSampler for RandomSampler<R> {
    fn sample(&mut self, grid_size: usize) -> Position {
        let x = self.rng.gen_range(0..grid_size) as i32;
        let y = self.rng.gen_range(0..grid_size) as i32;
        Position::new(x, y)
    }
}

/// Places food on free cells by rejection sampling
pub struct FoodSpawner {
    grid_size: usize,
    sampler: Box<dyn CellSampler>,
}

impl FoodSpawner {
    pub fn new(grid_size: usize, sampler: Box<dyn CellSampler>) -> Self {
        Self { grid_size, sampler }
    }

    /// Pick a cell not covered by the snake.
    ///
    /// Returns `None` when the snake fills the whole board, since no
    /// amount of sampling could succeed.
    pub fn spawn(&mut self, snake: &Snake) -> Option<Position> {
        if snake.len() >= self.grid_size * self.grid_size {
            return None;
        }

        loop {
            let pos = self.sampler.sample(self.grid_size);
            if !snake.contains(pos) {
                return Some(pos);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::game::Direction;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::VecDeque;

    /// Replays a fixed list of cells, then repeats the last one
    pub(crate) struct ScriptedSampler {
        cells: VecDeque<Position>,
        last: Position,
    }

    impl ScriptedSampler {
        pub(crate) fn new(cells: impl IntoIterator<Item = Position>) -> Self {
            let cells: VecDeque<Position> = cells.into_iter().collect();
            let last = cells.back().copied().unwrap_or(Position::new(0, 0));
            Self { cells, last }
        }
    }

    impl CellSampler for ScriptedSampler {
        fn sample(&mut self, _grid_size: usize) -> Position {
            self.cells.pop_front().unwrap_or(self.last)
        }
    }

    #[test]
    fn test_skips_occupied_cells() {
        let snake = Snake::new(Position::new(10, 10), Direction::Up, 3);
        let sampler = ScriptedSampler::new([
            Position::new(10, 10),
            Position::new(10, 12),
            Position::new(4, 7),
        ]);
        let mut spawner = FoodSpawner::new(20, Box::new(sampler));

        assert_eq!(spawner.spawn(&snake), Some(Position::new(4, 7)));
    }

    #[test]
    fn test_full_board_yields_none() {
        let snake = Snake::from_segments([
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(1, 1),
            Position::new(0, 1),
        ]);
        let mut spawner = FoodSpawner::new(2, Box::new(ScriptedSampler::new([])));

        assert_eq!(spawner.spawn(&snake), None);
    }

    #[test]
    fn test_random_sampler_stays_on_board() {
        let snake = Snake::new(Position::new(2, 2), Direction::Up, 3);
        let sampler = RandomSampler::new(StdRng::seed_from_u64(7));
        let mut spawner = FoodSpawner::new(5, Box::new(sampler));

        for _ in 0..200 {
            let food = spawner.spawn(&snake).unwrap();
            assert!((0..5).contains(&food.x));
            assert!((0..5).contains(&food.y));
            assert!(!snake.contains(food));
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        // 2x2 board with three cells taken.
        let snake = Snake::from_segments([
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(1, 1),
        ]);
        let sampler = RandomSampler::new(StdRng::seed_from_u64(1));
        let mut spawner = FoodSpawner::new(2, Box::new(sampler));

        assert_eq!(spawner.spawn(&snake), Some(Position::new(0, 1)));
    }
}
