use anyhow::{Context, Result};

use super::{
    collision::{detect_collision, CollisionType},
    config::GameConfig,
    direction::{Direction, DirectionBuffer},
    food::{CellSampler, FoodSpawner, RandomSampler},
    state::{GameState, Position, Snake},
};

/// What a single tick did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Snake moved one cell
    Moved,
    /// Snake moved onto the food and grew; new food is placed
    AteFood,
    /// Snake ate the last free cell; there is nowhere left for food
    BoardFilled,
    /// Candidate head hit something; the snake was not moved
    Collided(CollisionType),
}

impl StepOutcome {
    pub fn ate_food(&self) -> bool {
        matches!(self, StepOutcome::AteFood | StepOutcome::BoardFilled)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, StepOutcome::BoardFilled | StepOutcome::Collided(_))
    }
}

/// Direction a new snake faces
pub const INITIAL_DIRECTION: Direction = Direction::Up;

/// The game engine that handles all movement logic
pub struct GameEngine {
    config: GameConfig,
    spawner: FoodSpawner,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_sampler(config, Box::new(RandomSampler::thread()))
    }

    /// Create an engine that draws food cells from `sampler`
    pub fn with_sampler(config: GameConfig, sampler: Box<dyn CellSampler>) -> Self {
        let spawner = FoodSpawner::new(config.grid_size, sampler);
        Self { config, spawner }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh board: snake in the centre heading up, food on a free cell
    pub fn reset(&mut self) -> Result<GameState> {
        let center = (self.config.grid_size / 2) as i32;

        let snake = Snake::new(
            Position::new(center, center),
            INITIAL_DIRECTION,
            self.config.initial_snake_length,
        );

        let food = self
            .spawner
            .spawn(&snake)
            .context("No free cell left for food on a fresh board")?;

        Ok(GameState::new(snake, food, self.config.grid_size))
    }

    /// Advance the snake by one cell.
    ///
    /// The collision check runs against the body as it was before this
    /// tick. On a collision the state is left untouched.
    pub fn step(&mut self, state: &mut GameState, buffer: &mut DirectionBuffer) -> StepOutcome {
        let direction = buffer.commit();
        let new_head = state.snake.head().moved_in_direction(direction);

        if let Some(collision) = detect_collision(new_head, state.grid_size, &state.snake) {
            return StepOutcome::Collided(collision);
        }

        let ate_food = new_head == state.food;
        state.snake.advance(new_head, ate_food);

        if !ate_food {
            return StepOutcome::Moved;
        }

        match self.spawner.spawn(&state.snake) {
            Some(food) => {
                state.food = food;
                StepOutcome::AteFood
            }
            None => StepOutcome::BoardFilled,
        }
    }
}
