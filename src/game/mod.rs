//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front end drives it through [`GameMachine`] and reads it back
//! through [`Snapshot`].

pub mod clock;
pub mod collision;
pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod machine;
pub mod score;
pub mod state;

// Re-export commonly used types
pub use clock::GameClock;
pub use collision::{detect_collision, CollisionType};
pub use config::GameConfig;
pub use direction::{Direction, DirectionBuffer};
pub use engine::{GameEngine, StepOutcome};
pub use food::{CellSampler, FoodSpawner, RandomSampler};
pub use machine::{GameMachine, GameStatus, Outcome, Snapshot, View};
pub use score::ScoreBoard;
pub use state::{GameState, Position, Snake};
