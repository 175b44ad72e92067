//! Game state machine
//!
//! Owns one session's board, direction buffer, score and clock, and moves
//! between IDLE, PLAYING, PAUSED and GAME_OVER. Requests that do not match a
//! legal transition are ignored and reported with `false`.

use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, warn};

use super::{
    clock::GameClock,
    collision::CollisionType,
    config::GameConfig,
    direction::{Direction, DirectionBuffer},
    engine::{GameEngine, StepOutcome, INITIAL_DIRECTION},
    score::ScoreBoard,
    state::{GameState, Position},
};
use crate::history::HistoryRecorder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Playing,
    Paused,
    GameOver,
}

/// Which screen the player is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Game,
    Dashboard,
}

/// Why the last session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Crashed(CollisionType),
    /// The snake filled every cell
    BoardCleared,
}

/// Read-only copy of everything the presentation layer needs
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub grid_size: usize,
    pub snake: Vec<Position>,
    pub food: Position,
    pub status: GameStatus,
    pub view: View,
    pub score: u32,
    pub high_score: u32,
    pub speed_ms: u64,
    pub tick_interval: Duration,
    pub dashing: bool,
    pub impact: bool,
    pub outcome: Option<Outcome>,
}

impl Snapshot {
    /// Whether the finished game matched or beat the best score
    pub fn is_new_high_score(&self) -> bool {
        self.status == GameStatus::GameOver && self.score > 0 && self.score >= self.high_score
    }
}

pub struct GameMachine {
    engine: GameEngine,
    state: GameState,
    buffer: DirectionBuffer,
    score: ScoreBoard,
    clock: GameClock,
    history: HistoryRecorder,
    status: GameStatus,
    view: View,
    impact: bool,
    outcome: Option<Outcome>,
}

impl GameMachine {
    pub fn new(config: GameConfig, history: HistoryRecorder) -> Result<Self> {
        Self::with_engine(GameEngine::new(config), history)
    }

    pub fn with_engine(mut engine: GameEngine, history: HistoryRecorder) -> Result<Self> {
        let state = engine.reset()?;
        let score = ScoreBoard::new(engine.config());

        Ok(Self {
            engine,
            state,
            buffer: DirectionBuffer::new(INITIAL_DIRECTION),
            score,
            clock: GameClock::new(),
            history,
            status: GameStatus::Idle,
            view: View::Game,
            impact: false,
            outcome: None,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn board(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &HistoryRecorder {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryRecorder {
        &mut self.history
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut GameClock {
        &mut self.clock
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid_size: self.state.grid_size,
            snake: self.state.snake.to_vec(),
            food: self.state.food,
            status: self.status,
            view: self.view,
            score: self.score.score(),
            high_score: self.history.high_score(),
            speed_ms: self.score.speed_ms(),
            tick_interval: self.score.effective_interval(),
            dashing: self.score.is_dashing(),
            impact: self.impact,
            outcome: self.outcome,
        }
    }

    /// IDLE or GAME_OVER -> PLAYING with a fresh board
    pub fn start(&mut self) -> bool {
        if !matches!(self.status, GameStatus::Idle | GameStatus::GameOver) {
            return false;
        }

        self.state = match self.engine.reset() {
            Ok(state) => state,
            Err(err) => {
                warn!("Cannot start a game: {:#}", err);
                return false;
            }
        };
        self.buffer.reset(INITIAL_DIRECTION);
        self.score.reset();
        self.outcome = None;
        self.impact = false;
        self.view = View::Game;
        self.status = GameStatus::Playing;
        self.sync_clock();

        info!("Game started");
        true
    }

    /// PLAYING <-> PAUSED
    pub fn toggle_pause(&mut self) -> bool {
        if self.view != View::Game {
            return false;
        }

        match self.status {
            GameStatus::Playing => {
                self.status = GameStatus::Paused;
                self.score.set_dashing(false);
            }
            GameStatus::Paused => self.status = GameStatus::Playing,
            _ => return false,
        }

        debug!("Pause toggled, now {:?}", self.status);
        self.sync_clock();
        true
    }

    /// PAUSED -> PLAYING
    pub fn resume(&mut self) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }
        self.toggle_pause()
    }

    /// Leave the game for the dashboard; any session in progress is dropped
    pub fn open_dashboard(&mut self) -> bool {
        if self.view == View::Dashboard {
            return false;
        }

        self.view = View::Dashboard;
        self.status = GameStatus::Idle;
        self.score.set_dashing(false);
        self.sync_clock();

        debug!("Opened dashboard");
        true
    }

    pub fn close_dashboard(&mut self) -> bool {
        if self.view != View::Dashboard {
            return false;
        }

        self.view = View::Game;
        debug!("Back to game view");
        true
    }

    /// Queue a turn for the next tick
    pub fn propose_direction(&mut self, direction: Direction) -> bool {
        if self.view != View::Game {
            return false;
        }
        self.buffer.propose(direction)
    }

    pub fn press_dash(&mut self) -> bool {
        if self.view != View::Game || self.status != GameStatus::Playing || self.score.is_dashing() {
            return false;
        }

        self.score.set_dashing(true);
        self.sync_clock();
        true
    }

    pub fn release_dash(&mut self) -> bool {
        if !self.score.is_dashing() {
            return false;
        }

        self.score.set_dashing(false);
        self.sync_clock();
        true
    }

    /// For terminals that cannot report key release
    pub fn toggle_dash(&mut self) -> bool {
        if self.score.is_dashing() {
            self.release_dash()
        } else {
            self.press_dash()
        }
    }

    /// Turn off the transient impact flag raised at game over
    pub fn clear_impact(&mut self) {
        self.impact = false;
    }

    /// Run one simulation step. Does nothing unless a game is on screen and running.
    pub fn tick(&mut self) -> Option<StepOutcome> {
        if self.status != GameStatus::Playing || self.view != View::Game {
            return None;
        }

        let outcome = self.engine.step(&mut self.state, &mut self.buffer);

        if outcome.ate_food() {
            self.score.on_food_eaten();
            debug!("Food eaten, score {} speed {}ms", self.score.score(), self.score.speed_ms());
        }

        match outcome {
            StepOutcome::Collided(collision) => self.end_game(Outcome::Crashed(collision)),
            StepOutcome::BoardFilled => self.end_game(Outcome::BoardCleared),
            StepOutcome::Moved | StepOutcome::AteFood => {}
        }

        self.sync_clock();
        Some(outcome)
    }

    fn end_game(&mut self, outcome: Outcome) {
        let score = self.score.score();
        info!("Game over ({:?}) with score {}", outcome, score);

        self.status = GameStatus::GameOver;
        self.outcome = Some(outcome);
        self.impact = true;
        self.score.set_dashing(false);

        if score > 0 {
            self.history.record(score);
        }
    }

    /// The clock runs only while PLAYING in the game view
    fn sync_clock(&mut self) {
        let desired = (self.status == GameStatus::Playing && self.view == View::Game)
            .then(|| self.score.effective_interval());

        if self.clock.sync(desired) {
            debug!("Clock now {:?}", desired);
        }
    }
}
