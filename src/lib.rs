//! Neon Snake - a terminal snake game
//!
//! This library provides:
//! - Core game logic: movement, collisions, food, score/speed and the
//!   state machine that drives a session (game module)
//! - Score history and persisted preferences (history, settings, storage)
//! - Terminal front end: input mapping, dashboard and rendering
//!   (input, dashboard, render, modes)

pub mod dashboard;
pub mod game;
pub mod history;
pub mod i18n;
pub mod input;
pub mod modes;
pub mod render;
pub mod settings;
pub mod storage;
