//! Grid snake game played while a lead search runs in the background.
//!
//! The simulation (`game`, `snake`, `food`, `input`, `scheduler`, `session`)
//! has no terminal dependencies; the remaining modules present it with
//! `ratatui` and read input with `crossterm`.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod scheduler;
pub mod session;
pub mod snake;
pub mod terminal_input;
pub mod terminal_runtime;
pub mod ui;
