//! # Connect Four Engine
//!
//! Rules engine for the two-player gravity-drop game: pieces fall to the
//! lowest free cell of a column and four in a row wins. Ships a cheap
//! streak-extending bot and a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Grid, streak scanning, win detection, match state machine
//! - [`ai`]: Agent trait, heuristic move selector, random agent
//! - [`stats`]: Win/draw statistics for simulated games
//! - [`ui`]: Terminal UI for playing against a friend or the bot
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod stats;
pub mod ui;
