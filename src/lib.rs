//! # Othello
//!
//! Othello/Reversi on rectangular boards, with random, greedy and human
//! players, a match arena and a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Board, players, capture rules and the game state machine
//! - [`ai`]: Agent trait with random, greedy and console human players
//! - [`arena`]: Turn loop, pairings, series runner and result statistics
//! - [`ui`]: Terminal UI for playing against an agent
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
