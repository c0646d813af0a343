//! # Connect Four
//!
//! Connect Four for the terminal, two players at one keyboard or one player
//! against a heuristic opponent that completes or blocks near wins.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, gravity drops, win detection, turn state
//! - [`ai`] — Agent trait and the threat-scanning heuristic
//! - [`controller`] — Turn state machine owning the session's game state
//! - [`console`] — Line-oriented prompt front end
//! - [`ui`] — Full-screen terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod console;
pub mod controller;
pub mod error;
pub mod game;
pub mod ui;
