//! # Fading Connect
//!
//! Connect-N on an N×N board where each player holds at most M pieces:
//! placing one more makes that player's oldest piece vanish. Ships a
//! terminal UI built with Ratatui and a headless random self-play runner.
//!
//! ## Modules
//!
//! - [`game`]: Rules engine: board, players, sliding piece queues, undo
//! - [`ai`]: Agent trait and the uniform-random move picker
//! - [`arena`]: Headless agent-vs-agent games and series statistics
//! - [`ui`]: Terminal UI: interactive board, move log, piece counts
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
