//! Terminal UI: an interactive board for player-vs-player or
//! player-vs-random-AI games, with fading pieces and a move log.

mod app;
pub mod board_widget;
mod game_view;

pub use app::{App, GameMode, PlayConfig};
