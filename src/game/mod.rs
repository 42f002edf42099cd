//! Core rules engine: board representation, players, the per-player sliding
//! piece queues and the game state machine with single-step undo.

mod board;
mod player;
mod queue;
mod rules;
mod state;

pub use board::{Board, Cell, Coord};
pub use player::Player;
pub use queue::PieceQueue;
pub use rules::GameConfig;
pub use state::{Game, GameResult, MoveError, MoveRecord, Placement, UndoError};
