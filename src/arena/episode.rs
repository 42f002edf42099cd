use crate::ai::Agent;
use crate::error::ArenaError;
use crate::game::{Game, GameResult, Player};

/// Result of playing a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    /// `InProgress` when the round limit was hit first.
    pub result: GameResult,
    pub game_length: usize,
    /// Pieces pushed off the board by the sliding window.
    pub evictions: usize,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Player> {
        match self.result {
            GameResult::Winner(p) => Some(p),
            _ => None,
        }
    }
}

/// Reset `game` and play it out, X moved by `x_agent` and O by `o_agent`,
/// until it ends or `round_limit` moves have been made.
pub fn play_game<'a>(
    game: &mut Game,
    x_agent: &mut (dyn Agent + 'a),
    o_agent: &mut (dyn Agent + 'a),
    round_limit: usize,
) -> Result<GameRecord, ArenaError> {
    game.reset();
    let mut evictions = 0;

    while game.history().len() < round_limit {
        let Some(player) = game.current_player() else {
            break;
        };
        let agent = match player {
            Player::X => &mut *x_agent,
            Player::O => &mut *o_agent,
        };
        let move_number = game.history().len() + 1;
        let stalled = || ArenaError::AgentStalled {
            player,
            move_number,
        };
        let coord = agent.select_move(game).ok_or_else(stalled)?;
        let placement = game
            .apply_move(coord.row, coord.col)
            .map_err(|_| stalled())?;
        if placement.evicted.is_some() {
            evictions += 1;
        }
    }

    Ok(GameRecord {
        result: game.result(),
        game_length: game.history().len(),
        evictions,
    })
}
