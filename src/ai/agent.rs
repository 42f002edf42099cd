use crate::game::{Coord, Game};

/// Universal interface for move pickers.
pub trait Agent {
    /// Choose a cell for the side to move, or `None` if there is nothing
    /// to play.
    fn select_move(&mut self, game: &Game) -> Option<Coord>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Select a cell and play it. Returns `false` when no move was made,
    /// either because nothing was selected or because the engine rejected
    /// the choice; the game is then unchanged.
    fn make_move(&mut self, game: &mut Game) -> bool {
        match self.select_move(game) {
            Some(coord) => game.play(coord.row, coord.col),
            None => false,
        }
    }
}
