use super::{Board, Cell, Coord, GameConfig, PieceQueue, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Winner(Player),
    Draw,
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        self != GameResult::InProgress
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is over")]
    GameOver,
    #[error("position is off the board")]
    OutOfBounds,
    #[error("cell is already occupied")]
    Occupied,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UndoError {
    #[error("no moves to undo")]
    NothingToUndo,
}

/// One placed move. History keeps it even after the piece has vanished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub coord: Coord,
    pub player: Player,
}

/// What a successful move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub player: Player,
    pub coord: Coord,
    /// The mover's oldest piece, if placing this one pushed it off.
    pub evicted: Option<Coord>,
}

/// The rules engine: board, turn order, one sliding piece queue per player,
/// move history and the derived result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    config: GameConfig,
    board: Board,
    x_pieces: PieceQueue,
    o_pieces: PieceQueue,
    history: Vec<MoveRecord>,
    result: GameResult,
}

impl Game {
    /// Create an empty game
    pub fn new(config: GameConfig) -> Self {
        Game {
            config,
            board: Board::new(config.board_size()),
            x_pieces: PieceQueue::with_capacity(config.max_pieces()),
            o_pieces: PieceQueue::with_capacity(config.max_pieces()),
            history: Vec::new(),
            result: GameResult::InProgress,
        }
    }

    /// Discard every move, keeping the configuration.
    pub fn reset(&mut self) {
        *self = Game::new(self.config);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_terminal(&self) -> bool {
        self.result.is_terminal()
    }

    /// Every move played so far, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The given player's pieces, oldest first.
    pub fn queue(&self, player: Player) -> &PieceQueue {
        match player {
            Player::X => &self.x_pieces,
            Player::O => &self.o_pieces,
        }
    }

    fn queue_mut(&mut self, player: Player) -> &mut PieceQueue {
        match player {
            Player::X => &mut self.x_pieces,
            Player::O => &mut self.o_pieces,
        }
    }

    /// Whose turn it is, or `None` once the game has ended.
    pub fn current_player(&self) -> Option<Player> {
        if self.is_terminal() {
            return None;
        }
        Some(Player::for_move_number(self.history.len()))
    }

    /// All empty cells, row-major.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.board.cells_matching(Cell::Empty)
    }

    /// Place the current player's piece at `(row, col)`.
    ///
    /// On error nothing changes.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.in_bounds(row, col) {
            return Err(MoveError::OutOfBounds);
        }
        if self.board.get(row, col) != Cell::Empty {
            return Err(MoveError::Occupied);
        }

        let player = Player::for_move_number(self.history.len());
        let coord = Coord::new(row, col);
        self.board.set(coord, player.to_cell());

        let evicted = self.queue_mut(player).push(coord);
        if let Some(old) = evicted {
            self.board.clear(old);
        }

        self.history.push(MoveRecord { coord, player });
        self.result = self.compute_result();

        Ok(Placement {
            player,
            coord,
            evicted,
        })
    }

    /// Boolean form of [`Game::apply_move`].
    pub fn play(&mut self, row: usize, col: usize) -> bool {
        self.apply_move(row, col).is_ok()
    }

    /// Take back the most recent move.
    ///
    /// Only that placement is reversed: pieces the sliding window evicted
    /// earlier stay gone.
    pub fn try_undo(&mut self) -> Result<MoveRecord, UndoError> {
        let record = self.history.pop().ok_or(UndoError::NothingToUndo)?;
        self.board.clear(record.coord);
        self.queue_mut(record.player).remove(record.coord);
        self.result = self.compute_result();
        Ok(record)
    }

    /// Boolean form of [`Game::try_undo`].
    pub fn undo(&mut self) -> bool {
        self.try_undo().is_ok()
    }

    /// Owner of an occupied cell and its index in the owner's queue
    /// (0 = oldest, the next to vanish).
    pub fn piece_age(&self, coord: Coord) -> Option<(Player, usize)> {
        [Player::X, Player::O]
            .into_iter()
            .find_map(|p| self.queue(p).position(coord).map(|idx| (p, idx)))
    }

    /// The piece `player` would lose on their next placement.
    pub fn next_to_vanish(&self, player: Player) -> Option<Coord> {
        let queue = self.queue(player);
        if queue.is_full() {
            queue.front()
        } else {
            None
        }
    }

    /// Cells of the run that decided a won game, ordered along the line.
    pub fn winning_line(&self) -> Option<Vec<Coord>> {
        let GameResult::Winner(player) = self.result else {
            return None;
        };
        let last = self.history.last()?;
        if last.player != player {
            return None;
        }
        self.board.winning_run(
            last.coord.row,
            last.coord.col,
            player.to_cell(),
            self.config.win_length(),
        )
    }

    /// Judge the position from the last history record only.
    fn compute_result(&self) -> GameResult {
        let Some(last) = self.history.last() else {
            return GameResult::InProgress;
        };

        if self.board.check_win(
            last.coord.row,
            last.coord.col,
            last.player.to_cell(),
            self.config.win_length(),
        ) {
            return GameResult::Winner(last.player);
        }

        // Counts moves ever played, not occupied cells.
        if self.history.len() >= self.config.cell_count() {
            return GameResult::Draw;
        }

        GameResult::InProgress
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(n: usize, m: usize, w: usize) -> Game {
        Game::new(GameConfig::new(n, m, Some(w)).unwrap())
    }

    fn play_all(game: &mut Game, moves: &[(usize, usize)]) {
        for &(r, c) in moves {
            assert!(game.play(r, c), "move ({r}, {c}) rejected");
        }
    }

    fn assert_queues_match_board(game: &Game) {
        for player in [Player::X, Player::O] {
            let mut queued: Vec<Coord> = game.queue(player).iter().collect();
            queued.sort();
            assert_eq!(queued, game.board().cells_matching(player.to_cell()));
            assert!(game.queue(player).len() <= game.config().max_pieces());
        }
    }

    #[test]
    fn test_initial_state() {
        let game = Game::default();
        assert_eq!(game.current_player(), Some(Player::X));
        assert_eq!(game.result(), GameResult::InProgress);
        assert_eq!(game.empty_cells().len(), 9);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_apply_move_alternates_players() {
        let mut game = Game::default();
        let placement = game.apply_move(1, 1).unwrap();
        assert_eq!(placement.player, Player::X);
        assert_eq!(placement.evicted, None);
        assert_eq!(game.board().get(1, 1), Cell::X);
        assert_eq!(game.current_player(), Some(Player::O));

        game.apply_move(0, 0).unwrap();
        assert_eq!(game.board().get(0, 0), Cell::O);
        assert_eq!(
            game.history()[1],
            MoveRecord {
                coord: Coord::new(0, 0),
                player: Player::O
            }
        );
    }

    #[test]
    fn test_horizontal_win_3x3() {
        let mut game = game(3, 3, 3);
        play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(game.result(), GameResult::Winner(Player::X));
        assert_eq!(game.current_player(), None);
        assert_eq!(
            game.winning_line(),
            Some(vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)])
        );
    }

    #[test]
    fn test_anti_diagonal_win_for_o() {
        let mut game = game(3, 3, 3);
        play_all(&mut game, &[(0, 0), (0, 2), (0, 1), (1, 1), (2, 2), (2, 0)]);
        assert_eq!(game.result(), GameResult::Winner(Player::O));
    }

    #[test]
    fn test_sliding_window_eviction() {
        let mut game = game(4, 2, 4);
        play_all(&mut game, &[(0, 0), (3, 3), (0, 1), (3, 2)]);
        assert_eq!(game.next_to_vanish(Player::X), Some(Coord::new(0, 0)));

        let placement = game.apply_move(0, 2).unwrap();
        assert_eq!(placement.evicted, Some(Coord::new(0, 0)));
        assert_eq!(game.board().get(0, 0), Cell::Empty);
        assert_eq!(
            game.queue(Player::X).iter().collect::<Vec<_>>(),
            vec![Coord::new(0, 1), Coord::new(0, 2)]
        );
        assert_eq!(game.history().len(), 5);
        assert_queues_match_board(&game);
    }

    #[test]
    fn test_rejected_moves_leave_state_unchanged() {
        let mut game = game(3, 3, 3);
        game.play(1, 1);
        let before = game.clone();

        assert_eq!(game.apply_move(1, 1), Err(MoveError::Occupied));
        assert_eq!(game.apply_move(3, 0), Err(MoveError::OutOfBounds));
        assert_eq!(game.apply_move(0, 7), Err(MoveError::OutOfBounds));
        assert!(!game.play(1, 1));
        assert_eq!(game, before);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut game = game(3, 3, 3);
        play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        let before = game.clone();
        assert_eq!(game.apply_move(2, 2), Err(MoveError::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_game_over_checked_before_bounds() {
        let mut game = game(3, 3, 3);
        play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(game.apply_move(9, 9), Err(MoveError::GameOver));
    }

    #[test]
    fn test_undo_restores_cell_and_turn() {
        let mut game = Game::default();
        game.play(2, 1);
        game.play(0, 0);
        let record = game.try_undo().unwrap();
        assert_eq!(record.coord, Coord::new(0, 0));
        assert_eq!(record.player, Player::O);
        assert_eq!(game.board().get(0, 0), Cell::Empty);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_player(), Some(Player::O));
        assert_queues_match_board(&game);
    }

    #[test]
    fn test_undo_past_empty_fails() {
        let mut game = Game::default();
        game.play(0, 0);
        game.play(1, 1);
        assert!(game.undo());
        assert!(game.undo());
        assert!(!game.undo());
        assert_eq!(game.try_undo(), Err(UndoError::NothingToUndo));
        assert_eq!(game, Game::default());
    }

    #[test]
    fn test_undo_reopens_won_game() {
        let mut game = game(3, 3, 3);
        play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(game.undo());
        assert_eq!(game.result(), GameResult::InProgress);
        assert_eq!(game.current_player(), Some(Player::X));
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn test_undo_does_not_resurrect_evicted_piece() {
        let mut game = game(4, 2, 4);
        play_all(&mut game, &[(0, 0), (3, 3), (0, 1), (3, 2), (0, 2)]);
        assert!(game.undo());
        assert_eq!(game.board().get(0, 2), Cell::Empty);
        assert_eq!(game.board().get(0, 0), Cell::Empty);
        assert_eq!(
            game.queue(Player::X).iter().collect::<Vec<_>>(),
            vec![Coord::new(0, 1)]
        );
        assert_queues_match_board(&game);
    }

    #[test]
    fn test_undo_of_already_evicted_piece() {
        // With one piece each, X's first piece is gone by the time its
        // record is undone.
        let mut game = game(3, 1, 3);
        play_all(&mut game, &[(0, 0), (2, 2), (0, 1)]);
        assert_eq!(game.board().get(0, 0), Cell::Empty);
        assert!(game.undo());
        assert!(game.undo());
        assert!(game.undo());
        assert!(game.queue(Player::X).is_empty());
        assert_eq!(game.board().occupied_count(), 0);
    }

    #[test]
    fn test_draw_counts_history_not_occupancy() {
        // Two pieces each on a 2×2 board can never make a run of 3.
        let mut game = game(2, 1, 3);
        play_all(&mut game, &[(0, 0), (1, 1), (0, 1)]);
        assert_eq!(game.result(), GameResult::InProgress);
        game.play(1, 0);
        assert_eq!(game.history().len(), 4);
        assert!(game.empty_cells().len() >= 2);
        assert_eq!(game.result(), GameResult::Draw);
        assert_eq!(game.current_player(), None);
    }

    #[test]
    fn test_empty_cells_row_major_and_complete() {
        let mut game = game(3, 2, 3);
        play_all(&mut game, &[(1, 1), (0, 2), (2, 0)]);
        let empty = game.empty_cells();
        assert!(empty.windows(2).all(|w| w[0] < w[1]));
        assert!(empty
            .iter()
            .all(|c| game.board().get(c.row, c.col) == Cell::Empty));
        assert_eq!(empty.len() + game.board().occupied_count(), 9);
    }

    #[test]
    fn test_piece_age() {
        let mut game = game(3, 3, 3);
        play_all(&mut game, &[(0, 0), (2, 2), (1, 0)]);
        assert_eq!(game.piece_age(Coord::new(0, 0)), Some((Player::X, 0)));
        assert_eq!(game.piece_age(Coord::new(1, 0)), Some((Player::X, 1)));
        assert_eq!(game.piece_age(Coord::new(2, 2)), Some((Player::O, 0)));
        assert_eq!(game.piece_age(Coord::new(1, 1)), None);
        assert_eq!(game.next_to_vanish(Player::X), None);
    }

    #[test]
    fn test_reset_keeps_config() {
        let mut game = game(5, 4, 3);
        play_all(&mut game, &[(0, 0), (4, 4)]);
        game.reset();
        assert!(game.history().is_empty());
        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(game.config().board_size(), 5);
        assert_eq!(game.config().win_length(), 3);
    }
}
