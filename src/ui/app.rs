use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crate::ai::{Agent, RandomAgent};
use crate::game::{Coord, Game, GameConfig, GameResult, MoveError, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};

const FRAME: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameMode {
    #[serde(rename = "pvp")]
    PlayerVsPlayer,
    #[serde(rename = "pvai")]
    PlayerVsAi,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "Player vs Player",
            GameMode::PlayerVsAi => "Player vs AI",
        }
    }

    fn toggled(self) -> GameMode {
        match self {
            GameMode::PlayerVsPlayer => GameMode::PlayerVsAi,
            GameMode::PlayerVsAi => GameMode::PlayerVsPlayer,
        }
    }
}

/// How the interactive session is played.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub mode: GameMode,
    /// Side the AI takes in player-vs-AI mode.
    pub ai_player: Player,
    /// Pause before the AI moves, so its reply is visible as a separate step.
    pub ai_delay_ms: u64,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            mode: GameMode::PlayerVsAi,
            ai_player: Player::O,
            ai_delay_ms: 500,
        }
    }
}

/// Which rule parameter a configuration key adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Setting {
    BoardSize,
    MaxPieces,
    WinLength,
}

pub struct App {
    game: Game,
    play: PlayConfig,
    ai: Box<dyn Agent>,
    cursor: Coord,
    /// When the pending AI move is due; `None` while no AI move is queued.
    ai_due: Option<Instant>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: GameConfig, play: PlayConfig) -> Self {
        Self::with_agent(config, play, Box::new(RandomAgent::new()))
    }

    pub fn with_agent(config: GameConfig, play: PlayConfig, ai: Box<dyn Agent>) -> Self {
        let mut app = App {
            game: Game::new(config),
            play,
            ai,
            cursor: Coord::new(config.board_size() / 2, config.board_size() / 2),
            ai_due: None,
            should_quit: false,
            message: None,
        };
        app.schedule_ai(Instant::now());
        app
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn mode(&self) -> GameMode {
        self.play.mode
    }

    pub fn ai_player(&self) -> Option<Player> {
        match self.play.mode {
            GameMode::PlayerVsAi => Some(self.play.ai_player),
            GameMode::PlayerVsPlayer => None,
        }
    }

    pub fn ai_thinking(&self) -> bool {
        self.ai_due.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Wait for a key, but no longer than the next frame or the pending AI
    /// move.
    fn handle_events(&mut self) -> io::Result<()> {
        let timeout = match self.ai_due {
            Some(due) => due.saturating_duration_since(Instant::now()).min(FRAME),
            None => FRAME,
        };
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        let last = self.game.board().size() - 1;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor.col = self.cursor.col.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cursor.col = (self.cursor.col + 1).min(last);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor.row = self.cursor.row.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor.row = (self.cursor.row + 1).min(last);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_piece(Instant::now());
            }
            KeyCode::Char('u') => {
                self.undo(Instant::now());
            }
            KeyCode::Char('r') => {
                self.restart(Instant::now());
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('p') => {
                self.play.mode = self.play.mode.toggled();
                self.restart(Instant::now());
                self.message = Some(format!("Mode: {}", self.play.mode.label()));
            }
            KeyCode::Char('[') => self.adjust(Setting::BoardSize, -1),
            KeyCode::Char(']') => self.adjust(Setting::BoardSize, 1),
            KeyCode::Char('-') => self.adjust(Setting::MaxPieces, -1),
            KeyCode::Char('=') => self.adjust(Setting::MaxPieces, 1),
            KeyCode::Char(',') => self.adjust(Setting::WinLength, -1),
            KeyCode::Char('.') => self.adjust(Setting::WinLength, 1),
            _ => {}
        }
    }

    /// Place the human's piece at the cursor
    fn place_piece(&mut self, now: Instant) {
        if self.game.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.ai_thinking() {
            self.message = Some("Wait for the AI to move.".to_string());
            return;
        }

        match self.game.apply_move(self.cursor.row, self.cursor.col) {
            Ok(placement) => {
                if let Some(old) = placement.evicted {
                    self.message = Some(format!(
                        "{}'s piece at ({}, {}) vanished.",
                        placement.player.name(),
                        old.row + 1,
                        old.col + 1
                    ));
                }
                self.announce_result();
                self.schedule_ai(now);
            }
            Err(MoveError::Occupied) => {
                self.message = Some("Cell is occupied!".to_string());
            }
            Err(MoveError::OutOfBounds) => {
                self.message = Some("Invalid cell!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Play the queued AI move once it is due.
    pub fn tick(&mut self, now: Instant) {
        let Some(due) = self.ai_due else {
            return;
        };
        if now < due {
            return;
        }
        self.ai_due = None;

        if !self.ai.make_move(&mut self.game) {
            self.message = Some(format!("{} AI found no legal move.", self.ai.name()));
            return;
        }
        self.announce_result();
        self.schedule_ai(now);
    }

    /// Take back moves until it is a human's turn again.
    fn undo(&mut self, now: Instant) {
        if self.ai_thinking() {
            self.message = Some("Cannot undo while the AI is thinking.".to_string());
            return;
        }
        if !self.game.undo() {
            self.message = Some("Nothing to undo.".to_string());
            return;
        }
        while self.is_ai_turn() && !self.game.history().is_empty() {
            self.game.undo();
        }
        self.message = Some("Move undone.".to_string());
        self.schedule_ai(now);
    }

    fn restart(&mut self, now: Instant) {
        self.game.reset();
        self.ai_due = None;
        self.schedule_ai(now);
    }

    /// Change one rule parameter and start a fresh game with it.
    fn adjust(&mut self, setting: Setting, delta: isize) {
        let current = *self.game.config();
        let (mut size, mut pieces, mut win) = (
            current.board_size(),
            current.max_pieces(),
            current.win_length(),
        );
        let target = match setting {
            Setting::BoardSize => &mut size,
            Setting::MaxPieces => &mut pieces,
            Setting::WinLength => &mut win,
        };
        *target = target.saturating_add_signed(delta);

        match GameConfig::new(size, pieces, Some(win)) {
            Ok(config) => {
                self.game = Game::new(config);
                self.cursor = Coord::new(size / 2, size / 2);
                self.ai_due = None;
                self.schedule_ai(Instant::now());
                self.message = Some(format!(
                    "Board {size}x{size}, {pieces} pieces each, {win} in a row to win"
                ));
            }
            Err(e) => {
                self.message = Some(e.to_string());
            }
        }
    }

    fn is_ai_turn(&self) -> bool {
        self.ai_player().is_some() && self.game.current_player() == self.ai_player()
    }

    fn schedule_ai(&mut self, now: Instant) {
        if self.is_ai_turn() {
            self.ai_due = Some(now + Duration::from_millis(self.play.ai_delay_ms));
        }
    }

    fn announce_result(&mut self) {
        match self.game.result() {
            GameResult::Winner(player) => {
                self.message = Some(format!("{} wins!", player.name()));
            }
            GameResult::Draw => {
                self.message = Some("It's a draw!".to_string());
            }
            GameResult::InProgress => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}
