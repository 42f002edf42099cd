use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fading_connect::config::AppConfig;
use fading_connect::game::Player;
use fading_connect::ui::{App, GameMode};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Fading Connect in the terminal.
#[derive(Parser)]
#[command(name = "fading_connect", about = "Connect-N where old pieces fade away")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "fading_connect.toml")]
    config: PathBuf,

    /// Override board size (N)
    #[arg(long)]
    size: Option<usize>,

    /// Override pieces per player (M)
    #[arg(long)]
    max_pieces: Option<usize>,

    /// Override run length needed to win (W, defaults to max pieces)
    #[arg(long)]
    win_length: Option<usize>,

    /// Game mode: pvp or pvai
    #[arg(long)]
    mode: Option<String>,

    /// Side the AI plays in pvai mode: x or o
    #[arg(long)]
    ai_player: Option<String>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(size) = cli.size {
        app_config.game.board_size = size;
    }
    if let Some(max_pieces) = cli.max_pieces {
        app_config.game.max_pieces = max_pieces;
    }
    if cli.win_length.is_some() {
        app_config.game.win_length = cli.win_length;
    }
    if let Some(mode) = cli.mode.as_deref() {
        app_config.play.mode = match mode {
            "pvp" => GameMode::PlayerVsPlayer,
            "pvai" => GameMode::PlayerVsAi,
            other => bail!("unknown mode '{}' (expected 'pvp' or 'pvai')", other),
        };
    }
    if let Some(side) = cli.ai_player.as_deref() {
        app_config.play.ai_player = match side {
            "x" | "X" => Player::X,
            "o" | "O" => Player::O,
            other => bail!("unknown player '{}' (expected 'x' or 'o')", other),
        };
    }

    let game_config = app_config.game_config().context("invalid game settings")?;
    let mut app = App::new(game_config, app_config.play.clone());

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the app errored
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running game")
}
