use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use fading_connect::ai::{Agent, RandomAgent};
use fading_connect::arena::{run_series, SeriesMetrics};
use fading_connect::config::AppConfig;

/// Play random-vs-random Fading Connect games headlessly and report results.
#[derive(Parser)]
#[command(name = "selfplay", about = "Run a headless random self-play series")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "fading_connect.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override the per-game move limit
    #[arg(long)]
    round_limit: Option<usize>,

    /// Seed both agents for a reproducible series
    #[arg(long)]
    seed: Option<u64>,

    /// Override board size (N)
    #[arg(long)]
    size: Option<usize>,

    /// Override pieces per player (M)
    #[arg(long)]
    max_pieces: Option<usize>,

    /// Override run length needed to win (W)
    #[arg(long)]
    win_length: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        app_config.arena.games = games;
    }
    if let Some(round_limit) = cli.round_limit {
        app_config.arena.round_limit = round_limit;
    }
    if cli.seed.is_some() {
        app_config.arena.seed = cli.seed;
    }
    if let Some(size) = cli.size {
        app_config.game.board_size = size;
    }
    if let Some(max_pieces) = cli.max_pieces {
        app_config.game.max_pieces = max_pieces;
    }
    if cli.win_length.is_some() {
        app_config.game.win_length = cli.win_length;
    }
    app_config.validate().context("validating settings")?;

    let game_config = app_config.game_config()?;
    let arena = app_config.arena.clone();

    let (mut x_agent, mut o_agent) = match arena.seed {
        Some(seed) => (
            RandomAgent::with_seed(seed),
            RandomAgent::with_seed(seed.wrapping_add(1)),
        ),
        None => (RandomAgent::new(), RandomAgent::new()),
    };

    println!(
        "Playing {} games: {} (X) vs {} (O) on {n}x{n}, {} pieces each, {} in a row",
        arena.games,
        x_agent.name(),
        o_agent.name(),
        game_config.max_pieces(),
        game_config.win_length(),
        n = game_config.board_size(),
    );
    println!("-------------------------------------------");

    let window = arena.log_interval;
    let started = Instant::now();
    let metrics = run_series(
        game_config,
        &arena,
        &mut x_agent,
        &mut o_agent,
        |played, metrics: &SeriesMetrics| {
            println!(
                "Game {}/{} | X: {:.1}% | O: {:.1}% | draw: {:.1}% | unfinished: {:.1}% | avg_len: {:.1} | evictions: {:.1}",
                played,
                arena.games,
                metrics.x_win_rate(window) * 100.0,
                metrics.o_win_rate(window) * 100.0,
                metrics.draw_rate(window) * 100.0,
                metrics.unfinished_rate(window) * 100.0,
                metrics.average_game_length(window),
                metrics.average_evictions(window),
            );
        },
    )
    .context("running series")?;

    let total = metrics.total_games().max(1) as f32;
    println!("-------------------------------------------");
    println!(
        "Series complete. {} games in {:.2}s",
        metrics.total_games(),
        started.elapsed().as_secs_f32()
    );
    println!(
        "X wins: {} ({:.1}%) | O wins: {} ({:.1}%) | draws: {} ({:.1}%) | unfinished: {}",
        metrics.x_wins(),
        metrics.x_wins() as f32 / total * 100.0,
        metrics.o_wins(),
        metrics.o_wins() as f32 / total * 100.0,
        metrics.draws(),
        metrics.draws() as f32 / total * 100.0,
        metrics.unfinished(),
    );
    println!("Average game length: {:.1}", metrics.overall_game_length());

    Ok(())
}
