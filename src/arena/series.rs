use crate::ai::Agent;
use crate::error::ArenaError;
use crate::game::{Game, GameConfig};

use super::episode::play_game;
use super::metrics::SeriesMetrics;

/// Headless series configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    /// Moves after which a game is abandoned and scored unfinished.
    pub round_limit: usize,
    pub log_interval: usize,
    /// Fixed seed for reproducible series; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 1000,
            round_limit: 1000,
            log_interval: 100,
            seed: None,
        }
    }
}

/// Play `arena.games` games between the two agents on fresh boards.
///
/// `on_progress` is called with the number of finished games every
/// `log_interval` games.
pub fn run_series(
    game_config: GameConfig,
    arena: &ArenaConfig,
    x_agent: &mut dyn Agent,
    o_agent: &mut dyn Agent,
    mut on_progress: impl FnMut(usize, &SeriesMetrics),
) -> Result<SeriesMetrics, ArenaError> {
    let mut metrics = SeriesMetrics::with_capacity(arena.log_interval.max(1));
    let mut game = Game::new(game_config);

    for played in 1..=arena.games {
        let record = play_game(&mut game, x_agent, o_agent, arena.round_limit)?;
        metrics.record_game(record);

        if arena.log_interval > 0 && played % arena.log_interval == 0 {
            on_progress(played, &metrics);
        }
    }

    Ok(metrics)
}
