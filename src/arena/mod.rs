//! Headless agent-vs-agent play: single games, result bookkeeping and
//! multi-game series.

mod episode;
mod metrics;
mod series;

pub use episode::{play_game, GameRecord};
pub use metrics::SeriesMetrics;
pub use series::{run_series, ArenaConfig};
