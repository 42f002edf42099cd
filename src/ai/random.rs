use crate::game::{Coord, Game};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from the empty cells.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for tests and seeded arena runs.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, game: &Game) -> Option<Coord> {
        if game.is_terminal() {
            return None;
        }
        let cells = game.empty_cells();
        if cells.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..cells.len());
        Some(cells[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
