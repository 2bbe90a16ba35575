use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{legal_moves, Board, Move, Player};

use super::agent::Agent;

/// An agent that selects uniformly at random from legal moves.
pub struct RandomAgent<R = StdRng> {
    rng: R,
}

impl RandomAgent<StdRng> {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for tests and seeded series.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomAgent<R> {
    pub fn from_rng(rng: R) -> Self {
        RandomAgent { rng }
    }
}

impl Default for RandomAgent<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Agent for RandomAgent<R> {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        let moves = legal_moves(board, player);
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..moves.len());
        Some(moves[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
