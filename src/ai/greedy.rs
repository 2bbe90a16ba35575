use crate::game::{count_flips, legal_moves, Board, Move, Player};

use super::agent::Agent;

/// One-ply agent that plays the move flipping the most opponent pieces.
///
/// Ties go to the earliest move in row-major order: a candidate replaces the
/// current best only when it flips strictly more.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAgent;

impl GreedyAgent {
    pub fn new() -> Self {
        GreedyAgent
    }

    /// Best move and its flip count, without touching the board.
    pub fn best_move(board: &Board, player: Player) -> Option<(Move, usize)> {
        let mut best: Option<(Move, usize)> = None;
        for mv in legal_moves(board, player) {
            let flips = count_flips(board, mv, player);
            match best {
                Some((_, best_flips)) if flips <= best_flips => {}
                _ => best = Some((mv, flips)),
            }
        }
        best
    }
}

impl Agent for GreedyAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        Self::best_move(board, player).map(|(mv, _)| mv)
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
