use crate::game::{Board, Move, Player};

/// Universal interface for everything that picks moves: AI agents and humans.
pub trait Agent {
    /// Choose a move for `player` on `board`.
    /// Returns `None` only when the player has no legal move.
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Move>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        (**self).select_move(board, player)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
