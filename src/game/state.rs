use crate::error::BoardError;

use super::rules::{self, Move, MoveError};
use super::{Board, Player, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl GameOutcome {
    /// Decide the outcome from final piece counts.
    pub fn from_score(score: Score) -> Self {
        use std::cmp::Ordering;
        match score.light.cmp(&score.dark) {
            Ordering::Greater => GameOutcome::Winner(Player::Light),
            Ordering::Less => GameOutcome::Winner(Player::Dark),
            Ordering::Equal => GameOutcome::Draw,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Winner(p) => Some(p),
            GameOutcome::Draw => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    plies: usize,
    passes: usize,
}

impl GameState {
    /// Standard 8x8 opening with Light to move.
    pub fn initial() -> Self {
        Self::from_board(Board::standard(), Player::Light)
    }

    /// Opening position on a `width` x `height` board.
    pub fn new(width: usize, height: usize, first_player: Player) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::new(width, height)?, first_player))
    }

    /// Resume from an arbitrary position.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let mut state = GameState {
            board,
            current_player: to_move,
            outcome: None,
            plies: 0,
            passes: 0,
        };
        state.refresh_outcome();
        state
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// Number of moves played, passes excluded.
    pub fn plies(&self) -> usize {
        self.plies
    }

    /// Number of turns passed over the whole game.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Legal moves for the player to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        rules::legal_moves(&self.board, self.current_player)
    }

    /// Play `mv` for the current player and hand the turn over.
    /// Returns the number of flipped pieces.
    pub fn apply_move(&mut self, mv: Move) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let flipped = rules::apply_move(&mut self.board, mv, self.current_player)?;
        self.plies += 1;
        self.current_player = self.current_player.opponent();
        self.refresh_outcome();
        Ok(flipped)
    }

    /// Give up the turn. Only allowed when the current player has no move.
    pub fn pass_turn(&mut self) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if rules::has_legal_move(&self.board, self.current_player) {
            return Err(MoveError::PassWithLegalMoves);
        }

        self.passes += 1;
        self.current_player = self.current_player.opponent();
        self.refresh_outcome();
        Ok(())
    }

    /// The game ends once neither side can move.
    fn refresh_outcome(&mut self) {
        let stuck = !rules::has_legal_move(&self.board, self.current_player)
            && !rules::has_legal_move(&self.board, self.current_player.opponent());
        if stuck {
            self.outcome = Some(GameOutcome::from_score(self.board.score()));
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
