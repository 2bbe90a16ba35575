//! Core Othello rules: board representation, player identities, move
//! legality, move application and the game state machine.

mod board;
mod player;
mod rules;
mod state;

pub use board::{Board, Cell, Score, MIN_SIZE, STANDARD_SIZE};
pub use player::Player;
pub use rules::{
    apply_move, count_flips, has_legal_move, is_legal, legal_moves, Move, MoveError, DIRECTIONS,
};
pub use state::{GameOutcome, GameState};
