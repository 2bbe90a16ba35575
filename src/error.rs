use std::path::PathBuf;

use crate::game::{Move, MoveError, Player};

/// Errors that can occur when building a board from dimensions or a diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must be at least 2x2, got {width}x{height}")]
    TooSmall { width: usize, height: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell symbol '{0}'")]
    UnknownCell(char),

    #[error("board diagram has no rows")]
    Empty,
}

/// Errors produced while reading a human move. All of them are recoverable:
/// the caller prints the message and prompts again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("enter a row and a column as two integers, got '{0}'")]
    Malformed(String),

    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: i64, col: i64 },

    #[error("({row}, {col}) is not a legal move")]
    NotLegal { row: usize, col: usize },
}

/// Errors that abort a game in the arena.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("{agent} selected illegal move {mv} (legal: {legal:?})")]
    IllegalMove {
        agent: String,
        mv: Move,
        legal: Vec<Move>,
    },

    #[error("{agent} did not choose a move for {player} although {available} were legal")]
    NoMoveSelected {
        agent: String,
        player: Player,
        available: usize,
    },

    #[error("game should be terminal but has no outcome")]
    MissingOutcome,

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::TooSmall {
            width: 1,
            height: 8,
        };
        assert_eq!(err.to_string(), "board must be at least 2x2, got 1x8");
    }

    #[test]
    fn test_input_error_display() {
        let err = InputError::NotLegal { row: 0, col: 0 };
        assert_eq!(err.to_string(), "(0, 0) is not a legal move");
    }

    #[test]
    fn test_match_error_display() {
        let err = MatchError::IllegalMove {
            agent: "Random".to_string(),
            mv: Move::new(0, 0),
            legal: vec![Move::new(2, 3)],
        };
        assert_eq!(
            err.to_string(),
            "Random selected illegal move (0, 0) (legal: [Move { row: 2, col: 3 }])"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("arena.games must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: arena.games must be > 0"
        );
    }
}
