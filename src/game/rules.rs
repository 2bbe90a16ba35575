use std::fmt;

use super::{Board, Cell, Player};

/// The eight compass offsets as `(row, col)` deltas.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A placement at a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Move { row, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("{player} cannot play at ({row}, {col})")]
    IllegalMove { row: usize, col: usize, player: Player },

    #[error("the game is over")]
    GameOver,

    #[error("cannot pass while legal moves remain")]
    PassWithLegalMoves,
}

/// Length of the opponent run starting next to `mv` in direction `(dr, dc)`
/// that is closed off by one of `player`'s pieces. Zero when the run is empty
/// or hits an empty cell or the edge first.
fn captured_run(board: &Board, mv: Move, (dr, dc): (isize, isize), player: Player) -> usize {
    let own = player.to_cell();
    let opponent = player.opponent().to_cell();

    let mut r = mv.row as isize + dr;
    let mut c = mv.col as isize + dc;
    let mut run = 0;

    while board.in_bounds(r, c) && board.cell_at(r as usize, c as usize) == opponent {
        run += 1;
        r += dr;
        c += dc;
    }

    if run > 0 && board.in_bounds(r, c) && board.cell_at(r as usize, c as usize) == own {
        run
    } else {
        0
    }
}

fn is_open(board: &Board, mv: Move) -> bool {
    board.in_bounds(mv.row as isize, mv.col as isize)
        && board.cell_at(mv.row, mv.col) == Cell::Empty
}

/// Whether `player` may place a piece at `mv`: the cell is on the board,
/// empty, and closes at least one opponent run in some direction.
pub fn is_legal(board: &Board, mv: Move, player: Player) -> bool {
    is_open(board, mv)
        && DIRECTIONS
            .iter()
            .any(|&dir| captured_run(board, mv, dir, player) > 0)
}

/// All legal moves for `player`, in row-major order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for row in 0..board.height() {
        for col in 0..board.width() {
            let mv = Move::new(row, col);
            if is_legal(board, mv, player) {
                moves.push(mv);
            }
        }
    }
    moves
}

/// Whether `player` has any legal move at all.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    (0..board.height())
        .any(|row| (0..board.width()).any(|col| is_legal(board, Move::new(row, col), player)))
}

/// Number of opponent pieces that playing `mv` would flip, summed over all
/// directions. Does not touch the board.
pub fn count_flips(board: &Board, mv: Move, player: Player) -> usize {
    if !is_open(board, mv) {
        return 0;
    }
    DIRECTIONS
        .iter()
        .map(|&dir| captured_run(board, mv, dir, player))
        .sum()
}

/// Place a piece for `player` at `mv` and flip every captured run.
///
/// Each direction is resolved independently, so a single move can flip
/// several lines at once. Returns the number of flipped pieces. An illegal
/// move is rejected and leaves the board unchanged.
pub fn apply_move(board: &mut Board, mv: Move, player: Player) -> Result<usize, MoveError> {
    if !is_open(board, mv) {
        return Err(MoveError::IllegalMove {
            row: mv.row,
            col: mv.col,
            player,
        });
    }

    let runs = DIRECTIONS.map(|dir| (dir, captured_run(board, mv, dir, player)));
    let flipped: usize = runs.iter().map(|&(_, run)| run).sum();
    if flipped == 0 {
        return Err(MoveError::IllegalMove {
            row: mv.row,
            col: mv.col,
            player,
        });
    }

    let own = player.to_cell();
    board.set(mv.row, mv.col, own);
    for ((dr, dc), run) in runs {
        for step in 1..=run as isize {
            let r = (mv.row as isize + dr * step) as usize;
            let c = (mv.col as isize + dc * step) as usize;
            board.set(r, c, own);
        }
    }

    Ok(flipped)
}
