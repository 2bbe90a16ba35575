use std::fmt;

use crate::error::BoardError;

use super::Player;

/// Side length of a standard Othello board.
pub const STANDARD_SIZE: usize = 8;

/// Smallest board that still has room for the four starting pieces.
pub const MIN_SIZE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Light,
    Dark,
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Light => Some(Player::Light),
            Cell::Dark => Some(Player::Dark),
        }
    }
}

/// Piece counts per player. Always derived from the board, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Score {
    pub light: usize,
    pub dark: usize,
}

impl Score {
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::Light => self.light,
            Player::Dark => self.dark,
        }
    }

    pub fn total(&self) -> usize {
        self.light + self.dark
    }
}

/// Rectangular grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given size.
    pub fn empty(width: usize, height: usize) -> Result<Self, BoardError> {
        if width < MIN_SIZE || height < MIN_SIZE {
            return Err(BoardError::TooSmall { width, height });
        }
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    /// Create a board with the four starting pieces in the center.
    /// Light holds one diagonal, Dark the other.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let mut board = Self::empty(width, height)?;
        let (cr, cc) = (height / 2, width / 2);
        board.set(cr - 1, cc - 1, Cell::Light);
        board.set(cr, cc, Cell::Light);
        board.set(cr - 1, cc, Cell::Dark);
        board.set(cr, cc - 1, Cell::Dark);
        Ok(board)
    }

    /// The standard 8x8 opening position.
    pub fn standard() -> Self {
        let size = STANDARD_SIZE;
        let mut cells = vec![Cell::Empty; size * size];
        let c = size / 2;
        cells[(c - 1) * size + (c - 1)] = Cell::Light;
        cells[c * size + c] = Cell::Light;
        cells[(c - 1) * size + c] = Cell::Dark;
        cells[c * size + (c - 1)] = Cell::Dark;
        Board {
            width: size,
            height: size,
            cells,
        }
    }

    /// Build a board from a diagram, one string per row.
    /// `.` is empty, `L`/`O` is Light, `D`/`X` is Dark. Spaces are ignored.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let first = rows.first().ok_or(BoardError::Empty)?;
        let width = first.chars().filter(|c| !c.is_whitespace()).count();
        let mut board = Self::empty(width, rows.len())?;

        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != width {
                return Err(BoardError::RaggedRows {
                    row,
                    expected: width,
                    found: symbols.len(),
                });
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                let cell = match symbol {
                    '.' => Cell::Empty,
                    'L' | 'O' => Cell::Light,
                    'D' | 'X' => Cell::Dark,
                    other => return Err(BoardError::UnknownCell(other)),
                };
                board.set(row, col, cell);
            }
        }

        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether a signed coordinate lies on the board.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Get the cell at a position. Panics when out of bounds.
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) is outside the {}x{} board",
            self.width,
            self.height
        );
        self.cells[row * self.width + col]
    }

    /// Write a cell. Only setup and the move applier write cells.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.width + col] = cell;
    }

    /// Tally pieces per player.
    pub fn score(&self) -> Score {
        self.cells
            .iter()
            .fold(Score::default(), |mut score, cell| {
                match cell {
                    Cell::Light => score.light += 1,
                    Cell::Dark => score.dark += 1,
                    Cell::Empty => {}
                }
                score
            })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Iterate over `(row, col, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / width, i % width, cell))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

const LIGHT_TOKEN: char = '\u{25CB}';
const DARK_TOKEN: char = '\u{25CF}';

impl fmt::Display for Board {
    /// Text rendering with column indexes on top and row indexes on the left.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = format!("  +{}", "-+".repeat(self.width));

        write!(f, "   ")?;
        for col in 0..self.width {
            // single-digit labels keep the columns aligned on wide boards
            write!(f, "{}", col % 10)?;
            if col + 1 < self.width {
                write!(f, " ")?;
            }
        }
        writeln!(f)?;
        writeln!(f, "{rule}")?;

        for row in 0..self.height {
            write!(f, "{:<2}|", row)?;
            for col in 0..self.width {
                let token = match self.cell_at(row, col) {
                    Cell::Empty => ' ',
                    Cell::Light => LIGHT_TOKEN,
                    Cell::Dark => DARK_TOKEN,
                };
                write!(f, "{token}|")?;
            }
            writeln!(f)?;
            if row + 1 < self.height {
                writeln!(f, "{rule}")?;
            }
        }
        write!(f, "{rule}")
    }
}
