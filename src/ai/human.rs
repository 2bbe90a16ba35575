use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::error::InputError;
use crate::game::{legal_moves, Board, Move, Player};

use super::agent::Agent;

/// Parse a `"row col"` / `"row,col"` entry and check it against the legal set.
///
/// Pure: no console I/O, so the prompt loop and the TUI can share it.
pub fn parse_and_validate(raw: &str, board: &Board, legal: &[Move]) -> Result<Move, InputError> {
    let malformed = || InputError::Malformed(raw.trim().to_string());

    let parts: Vec<&str> = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        return Err(malformed());
    };
    let row: i64 = row.parse().map_err(|_| malformed())?;
    let col: i64 = col.parse().map_err(|_| malformed())?;

    let on_board = isize::try_from(row)
        .ok()
        .zip(isize::try_from(col).ok())
        .is_some_and(|(r, c)| board.in_bounds(r, c));
    if !on_board {
        return Err(InputError::OutOfBounds { row, col });
    }

    let mv = Move::new(row as usize, col as usize);
    if legal.contains(&mv) {
        Ok(mv)
    } else {
        Err(InputError::NotLegal {
            row: mv.row,
            col: mv.col,
        })
    }
}

/// A human player typing moves on a line-oriented console.
///
/// Invalid entries are reported and re-prompted. With no legal move the agent
/// passes without prompting. EOF or a read error yields `None`, which the
/// arena reports as a failure to move.
pub struct ConsoleAgent<R, W> {
    input: R,
    output: W,
}

impl ConsoleAgent<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        ConsoleAgent {
            input: BufReader::new(io::stdin()),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> ConsoleAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsoleAgent { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, player: Player, board: &Board, legal: &[Move]) -> io::Result<Option<Move>> {
        let mut line = String::new();
        loop {
            write!(self.output, "{player} to move. Select a row and column: ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match parse_and_validate(&line, board, legal) {
                Ok(mv) => return Ok(Some(mv)),
                Err(e) => writeln!(self.output, "Invalid: {e}")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Agent for ConsoleAgent<R, W> {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        let legal = legal_moves(board, player);
        if legal.is_empty() {
            if let Err(e) = writeln!(self.output, "No valid moves available for {player}, passing") {
                tracing::warn!(error = %e, "console output failed");
            }
            return None;
        }

        match self.prompt(player, board, &legal) {
            Ok(mv) => mv,
            Err(e) => {
                tracing::warn!(error = %e, "console input failed");
                None
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}
