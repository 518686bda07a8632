use std::fmt;

use crate::{
    notation::{Notation, COL_LABELS, ROW_LABELS},
    NotationError,
};

pub const BOARD_ROWS: usize = 6;
pub const BOARD_COLS: usize = 5;

/// A cell on the 6x5 board, zero-indexed from the top-left corner.
///
/// Row 0 is the top row (labelled `6`), column 0 is the leftmost column
/// (labelled `a`). A `Position` can only be built through [`Position::new`]
/// or [`Position::from_notation`], so every value is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Result<Self, NotationError> {
        if row < BOARD_ROWS && col < BOARD_COLS {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(NotationError::InvalidPosition { row, col })
        }
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    pub fn to_notation(self) -> Notation {
        Notation::from(self)
    }

    /// Parses a label such as `"c4"` back into the cell it names.
    pub fn from_notation(notation: &str) -> Result<Self, NotationError> {
        let mut chars = notation.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => {
                log::debug!("rejecting notation {notation:?}: expected two characters");
                return Err(NotationError::InvalidNotation(notation.to_string()));
            }
        };

        let col = COL_LABELS.iter().position(|&c| c == file);
        let row = ROW_LABELS.iter().position(|&r| r == rank);

        match (row, col) {
            (Some(row), Some(col)) => Self::new(row, col),
            _ => {
                log::debug!("rejecting notation {notation:?}: not on the board");
                Err(NotationError::InvalidNotation(notation.to_string()))
            }
        }
    }

    /// Every cell on the board in row-major order, top row first.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_ROWS as u8)
            .flat_map(|row| (0..BOARD_COLS as u8).map(move |col| Position { row, col }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
