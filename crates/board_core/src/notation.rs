use std::{fmt, str::FromStr};

use crate::{NotationError, Position};

/// Row digits, top row first. Rows count down from the far side of the board.
pub const ROW_LABELS: [char; 6] = ['6', '5', '4', '3', '2', '1'];
/// Column letters, left to right.
pub const COL_LABELS: [char; 5] = ['a', 'b', 'c', 'd', 'e'];

/// Converts a zero-indexed `(row, col)` pair into its board label, e.g. `(2, 2)` -> `"c4"`.
///
/// Coordinates off the 6x5 board are rejected with
/// [`NotationError::InvalidPosition`] rather than producing a partial label.
pub fn convert_coord_to_notation(row: usize, col: usize) -> Result<String, NotationError> {
    let position = Position::new(row, col).map_err(|err| {
        log::warn!("cannot convert ({row}, {col}) to notation: {err}");
        err
    })?;
    Ok(position.to_notation().to_string())
}

/// The human-readable label of a board cell: one column letter followed by one row digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Notation {
    position: Position,
}

impl Notation {
    pub fn position(self) -> Position {
        self.position
    }

    pub fn file(self) -> char {
        COL_LABELS[self.position.col()]
    }

    pub fn rank(self) -> char {
        ROW_LABELS[self.position.row()]
    }
}

impl From<Position> for Notation {
    fn from(position: Position) -> Self {
        Self { position }
    }
}

impl From<Notation> for Position {
    fn from(notation: Notation) -> Self {
        notation.position
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for Notation {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_notation(s).map(Notation::from)
    }
}
