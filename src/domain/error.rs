use std::fmt;

use super::{Cell, Color, Coordinate};

/// Contract violations reported by the board engine.
/// None of these are retryable; the grid is left untouched when one is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// A coordinate falls outside the 8x8 board
    OutOfBounds { row: usize, col: usize },
    /// The group no longer matches the grid (stale selection)
    InvalidGroup {
        at: Coordinate,
        expected: Color,
        found: Cell,
    },
    /// A group was built without any cells
    EmptyGroup,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "coordinate ({row}, {col}) is outside the board")
            }
            BoardError::InvalidGroup { at, expected, found } => match found {
                Cell::Filled(color) => write!(
                    f,
                    "stale group: expected {} at {at}, found {}",
                    expected.name(),
                    color.name()
                ),
                Cell::Empty => write!(
                    f,
                    "stale group: expected {} at {at}, found an empty cell",
                    expected.name()
                ),
            },
            BoardError::EmptyGroup => write!(f, "group has no cells"),
        }
    }
}

impl std::error::Error for BoardError {}
