//! Board cells as a closed enumeration.

use serde::{Deserialize, Serialize};

/// A cell on the tic-tac-toe board.
///
/// Cell indices are row-major: 0-2 top row, 3-5 middle, 6-8 bottom.
/// Any integer coming from the outside goes through [`Position::from_index`],
/// so an out-of-range cell can never reach the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (cell 0)
    TopLeft,
    /// Top-center (cell 1)
    TopCenter,
    /// Top-right (cell 2)
    TopRight,
    /// Middle-left (cell 3)
    MiddleLeft,
    /// Center (cell 4)
    Center,
    /// Middle-right (cell 5)
    MiddleRight,
    /// Bottom-left (cell 6)
    BottomLeft,
    /// Bottom-center (cell 7)
    BottomCenter,
    /// Bottom-right (cell 8)
    BottomRight,
}

impl Position {
    /// Human-readable cell name.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts the position to its cell index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a cell index, `None` outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// Row of the cell, 0 at the top.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of the cell, 0 at the left.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates a position from row and column (each 0-2).
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_matches_declaration_order() {
        for (index, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::from_index(usize::MAX), None);
    }

    #[test]
    fn test_row_col() {
        assert_eq!(Position::MiddleRight.row(), 1);
        assert_eq!(Position::MiddleRight.col(), 2);
        assert_eq!(Position::from_row_col(2, 0), Some(Position::BottomLeft));
        assert_eq!(Position::from_row_col(3, 0), None);
        assert_eq!(Position::from_row_col(0, 3), None);
    }
}
