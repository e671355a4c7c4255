// Relex - A regex-driven tokenizer engine
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Row/column coordinates into a line-split source buffer.

use std::fmt;

use crate::error::{LexError, Result};

/// A zero-based row/column coordinate.
///
/// Columns count characters, not bytes. A column equal to the length of its
/// line addresses the implicit line terminator, or end-of-input on the last
/// line. Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column in characters.
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The position of the first character of any source.
    pub const fn start() -> Self {
        Self { row: 0, col: 0 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} col {}", self.row + 1, self.col + 1)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A half-open span `[start, end)` over the logical character stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionRange {
    start: Position,
    end: Position,
}

impl PositionRange {
    /// Create a range, rejecting `start > end`.
    pub fn new(start: Position, end: Position) -> Result<Self> {
        if start > end {
            return Err(LexError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// An empty range at `pos`.
    pub fn empty(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Inclusive start.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Exclusive end.
    pub fn end(&self) -> Position {
        self.end
    }

    /// Check if the range covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if `pos` lies within `[start, end)`.
    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos < self.end
    }
}

impl fmt::Display for PositionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start.row + 1,
            self.start.col + 1,
            self.end.row + 1,
            self.end.col + 1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_position_ordering_is_row_major() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
        assert_eq!(Position::new(4, 4), Position::from((4, 4)));
    }

    #[test]
    fn test_position_display_is_one_based() {
        assert_eq!(Position::new(0, 0).to_string(), "row 1 col 1");
        assert_eq!(Position::new(2, 7).to_string(), "row 3 col 8");
    }

    #[test]
    fn test_range_rejects_reversed_bounds() {
        let err = PositionRange::new(Position::new(1, 0), Position::new(0, 5)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidRange);
    }

    #[test]
    fn test_range_accessors() {
        let range = PositionRange::new(Position::new(0, 1), Position::new(0, 4)).unwrap();
        assert_eq!(range.start(), Position::new(0, 1));
        assert_eq!(range.end(), Position::new(0, 4));
        assert!(!range.is_empty());
        assert!(range.contains(Position::new(0, 3)));
        assert!(!range.contains(Position::new(0, 4)));
        assert_eq!(range.to_string(), "1:2-1:5");
    }

    #[test]
    fn test_empty_range() {
        let range = PositionRange::empty(Position::new(3, 2));
        assert!(range.is_empty());
        assert!(!range.contains(Position::new(3, 2)));
    }
}
