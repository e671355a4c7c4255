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

//! Line-split source text and the logical character model.
//!
//! A [`SourceText`] is built once from raw text and never mutated. Every
//! line contributes its characters followed by one synthetic line
//! terminator, except the last line, which ends with an explicit
//! end-of-input marker instead.

mod position;

pub use position::{Position, PositionRange};

use std::fmt;

use crate::error::{LexError, Result};

/// The character found at a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalChar {
    /// A real character of the line.
    Char(char),
    /// The implicit terminator at the end of every line but the last.
    LineBreak,
    /// The final position of the final line.
    EndOfInput,
}

impl LogicalChar {
    /// The character this stands for in a lexeme, if any.
    pub fn as_char(self) -> Option<char> {
        match self {
            LogicalChar::Char(c) => Some(c),
            LogicalChar::LineBreak => Some('\n'),
            LogicalChar::EndOfInput => None,
        }
    }

    /// Check if this is the end-of-input marker.
    pub fn is_end_of_input(self) -> bool {
        matches!(self, LogicalChar::EndOfInput)
    }
}

impl fmt::Display for LogicalChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalChar::Char(c) => write!(f, "{:?}", c),
            LogicalChar::LineBreak => f.write_str("line break"),
            LogicalChar::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// One row of the buffer.
#[derive(Debug, Clone)]
struct Line {
    text: String,
    /// Byte offset of every character, followed by `text.len()`.
    boundaries: Vec<usize>,
}

impl Line {
    fn new(text: &str) -> Self {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        boundaries.push(text.len());
        Self {
            text: text.to_string(),
            boundaries,
        }
    }

    fn cols(&self) -> usize {
        self.boundaries.len() - 1
    }

    fn byte_offset(&self, col: usize) -> usize {
        self.boundaries[col]
    }
}

/// Immutable, line-split source text.
#[derive(Debug, Clone)]
pub struct SourceText {
    lines: Vec<Line>,
}

impl SourceText {
    /// Split `text` on `\n` into rows. Empty text yields a single empty row.
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(Line::new).collect(),
        }
    }

    /// Number of rows. Always at least one.
    pub fn rows(&self) -> usize {
        self.lines.len()
    }

    /// Number of characters in `row`, excluding the terminator.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn cols(&self, row: usize) -> usize {
        self.lines[row].cols()
    }

    /// The text of `row` without its terminator.
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|line| line.text.as_str())
    }

    /// Iterate over all rows.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }

    /// Check if `pos` addresses a character, terminator, or end-of-input.
    pub fn valid(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col <= self.cols(pos.row)
    }

    /// The end-of-input position.
    pub fn end(&self) -> Position {
        let row = self.rows() - 1;
        Position::new(row, self.cols(row))
    }

    /// Check if `pos` is the end-of-input position.
    pub fn is_end(&self, pos: Position) -> bool {
        pos == self.end()
    }

    /// The logical character at `pos`.
    pub fn char_at(&self, pos: Position) -> Result<LogicalChar> {
        self.check(pos)?;
        Ok(self.peek(pos))
    }

    pub(crate) fn peek(&self, pos: Position) -> LogicalChar {
        debug_assert!(self.valid(pos), "position {} out of bounds", pos);
        let line = &self.lines[pos.row];
        if pos.col == line.cols() {
            if pos.row == self.rows() - 1 {
                LogicalChar::EndOfInput
            } else {
                LogicalChar::LineBreak
            }
        } else {
            let start = line.byte_offset(pos.col);
            let end = line.byte_offset(pos.col + 1);
            // Boundaries come from char_indices, so the slice holds one char.
            match line.text[start..end].chars().next() {
                Some(c) => LogicalChar::Char(c),
                None => LogicalChar::EndOfInput,
            }
        }
    }

    /// The position right after `pos` in reading order.
    ///
    /// Returns `None` when `pos` is already the end-of-input position. That
    /// is the normal halting signal, not a failure. Positions outside the
    /// source have no successor either.
    pub fn next(&self, pos: Position) -> Option<Position> {
        if self.is_end(pos) || !self.valid(pos) {
            return None;
        }
        if pos.col >= self.cols(pos.row) {
            Some(Position::new(pos.row + 1, 0))
        } else {
            Some(Position::new(pos.row, pos.col + 1))
        }
    }

    /// Apply [`next`](Self::next) `n` times.
    pub fn next_n(&self, pos: Position, n: usize) -> Option<Position> {
        (0..n).try_fold(pos, |pos, _| self.next(pos))
    }

    /// Positions from `start` up to but excluding `end`.
    ///
    /// Without `end` the sequence runs up to and including end-of-input. An
    /// invalid `start` yields nothing.
    pub fn range(&self, start: Position, end: Option<Position>) -> Positions<'_> {
        Positions {
            source: self,
            next: Some(start).filter(|&pos| self.valid(pos)),
            end,
        }
    }

    /// Number of logical characters covered by `range`.
    pub fn len(&self, range: PositionRange) -> usize {
        self.range(range.start(), Some(range.end())).count()
    }

    /// The text covered by `range`. Line terminators appear as `\n`; the
    /// end-of-input marker contributes nothing.
    pub fn substring(&self, range: PositionRange) -> Result<String> {
        self.check(range.start())?;
        self.check(range.end())?;
        Ok(self
            .range(range.start(), Some(range.end()))
            .filter_map(|pos| self.peek(pos).as_char())
            .collect())
    }

    /// The rest of the line from `pos`, excluding the terminator.
    pub fn remainder(&self, pos: Position) -> Result<&str> {
        self.check(pos)?;
        let line = &self.lines[pos.row];
        Ok(&line.text[line.byte_offset(pos.col)..])
    }

    /// Character offset of `pos` into the original text.
    pub fn offset(&self, pos: Position) -> Result<usize> {
        self.check(pos)?;
        let before: usize = self.lines[..pos.row].iter().map(|l| l.cols() + 1).sum();
        Ok(before + pos.col)
    }

    fn check(&self, pos: Position) -> Result<()> {
        if self.valid(pos) {
            Ok(())
        } else {
            Err(LexError::InvalidPosition { position: pos })
        }
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SourceText {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

/// Iterator returned by [`SourceText::range`].
#[derive(Debug, Clone)]
pub struct Positions<'src> {
    source: &'src SourceText,
    next: Option<Position>,
    end: Option<Position>,
}

impl Iterator for Positions<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let pos = self.next?;
        if Some(pos) == self.end {
            self.next = None;
            return None;
        }
        self.next = self.source.next(pos);
        Some(pos)
    }
}

impl std::iter::FusedIterator for Positions<'_> {}
