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

//! Lexer configuration.

/// Characters skipped between tokens by default.
pub const DEFAULT_WHITESPACE: [char; 3] = [' ', '\t', '\n'];

/// Settings shared by every session a lexer runs.
///
/// The line terminator is seen as `'\n'`, so including it in the whitespace
/// set lets tokens be separated by line breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerConfig {
    whitespace: Vec<char>,
}

impl LexerConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whitespace set.
    pub fn with_whitespace(mut self, whitespace: impl IntoIterator<Item = char>) -> Self {
        self.whitespace.clear();
        for c in whitespace {
            if !self.whitespace.contains(&c) {
                self.whitespace.push(c);
            }
        }
        self
    }

    /// The whitespace set.
    pub fn whitespace(&self) -> &[char] {
        &self.whitespace
    }

    /// Check if `c` is skipped between tokens.
    pub fn is_whitespace(&self, c: char) -> bool {
        self.whitespace.contains(&c)
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            whitespace: DEFAULT_WHITESPACE.to_vec(),
        }
    }
}
