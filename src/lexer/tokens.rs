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

//! Token kinds and the tokens they produce.

use std::fmt;
use std::sync::Arc;

use regex_automata::meta::Regex;
use regex_automata::{Anchored, Input};

use crate::error::{LexError, Result};
use crate::source::{PositionRange, SourceText};

/// A named matching rule.
///
/// The pattern is tested against the remainder of the current line only,
/// anchored at the cursor, so a match never spans a line break. Cloning is
/// cheap; clones share the compiled pattern.
#[derive(Clone)]
pub struct TokenKind {
    inner: Arc<KindInner>,
}

struct KindInner {
    name: String,
    pattern: String,
    regex: Regex,
}

impl TokenKind {
    /// Declare a token kind, compiling its pattern.
    ///
    /// Fails with [`LexError::InvalidPattern`] if `pattern` is malformed.
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self> {
        let name = name.into();
        let regex = match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(source) => {
                return Err(LexError::InvalidPattern {
                    name,
                    pattern: pattern.to_string(),
                    line: None,
                    source,
                })
            }
        };

        Ok(Self {
            inner: Arc::new(KindInner {
                name,
                pattern: pattern.to_string(),
                regex,
            }),
        })
    }

    /// The kind's name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The pattern as declared.
    pub fn pattern(&self) -> &str {
        &self.inner.pattern
    }

    /// Length in characters of the match at the start of `rest`.
    ///
    /// Empty matches count as no match.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        let input = Input::new(rest).anchored(Anchored::Yes);
        self.inner
            .regex
            .find(input)
            .map(|m| rest[..m.end()].chars().count())
            .filter(|&len| len > 0)
    }
}

impl PartialEq for TokenKind {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.name == other.inner.name && self.inner.pattern == other.inner.pattern)
    }
}

impl Eq for TokenKind {}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenKind")
            .field("name", &self.inner.name)
            .field("pattern", &self.inner.pattern)
            .finish()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.name)
    }
}

/// A static token kind definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSpec {
    pub name: &'static str,
    pub pattern: &'static str,
}

impl KindSpec {
    /// Create a definition.
    pub const fn new(name: &'static str, pattern: &'static str) -> Self {
        Self { name, pattern }
    }

    /// Compile into a [`TokenKind`].
    pub fn compile(&self) -> Result<TokenKind> {
        TokenKind::new(self.name, self.pattern)
    }
}

/// A recognized piece of source text.
///
/// `alternative` links to the next-ranked interpretation of the same range
/// under a different kind. The chain is owned by the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    range: PositionRange,
    lexeme: String,
    alternative: Option<Box<Token>>,
}

impl Token {
    /// Create a token, materializing its lexeme from `source`.
    pub fn new(kind: TokenKind, source: &SourceText, range: PositionRange) -> Result<Self> {
        let lexeme = source.substring(range)?;
        Ok(Self {
            kind,
            range,
            lexeme,
            alternative: None,
        })
    }

    /// Attach `alternative` as the next interpretation of this token.
    pub(crate) fn with_alternative(mut self, alternative: Token) -> Self {
        self.alternative = Some(Box::new(alternative));
        self
    }

    /// The kind that produced this token.
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Shorthand for `self.kind().name()`.
    pub fn kind_name(&self) -> &str {
        self.kind.name()
    }

    /// The covered range.
    pub fn range(&self) -> PositionRange {
        self.range
    }

    /// The exact source text of the range.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Lexeme length in characters.
    pub fn len(&self) -> usize {
        self.lexeme.chars().count()
    }

    /// Check if the lexeme is empty.
    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }

    /// The next-ranked interpretation, if the match was ambiguous.
    pub fn alternative(&self) -> Option<&Token> {
        self.alternative.as_deref()
    }

    /// Walk the chain after this token.
    pub fn alternatives(&self) -> Alternatives<'_> {
        Alternatives {
            next: self.alternative(),
        }
    }

    /// This token followed by its alternatives.
    pub fn interpretations(&self) -> Alternatives<'_> {
        Alternatives { next: Some(self) }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) @ {}", self.kind.name(), self.lexeme, self.range)
    }
}

/// Iterator over an ambiguity chain.
#[derive(Debug, Clone)]
pub struct Alternatives<'t> {
    next: Option<&'t Token>,
}

impl<'t> Iterator for Alternatives<'t> {
    type Item = &'t Token;

    fn next(&mut self) -> Option<&'t Token> {
        let current = self.next?;
        self.next = current.alternative();
        Some(current)
    }
}
