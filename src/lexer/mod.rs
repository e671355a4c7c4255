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

//! The tokenizer engine.
//!
//! A lexing session walks a [`SourceText`] with a cursor. At every step it
//! tries an ordered list of [`TokenKind`]s against the rest of the current
//! line and keeps the longest match. When several kinds match the same
//! maximal length, the one declared last becomes the token and the others
//! hang off it as an ambiguity chain, most recently declared first.
//!
//! Which kinds are tried is decided by a [`CandidateRule`]. A fixed list is
//! enough for most vocabularies ([`GenericLexer`]); mode-sensitive lexers
//! such as [`crate::langs::xml::XmlLexer`] switch lists based on the tokens
//! they have seen.

mod config;
pub mod kinds;
mod tokens;

pub use config::{LexerConfig, DEFAULT_WHITESPACE};
pub use tokens::{Alternatives, KindSpec, Token, TokenKind};

use tracing::{debug, trace};

use crate::error::{LexError, Result};
use crate::source::{Position, PositionRange, SourceText};

/// Chooses the token kinds to try at each step of a session.
pub trait CandidateRule {
    /// Kinds to try next, in tie-break order.
    fn candidates(&self) -> &[TokenKind];

    /// Called with every emitted token before the next step.
    fn observe(&mut self, _token: &Token) {}
}

/// A vocabulary plus the rule that selects from it.
pub trait Lexer {
    /// Per-session rule state.
    type Rule<'a>: CandidateRule
    where
        Self: 'a;

    /// Start a fresh rule for a new session.
    fn rule(&self) -> Self::Rule<'_>;

    /// Session settings.
    fn config(&self) -> &LexerConfig;

    /// Lazily tokenize `source`. The stream ends after the first error.
    fn tokens<'a>(&'a self, source: &'a SourceText) -> Tokens<'a, Self::Rule<'a>> {
        Tokens::new(Session::new(source, self.config()), self.rule())
    }

    /// Tokenize all of `source`.
    fn lex(&self, source: &SourceText) -> Result<Vec<Token>> {
        self.tokens(source).collect()
    }
}

/// Cursor state of one lexing session.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    source: &'a SourceText,
    config: &'a LexerConfig,
    pos: Position,
}

impl<'a> Session<'a> {
    /// Start a session at the beginning of `source`.
    pub fn new(source: &'a SourceText, config: &'a LexerConfig) -> Self {
        Self {
            source,
            config,
            pos: Position::start(),
        }
    }

    /// The cursor.
    pub fn position(&self) -> Position {
        self.pos
    }

    /// The text being tokenized.
    pub fn source(&self) -> &'a SourceText {
        self.source
    }

    /// Check if the cursor reached end-of-input.
    pub fn is_at_end(&self) -> bool {
        self.source.is_end(self.pos)
    }

    /// Advance past consecutive whitespace.
    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.source.peek(self.pos).as_char() {
            if !self.config.is_whitespace(c) {
                break;
            }
            match self.source.next(self.pos) {
                Some(next) => self.pos = next,
                None => break,
            }
        }
    }

    /// Match one token at the cursor, then skip trailing whitespace.
    ///
    /// Fails with [`LexError::NoViableToken`] at the cursor if no kind in
    /// `kinds` matches a non-empty prefix.
    pub fn parse_token(&mut self, kinds: &[TokenKind]) -> Result<Token> {
        let start = self.pos;
        let rest = self.source.remainder(start)?;

        let matches: Vec<(&TokenKind, usize)> = kinds
            .iter()
            .filter_map(|kind| kind.match_len(rest).map(|len| (kind, len)))
            .inspect(|(kind, len)| {
                trace!(kind = kind.name(), len, position = %start, "candidate matched")
            })
            .collect();

        let Some(longest) = matches.iter().map(|&(_, len)| len).max() else {
            debug!(position = %start, "no viable token");
            return Err(LexError::no_viable_token(self.source, start));
        };

        let end = self
            .source
            .next_n(start, longest)
            .ok_or(LexError::InvalidPosition { position: start })?;
        let range = PositionRange::new(start, end)?;

        let mut token: Option<Token> = None;
        for (kind, _) in matches.into_iter().filter(|&(_, len)| len == longest) {
            let candidate = Token::new(kind.clone(), self.source, range)?;
            token = Some(match token {
                Some(previous) => candidate.with_alternative(previous),
                None => candidate,
            });
        }
        let token = token.ok_or_else(|| LexError::no_viable_token(self.source, start))?;

        if token.alternative().is_some() {
            debug!(
                kind = token.kind_name(),
                alternatives = token.alternatives().count(),
                range = %range,
                "ambiguous match"
            );
        }
        trace!(kind = token.kind_name(), lexeme = token.lexeme(), range = %range, "token");

        self.pos = end;
        self.skip_whitespace();
        Ok(token)
    }
}

/// Lazy token stream of one session.
///
/// Yields `Ok` tokens until end-of-input, or a single `Err` after which it
/// is exhausted.
#[derive(Debug)]
pub struct Tokens<'a, R> {
    session: Session<'a>,
    rule: R,
    done: bool,
}

impl<'a, R: CandidateRule> Tokens<'a, R> {
    /// Start streaming; leading whitespace is skipped immediately.
    pub fn new(mut session: Session<'a>, rule: R) -> Self {
        session.skip_whitespace();
        Self {
            session,
            rule,
            done: false,
        }
    }

    /// The session cursor.
    pub fn position(&self) -> Position {
        self.session.position()
    }
}

impl<R: CandidateRule> Iterator for Tokens<'_, R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.session.is_at_end() {
            self.done = true;
            return None;
        }

        match self.session.parse_token(self.rule.candidates()) {
            Ok(token) => {
                self.rule.observe(&token);
                Some(Ok(token))
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

impl<R: CandidateRule> std::iter::FusedIterator for Tokens<'_, R> {}

/// A rule that always offers the same kinds.
#[derive(Debug, Clone, Copy)]
pub struct FixedKinds<'a>(pub &'a [TokenKind]);

impl CandidateRule for FixedKinds<'_> {
    fn candidates(&self) -> &[TokenKind] {
        self.0
    }
}

/// A lexer with one fixed list of kinds.
#[derive(Debug, Clone, Default)]
pub struct GenericLexer {
    kinds: Vec<TokenKind>,
    config: LexerConfig,
}

impl GenericLexer {
    /// Create a lexer trying `kinds` in order.
    pub fn new(kinds: Vec<TokenKind>) -> Self {
        Self {
            kinds,
            config: LexerConfig::default(),
        }
    }

    /// Compile `specs` into a lexer.
    pub fn from_specs(specs: &[KindSpec]) -> Result<Self> {
        let kinds = specs.iter().map(KindSpec::compile).collect::<Result<_>>()?;
        Ok(Self::new(kinds))
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: LexerConfig) -> Self {
        self.config = config;
        self
    }

    /// The vocabulary.
    pub fn kinds(&self) -> &[TokenKind] {
        &self.kinds
    }
}

impl Lexer for GenericLexer {
    type Rule<'a> = FixedKinds<'a>;

    fn rule(&self) -> FixedKinds<'_> {
        FixedKinds(&self.kinds)
    }

    fn config(&self) -> &LexerConfig {
        &self.config
    }
}

/// Tokenize source code with a fixed list of kinds.
pub fn tokenize(source: &str, kinds: &[TokenKind]) -> Result<Vec<Token>> {
    let source = SourceText::new(source);
    let config = LexerConfig::default();
    Tokens::new(Session::new(&source, &config), FixedKinds(kinds)).collect()
}
