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

//! Relex Tokenizer Library
//!
//! A generic, regex-driven tokenizer engine. Given source text and an
//! ordered set of token kinds it produces tokens anchored to exact
//! row/column ranges, picking the longest match at every step and keeping
//! equal-length alternatives as an ambiguity chain.
//!
//! # Modules
//!
//! - [`source`] - Source text and the row/column position model
//! - [`lexer`] - Token kinds, tokens, and the scanning engine
//! - [`error`] - Error types and diagnostic rendering
//! - [`langs`] - Ready-made lexers (XML)
//! - [`vocab`] - Vocabulary files
//!
//! # Example
//!
//! ```
//! use relex::lexer::{kinds, GenericLexer, Lexer};
//! use relex::SourceText;
//!
//! let lexer = GenericLexer::new(kinds::builtin());
//! let tokens = lexer.lex(&SourceText::new("f(x) + 1")).unwrap();
//! let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme()).collect();
//! assert_eq!(lexemes, ["f", "(", "x", ")", "+", "1"]);
//! assert_eq!(tokens[0].kind_name(), "Identifier");
//! assert_eq!(tokens[0].alternative().unwrap().kind_name(), "Character");
//! ```

pub mod error;
pub mod langs;
pub mod lexer;
pub mod source;
pub mod vocab;

use std::sync::Once;

// Re-export commonly used types
pub use error::{format_error, render_context, ErrorCode, LexError, Result};
pub use lexer::{tokenize, GenericLexer, Lexer, LexerConfig, Token, TokenKind};
pub use source::{Position, PositionRange, SourceText};

/// The version of the Relex tokenizer.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the tokenizer.
pub const NAME: &str = "Relex";

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for the engine's events.
///
/// Filtering follows `RUST_LOG`; when it is unset, `default_filter` is used.
/// Only the first call has an effect.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    });
}
