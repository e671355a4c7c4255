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

//! Error types for the Relex tokenizer.
//!
//! This module defines the failures the engine can report and the
//! renderers that turn them into human-readable text. Rendering is kept
//! separate from the error values: nothing in the engine inspects the
//! rendered output.

use std::fmt::Write as _;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::source::{Position, SourceText};

/// Rows of context shown on each side of a failing row.
pub const CONTEXT_ROWS: usize = 3;

/// Error codes for the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidPattern,
    NoViableToken,
    InvalidRange,
    InvalidPosition,
    InvalidVocabulary,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorCode {
    /// Get the numeric code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidPattern => "E001",
            ErrorCode::NoViableToken => "E002",
            ErrorCode::InvalidRange => "E003",
            ErrorCode::InvalidPosition => "E004",
            ErrorCode::InvalidVocabulary => "E010",
        }
    }
}

/// A tokenizer failure.
#[derive(Debug, Error)]
pub enum LexError {
    /// A token kind's pattern failed to compile.
    #[error("[{}] invalid pattern for token kind '{name}': {source}", ErrorCode::InvalidPattern)]
    InvalidPattern {
        name: String,
        pattern: String,
        /// 1-based vocabulary file line the kind was declared on.
        line: Option<usize>,
        #[source]
        source: regex_automata::meta::BuildError,
    },

    /// No applicable token kind matched at `position`.
    #[error("[{}] could not parse token at {position}", ErrorCode::NoViableToken)]
    NoViableToken {
        position: Position,
        /// Source window around `position`, see [`render_context`].
        context: String,
    },

    /// A range was built with its start after its end.
    #[error("[{}] range start ({start}) is after end ({end})", ErrorCode::InvalidRange)]
    InvalidRange { start: Position, end: Position },

    /// A position outside the source buffer.
    #[error("[{}] position {position} is outside the source", ErrorCode::InvalidPosition)]
    InvalidPosition { position: Position },

    /// A vocabulary file could not be read.
    #[error("[{}] invalid vocabulary at line {line}: {message}", ErrorCode::InvalidVocabulary)]
    InvalidVocabulary { line: usize, message: String },
}

impl LexError {
    /// Build a [`LexError::NoViableToken`] with its context already rendered.
    pub fn no_viable_token(source: &SourceText, position: Position) -> Self {
        Self::NoViableToken {
            position,
            context: render_context(source, position),
        }
    }

    /// Attach the vocabulary file line a pattern was declared on.
    pub fn at_line(self, at: usize) -> Self {
        match self {
            LexError::InvalidPattern {
                name,
                pattern,
                source,
                ..
            } => LexError::InvalidPattern {
                name,
                pattern,
                line: Some(at),
                source,
            },
            other => other,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::InvalidPattern { .. } => ErrorCode::InvalidPattern,
            LexError::NoViableToken { .. } => ErrorCode::NoViableToken,
            LexError::InvalidRange { .. } => ErrorCode::InvalidRange,
            LexError::InvalidPosition { .. } => ErrorCode::InvalidPosition,
            LexError::InvalidVocabulary { .. } => ErrorCode::InvalidVocabulary,
        }
    }

    /// Get the error code string.
    pub fn code_str(&self) -> &'static str {
        self.code().code()
    }

    /// The message without the code prefix.
    pub fn message(&self) -> String {
        match self {
            LexError::InvalidPattern { name, source, .. } => {
                format!("invalid pattern for token kind '{}': {}", name, source)
            }
            LexError::NoViableToken { position, .. } => {
                format!("could not parse token at {}", position)
            }
            LexError::InvalidRange { start, end } => {
                format!("range start ({}) is after end ({})", start, end)
            }
            LexError::InvalidPosition { position } => {
                format!("position {} is outside the source", position)
            }
            LexError::InvalidVocabulary { line, message } => {
                format!("invalid vocabulary at line {}: {}", line, message)
            }
        }
    }

    /// The source position the error points at, if it has one.
    pub fn position(&self) -> Option<Position> {
        match self {
            LexError::NoViableToken { position, .. } => Some(*position),
            LexError::InvalidPosition { position } => Some(*position),
            LexError::InvalidRange { start, .. } => Some(*start),
            LexError::InvalidVocabulary { line, .. }
            | LexError::InvalidPattern {
                line: Some(line), ..
            } => Some(Position::new(line.saturating_sub(1), 0)),
            LexError::InvalidPattern { line: None, .. } => None,
        }
    }

    /// Short description of what sits at [`position`](Self::position).
    pub fn label(&self) -> &'static str {
        match self {
            LexError::NoViableToken { .. } => "no token kind matches here",
            LexError::InvalidPattern { .. } => "pattern declared here",
            LexError::InvalidRange { .. } => "range starts here",
            LexError::InvalidPosition { .. } => "position outside the source",
            LexError::InvalidVocabulary { .. } => "malformed definition",
        }
    }

    /// Optional hint for fixing the error.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            LexError::NoViableToken { .. } => {
                Some("every character must be claimed by a token kind or be whitespace")
            }
            LexError::InvalidVocabulary { .. } => {
                Some(r#"definitions look like: Name = r"pattern""#)
            }
            _ => None,
        }
    }
}

/// Result type for tokenizer operations.
pub type Result<T> = std::result::Result<T, LexError>;

/// Render the rows around `position` with a caret under its column.
///
/// Up to [`CONTEXT_ROWS`] rows before and after the failing row are shown,
/// clamped to the buffer. Each row is prefixed with its right-aligned
/// 1-based number.
pub fn render_context(source: &SourceText, position: Position) -> String {
    let last = source.rows().saturating_sub(1);
    let row = position.row.min(last);
    let first = row.saturating_sub(CONTEXT_ROWS);
    let until = (row + CONTEXT_ROWS).min(last);

    let width = (until + 1).to_string().len();
    let mut output = String::new();

    for current in first..=until {
        let text = source.line(current).unwrap_or_default();
        let _ = writeln!(output, "  {:>width$} {}", current + 1, text, width = width);
        if current == row {
            let _ = writeln!(
                output,
                "  {:width$} {:col$}^",
                "",
                "",
                width = width,
                col = position.col
            );
        }
    }

    output
}

/// Format an error with source context.
pub fn format_error(error: &LexError, source: &SourceText, filename: Option<&str>) -> String {
    let filename = filename.unwrap_or("<input>");
    let mut output = String::new();

    let _ = writeln!(output, "error[{}]: {}", error.code_str(), error.message());

    if let Some(position) = error.position() {
        let _ = writeln!(
            output,
            "  --> {}:{}:{}",
            filename,
            position.row + 1,
            position.col + 1
        );
        match error {
            LexError::NoViableToken { context, .. } => output.push_str(context),
            _ => output.push_str(&render_context(source, position)),
        }
    }

    if let Some(hint) = error.hint() {
        let _ = writeln!(output, "  = hint: {}", hint);
    }

    output
}

/// Format an error as an `ariadne` report.
pub fn format_report(error: &LexError, source: &SourceText, color: bool) -> String {
    let text = source.lines().collect::<Vec<_>>().join("\n");
    let offset = error
        .position()
        .and_then(|position| source.offset(position).ok())
        .unwrap_or(0);

    let mut report = Report::build(ReportKind::Error, (), offset)
        .with_code(error.code_str())
        .with_message(error.message())
        .with_config(Config::default().with_color(color));

    if error.position().is_some() {
        report = report.with_label(
            Label::new(offset..offset + 1)
                .with_message(error.label())
                .with_color(Color::Red),
        );
    }

    if let Some(hint) = error.hint() {
        report = report.with_help(hint);
    }

    let mut buffer = Vec::new();
    if report.finish().write(Source::from(text), &mut buffer).is_err() {
        return format_error(error, source, None);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}
