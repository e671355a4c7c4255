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

//! Built-in token kinds.
//!
//! Ready-made definitions for common single-character punctuation and
//! identifiers. [`builtin`] returns all of them in declaration order.

use super::tokens::{KindSpec, TokenKind};

pub const CHARACTER: KindSpec = KindSpec::new("Character", r"[A-Za-z0-9_]");
pub const IDENTIFIER: KindSpec = KindSpec::new("Identifier", r"[A-Za-z_][A-Za-z0-9_]*");
pub const LEFT_PARENTHESIS: KindSpec = KindSpec::new("Left Parenthesis", r"\(");
pub const RIGHT_PARENTHESIS: KindSpec = KindSpec::new("Right Parenthesis", r"\)");
pub const LEFT_BRACKET: KindSpec = KindSpec::new("Left Bracket", r"\[");
pub const RIGHT_BRACKET: KindSpec = KindSpec::new("Right Bracket", r"\]");
pub const LEFT_BRACE: KindSpec = KindSpec::new("Left Brace", r"\{");
pub const RIGHT_BRACE: KindSpec = KindSpec::new("Right Brace", r"\}");
pub const LEFT_ANGLE_BRACKET: KindSpec = KindSpec::new("Left Angle Bracket", r"<");
pub const RIGHT_ANGLE_BRACKET: KindSpec = KindSpec::new("Right Angle Bracket", r">");
pub const PLUS: KindSpec = KindSpec::new("Plus", r"\+");
pub const MINUS: KindSpec = KindSpec::new("Minus", r"-");
pub const ASTERISK: KindSpec = KindSpec::new("Asterisk", r"\*");
pub const SLASH: KindSpec = KindSpec::new("Slash", r"/");
pub const EQUALS: KindSpec = KindSpec::new("Equals", r"=");
pub const QUESTION: KindSpec = KindSpec::new("Question", r"\?");
pub const EXCLAMATION: KindSpec = KindSpec::new("Exclamation", r"!");
pub const PIPE: KindSpec = KindSpec::new("Pipe", r"\|");
pub const DOUBLE_QUOTE: KindSpec = KindSpec::new("DoubleQuote", r#"""#);
pub const SINGLE_QUOTE: KindSpec = KindSpec::new("SingleQuote", r"'");

/// Every built-in definition, in declaration order.
pub const ALL: &[KindSpec] = &[
    CHARACTER,
    IDENTIFIER,
    LEFT_PARENTHESIS,
    RIGHT_PARENTHESIS,
    LEFT_BRACKET,
    RIGHT_BRACKET,
    LEFT_BRACE,
    RIGHT_BRACE,
    LEFT_ANGLE_BRACKET,
    RIGHT_ANGLE_BRACKET,
    PLUS,
    MINUS,
    ASTERISK,
    SLASH,
    EQUALS,
    QUESTION,
    EXCLAMATION,
    PIPE,
    DOUBLE_QUOTE,
    SINGLE_QUOTE,
];

/// Compile a built-in definition.
///
/// # Panics
///
/// Panics if `spec` is not one of the constants above and its pattern does
/// not compile.
pub fn kind(spec: KindSpec) -> TokenKind {
    spec.compile().expect("built-in pattern is valid")
}

/// Compile every built-in definition.
pub fn builtin() -> Vec<TokenKind> {
    ALL.iter().copied().map(kind).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtins_compile() {
        for spec in ALL {
            assert!(spec.compile().is_ok(), "{} failed to compile", spec.name);
        }
        assert_eq!(builtin().len(), ALL.len());
    }

    #[test]
    fn test_builtin_names_are_unique() {
        let mut names: Vec<_> = ALL.iter().map(|spec| spec.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn test_punctuation_matches_single_character() {
        assert_eq!(kind(PIPE).match_len("||"), Some(1));
        assert_eq!(kind(DOUBLE_QUOTE).match_len("\"x\""), Some(1));
        assert_eq!(kind(IDENTIFIER).match_len("foo_1 bar"), Some(5));
        assert_eq!(kind(CHARACTER).match_len("foo"), Some(1));
    }
}
