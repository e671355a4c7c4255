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

//! Vocabulary files.
//!
//! A vocabulary file declares one token kind per line:
//!
//! ```text
//! # comment
//! Identifier = r"[A-Za-z_][A-Za-z0-9_]*"
//! "Left Parenthesis" = r"\("
//! String = r#"'[^']*'|"[^"]*""#
//! ```
//!
//! Order of declaration is the tie-break order of the resulting kinds.

use logos::Logos;

use crate::error::{LexError, Result};
use crate::lexer::TokenKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r]+")]
enum VocabToken {
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,

    #[token("\n")]
    Newline,

    #[token("=")]
    Equals,

    #[regex(r"[A-Za-z_][A-Za-z0-9_\-]*")]
    Name,

    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    QuotedName,

    #[regex(r#"r"[^"\n]*""#)]
    RawPattern,

    #[token("r#\"", hashed_pattern)]
    HashedPattern,
}

/// Extend an `r#"` opener up to the first `"#` on the same line.
fn hashed_pattern(lexer: &mut logos::Lexer<VocabToken>) -> bool {
    let rest = lexer.remainder();
    let line = rest.find('\n').map_or(rest, |end| &rest[..end]);
    match line.find("\"#") {
        Some(close) => {
            lexer.bump(close + 2);
            true
        }
        None => false,
    }
}

/// One parsed definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabEntry {
    pub name: String,
    pub pattern: String,
    /// 1-based line of the definition.
    pub line: usize,
}

/// Parse definitions without compiling their patterns.
pub fn parse_entries(text: &str) -> Result<Vec<VocabEntry>> {
    let mut entries = Vec::new();
    let mut line = 1;
    let mut name: Option<String> = None;
    let mut equals = false;
    let mut pattern: Option<String> = None;

    let error = |line: usize, message: String| LexError::InvalidVocabulary { line, message };

    let mut lexer = VocabToken::lexer(text);
    while let Some(token) = lexer.next() {
        let slice = lexer.slice();
        let Ok(token) = token else {
            return Err(error(line, format!("unexpected input {:?}", slice)));
        };

        match token {
            VocabToken::Newline => {
                if let Some(entry) = finish(name.take(), equals, pattern.take(), line)? {
                    entries.push(entry);
                }
                equals = false;
                line += 1;
            }
            VocabToken::Name | VocabToken::QuotedName if name.is_none() => {
                name = Some(if token == VocabToken::QuotedName {
                    unquote(slice)
                } else {
                    slice.to_string()
                });
            }
            VocabToken::Equals if name.is_some() && !equals => equals = true,
            VocabToken::RawPattern | VocabToken::HashedPattern if equals && pattern.is_none() => {
                let hashes = usize::from(token == VocabToken::HashedPattern);
                pattern = Some(slice[2 + hashes..slice.len() - 1 - hashes].to_string());
            }
            _ => return Err(error(line, format!("unexpected {:?}", slice))),
        }
    }

    if let Some(entry) = finish(name, equals, pattern, line)? {
        entries.push(entry);
    }

    Ok(entries)
}

/// Parse and compile a vocabulary.
pub fn parse_vocabulary(text: &str) -> Result<Vec<TokenKind>> {
    parse_entries(text)?
        .into_iter()
        .map(|entry| {
            TokenKind::new(entry.name, &entry.pattern).map_err(|error| error.at_line(entry.line))
        })
        .collect()
}

fn finish(
    name: Option<String>,
    equals: bool,
    pattern: Option<String>,
    line: usize,
) -> Result<Option<VocabEntry>> {
    match (name, equals, pattern) {
        (None, false, None) => Ok(None),
        (Some(name), true, Some(pattern)) => Ok(Some(VocabEntry {
            name,
            pattern,
            line,
        })),
        (Some(_), false, _) => Err(LexError::InvalidVocabulary {
            line,
            message: "expected '=' after name".to_string(),
        }),
        _ => Err(LexError::InvalidVocabulary {
            line,
            message: "expected a raw string pattern".to_string(),
        }),
    }
}

fn unquote(slice: &str) -> String {
    let mut result = String::with_capacity(slice.len());
    let mut chars = slice[1..slice.len() - 1].chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                result.push(escaped);
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_entries() {
        let text = r#"
# punctuation
Plus = r"\+"
"Left Parenthesis" = r"\("   # trailing comment
"#;
        let entries = parse_entries(text).unwrap();
        assert_eq!(
            entries,
            vec![
                VocabEntry {
                    name: "Plus".to_string(),
                    pattern: r"\+".to_string(),
                    line: 3,
                },
                VocabEntry {
                    name: "Left Parenthesis".to_string(),
                    pattern: r"\(".to_string(),
                    line: 4,
                },
            ]
        );
    }

    #[test]
    fn test_hashed_pattern_may_contain_quotes() {
        let entries = parse_entries(r##"String = r#"'[^']*'|"[^"]*""#"##).unwrap();
        assert_eq!(entries[0].pattern, r#"'[^']*'|"[^"]*""#);
    }

    #[test]
    fn test_hashed_pattern_forms() {
        let text = r##"
Plain = r#"ab"#
Inner = r#"a"b"#
Trailing = r#"x""#   # ends at the first quote-hash
"##;
        let patterns: Vec<_> = parse_entries(text)
            .unwrap()
            .into_iter()
            .map(|entry| entry.pattern)
            .collect();
        assert_eq!(patterns, vec!["ab", r#"a"b"#, r#"x""#]);
    }

    #[test]
    fn test_unterminated_hashed_pattern() {
        let err = parse_entries("S = r#\"ab\"\nT = r\"t\"#").unwrap_err();
        assert!(matches!(err, LexError::InvalidVocabulary { line: 1, .. }));
    }

    #[test]
    fn test_quoted_name_escapes() {
        let entries = parse_entries(r#""Say \"hi\"" = r"hi""#).unwrap();
        assert_eq!(entries[0].name, r#"Say "hi""#);
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let kinds = parse_vocabulary("B = r\"b\"\nA = r\"a\"\nC = r\"c\"").unwrap();
        let names: Vec<_> = kinds.iter().map(TokenKind::name).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_missing_equals() {
        let err = parse_entries("Plus r\"\\+\"").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidVocabulary);
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_missing_pattern() {
        let err = parse_entries("\nPlus =\n").unwrap_err();
        assert!(matches!(err, LexError::InvalidVocabulary { line: 2, .. }));
    }

    #[test]
    fn test_unexpected_input() {
        let err = parse_entries("Plus = '+'").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidVocabulary);
    }

    #[test]
    fn test_bad_pattern_is_invalid_pattern() {
        let err = parse_vocabulary("Broken = r\"[\"").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidPattern);
    }

    #[test]
    fn test_bad_pattern_keeps_its_line() {
        let err = parse_vocabulary("# header\nGood = r\"a\"\nBad = r\"(\"").unwrap_err();
        assert!(matches!(err, LexError::InvalidPattern { line: Some(3), .. }));
    }
}
