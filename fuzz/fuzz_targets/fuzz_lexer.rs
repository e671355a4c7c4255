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

//! Fuzz target for the Relex lexers.
//!
//! Feeds random text to the generic and XML lexers. Both must return
//! `Ok` or `Err` without panicking, and every token must cover its lexeme.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_lexer
//!
//! Run for a specific duration:
//!   cargo +nightly fuzz run fuzz_lexer -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use relex::langs::xml::XmlLexer;
use relex::lexer::{kinds, GenericLexer, Lexer};
use relex::SourceText;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let source = SourceText::new(text);

        for token in GenericLexer::new(kinds::builtin()).tokens(&source) {
            match token {
                Ok(token) => {
                    assert_eq!(source.substring(token.range()).unwrap(), token.lexeme())
                }
                Err(_) => break,
            }
        }

        let _ = XmlLexer::new().lex(&source);
    }
});
