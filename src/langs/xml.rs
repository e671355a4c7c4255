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

//! XML tokenizer.
//!
//! Inside markup only structural kinds are tried. Right after any `>`
//! ([`CLOSE_OPENING_TAG`], which also ends closing tags such as `</a>`),
//! free-form [`TEXT`] joins the candidates until the next token is emitted.

use crate::lexer::kinds::{self, EQUALS, IDENTIFIER};
use crate::lexer::{CandidateRule, KindSpec, Lexer, LexerConfig, Token, TokenKind};

pub const OPEN_XML_DECLARATION: KindSpec = KindSpec::new("Open Xml Declaration", r"<\?xml");
pub const CLOSE_XML_DECLARATION: KindSpec = KindSpec::new("Close Xml Declaration", r"\?>");
pub const STRING: KindSpec = KindSpec::new("String", r#"'[^']*'|"[^"]*""#);
pub const TAG_NAME: KindSpec = KindSpec::new("Tag Name", r"[A-Za-z0-9][A-Za-z0-9_.-]*");
pub const COMMENT: KindSpec = KindSpec::new("Comment", r"<!--.*-->");
pub const CDATA: KindSpec = KindSpec::new("CDATA", r"<!\[CDATA\[[^\]]*\]\]>");
pub const OPEN_TAG: KindSpec = KindSpec::new("Open Tag", r"<");
pub const OPEN_CLOSING_TAG: KindSpec = KindSpec::new("Open Self-closing Tag", r"</");
pub const CLOSE_OPENING_TAG: KindSpec = KindSpec::new("Close Opening Tag", r">");
pub const CLOSE_CLOSING_TAG: KindSpec = KindSpec::new("Close Closing Tag", r"/>");
pub const TEXT: KindSpec = KindSpec::new(
    "Text",
    r##"[!"#$%&'()*+,\-./0-9:;=>?@A-Z\[\\\]^_`a-z{|}~][ !"#$%&'()*+,\-./0-9:;=>?@A-Z\[\\\]^_`a-z{|}~]*[^ \t<]"##,
);

/// Structural kinds, in tie-break order.
pub const MARKUP: &[KindSpec] = &[
    OPEN_XML_DECLARATION,
    CLOSE_XML_DECLARATION,
    TAG_NAME,
    IDENTIFIER,
    EQUALS,
    STRING,
    COMMENT,
    CDATA,
    OPEN_TAG,
    OPEN_CLOSING_TAG,
    CLOSE_OPENING_TAG,
    CLOSE_CLOSING_TAG,
];

/// Which part of a document the cursor is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XmlMode {
    /// Between `<` and `>`, or between elements.
    #[default]
    Markup,
    /// Right after a `>`, whether it ended an opening or a closing tag;
    /// text may follow.
    Content,
}

/// The XML lexer.
#[derive(Debug, Clone)]
pub struct XmlLexer {
    markup: Vec<TokenKind>,
    content: Vec<TokenKind>,
    close_opening_tag: TokenKind,
    config: LexerConfig,
}

impl XmlLexer {
    /// Create the lexer with the default whitespace set.
    pub fn new() -> Self {
        let markup: Vec<TokenKind> = MARKUP.iter().copied().map(kinds::kind).collect();
        let mut content = markup.clone();
        content.push(kinds::kind(TEXT));
        let close_opening_tag = kinds::kind(CLOSE_OPENING_TAG);

        Self {
            markup,
            content,
            close_opening_tag,
            config: LexerConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: LexerConfig) -> Self {
        self.config = config;
        self
    }

    /// Kinds tried in `mode`.
    pub fn kinds(&self, mode: XmlMode) -> &[TokenKind] {
        match mode {
            XmlMode::Markup => &self.markup,
            XmlMode::Content => &self.content,
        }
    }
}

impl Default for XmlLexer {
    fn default() -> Self {
        Self::new()
    }
}

/// Session state of [`XmlLexer`].
#[derive(Debug, Clone)]
pub struct XmlRule<'a> {
    lexer: &'a XmlLexer,
    mode: XmlMode,
}

impl XmlRule<'_> {
    /// The current mode.
    pub fn mode(&self) -> XmlMode {
        self.mode
    }
}

impl CandidateRule for XmlRule<'_> {
    fn candidates(&self) -> &[TokenKind] {
        self.lexer.kinds(self.mode)
    }

    fn observe(&mut self, token: &Token) {
        self.mode = if *token.kind() == self.lexer.close_opening_tag {
            XmlMode::Content
        } else {
            XmlMode::Markup
        };
    }
}

impl Lexer for XmlLexer {
    type Rule<'a> = XmlRule<'a>;

    fn rule(&self) -> XmlRule<'_> {
        XmlRule {
            lexer: self,
            mode: XmlMode::default(),
        }
    }

    fn config(&self) -> &LexerConfig {
        &self.config
    }
}
