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

//! Relex CLI
//!
//! Tokenizes source files with a built-in or file-defined vocabulary and
//! prints one token per line.

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use relex::error::{format_error, format_report};
use relex::langs::xml::{XmlLexer, XmlMode};
use relex::lexer::{kinds, GenericLexer, Lexer, LexerConfig, Token};
use relex::{vocab, LexError, SourceText};

/// Relex - A regex-driven tokenizer
#[derive(Parser, Debug)]
#[command(name = "relex")]
#[command(author = "Relex Team")]
#[command(version)]
#[command(about = "A regex-driven tokenizer with longest-match ambiguity chaining")]
#[command(long_about = r#"
Relex splits source files into tokens using an ordered list of token kinds.
At every position the longest match wins; when several kinds match the same
length, the kind declared last wins and the others are kept as alternatives.

Vocabulary files declare one kind per line:
  # comment
  Identifier = r"[A-Za-z_][A-Za-z0-9_]*"
  "Left Parenthesis" = r"\("

Example usage:
  relex input.txt
  relex page.xml --lang xml
  relex query.txt --vocab query.vocab --alternatives
"#)]
struct Cli {
    /// Source files to tokenize
    #[arg(required = true)]
    source_files: Vec<PathBuf>,

    /// Built-in vocabulary to use (default: generic)
    #[arg(short, long, value_enum, conflicts_with = "vocab")]
    lang: Option<Language>,

    /// Vocabulary file declaring the token kinds
    #[arg(long)]
    vocab: Option<PathBuf>,

    /// Characters skipped between tokens; accepts \t \n \r \s \\
    #[arg(long, value_parser = parse_whitespace)]
    whitespace: Option<Whitespace>,

    /// Also print equal-length alternative interpretations
    #[arg(short, long)]
    alternatives: bool,

    /// Render errors as colored reports
    #[arg(short, long)]
    pretty: bool,

    /// Enable verbose output (engine tracing on stderr)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Language {
    /// Identifiers and single-character punctuation
    Generic,
    /// XML markup and text content
    Xml,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Whitespace(Vec<char>);

fn parse_whitespace(value: &str) -> Result<Whitespace, String> {
    let mut chars = Vec::new();
    let mut input = value.chars();
    while let Some(c) = input.next() {
        if c != '\\' {
            chars.push(c);
            continue;
        }
        chars.push(match input.next() {
            Some('t') => '\t',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('s') => ' ',
            Some('\\') => '\\',
            Some(other) => return Err(format!("unknown escape '\\{}'", other)),
            None => return Err("dangling '\\' at end of whitespace set".to_string()),
        });
    }
    Ok(Whitespace(chars))
}

/// The configured lexer.
enum Vocabulary {
    Generic(GenericLexer),
    Xml(XmlLexer),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        relex::init_tracing("relex=trace");
    } else if std::env::var_os("RUST_LOG").is_some() {
        relex::init_tracing("warn");
    }

    let config = match &cli.whitespace {
        Some(Whitespace(chars)) => LexerConfig::new().with_whitespace(chars.iter().copied()),
        None => LexerConfig::default(),
    };

    let vocabulary = match (&cli.vocab, cli.lang) {
        (Some(path), _) => match load_vocabulary(path, &cli) {
            Ok(kinds) => Vocabulary::Generic(GenericLexer::new(kinds).with_config(config)),
            Err(code) => return code,
        },
        (None, Some(Language::Xml)) => Vocabulary::Xml(XmlLexer::new().with_config(config)),
        (None, Some(Language::Generic) | None) => {
            Vocabulary::Generic(GenericLexer::new(kinds::builtin()).with_config(config))
        }
    };

    if cli.verbose {
        eprintln!("Relex v{}", relex::VERSION);
        let kind_count = match &vocabulary {
            Vocabulary::Generic(lexer) => lexer.kinds().len(),
            Vocabulary::Xml(lexer) => lexer.kinds(XmlMode::Content).len(),
        };
        eprintln!("Token kinds: {}", kind_count);
    }

    let show_headers = cli.source_files.len() > 1;
    for path in &cli.source_files {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error: Cannot read {}: {}", path.display(), e);
                return ExitCode::from(3);
            }
        };
        let source = SourceText::new(&text);

        if show_headers {
            println!("==> {} <==", path.display());
        }

        let result = match &vocabulary {
            Vocabulary::Generic(lexer) => print_tokens(lexer, &source, cli.alternatives),
            Vocabulary::Xml(lexer) => print_tokens(lexer, &source, cli.alternatives),
        };

        if let Err(error) = result {
            report(&error, &source, path, cli.pretty);
            return ExitCode::from(1);
        }
    }

    ExitCode::SUCCESS
}

fn load_vocabulary(path: &Path, cli: &Cli) -> Result<Vec<relex::TokenKind>, ExitCode> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: Cannot read {}: {}", path.display(), e);
            return Err(ExitCode::from(3));
        }
    };

    vocab::parse_vocabulary(&text).map_err(|error| {
        report(&error, &SourceText::new(&text), path, cli.pretty);
        ExitCode::from(2)
    })
}

fn print_tokens<L: Lexer>(
    lexer: &L,
    source: &SourceText,
    alternatives: bool,
) -> relex::Result<()> {
    for token in lexer.tokens(source) {
        println!("{}", format_token(&token?, alternatives));
    }
    Ok(())
}

fn format_token(token: &Token, alternatives: bool) -> String {
    let mut line = format!(
        "{}  {}  {:?}",
        token.range(),
        token.kind_name(),
        token.lexeme()
    );
    if alternatives {
        for alternative in token.alternatives() {
            line.push_str(&format!(" | alt: {}", alternative.kind_name()));
        }
    }
    line
}

fn report(error: &LexError, source: &SourceText, path: &Path, pretty: bool) {
    if pretty {
        eprint!("{}", format_report(error, source, true));
    } else {
        let filename = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("<input>");
        eprint!("{}", format_error(error, source, Some(filename)));
    }
}
