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

//! End-to-end CLI integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn cargo_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_relex"))
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

fn run(args: &[&str], files: &[&Path]) -> Output {
    cargo_bin()
        .args(args)
        .args(files)
        .output()
        .expect("Failed to execute command")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Test --help flag.
#[test]
fn test_help_flag() {
    let output = cargo_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("relex"));
    assert!(stdout.contains("--lang"));
    assert!(stdout.contains("--vocab"));
    assert!(stdout.contains("--alternatives"));
}

/// Test --version flag.
#[test]
fn test_version_flag() {
    let output = cargo_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("relex"));
    assert!(stdout.contains("0.1.0"));
}

/// Test that a source file is required.
#[test]
fn test_missing_source_argument() {
    let output = cargo_bin().output().expect("Failed to execute command");
    assert!(!output.status.success());
}

#[test]
fn test_generic_tokens() {
    let dir = TempDir::new().unwrap();
    let source = write_file(&dir, "input.txt", "f(x)\n");

    let output = run(&[], &[&source]);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            r#"1:1-1:2  Identifier  "f""#,
            r#"1:2-1:3  Left Parenthesis  "(""#,
            r#"1:3-1:4  Identifier  "x""#,
            r#"1:4-1:5  Right Parenthesis  ")""#,
        ]
    );
}

#[test]
fn test_alternatives_flag() {
    let dir = TempDir::new().unwrap();
    let source = write_file(&dir, "input.txt", "f(x)");

    let output = run(&["--alternatives"], &[&source]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], r#"1:1-1:2  Identifier  "f" | alt: Character"#);
    assert_eq!(lines[1], r#"1:2-1:3  Left Parenthesis  "(""#);
}

#[test]
fn test_xml_language() {
    let dir = TempDir::new().unwrap();
    let source = write_file(&dir, "page.xml", "<a>hi there</a>");

    let output = run(&["--lang", "xml"], &[&source]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[3], r#"1:4-1:12  Text  "hi there""#);
}

#[test]
fn test_vocab_file() {
    let dir = TempDir::new().unwrap();
    let vocab = write_file(
        &dir,
        "numbers.vocab",
        "# words and numbers\nWord = r\"[a-z]+\"\nNumber = r\"[0-9]+\"\n",
    );
    let source = write_file(&dir, "input.txt", "abc 42");

    let output = run(&["--vocab", vocab.to_str().unwrap()], &[&source]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        stdout_lines(&output),
        vec![r#"1:1-1:4  Word  "abc""#, r#"1:5-1:7  Number  "42""#]
    );
}

#[test]
fn test_vocab_file_with_hashed_pattern() {
    let dir = TempDir::new().unwrap();
    let vocab = write_file(
        &dir,
        "strings.vocab",
        "Word = r\"[a-z]+\"\nString = r#\"'[^']*'|\"[^\"]*\"\"#\n",
    );
    let source = write_file(&dir, "input.txt", "say \"hi there\" 'ok'");

    let output = run(&["--vocab", vocab.to_str().unwrap()], &[&source]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        stdout_lines(&output),
        vec![
            r#"1:1-1:4  Word  "say""#,
            r#"1:5-1:15  String  "\"hi there\"""#,
            r#"1:16-1:20  String  "'ok'""#,
        ]
    );
}

#[test]
fn test_vocab_pattern_error_points_at_line() {
    let dir = TempDir::new().unwrap();
    let vocab = write_file(&dir, "bad.vocab", "A = r\"a\"\nB = r\"(\"\n");
    let source = write_file(&dir, "input.txt", "a");

    let output = run(&["--vocab", vocab.to_str().unwrap()], &[&source]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error[E001]"));
    assert!(stderr.contains("--> bad.vocab:2:1"));
}

#[test]
fn test_lang_conflicts_with_vocab() {
    let dir = TempDir::new().unwrap();
    let vocab = write_file(&dir, "a.vocab", "A = r\"a\"\n");
    let source = write_file(&dir, "input.txt", "a");

    let output = run(
        &["--lang", "xml", "--vocab", vocab.to_str().unwrap()],
        &[&source],
    );

    assert!(!output.status.success());
}

#[test]
fn test_custom_whitespace() {
    let dir = TempDir::new().unwrap();
    let source = write_file(&dir, "input.txt", "a;b");

    let output = run(&["--whitespace", ";"], &[&source]);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            r#"1:1-1:2  Identifier  "a""#,
            r#"1:3-1:4  Identifier  "b""#
        ]
    );
}

#[test]
fn test_multiple_files_print_headers() {
    let dir = TempDir::new().unwrap();
    let first = write_file(&dir, "one.txt", "a");
    let second = write_file(&dir, "two.txt", "b");

    let output = run(&[], &[&first, &second]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("one.txt <=="));
    assert!(stdout.contains("two.txt <=="));
}

// ============================================================================
// Exit Codes
// ============================================================================

#[test]
fn test_lex_error_exit_code() {
    let dir = TempDir::new().unwrap();
    let source = write_file(&dir, "input.txt", "a ;");

    let output = run(&[], &[&source]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error[E002]"));
    assert!(stderr.contains("--> input.txt:1:3"));
    // Tokens before the failure are still printed.
    assert_eq!(stdout_lines(&output), vec![r#"1:1-1:2  Identifier  "a""#]);
}

#[test]
fn test_invalid_vocab_exit_code() {
    let dir = TempDir::new().unwrap();
    let vocab = write_file(&dir, "bad.vocab", "A = r\"a\"\nB r\"b\"\n");
    let source = write_file(&dir, "input.txt", "a");

    let output = run(&["--vocab", vocab.to_str().unwrap()], &[&source]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error[E010]"));
    assert!(stderr.contains("--> bad.vocab:2:1"));
}

#[test]
fn test_unreadable_source_exit_code() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");

    let output = run(&[], &[&missing]);

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot read"));
}

#[test]
fn test_pretty_error_report() {
    let dir = TempDir::new().unwrap();
    let source = write_file(&dir, "input.txt", "ok\n;");

    let output = run(&["--pretty"], &[&source]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("E002"));
}
