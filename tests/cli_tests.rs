//! Tests that run the built `booktrack` binary

use pretty_assertions::assert_eq;
use std::process::{Command, Output};

const FAREWELL: &str = "Thank you for using the Library Book Tracker.\n";

fn booktrack(args: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_booktrack"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn summary(errors: usize) -> String {
    format!(
        "\nValid records processed : 0\n\
         Search results          : 0\n\
         Books added             : 0\n\
         Errors encountered      : {errors}\n"
    )
}

#[test]
fn test_version_prints_summary_and_farewell() {
    let output = booktrack(&["--version", "dune"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.starts_with("booktrack 0.1.0\n"), "{stdout}");
    assert!(stdout.ends_with(&format!("{}{FAREWELL}", summary(0))), "{stdout}");
}

#[test]
fn test_help_prints_summary_and_farewell() {
    let output = booktrack(&["--help"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.contains("Usage: booktrack"), "{stdout}");
    assert!(stdout.ends_with(FAREWELL), "{stdout}");
}

#[test]
fn test_bad_log_level_prints_summary_and_farewell() {
    let output = booktrack(&["--log-level", "p/b.txt"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("invalid value 'p/b.txt'"), "{stderr}");
    assert_eq!(stdout, format!("{}{FAREWELL}", summary(0)));
}

#[test]
fn test_fatal_run_reports_once_on_stdout() {
    let output = booktrack(&["books.csv", "dune"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(!output.status.success());
    assert_eq!(
        stdout,
        format!(
            "Error: Catalog file must end with .txt, got: books.csv\n{}{FAREWELL}",
            summary(1)
        )
    );
    // Nothing is logged at the default level for a fatal error.
    assert_eq!(String::from_utf8(output.stderr).unwrap(), "");
}

#[test]
fn test_missing_arguments_exit_with_failure() {
    let output = booktrack(&[]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(!output.status.success());
    assert!(
        stdout.starts_with("Error: Need at least 2 arguments: <catalogFile.txt> <operation>\n"),
        "{stdout}"
    );
    assert!(stdout.ends_with(&format!("{}{FAREWELL}", summary(1))), "{stdout}");
}
