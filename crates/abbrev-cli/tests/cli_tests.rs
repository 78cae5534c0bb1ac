//! End-to-end tests for the `abbrev-match` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn abbrev_match(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_abbrev-match"))
        .args(args)
        .output()
        .expect("failed to run abbrev-match")
}

fn abbrev_match_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_abbrev-match"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn abbrev-match");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for abbrev-match")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn match_exits_zero() {
    let output = abbrev_match(&["Foobar Rd", "Foobar Road"]);
    assert_eq!(stdout(&output), "MATCH\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn no_match_exits_one() {
    let output = abbrev_match(&["Main Street", "Main Avenue"]);
    assert_eq!(stdout(&output), "NO MATCH\n");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn wrong_argument_count_is_usage_error() {
    for args in [&["only one"][..], &[][..], &["a", "b", "c"][..]] {
        let output = abbrev_match(args);
        assert_eq!(output.status.code(), Some(2), "{args:?}");
        assert!(stdout(&output).is_empty());
        assert!(stderr(&output).starts_with("error:"));
    }
}

#[test]
fn unknown_option_is_usage_error() {
    let output = abbrev_match(&["--frobnicate", "a", "b"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn help_exits_zero() {
    let output = abbrev_match(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage: abbrev-match"));
}

#[test]
fn verbose_traces_to_stderr() {
    let output = abbrev_match(&["N St", "North Street", "-v"]);
    assert_eq!(stdout(&output), "MATCH\n");
    let trace = stderr(&output);
    assert!(trace.contains("forward rules: {"));
    assert!(trace.contains("backward rules: {"));
    assert!(trace.contains("fpop \"\" + \"n st\" - remaining: 4"));
    assert!(trace.contains("bpop \"\" + \"north street\" - remaining: 12"));
}

#[test]
fn no_prune_keeps_the_verdict() {
    let output = abbrev_match(&["--no-prune", "Hauptstraße", "Hauptstr."]);
    assert_eq!(stdout(&output), "MATCH\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn batch_mode_tags_each_pair() {
    let input = "Foobar Rd\tFoobar Road\nMain Street\tMain Avenue\n\nbroken line\n";
    let output = abbrev_match_stdin(&["--batch"], input);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "M: Foobar Rd\tFoobar Road\nN: Main Street\tMain Avenue\n"
    );
    assert!(stderr(&output).contains("line 4"));
}
