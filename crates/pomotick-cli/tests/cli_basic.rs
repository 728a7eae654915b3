//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary and verify outputs.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run a CLI command and return output.
fn run_cli(args: &[&str]) -> (i32, String, String) {
    run_cli_with_input(args, "")
}

/// Run a CLI command with `input` piped to stdin.
fn run_cli_with_input(args: &[&str], input: &str) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pomotick"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");
    let output = child.wait_with_output().expect("Failed to wait for CLI");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn json_lines(stdout: &str) -> Vec<serde_json::Value> {
    stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("Failed to parse JSON output"))
        .collect()
}

#[test]
fn test_format() {
    let (code, stdout, _) = run_cli(&["format", "125"]);
    assert_eq!(code, 0, "format failed");
    assert_eq!(stdout.trim(), "02:05");

    let (_, stdout, _) = run_cli(&["format", "1500"]);
    assert_eq!(stdout.trim(), "25:00");
}

#[test]
fn test_format_requires_seconds() {
    let (code, _, _) = run_cli(&["format"]);
    assert_ne!(code, 0);
}

#[test]
fn test_simulate_idle_ignores_ticks() {
    let (code, stdout, _) = run_cli(&["simulate", "--ticks", "10"]);
    assert_eq!(code, 0, "simulate failed");
    assert!(stdout.contains("Work Time  25:00  [paused]  switches: 0"));
    assert!(stdout.contains("Intervals:"));
}

#[test]
fn test_simulate_full_task_phase_json() {
    let (code, stdout, _) = run_cli(&["simulate", "--start", "--ticks", "1501", "--json"]);
    assert_eq!(code, 0, "simulate failed");

    let events = json_lines(&stdout);
    let types: Vec<&str> = events.iter().map(|e| e["type"].as_str().unwrap()).collect();
    assert_eq!(
        types,
        vec!["TimerStarted", "PhaseSwitched", "StateSnapshot", "TransitionLog"]
    );

    let snapshot = &events[2];
    assert_eq!(snapshot["phase"], "break");
    assert_eq!(snapshot["remaining_secs"], 300);
    assert_eq!(snapshot["running"], true);
    assert_eq!(snapshot["switches"], 1);

    let entries = events[3]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0], "Interval: Work time started.");
}

#[test]
fn test_run_session_from_stdin() {
    let (code, stdout, _) = run_cli_with_input(
        &["run", "--json"],
        "status\ntoggle\ntoggle\nreset\nlog\nquit\n",
    );
    assert_eq!(code, 0, "run failed");

    let events = json_lines(&stdout);
    let types: Vec<&str> = events.iter().map(|e| e["type"].as_str().unwrap()).collect();
    assert_eq!(
        types,
        vec![
            "StateSnapshot",
            "StateSnapshot",
            "TimerStarted",
            "TimerPaused",
            "TimerReset",
            "TransitionLog",
            "SessionEnded",
        ]
    );
    assert_eq!(events[4]["remaining_secs"], 1500);
}

#[test]
fn test_run_reports_unknown_commands() {
    let (code, stdout, stderr) = run_cli_with_input(&["run"], "launch\n\nquit\n");
    assert_eq!(code, 0, "run failed");
    assert!(stderr.contains("unknown command 'launch'"));
    assert!(stdout.contains("session ended after 0 switches"));
}

#[test]
fn test_run_ends_on_eof() {
    let (code, stdout, _) = run_cli_with_input(&["run"], "");
    assert_eq!(code, 0, "run failed");
    assert!(stdout.contains("Work Time  25:00  [paused]"));
    assert!(stdout.contains("session ended"));
}

#[test]
fn test_run_rejects_zero_tick_period() {
    let (code, _, stderr) = run_cli(&["run", "--tick-ms", "0"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("--tick-ms"));
}
