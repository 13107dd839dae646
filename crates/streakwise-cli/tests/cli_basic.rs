//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary data directory.

use std::path::Path;
use std::process::Command;

use chrono::{Days, Local};

struct Sandbox {
    dir: tempfile::TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Sandbox with `streakwise init` already run.
    fn initialized() -> Self {
        let sandbox = Self::new();
        sandbox.run_success(&["init"]);
        sandbox
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run a CLI command and return (stdout, stderr, exit code).
    fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = Command::new(env!("CARGO_BIN_EXE_streakwise"))
            .args(args)
            .env("STREAKWISE_DIR", self.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute CLI command");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let code = output.status.code().unwrap_or(-1);

        (stdout, stderr, code)
    }

    fn run_success(&self, args: &[&str]) -> String {
        let (stdout, stderr, code) = self.run(args);
        assert_eq!(code, 0, "CLI command failed: {args:?}\nstderr: {stderr}");
        stdout
    }

    fn run_failure(&self, args: &[&str]) -> String {
        let (_, stderr, code) = self.run(args);
        assert_eq!(code, 1, "CLI command unexpectedly succeeded: {args:?}");
        stderr
    }
}

#[test]
fn test_init_is_idempotent() {
    let sandbox = Sandbox::new();
    let stdout = sandbox.run_success(&["init"]);
    assert!(stdout.contains("initialized"));
    assert!(sandbox.path().join("habits").exists());
    assert!(sandbox.path().join("log").exists());

    let stdout = sandbox.run_success(&["init"]);
    assert!(stdout.contains("already initialized"));
}

#[test]
fn test_log_before_init_fails() {
    let sandbox = Sandbox::new();
    let missing = sandbox.path().join("not-there");
    let output = Command::new(env!("CARGO_BIN_EXE_streakwise"))
        .arg("log")
        .env("STREAKWISE_DIR", &missing)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.starts_with("error:"), "{stderr}");
    assert!(stderr.contains("streakwise init"), "{stderr}");
}

#[test]
fn test_record_then_log() {
    let sandbox = Sandbox::initialized();
    sandbox.run_success(&["record", "Walk", "y"]);

    let stdout = sandbox.run_success(&["log", "--colorless", "--count-back", "3"]);
    let walk = stdout
        .lines()
        .find(|l| l.trim_start().starts_with("Walk"))
        .expect("Walk graph missing");
    assert!(walk.ends_with('━'), "{walk:?}");
    assert!(stdout.contains("Body"));
    assert!(stdout.contains("Mind"));
    // Five scored habits, one satisfied.
    assert!(stdout.contains("Score: 20.0%"), "{stdout}");
}

#[test]
fn test_log_flags_habits_at_risk() {
    let sandbox = Sandbox::initialized();
    let yesterday = Local::now().date_naive() - Days::new(1);
    let date = yesterday.to_string();
    sandbox.run_success(&["record", "Read", "y", "--date", &date]);

    let stdout = sandbox.run_success(&["log", "--colorless"]);
    let read = stdout
        .lines()
        .find(|l| l.trim_start().starts_with("Read"))
        .expect("Read graph missing");
    assert!(read.contains(" !"), "{read:?}");

    sandbox.run_success(&["config", "set", "warnings.enabled", "false"]);
    let stdout = sandbox.run_success(&["log", "--colorless"]);
    assert!(!stdout.contains('!'), "{stdout}");
}

#[test]
fn test_record_rejects_unknown_habit() {
    let sandbox = Sandbox::initialized();
    let stderr = sandbox.run_failure(&["record", "Juggle", "y"]);
    assert!(stderr.contains("Unknown habit 'Juggle'"), "{stderr}");
}

#[test]
fn test_record_rejects_invalid_result() {
    let sandbox = Sandbox::initialized();
    let stderr = sandbox.run_failure(&["record", "Walk", "maybe"]);
    assert!(stderr.contains("Invalid result"), "{stderr}");
    let log = std::fs::read_to_string(sandbox.path().join("log")).unwrap();
    assert!(log.trim().is_empty());
}

#[test]
fn test_stats_json() {
    let sandbox = Sandbox::initialized();
    let yesterday = Local::now().date_naive() - Days::new(1);
    let date = yesterday.to_string();
    sandbox.run_success(&["record", "Walk", "y", "--date", &date, "--amount", "2.5"]);

    let stdout = sandbox.run_success(&["stats", "--json"]);
    let rows: serde_json::Value = serde_json::from_str(&stdout).expect("Failed to parse JSON output");
    let walk = rows
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["habit"] == "Walk")
        .unwrap();
    assert_eq!(walk["days_tracked"], 2);
    assert_eq!(walk["total"], 2.5);
    assert_eq!(walk["streaks"], 1);
    // Nothing recorded today.
    assert_eq!(walk["breaks"], 1);

    let gym = rows.as_array().unwrap().iter().find(|r| r["habit"] == "Gym").unwrap();
    assert_eq!(gym["days_tracked"], 0);
}

#[test]
fn test_todo_lists_missing_habits() {
    let sandbox = Sandbox::initialized();
    sandbox.run_success(&["record", "Walk", "n"]);

    let stdout = sandbox.run_success(&["todo", "--days", "0"]);
    let today = Local::now().date_naive().to_string();
    assert!(stdout.starts_with(&today), "{stdout}");
    let habits: Vec<_> = stdout.lines().skip(1).map(str::trim).collect();
    assert!(habits.contains(&"Read"));
    assert!(!habits.contains(&"Walk"));
}

#[test]
fn test_load_warnings_are_reported() {
    let sandbox = Sandbox::initialized();
    std::fs::write(sandbox.path().join("log"), "not a record\n").unwrap();

    let (_, stderr, code) = sandbox.run(&["log", "--colorless"]);
    assert_eq!(code, 0);
    assert!(stderr.contains("1 line(s)"), "{stderr}");
}

#[test]
fn test_config_commands() {
    let sandbox = Sandbox::new();
    assert_eq!(sandbox.run_success(&["config", "get", "display.count_back"]).trim(), "60");

    sandbox.run_success(&["config", "set", "display.count_back", "14"]);
    assert_eq!(sandbox.run_success(&["config", "get", "display.count_back"]).trim(), "14");
    assert!(sandbox.path().join("config.toml").exists());

    let list = sandbox.run_success(&["config", "list"]);
    assert!(list.contains("display.count_back = 14"), "{list}");

    sandbox.run_failure(&["config", "get", "display.nope"]);
    sandbox.run_failure(&["config", "set", "display.count_back", "lots"]);

    sandbox.run_success(&["config", "reset"]);
    assert_eq!(sandbox.run_success(&["config", "get", "display.count_back"]).trim(), "60");
}
