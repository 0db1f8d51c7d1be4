//! Integration tests for CLI output and exit codes.
//!
//! Each test runs the binary with `HOME` pointed at a fresh temp directory so
//! the redb database and config files under `~/.teamsort/` are isolated.

use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn teamsort(home: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_teamsort"));
    cmd.args(args)
        .current_dir(home)
        .env("HOME", home)
        .env_remove("TEAMSORT_OPERATOR_IDS")
        .env_remove("TEAMSORT_STORE")
        .env_remove("TEAMSORT_DB_PATH")
        .env_remove("RUST_LOG")
        .stdin(Stdio::null());
    cmd
}

fn run(home: &Path, args: &[&str]) -> Output {
    teamsort(home, args)
        .output()
        .expect("Failed to execute teamsort")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("stdout is not valid JSON ({e}): {stdout}"))
}

// =============================================================================
// join
// =============================================================================

#[test]
fn test_join_is_sticky_across_invocations() {
    let home = tempfile::tempdir().unwrap();

    let first = run(home.path(), &["join", "42", "--username", "ada", "--json"]);
    assert!(
        first.status.success(),
        "join failed: {}",
        String::from_utf8_lossy(&first.stderr)
    );
    let first = stdout_json(&first);
    assert_eq!(first["assigned"], true);
    assert_eq!(first["newly_assigned"], true);
    assert_eq!(first["username"], "ada");

    let second = stdout_json(&run(home.path(), &["join", "42", "--json"]));
    assert_eq!(second["newly_assigned"], false);
    assert_eq!(second["team_index"], first["team_index"]);
    assert_eq!(second["team"], first["team"]);
    // Metadata is not rewritten on subsequent joins
    assert_eq!(second["username"], "ada");
}

#[test]
fn test_join_human_output_names_team() {
    let home = tempfile::tempdir().unwrap();

    let output = run(home.path(), &["--no-color", "join", "7"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Welcome! You have joined:"), "stdout: {stdout}");
    assert!(
        ["Elves", "Orcs", "Dwarves", "Halflings", "Dragonborn"]
            .iter()
            .any(|name| stdout.contains(name)),
        "stdout: {stdout}"
    );

    let again = run(home.path(), &["--no-color", "join", "7"]);
    let stdout = String::from_utf8_lossy(&again.stdout);
    assert!(stdout.contains("You are already a member of:"), "stdout: {stdout}");
}

// =============================================================================
// counts / team / teams
// =============================================================================

#[test]
fn test_counts_are_balanced_after_joins() {
    let home = tempfile::tempdir().unwrap();

    for id in 1..=12 {
        let output = run(home.path(), &["join", &id.to_string()]);
        assert!(output.status.success());
    }

    let counts = stdout_json(&run(home.path(), &["counts", "--json"]));
    assert_eq!(counts["total"], 12);
    let teams = counts["teams"].as_array().unwrap();
    assert_eq!(teams.len(), 5);

    let sizes: Vec<u64> = teams.iter().map(|t| t["count"].as_u64().unwrap()).collect();
    assert_eq!(sizes.iter().sum::<u64>(), 12);
    let max = sizes.iter().max().unwrap();
    let min = sizes.iter().min().unwrap();
    assert!(max - min <= 1, "unbalanced: {sizes:?}");
}

#[test]
fn test_team_before_and_after_join() {
    let home = tempfile::tempdir().unwrap();

    let before = run(home.path(), &["team", "5", "--json"]);
    assert!(before.status.success());
    let before = stdout_json(&before);
    assert_eq!(before["assigned"], false);
    assert!(before.get("team").is_none());

    let human = run(home.path(), &["--no-color", "team", "5"]);
    assert!(human.status.success());
    assert!(String::from_utf8_lossy(&human.stdout).contains("has not joined a team yet"));
    assert!(String::from_utf8_lossy(&human.stderr).contains("teamsort join 5"));

    let joined = stdout_json(&run(home.path(), &["join", "5", "--json"]));
    let after = stdout_json(&run(home.path(), &["team", "5", "--json"]));
    assert_eq!(after["assigned"], true);
    assert_eq!(after["team_index"], joined["team_index"]);
    assert_eq!(after["newly_assigned"], false);
}

#[test]
fn test_teams_lists_default_roster() {
    let home = tempfile::tempdir().unwrap();

    let output = run(home.path(), &["teams", "--json"]);
    assert!(output.status.success());
    let roster = stdout_json(&output);
    let names: Vec<&str> = roster
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Elves", "Orcs", "Dwarves", "Halflings", "Dragonborn"]
    );
    // `teams` never opens the store
    assert!(!home.path().join(".teamsort").join("teams.redb").exists());
}

#[test]
fn test_user_config_roster_is_used() {
    let home = tempfile::tempdir().unwrap();
    let config_dir = home.path().join(".teamsort");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        r#"
[[teams]]
name = "Red"
motto = "Fast"

[[teams]]
name = "Blue"
"#,
    )
    .unwrap();

    let joined = stdout_json(&run(home.path(), &["join", "1", "--json"]));
    assert!(joined["team"] == "Red" || joined["team"] == "Blue");

    let counts = stdout_json(&run(home.path(), &["counts", "--json"]));
    assert_eq!(counts["teams"].as_array().unwrap().len(), 2);
}

#[test]
fn test_project_config_roster_overrides_user_config() {
    let home = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();

    let user_dir = home.path().join(".teamsort");
    fs::create_dir_all(&user_dir).unwrap();
    fs::write(
        user_dir.join("config.toml"),
        "[[teams]]\nname = \"Red\"\n\n[[teams]]\nname = \"Blue\"\n",
    )
    .unwrap();

    let project_dir = project.path().join(".teamsort");
    fs::create_dir_all(&project_dir).unwrap();
    fs::write(
        project_dir.join("config.toml"),
        "[[teams]]\nname = \"Gold\"\n\n[[teams]]\nname = \"Silver\"\n\n[[teams]]\nname = \"Bronze\"\n",
    )
    .unwrap();

    let output = teamsort(home.path(), &["teams", "--json"])
        .current_dir(project.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let names: Vec<String> = stdout_json(&output)
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Gold", "Silver", "Bronze"]);

    // Outside the project only the user roster applies
    let output = run(home.path(), &["teams", "--json"]);
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 2);
}

#[test]
fn test_invalid_config_fails() {
    let home = tempfile::tempdir().unwrap();
    let config_dir = home.path().join(".teamsort");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "teams = [").unwrap();

    let output = run(home.path(), &["--no-color", "join", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Could not load config:"));
}

// =============================================================================
// reset
// =============================================================================

#[test]
fn test_reset_requires_operator() {
    let home = tempfile::tempdir().unwrap();
    assert!(run(home.path(), &["join", "1"]).status.success());

    let output = run(home.path(), &["--no-color", "reset", "--operator", "99", "--yes"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("Only operators can reset assignments.")
    );

    // Nothing was removed
    let counts = stdout_json(&run(home.path(), &["counts", "--json"]));
    assert_eq!(counts["total"], 1);
}

#[test]
fn test_reset_by_operator_clears_assignments() {
    let home = tempfile::tempdir().unwrap();
    for id in ["1", "2", "3"] {
        assert!(run(home.path(), &["join", id]).status.success());
    }

    let output = teamsort(
        home.path(),
        &["--no-color", "reset", "--operator", "99", "--yes"],
    )
    .env("TEAMSORT_OPERATOR_IDS", "99")
    .output()
    .unwrap();
    assert!(
        output.status.success(),
        "reset failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Removed 3 assignments."));

    let counts = stdout_json(&run(home.path(), &["counts", "--json"]));
    assert_eq!(counts["total"], 0);

    let team = stdout_json(&run(home.path(), &["team", "1", "--json"]));
    assert_eq!(team["assigned"], false);
}

#[test]
fn test_reset_without_confirmation_is_cancelled() {
    let home = tempfile::tempdir().unwrap();
    assert!(run(home.path(), &["join", "1"]).status.success());

    let output = teamsort(home.path(), &["--no-color", "reset", "--operator", "8"])
        .env("TEAMSORT_OPERATOR_IDS", "8")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Cancelled."));

    let counts = stdout_json(&run(home.path(), &["counts", "--json"]));
    assert_eq!(counts["total"], 1);
}

#[test]
fn test_memory_store_does_not_persist_between_runs() {
    let home = tempfile::tempdir().unwrap();

    let output = teamsort(home.path(), &["join", "1"])
        .env("TEAMSORT_STORE", "memory")
        .output()
        .unwrap();
    assert!(output.status.success());

    let counts = teamsort(home.path(), &["counts", "--json"])
        .env("TEAMSORT_STORE", "memory")
        .output()
        .unwrap();
    assert_eq!(stdout_json(&counts)["total"], 0);
}
