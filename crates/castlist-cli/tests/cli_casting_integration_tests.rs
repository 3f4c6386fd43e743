//! CLI casting integration tests
//!
//! These tests run the built binary against a scratch database and check
//! what it prints.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_castlist");
    let db_path = dir.join("theater.db");

    Command::new(cli_bin)
        .current_dir(dir)
        .arg("--db")
        .arg(&db_path)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_cli_demo_prints_hamlet_report() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["demo"]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        stdout(&output),
        "Role: Hamlet\n\
         Actors: [\"jason Kamau \", \"jessica wairimu\"]\n\
         Locations: [\"kakamega\", \"Nairobi\"]\n\
         Lead: jason Kamau \n\
         Understudy: no actor has been hired for understudy for this role\n"
    );
    assert!(temp_dir.path().join("theater.db").exists());
}

#[test]
fn test_cli_default_db_path_is_theater_db() {
    let temp_dir = TempDir::new().unwrap();
    let cli_bin = env!("CARGO_BIN_EXE_castlist");

    let output = Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args(["role", "add", "Ophelia"])
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    assert!(temp_dir.path().join("theater.db").exists());
}

#[test]
fn test_cli_add_call_back_and_show() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    assert!(run(dir, &["role", "add", "Ophelia"]).status.success());
    for (actor, phone) in [("amina", "254700000001"), ("brian", "254700000002")] {
        let output = run(
            dir,
            &[
                "audition",
                "add",
                "--role-id",
                "1",
                "--actor",
                actor,
                "--location",
                "Kisumu",
                "--phone",
                phone,
            ],
        );
        assert!(output.status.success());
    }
    assert!(run(dir, &["audition", "call-back", "2"]).status.success());
    assert!(run(dir, &["audition", "call-back", "1"]).status.success());

    let output = run(dir, &["show", "Ophelia"]);

    let text = stdout(&output);
    assert!(text.contains("Lead: amina\n"), "got: {}", text);
    assert!(text.contains("Understudy: brian\n"), "got: {}", text);
}

#[test]
fn test_cli_show_json() {
    let temp_dir = TempDir::new().unwrap();
    run(temp_dir.path(), &["demo"]);

    let output = run(temp_dir.path(), &["show", "Hamlet", "--json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["character_name"], "Hamlet");
    assert_eq!(value["auditions"][0]["actor"], "jason Kamau ");
    assert_eq!(value["auditions"][0]["hired"], true);
    assert_eq!(value["auditions"][1]["phone"], 254744258485_i64);
}

#[test]
fn test_cli_show_unknown_role_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["show", "Yorick"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_NOT_FOUND"));
}

#[test]
fn test_cli_call_back_unknown_audition_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["audition", "call-back", "99"]);

    assert_eq!(output.status.code(), Some(1));
}
