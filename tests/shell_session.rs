use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn write_config(dir: &Path, json: &str) -> String {
    let path = dir.join("config.json");
    std::fs::write(&path, json).unwrap();
    path.to_str().unwrap().to_string()
}

fn roster(config: &str) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env_remove("RUST_LOG").args(["--config", config]);
    cmd
}

#[test]
fn test_full_crud_session() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = write_config(temp_dir.path(), r#"{ "color": "never" }"#);

    roster(&config)
        .write_stdin(concat!(
            "1\nAlice\nS1\n20\nCS\n",
            "1\nBob\nS2\n22\nMath\n",
            "3\nS1\n21\n\n",
            "2\nS1\n",
            "4\nS2\n",
            "5\n",
            "6\n",
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Student Management System ==="))
        .stdout(predicate::str::contains("Student Alice added"))
        .stdout(predicate::str::contains("Student Bob added"))
        .stdout(predicate::str::contains("Student Alice updated"))
        .stdout(predicate::str::contains("Student Bob deleted"))
        .stdout(predicate::str::contains("All students (1):"))
        .stdout(predicate::str::contains("Alice  S1  21   CS"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_bad_input_does_not_crash() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = write_config(temp_dir.path(), r#"{ "color": "never" }"#);

    roster(&config)
        .write_stdin(concat!(
            "7\n",
            "2\nS404\n",
            "1\nAlice\nS1\nabc\nCS\n",
            "3\nS1\n5\n\n",
            "6\n",
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice"))
        .stdout(predicate::str::contains("No student found with ID S404"))
        .stdout(predicate::str::contains("Invalid age: \"abc\""))
        .stdout(predicate::str::contains("No student found with ID S1"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = write_config(temp_dir.path(), "{}");

    roster(&config)
        .arg("--color")
        .arg("never")
        .write_stdin("1\nAlice\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"))
        .stdout(predicate::str::contains("Student Alice added").not());
}

#[test]
fn test_strict_age_flag() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = write_config(temp_dir.path(), r#"{ "color": "never" }"#);

    roster(&config)
        .write_stdin("1\nAlice\nS1\n20abc\nCS\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student Alice added"));

    roster(&config)
        .arg("--strict-age")
        .write_stdin("1\nAlice\nS1\n20abc\nCS\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid age: \"20abc\""))
        .stdout(predicate::str::contains("Student Alice added").not());
}

#[test]
fn test_malformed_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = write_config(temp_dir.path(), "{ not json");

    roster(&config)
        .write_stdin("6\n")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_missing_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("absent.json");

    roster(missing.to_str().unwrap())
        .write_stdin("6\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = write_config(temp_dir.path(), r#"{ "color": "never" }"#);

    roster(&config)
        .arg("--verbose")
        .write_stdin("1\nAlice\nS1\n20\nCS\n6\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("student added"))
        .stdout(predicate::str::contains("student added").not());
}
