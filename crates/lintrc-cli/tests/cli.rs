//! End-to-end tests for the lintrc binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lintrc() -> Command {
    let mut cmd = Command::cargo_bin("lintrc").unwrap();
    // Keep the process environment out of mode resolution unless a test
    // sets it explicitly.
    cmd.env_remove("NODE_ENV");
    cmd
}

#[test]
fn generate_defaults_to_development() {
    lintrc()
        .arg("generate")
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""no-console": "off""#)
                .and(predicate::str::contains(r#""no-debugger": "off""#)),
        );
}

#[test]
fn generate_production_mode_is_strict() {
    lintrc()
        .args(["generate", "--mode", "production"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""no-console": "error""#)
                .and(predicate::str::contains(r#""no-debugger": "error""#)),
        );
}

#[test]
fn generate_honors_node_env() {
    lintrc()
        .arg("generate")
        .env("NODE_ENV", "production")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""no-console": "error""#));
}

#[test]
fn mode_flag_overrides_node_env() {
    lintrc()
        .args(["generate", "--mode", "development"])
        .env("NODE_ENV", "production")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""no-console": "off""#));
}

#[test]
fn unknown_mode_falls_back_to_development() {
    lintrc()
        .args(["generate", "--mode", "staging"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""no-console": "off""#));
}

#[test]
fn generate_emits_static_overrides() {
    lintrc()
        .args(["generate", "--mode", "production"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""vue/v-bind-style": "warn""#)
                .and(predicate::str::contains(r#""eslint:recommended""#))
                .and(predicate::str::contains(r#""**/src/modules/**/*""#)),
        );
}

#[test]
fn check_passes_for_generated_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".eslintrc.json");

    lintrc()
        .args(["generate", "--output"])
        .arg(&path)
        .assert()
        .success();

    lintrc().arg("check").arg(&path).assert().success();
}

#[test]
fn check_detects_drift() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".eslintrc.json");

    // Parseable, but not what the assembler produces.
    std::fs::write(
        &path,
        r#"{"root": false, "env": {}, "extends": [], "rules": {}, "ignorePatterns": []}"#,
    )
    .unwrap();

    lintrc().arg("check").arg(&path).assert().failure();
}

#[test]
fn check_detects_mode_drift() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".eslintrc.json");

    lintrc()
        .args(["generate", "--mode", "development", "--output"])
        .arg(&path)
        .assert()
        .success();

    lintrc()
        .args(["check", "--mode", "production"])
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn schema_describes_the_config_shape() {
    lintrc()
        .arg("schema")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("LintConfig")
                .and(predicate::str::contains("ignorePatterns")),
        );
}
