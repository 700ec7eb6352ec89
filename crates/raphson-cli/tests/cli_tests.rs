//! End-to-end tests for the `raphson` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use raphson_math::derivative::DEFAULT_STEP;
use raphson_math::solvers::approximate_root_to;

/// Binary with the configuration environment cleared.
fn raphson() -> Command {
    let mut cmd = Command::cargo_bin("raphson").unwrap();
    for var in [
        "RAPHSON_GUESS",
        "RAPHSON_ITERATIONS",
        "RAPHSON_SECANT",
        "RAPHSON_STEP",
        "RAPHSON_CONFIG",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{output:?}");
    String::from_utf8(output.stdout).unwrap()
}

fn library_output(guess: f64, n: u32, use_secant: bool) -> String {
    let mut out = Vec::new();
    approximate_root_to(&mut out, guess, n, use_secant, DEFAULT_STEP).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn default_run_prints_eleven_lines() {
    let text = stdout_of(&mut raphson());
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "x_0 = -4");
    assert!(lines[10].starts_with("x_10 = -1.3166"), "{}", lines[10]);
}

#[test]
fn secant_run_matches_library() {
    let text = stdout_of(raphson().args(["--guess", "-4", "-n", "10", "--secant"]));

    assert_eq!(text, library_output(-4.0, 10, true));
    assert!(text.lines().last().unwrap().starts_with("x_10 = -1.3166"));
}

#[test]
fn analytic_from_five_reaches_upper_root() {
    let text = stdout_of(raphson().args(["-g", "5", "-n", "10"]));

    assert_eq!(text, library_output(5.0, 10, false));
    assert!(text.lines().last().unwrap().starts_with("x_10 = 5.3166"));
}

#[test]
fn zero_iterations_prints_guess_only() {
    raphson()
        .args(["-g", "1.5", "-n", "0"])
        .assert()
        .success()
        .stdout("x_0 = 1.5\n");
}

#[test]
fn zero_derivative_propagates_nan() {
    raphson()
        .args(["-g", "2", "-n", "3"])
        .assert()
        .success()
        .stdout("x_0 = 2\nx_1 = inf\nx_2 = NaN\nx_3 = NaN\n");
}

#[test]
fn output_is_deterministic() {
    let first = stdout_of(raphson().args(["-g", "-4", "--secant"]));
    let second = stdout_of(raphson().args(["-g", "-4", "--secant"]));
    assert_eq!(first, second);
}

#[test]
fn json_output() {
    let text = stdout_of(raphson().args(["--secant", "--format", "json"]));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let items = value.as_array().unwrap();

    assert_eq!(items.len(), 11);
    assert_eq!(items[0]["index"], 0);
    assert_eq!(items[0]["value"], -4.0);
    let last = items[10]["value"].as_f64().unwrap();
    assert!((last - (2.0 - 11.0_f64.sqrt())).abs() < 1e-4);
}

#[test]
fn csv_output() {
    let text = stdout_of(raphson().args(["-n", "2", "-f", "csv"]));
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "index,value");
    assert_eq!(lines[1], "0,-4.0");
    assert!(lines[2].starts_with("1,"));
}

#[test]
fn config_file_and_overrides() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "guess = 5.0\niterations = 3").unwrap();

    let text = stdout_of(raphson().arg("--config").arg(file.path()));
    assert_eq!(text.lines().count(), 4);
    assert!(text.starts_with("x_0 = 5\n"));

    let text = stdout_of(raphson().arg("-c").arg(file.path()).args(["-n", "1"]));
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn environment_variables() {
    let text = stdout_of(
        raphson()
            .env("RAPHSON_ITERATIONS", "2")
            .env("RAPHSON_GUESS", "5"),
    );
    assert_eq!(text, library_output(5.0, 2, false));
}

#[test]
fn secant_environment_variables() {
    let expected = library_output(-4.0, 10, true);

    for value in ["1", "true", "yes", "on"] {
        let text = stdout_of(raphson().env("RAPHSON_SECANT", value));
        assert_eq!(text, expected, "RAPHSON_SECANT={value}");
    }

    let text = stdout_of(raphson().env("RAPHSON_SECANT", "0"));
    assert_eq!(text, library_output(-4.0, 10, false));
}

#[test]
fn step_and_config_environment_variables() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "guess = 5.0\niterations = 2\nsecant = true").unwrap();

    let coarse = stdout_of(
        raphson()
            .env("RAPHSON_CONFIG", file.path())
            .env("RAPHSON_STEP", "0.5"),
    );
    let lines: Vec<_> = coarse.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "x_0 = 5");
    // f(5) = -2 and the forward difference with h = 0.5 is 6.5.
    assert_eq!(lines[1], format!("x_1 = {}", 5.0 + 2.0 / 6.5));

    let default_step = stdout_of(raphson().env("RAPHSON_CONFIG", file.path()));
    assert_eq!(default_step, library_output(5.0, 2, true));
}

#[test]
fn degenerate_run_keeps_stderr_quiet() {
    raphson()
        .args(["-g", "2", "-n", "2"])
        .assert()
        .success()
        .stdout("x_0 = 2\nx_1 = inf\nx_2 = NaN\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn invalid_config_file_fails() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "iterations = \"many\"").unwrap();

    raphson()
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn missing_config_file_fails() {
    raphson()
        .args(["--config", "/nonexistent/raphson.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read config file"));
}

#[test]
fn negative_iteration_count_rejected() {
    raphson()
        .args(["-n", "-3"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn zero_step_rejected_in_secant_mode() {
    raphson()
        .args(["--secant", "--step", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid parameters"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let output = raphson().args(["-v", "-n", "1"]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        library_output(-4.0, 1, false)
    );
    assert!(!output.stderr.is_empty());
}
