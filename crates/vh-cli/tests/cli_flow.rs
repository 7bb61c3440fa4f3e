//! End-to-end tests driving the `vh` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const EXPORT: &str = include_str!("fixtures/ViewingActivity.csv");
const EXPECTED_TREE: &str = include_str!("fixtures/expected-tree.json");

fn vh_binary() -> String {
    env!("CARGO_BIN_EXE_vh").to_string()
}

/// Runs `vh` isolated from the user's config and environment.
fn run_vh(home: &Path, args: &[&str]) -> Output {
    Command::new(vh_binary())
        .env("HOME", home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("VH_JSON_FILE_NAME")
        .env_remove("VH_HTML_FILE_NAME")
        .env_remove("VH_TEMPLATE_PATH")
        .args(args)
        .output()
        .expect("failed to run vh")
}

fn write_export(temp: &TempDir) -> String {
    let input = temp.path().join("ViewingActivity.csv");
    fs::write(&input, EXPORT).unwrap();
    input.to_str().unwrap().to_string()
}

#[test]
fn test_legacy_flags_write_json_and_html() {
    let temp = TempDir::new().unwrap();
    let input = write_export(&temp);
    let output_dir = temp.path().join("site");

    let output = run_vh(
        temp.path(),
        &["-input", &input, "-output", output_dir.to_str().unwrap()],
    );
    assert!(
        output.status.success(),
        "vh should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json = fs::read_to_string(output_dir.join("data-to-visualize.json")).unwrap();
    assert_eq!(json, EXPECTED_TREE.trim_end());

    let html = fs::read_to_string(output_dir.join("index.html")).unwrap();
    assert!(html.contains("<td>Ana</td><td>Inception</td><td>Movie</td>"));
    assert!(html.contains("<td>Ben</td><td>Show</td><td>Series</td>"));
    assert!(html.contains(">01:00:00</td>"));
    assert!(!html.contains("Trailer"));
}

#[test]
fn test_double_dash_flags() {
    let temp = TempDir::new().unwrap();
    let input = write_export(&temp);
    let output_dir = temp.path().join("out");

    let output = run_vh(
        temp.path(),
        &["--input", &input, "--output", output_dir.to_str().unwrap()],
    );
    assert!(output.status.success());
    assert!(output_dir.join("data-to-visualize.json").is_file());
}

#[test]
fn test_repeated_runs_produce_identical_json() {
    let temp = TempDir::new().unwrap();
    let input = write_export(&temp);
    let first_dir = temp.path().join("first");
    let second_dir = temp.path().join("second");

    for dir in [&first_dir, &second_dir] {
        let output = run_vh(temp.path(), &["-input", &input, "-output", dir.to_str().unwrap()]);
        assert!(output.status.success());
    }

    let first = fs::read(first_dir.join("data-to-visualize.json")).unwrap();
    let second = fs::read(second_dir.join("data-to-visualize.json")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_input_flag_fails() {
    let temp = TempDir::new().unwrap();
    let output = run_vh(temp.path(), &["-output", temp.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no input path given"), "stderr: {stderr}");
}

#[test]
fn test_unreadable_input_fails() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.csv");

    let output = run_vh(
        temp.path(),
        &["-input", missing.to_str().unwrap(), "-output", temp.path().to_str().unwrap()],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read viewing activity"), "stderr: {stderr}");
}

#[test]
fn test_output_parent_is_not_created() {
    let temp = TempDir::new().unwrap();
    let input = write_export(&temp);
    let nested = temp.path().join("missing").join("site");

    let output = run_vh(
        temp.path(),
        &["-input", &input, "-output", nested.to_str().unwrap()],
    );

    assert!(!output.status.success());
    assert!(!temp.path().join("missing").exists());
}

#[test]
fn test_short_row_is_fatal() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("short.csv");
    fs::write(&input, "Ana,2024-01-01,00:10:00,,Inception\n").unwrap();

    let output = run_vh(
        temp.path(),
        &["-input", input.to_str().unwrap(), "-output", temp.path().to_str().unwrap()],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected at least 6"), "stderr: {stderr}");
}

#[test]
fn test_config_file_renames_outputs() {
    let temp = TempDir::new().unwrap();
    let input = write_export(&temp);
    let config = temp.path().join("vh.toml");
    fs::write(&config, "json_file_name = \"tree.json\"\n").unwrap();
    let output_dir = temp.path().join("site");

    let output = run_vh(
        temp.path(),
        &[
            "--config",
            config.to_str().unwrap(),
            "-input",
            &input,
            "-output",
            output_dir.to_str().unwrap(),
        ],
    );

    assert!(output.status.success());
    assert!(output_dir.join("tree.json").is_file());
    assert!(output_dir.join("index.html").is_file());
}
