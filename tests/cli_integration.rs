use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn run_nbnames(args: &[&str], home: &Path) -> (bool, String, String) {
    let bin = std::env::var("CARGO_BIN_EXE_nbnames").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("nbnames.exe");
        } else {
            path.push("nbnames");
        }
        path.to_string_lossy().into_owned()
    });
    let output = Command::new(bin)
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .expect("run nbnames");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

fn json_strings(stdout: &str) -> Vec<String> {
    let json: Value = serde_json::from_str(stdout).expect("json");
    json.as_array()
        .expect("array output")
        .iter()
        .map(|v| v.as_str().expect("string").to_string())
        .collect()
}

#[test]
fn format_expands_ranges_and_prints_lines() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, stderr) = run_nbnames(&["format", "sub-01@TO@03_task-rest"], home.path());
    assert!(ok, "stderr: {stderr}");
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        ["sub-01_task-rest", "sub-02_task-rest", "sub-03_task-rest"]
    );
}

#[test]
fn format_substitutes_date_in_requested_timezone() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, stderr) = run_nbnames(
        &["format", "-j", "--timezone", "UTC", "-p", "ses", "ses-001@DATE@"],
        home.path(),
    );
    assert!(ok, "stderr: {stderr}");

    let names = json_strings(&stdout);
    assert_eq!(names.len(), 1);
    let date = names[0].strip_prefix("ses-001_date-").expect("date pair");
    assert_eq!(date.len(), 8);
    assert!(date.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn format_failure_prints_message_and_exits_nonzero() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, stderr) =
        run_nbnames(&["format", "sub-001", "sub-002", "sub-001_@DATE@"], home.path());
    assert!(!ok);
    assert!(stdout.is_empty());
    assert_eq!(
        stderr.trim(),
        "sub names must all have unique integer ids after the sub prefix."
    );
}

#[test]
fn spaces_are_rejected() {
    let home = tempfile::tempdir().unwrap();
    let (ok, _, stderr) = run_nbnames(&["format", "-p", "ses", "ses- 001"], home.path());
    assert!(!ok);
    assert_eq!(stderr.trim(), "ses names cannot include spaces.");
}

#[test]
fn expand_reports_malformed_range() {
    let home = tempfile::tempdir().unwrap();
    let (ok, _, stderr) = run_nbnames(&["expand", "sub-01@TO@1M1"], home.path());
    assert!(!ok);
    assert_eq!(
        stderr.trim(),
        "The name: sub-01@TO@1M1 is not in required format for @TO@ keyword. \
         The start must be  be sub-<NUMBER>@TO@<NUMBER>)."
    );
}

#[test]
fn expand_does_not_validate() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, stderr) =
        run_nbnames(&["expand", "-j", "sub-4@TO@005_goodbye", "sub-1"], home.path());
    assert!(ok, "stderr: {stderr}");
    assert_eq!(
        json_strings(&stdout),
        ["sub-004_goodbye", "sub-005_goodbye", "sub-1"]
    );
}

#[test]
fn datetime_only_substitutes() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, stderr) = run_nbnames(
        &["datetime", "--timezone", "UTC", "sub-1@TIME@other-tag", "bad name"],
        home.path(),
    );
    assert!(ok, "stderr: {stderr}");
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("sub-1_time-"));
    assert!(lines[0].ends_with("_other-tag"));
    assert_eq!(lines[1], "bad name");
}

#[test]
fn extract_sorted_ints_as_json() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, stderr) = run_nbnames(
        &[
            "extract", "-k", "ses", "--int", "--sort", "-j",
            "sub-01_ses-1000", "sub-02_ses-0101", "sub-99_ses-0999",
        ],
        home.path(),
    );
    assert!(ok, "stderr: {stderr}");
    let json: Value = serde_json::from_str(&stdout).expect("json");
    assert_eq!(json, serde_json::json!([101, 999, 1000]));
}

#[test]
fn extract_reports_duplicate_key() {
    let home = tempfile::tempdir().unwrap();
    let (ok, _, stderr) = run_nbnames(
        &["extract", "-k", "date", "sub-001_date-12345_date-23456"],
        home.path(),
    );
    assert!(!ok);
    assert!(stderr.contains("There is more than one instance of date in sub-001_date-12345_date-23456"));
}

#[test]
fn inspect_json_flags_bad_date() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, stderr) =
        run_nbnames(&["inspect", "-j", "sub-001_date-2024"], home.path());
    assert!(ok, "stderr: {stderr}");
    let json: Value = serde_json::from_str(&stdout).expect("json");
    assert_eq!(json[0]["name"], "sub-001_date-2024");
    assert_eq!(json[0]["pairs"][0]["key"], "sub");
    assert_eq!(json[0]["pairs"][1]["issue"], "date value should be YYYYMMDD");
}

#[test]
fn tags_lists_registry() {
    let home = tempfile::tempdir().unwrap();
    let (ok, stdout, stderr) = run_nbnames(&["tags", "--json"], home.path());
    assert!(ok, "stderr: {stderr}");
    let json: Value = serde_json::from_str(&stdout).expect("json");
    let markers: Vec<_> = json
        .as_array()
        .expect("array")
        .iter()
        .map(|t| t["marker"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(markers, ["@DATE@", "@TIME@", "@DATETIME@", "@TO@"]);
}

#[test]
fn config_file_sets_prefix_and_json() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join(".nbnames.toml"), "prefix = \"ses\"\njson = true\n").unwrap();

    let (ok, stdout, stderr) = run_nbnames(&["format", "ses-1", "ses-2"], home.path());
    assert!(ok, "stderr: {stderr}");
    assert_eq!(json_strings(&stdout), ["ses-1", "ses-2"]);
}

#[test]
fn broken_config_warns_and_uses_defaults() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join(".nbnames.toml"), "prefix = [\n").unwrap();

    let (ok, stdout, stderr) = run_nbnames(&["format", "sub-1"], home.path());
    assert!(ok, "stderr: {stderr}");
    assert_eq!(stdout.trim(), "sub-1");
    assert!(stderr.contains("Warning: Failed to parse"));
}

#[test]
fn invalid_timezone_is_an_error() {
    let home = tempfile::tempdir().unwrap();
    let (ok, _, stderr) =
        run_nbnames(&["format", "--timezone", "Mars/Olympus", "sub-1"], home.path());
    assert!(!ok);
    assert_eq!(stderr.trim(), "Invalid timezone: Mars/Olympus");
}
