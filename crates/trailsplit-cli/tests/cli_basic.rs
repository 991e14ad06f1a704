//! Basic CLI E2E tests.
//!
//! Each test runs the binary against its own temporary HOME so sessions
//! and settings never leak between tests (or into the real user config).

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

const SAMPLE_GPX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="trailsplit-tests" xmlns="http://www.topografix.com/GPX/1/1">
  <trk>
    <trkseg>
      <trkpt lat="51.000" lon="3.700"><ele>10.0</ele></trkpt>
      <trkpt lat="51.001" lon="3.700"><ele>12.0</ele></trkpt>
      <trkpt lat="51.002" lon="3.700"><ele>14.0</ele></trkpt>
      <trkpt lat="51.003" lon="3.700"><ele>16.0</ele></trkpt>
      <trkpt lat="51.004" lon="3.700"></trkpt>
      <trkpt lat="51.005" lon="3.700"><ele>20.0</ele></trkpt>
    </trkseg>
  </trk>
</gpx>
"#;

/// Run a CLI command in the given HOME and return (stdout, stderr, code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "trailsplit-cli", "--quiet", "--"])
        .args(args)
        .env("HOME", home)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\nstderr: {stderr}");
    stdout
}

fn home_with_track() -> TempDir {
    let home = tempfile::tempdir().unwrap();
    let gpx_path = home.path().join("sample.gpx");
    std::fs::write(&gpx_path, SAMPLE_GPX).unwrap();
    run_cli_success(home.path(), &["track", "import", gpx_path.to_str().unwrap()]);
    home
}

#[test]
fn track_import_reports_point_count() {
    let home = tempfile::tempdir().unwrap();
    let gpx_path = home.path().join("sample.gpx");
    std::fs::write(&gpx_path, SAMPLE_GPX).unwrap();

    let stdout = run_cli_success(home.path(), &["track", "import", gpx_path.to_str().unwrap()]);
    assert!(stdout.contains("imported 6 track points"), "got: {stdout}");
}

#[test]
fn track_show_outputs_stats_json() {
    let home = home_with_track();
    let stdout = run_cli_success(home.path(), &["track", "show", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["pointCount"], 6);
    assert!(value["stats"]["distance_km"].as_f64().unwrap() > 0.0);
    assert!(value["difficulty"]["tier"].is_string());
}

#[test]
fn segments_lists_cumulative_total() {
    let home = home_with_track();
    run_cli_success(home.path(), &["marker", "add", "--index", "3"]);

    let stdout = run_cli_success(home.path(), &["segments"]);
    assert!(stdout.contains("Segment 1"), "got: {stdout}");
    assert!(stdout.contains("Segment 2"), "got: {stdout}");
    assert!(stdout.contains("Total (cumulative)"), "got: {stdout}");
}

#[test]
fn segments_json_partitions_track() {
    let home = home_with_track();
    run_cli_success(home.path(), &["marker", "add", "--index", "2"]);

    let stdout = run_cli_success(home.path(), &["segments", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let segments = value["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0]["segment"]["start_index"], 0);
    assert_eq!(segments[0]["segment"]["end_index"], 2);
    assert_eq!(segments[1]["segment"]["end_index"], 5);
}

#[test]
fn marker_add_by_position_resolves_nearest_point() {
    let home = home_with_track();
    run_cli_success(
        home.path(),
        &["marker", "add", "--lat", "51.0021", "--lon", "3.700", "--kind", "camping"],
    );

    let stdout = run_cli_success(home.path(), &["marker", "list", "--json"]);
    let markers: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(markers[0]["pointIndex"], 2);
    assert_eq!(markers[0]["type"], "camping");
}

#[test]
fn undo_restores_deleted_marker() {
    let home = home_with_track();
    run_cli_success(home.path(), &["marker", "add", "--index", "4", "--kind", "hotel"]);
    run_cli_success(home.path(), &["marker", "delete", "0"]);

    let stdout = run_cli_success(home.path(), &["marker", "list"]);
    assert!(stdout.contains("no markers"), "got: {stdout}");

    run_cli_success(home.path(), &["undo"]);
    let stdout = run_cli_success(home.path(), &["marker", "list"]);
    assert!(stdout.contains("hotel @ point 4"), "got: {stdout}");
}

#[test]
fn undo_on_empty_history_is_benign() {
    let home = home_with_track();
    let stdout = run_cli_success(home.path(), &["undo"]);
    assert!(stdout.contains("nothing to undo"), "got: {stdout}");
}

#[test]
fn settings_set_and_get() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["settings", "set", "fitness_level", "4"]);
    let stdout = run_cli_success(home.path(), &["settings", "get", "fitness_level"]);
    assert_eq!(stdout.trim(), "4");
}

#[test]
fn settings_list_shows_defaults() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["settings", "list"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["fitness_level"], 2);
    assert_eq!(value["backpack_weight_kg"], 15.0);
}

#[test]
fn settings_reject_out_of_range_fitness() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["settings", "set", "fitness_level", "9"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("fitness_level"), "got: {stderr}");
}

#[test]
fn project_save_and_load_roundtrip() {
    let home = home_with_track();
    run_cli_success(home.path(), &["marker", "add", "--index", "1", "--kind", "rest"]);

    let project_path = home.path().join("trip.json");
    run_cli_success(home.path(), &["project", "save", project_path.to_str().unwrap()]);

    run_cli_success(home.path(), &["project", "clear"]);
    let stdout = run_cli_success(home.path(), &["segments"]);
    assert!(stdout.contains("no track loaded"), "got: {stdout}");

    let stdout = run_cli_success(
        home.path(),
        &["project", "load", project_path.to_str().unwrap()],
    );
    assert!(stdout.contains("6 track points and 1 markers"), "got: {stdout}");
}

#[test]
fn legacy_project_file_loads_as_splits() {
    let home = tempfile::tempdir().unwrap();
    let legacy = r#"{
        "trackPoints": [
            {"lat": 51.0, "lon": 3.7, "ele": 10.0},
            {"lat": 51.001, "lon": 3.7, "ele": 11.0},
            {"lat": 51.002, "lon": 3.7, "ele": 12.0}
        ],
        "markerIndices": [1]
    }"#;
    let path = home.path().join("legacy.json");
    std::fs::write(&path, legacy).unwrap();

    run_cli_success(home.path(), &["project", "load", path.to_str().unwrap()]);
    let stdout = run_cli_success(home.path(), &["marker", "list"]);
    assert!(stdout.contains("split @ point 1"), "got: {stdout}");
}

#[test]
fn invalid_project_file_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    let path = home.path().join("broken.json");
    std::fs::write(&path, r#"{"version": "2.0", "markers": []}"#).unwrap();

    let (_, stderr, code) = run_cli(home.path(), &["project", "load", path.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("trackPoints"), "got: {stderr}");
}
