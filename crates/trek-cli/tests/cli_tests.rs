//! End-to-end tests for the trek command-line shell.
//!
//! Arguments go through the real clap parser; output is captured in
//! in-memory buffers.

use clap::Parser;
use trek_cli::{run, Args, CliError, OutputFormat, RunConfig};
use trek_types::{MovementModel, Position, DEFAULT_PATH};

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

fn config(argv: &[&str]) -> RunConfig {
    let mut full = vec!["trek"];
    full.extend_from_slice(argv);
    RunConfig::from(Args::try_parse_from(full).expect("arguments should parse"))
}

/// Run with the given arguments; returns (result, stdout, stderr).
fn run_with(argv: &[&str]) -> (Result<(), CliError>, String, String) {
    let cfg = config(argv);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = run(&cfg, &mut out, &mut err);
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

// ─────────────────────────────────────────────────────────────────────
// Argument resolution
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_defaults() {
    let cfg = config(&[]);
    assert_eq!(cfg, RunConfig::default());
    assert_eq!(cfg.path, DEFAULT_PATH);
    assert_eq!(cfg.model, MovementModel::TurnThenMove);
    assert_eq!(cfg.start, Position::ORIGIN);
    assert_eq!(cfg.format, OutputFormat::Text);
}

#[test]
fn test_flags_resolve() {
    let cfg = config(&[
        "--path", "3r2l", "--fixed-axes", "-v", "--start", "-3,4", "--format", "json",
    ]);
    assert_eq!(cfg.path, "3r2l");
    assert_eq!(cfg.model, MovementModel::FixedAxes);
    assert!(cfg.verbose);
    assert_eq!(cfg.start, Position::new(-3, 4));
    assert_eq!(cfg.format, OutputFormat::Json);
}

#[test]
fn test_empty_path_falls_back_to_default() {
    assert_eq!(config(&["--path", ""]).path, DEFAULT_PATH);
}

#[test]
fn test_bad_start_is_rejected_by_parser() {
    assert!(Args::try_parse_from(["trek", "--start", "north"]).is_err());
    assert!(Args::try_parse_from(["trek", "--format", "xml"]).is_err());
}

// ─────────────────────────────────────────────────────────────────────
// Text report
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_default_text_report() {
    let (result, out, err) = run_with(&[]);
    assert!(result.is_ok());
    assert!(err.is_empty());
    assert_eq!(
        out,
        "Adventurer Journey\n\
         Path: 15F6B6B5L16R8B16F20L6F13F11R\n\
         Model: turn-then-move\n\
         End Coords & Direction: (34, -4, 'S')\n\
         Distance: 34.23448553724738\n"
    );
}

#[test]
fn test_fixed_axes_text_report() {
    let (result, out, _) = run_with(&["--fixed-axes"]);
    assert!(result.is_ok());
    assert!(out.contains("Model: fixed-axes\n"));
    assert!(out.contains("End Coords & Direction: (2, 30, 'N')\n"));
    assert!(out.contains("Distance: 30.066592756745816\n"));
}

#[test]
fn test_verbose_lists_every_state() {
    let (_, out, _) = run_with(&["--path", "0L4F", "--verbose"]);
    assert!(out.contains(
        "Coords:\n\
         (0, 0) direction=N\n\
         (0, 0) direction=W\n\
         (-4, 0) direction=W\n"
    ));
    assert!(out.contains("Distance: 4.0\n"));
}

#[test]
fn test_zero_distance_prints_decimal() {
    let (_, out, _) = run_with(&["--path", "1R1R1R1R"]);
    assert!(out.ends_with("Distance: 0.0\n"), "output: {out}");
}

#[test]
fn test_start_offset_does_not_change_distance() {
    let (_, out, _) = run_with(&["--start", "100,-50"]);
    assert!(out.contains("End Coords & Direction: (134, -54, 'S')\n"));
    assert!(out.contains("Distance: 34.23448553724738\n"));
}

#[test]
fn test_end_coords_past_i64_max() {
    let (result, out, _) = run_with(&["--fixed-axes", "--path", "9223372036854775807F1F"]);
    assert!(result.is_ok());
    assert!(out.contains("End Coords & Direction: (0, 9223372036854775808, 'N')\n"));
}

// ─────────────────────────────────────────────────────────────────────
// JSON report
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_json_report() {
    let (result, out, _) = run_with(&["--format", "json", "--fixed-axes"]);
    assert!(result.is_ok());
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["path"], DEFAULT_PATH);
    assert_eq!(value["model"], "fixed-axes");
    assert_eq!(value["end"]["x"], 2);
    assert_eq!(value["end"]["y"], 30);
    assert_eq!(value["end"]["heading"], "N");
    assert!((value["distance"].as_f64().unwrap() - 30.066592756745816).abs() < 1e-12);
    assert!(value.get("states").is_none());
}

#[test]
fn test_json_report_verbose_includes_states() {
    let (_, out, _) = run_with(&["--format", "json", "-v", "--path", "1F1R1F"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let states = value["states"].as_array().unwrap();
    assert_eq!(states.len(), 4);
    assert_eq!(states[3]["x"], 2);
    assert_eq!(states[3]["y"], 1);
    assert_eq!(states[3]["heading"], "E");
}

// ─────────────────────────────────────────────────────────────────────
// Invalid input
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_invalid_path_fails_with_message() {
    let (result, out, err) = run_with(&["--path", "12X"]);
    assert!(matches!(result, Err(CliError::InvalidPath(ref p)) if p == "12X"));
    assert!(out.is_empty());
    assert!(err.starts_with("Invalid path format: 12X\n"), "stderr: {err}");
    assert!(err.contains("E101"));
    assert!(err.contains("E100"));
    assert!(err.contains("help: "));
}

#[test]
fn test_whitespace_only_path_is_invalid() {
    let (result, _, err) = run_with(&["--path", "   "]);
    assert!(result.is_err());
    assert!(err.contains("E200"));
}
