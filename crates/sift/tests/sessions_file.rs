//! End-to-end runs of `sift sessions` against files on disk.

use std::io::Write as _;

use clap::Parser;
use sift::config::Config;
use sift::{Cli, SiftError, dispatch};
use tempfile::NamedTempFile;

const NOW: i64 = 1_700_000_000;

fn sessions_file(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(body.as_bytes()).expect("write sessions");
    file
}

fn sample() -> NamedTempFile {
    let body = format!(
        r#"[
  {{"id": "a", "title": "fix tests", "created_at": {a}, "updated_at": {a}}},
  {{"id": "b", "title": "hello world example", "created_at": {b},
    "match_offsets": [12, 13, 14]}}
]"#,
        a = NOW - 180,
        b = NOW - 7200,
    );
    sessions_file(&body)
}

fn run(args: &[&str]) -> Result<String, SiftError> {
    let cli = Cli::try_parse_from(args).expect("valid arguments");
    let mut out = Vec::new();
    dispatch(cli, &Config::default(), &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn renders_one_row_per_session() {
    let file = sample();
    let path = file.path().to_str().unwrap();
    let now = NOW.to_string();
    let out = run(&["sift", "sessions", path, "--width", "40", "--now", &now]).unwrap();

    let rows: Vec<&str> = out.lines().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], format!("  fix tests{}3 minutes ago ", " ".repeat(16)));
    assert!(rows[1].ends_with("  2 hours ago "), "{:?}", rows[1]);
}

#[test]
fn active_and_focused_sessions() {
    let file = sample();
    let path = file.path().to_str().unwrap();
    let now = NOW.to_string();
    let out = run(&[
        "sift", "sessions", path, "-w", "26", "--now", &now, "--active", "b", "--focus", "b",
    ])
    .unwrap();

    let rows: Vec<&str> = out.lines().collect();
    assert_eq!(rows[1], "> …o world exa  Active now ");
}

#[test]
fn json_rows_carry_segments() {
    let file = sample();
    let path = file.path().to_str().unwrap();
    let now = NOW.to_string();
    let out = run(&["sift", "--json", "sessions", path, "-w", "40", "--now", &now]).unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["id"], "a");
    assert_eq!(value[1]["row"]["title_highlights"][0]["start"], 12);
    let kinds: Vec<&str> = value[1]["row"]["segments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|segment| segment["kind"].as_str().unwrap())
        .collect();
    assert!(kinds.contains(&"title_match"));
    assert_eq!(kinds.last(), Some(&"padding"));
}

#[test]
fn unknown_active_id_is_an_error() {
    let file = sample();
    let path = file.path().to_str().unwrap();
    let error = run(&["sift", "sessions", path, "--active", "zzz"]).unwrap_err();
    assert!(matches!(error, SiftError::SessionNotFound { ref id } if id == "zzz"));
    assert_eq!(error.exit_code(), 3);
}

#[test]
fn unsorted_offsets_in_file_are_rejected() {
    let file = sessions_file(r#"[{"id": "a", "title": "abc", "created_at": 1, "match_offsets": [2, 0]}]"#);
    let path = file.path().to_str().unwrap();
    let error = run(&["sift", "sessions", path]).unwrap_err();
    assert!(matches!(error, SiftError::InvalidOffsets { .. }));
}

#[test]
fn malformed_json_is_an_error() {
    let file = sessions_file("{ not json");
    let path = file.path().to_str().unwrap();
    let error = run(&["sift", "sessions", path]).unwrap_err();
    assert!(matches!(error, SiftError::Json(_)));
    assert_eq!(error.exit_code(), 1);
}
