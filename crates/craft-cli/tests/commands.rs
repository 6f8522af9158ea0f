//! Command tests over real files.

use craft_cli::commands::{self, DiffArgs, FormatArgs};
use craft_cli::{CliError, CraftConfig};
use craft_diff::DocumentDiff;
use craft_format::FieldOrder;
use craft_view::DiffViewMode;
use pretty_assertions::assert_eq;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn diff_prints_unified_view_and_summary() {
    let dir = TempDir::new().unwrap();
    let args = DiffArgs {
        original: write(&dir, "current.txt", "risk is low"),
        revised: write(&dir, "proposed.txt", "risk is high"),
        mode: Some(DiffViewMode::Unified),
        ..DiffArgs::default()
    };

    let out = commands::diff(&CraftConfig::default(), &args).unwrap();
    assert_eq!(
        out,
        "---- Proposed Changes (Highlighted) ----\nrisk is [-low-]{+high+}\n\n+1 words, -1 words, 2 unchanged\n"
    );
}

#[test]
fn diff_uses_configured_mode() {
    let dir = TempDir::new().unwrap();
    let args = DiffArgs {
        original: write(&dir, "a.txt", "one two"),
        revised: write(&dir, "b.txt", "one three"),
        ..DiffArgs::default()
    };
    let config = CraftConfig::default().with_view_mode(DiffViewMode::SideBySide);

    let out = commands::diff(&config, &args).unwrap();
    assert!(out.starts_with("---- Current Version ----\none two\n"));
}

#[test]
fn diff_json_output_parses_back() {
    let dir = TempDir::new().unwrap();
    let args = DiffArgs {
        original: write(&dir, "a.txt", "keep this"),
        revised: write(&dir, "b.txt", "keep that"),
        json: true,
        ..DiffArgs::default()
    };

    let out = commands::diff(&CraftConfig::default(), &args).unwrap();
    let parsed: DocumentDiff = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, DocumentDiff::compute("keep this", "keep that"));
}

#[test]
fn diff_tables_by_formatted_line() {
    let dir = TempDir::new().unwrap();
    let args = DiffArgs {
        original: write(&dir, "a.json", r#"{"status":"Low","item":"Drift"}"#),
        revised: write(&dir, "b.json", r#"{"status":"High","item":"Drift"}"#),
        mode: Some(DiffViewMode::SideBySideDiff),
        table: true,
        section_type: Some("model_risk_issues".to_string()),
        ..DiffArgs::default()
    };

    let out = commands::diff(&CraftConfig::default(), &args).unwrap();
    assert!(out.contains("{\n  \"item\": \"Drift\",\n[-  \"status\": \"Low\"\n-]}"));
    assert!(out.contains("{+  \"status\": \"High\"\n+}"));
}

#[test]
fn diff_missing_file() {
    let dir = TempDir::new().unwrap();
    let args = DiffArgs {
        original: dir.path().join("missing.txt"),
        revised: write(&dir, "b.txt", "x"),
        ..DiffArgs::default()
    };
    let err = commands::diff(&CraftConfig::default(), &args).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
}

#[test]
fn format_table_with_section_order() {
    let dir = TempDir::new().unwrap();
    let args = FormatArgs {
        path: write(&dir, "row.json", r#"{"notes":"n","item":"i"}"#),
        table: true,
        ..FormatArgs::default()
    };

    let out = commands::format(&CraftConfig::default(), &args).unwrap();
    assert_eq!(out, "{\n  \"item\": \"i\",\n  \"notes\": \"n\"\n}");
}

#[test]
fn format_explicit_order_and_indent() {
    let dir = TempDir::new().unwrap();
    let args = FormatArgs {
        path: write(&dir, "row.json", r#"{"a":1,"b":[true]}"#),
        table: true,
        field_order: Some(FieldOrder::parse_list("b,a")),
        ..FormatArgs::default()
    };
    let config = CraftConfig::default().with_indent(4);

    let out = commands::format(&config, &args).unwrap();
    assert_eq!(out, "{\n    \"b\": [\n        true\n    ],\n    \"a\": 1\n}");
}

#[test]
fn format_passes_plain_text_through() {
    let dir = TempDir::new().unwrap();
    let args = FormatArgs {
        path: write(&dir, "notes.txt", "hello world"),
        table: true,
        ..FormatArgs::default()
    };
    assert_eq!(commands::format(&CraftConfig::default(), &args).unwrap(), "hello world");
}

#[test]
fn summary_counts_words() {
    let dir = TempDir::new().unwrap();
    let out = commands::summary(
        &write(&dir, "a.txt", "alpha beta gamma"),
        &write(&dir, "b.txt", "alpha delta gamma epsilon"),
    )
    .unwrap();
    assert_eq!(out, "+2 words, -1 words, 2 unchanged");
}

#[test]
fn parse_mode_accepts_known_names() {
    assert_eq!(commands::parse_mode(None).unwrap(), None);
    assert_eq!(
        commands::parse_mode(Some("side-by-side")).unwrap(),
        Some(DiffViewMode::SideBySide)
    );
}

#[test]
fn parse_mode_rejects_unknown_name() {
    let err = commands::parse_mode(Some("split")).unwrap_err();
    assert!(matches!(err, CliError::ViewMode(_)));
    assert!(err.to_string().starts_with("unknown view mode 'split'"));
}

#[test]
fn diff_logs_summary_at_info_only() {
    let dir = TempDir::new().unwrap();
    let args = DiffArgs {
        original: write(&dir, "current.txt", "one two"),
        revised: write(&dir, "proposed.txt", "one three"),
        json: true,
        ..DiffArgs::default()
    };

    let buffer = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&buffer);
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(move || LogSink(Arc::clone(&sink)))
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        commands::diff(&CraftConfig::default(), &args).unwrap();
    });

    let logs = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
    assert!(logs.contains("INFO"));
    assert!(logs.contains("diffed drafts"));
    assert!(logs.contains("+1 words, -1 words, 1 unchanged"));
    assert!(!logs.contains("computed document diff"));
}

struct LogSink(Arc<Mutex<Vec<u8>>>);

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
