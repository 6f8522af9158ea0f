//! Plain-text rendering for terminals
//!
//! Highlighted removals print as `[-text-]`, highlighted additions as
//! `{+text+}`; everything else prints verbatim.

use crate::view::{DiffView, Pane, StyledSegment};
use craft_diff::DiffKind;
use std::fmt::Write;

const PANE_RULE: &str = "----";

/// Render `view` as plain text
#[must_use]
pub fn render_text(view: &DiffView) -> String {
    let mut out = String::new();
    match view {
        DiffView::Unified { pane, .. } => write_segment_pane(&mut out, pane),
        DiffView::SideBySide { left, right, .. } => {
            write_heading(&mut out, left.title);
            out.push_str(&left.body);
            out.push_str("\n\n");
            write_heading(&mut out, right.title);
            out.push_str(&right.body);
        }
        DiffView::SideBySideDiff { left, right, .. } => {
            write_segment_pane(&mut out, left);
            out.push_str("\n\n");
            write_segment_pane(&mut out, right);
        }
    }
    out.push('\n');
    out
}

fn write_heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{PANE_RULE} {title} {PANE_RULE}");
}

fn write_segment_pane(out: &mut String, pane: &Pane<Vec<StyledSegment>>) {
    write_heading(out, pane.title);
    for segment in &pane.body {
        write_segment(out, segment);
    }
}

fn write_segment(out: &mut String, segment: &StyledSegment) {
    if !segment.style.is_highlighted() {
        out.push_str(&segment.text);
        return;
    }
    let (open, close) = match segment.kind {
        DiffKind::Removed => ("[-", "-]"),
        DiffKind::Added => ("{+", "+}"),
        DiffKind::Unchanged => ("", ""),
    };
    let _ = write!(out, "{open}{}{close}", segment.text);
}
