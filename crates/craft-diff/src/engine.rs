//! Document diff computation
//!
//! Produces the segment sequence for a pair of draft texts. Structured
//! content (both sides look like JSON) is compared line by line so that the
//! layout survives; prose is compared word by word.

use crate::segment::{DiffKind, DiffSegment};
use crate::summary::DiffSummary;
use serde::{Deserialize, Serialize};
use similar::{capture_diff_slices, Algorithm, DiffTag};
use std::ops::Range;

/// Token granularity used for a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Lines, terminators kept
    Line,
    /// Words and the whitespace between them
    Word,
}

impl Granularity {
    /// Pick the granularity for a pair of texts
    ///
    /// Line mode when both trimmed texts start with `{` or `[`.
    #[must_use]
    pub fn detect(original: &str, revised: &str) -> Self {
        if looks_structured(original) && looks_structured(revised) {
            Self::Line
        } else {
            Self::Word
        }
    }
}

fn looks_structured(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

/// Segments plus their summary, as returned alongside a proposed draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDiff {
    /// Ordered segments
    pub diff_segments: Vec<DiffSegment>,
    /// Word counts of `diff_segments`
    pub diff_summary: DiffSummary,
}

impl DocumentDiff {
    /// Diff two texts and summarize the result
    #[must_use]
    pub fn compute(original: &str, revised: &str) -> Self {
        let diff_segments = compute_document_diff(original, revised);
        let diff_summary = DiffSummary::from_segments(&diff_segments);
        Self {
            diff_segments,
            diff_summary,
        }
    }
}

/// Compute the segment sequence between two document texts
///
/// When one side is blank the whole trimmed other side becomes a single
/// `added` or `removed` segment. Otherwise the segments reconstruct both
/// inputs exactly (word mode compares the trimmed texts).
#[must_use]
pub fn compute_document_diff(original: &str, revised: &str) -> Vec<DiffSegment> {
    let (original_trimmed, revised_trimmed) = (original.trim(), revised.trim());
    if original_trimmed.is_empty() || revised_trimmed.is_empty() {
        return diff_blank(original_trimmed, revised_trimmed);
    }

    let granularity = Granularity::detect(original, revised);
    let segments = match granularity {
        Granularity::Line => diff_tokens(&split_lines(original), &split_lines(revised)),
        Granularity::Word => merge_adjacent(diff_tokens(
            &split_words(original_trimmed),
            &split_words(revised_trimmed),
        )),
    };

    tracing::debug!(
        ?granularity,
        segments = segments.len(),
        "computed document diff"
    );
    segments
}

fn diff_blank(original: &str, revised: &str) -> Vec<DiffSegment> {
    match (original.is_empty(), revised.is_empty()) {
        (false, true) => vec![DiffSegment::removed(original)],
        (true, false) => vec![DiffSegment::added(revised)],
        _ => Vec::new(),
    }
}

fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Split into alternating word and whitespace runs
fn split_words(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space = None;

    for (idx, ch) in text.char_indices() {
        let space = ch.is_whitespace();
        if in_space.is_some_and(|prev| prev != space) {
            tokens.push(&text[start..idx]);
            start = idx;
        }
        in_space = Some(space);
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

fn diff_tokens(old: &[&str], new: &[&str]) -> Vec<DiffSegment> {
    let mut segments = Vec::new();

    for op in capture_diff_slices(Algorithm::Myers, old, new) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => push_run(&mut segments, DiffKind::Unchanged, old, old_range),
            DiffTag::Delete => push_run(&mut segments, DiffKind::Removed, old, old_range),
            DiffTag::Insert => push_run(&mut segments, DiffKind::Added, new, new_range),
            DiffTag::Replace => {
                push_run(&mut segments, DiffKind::Removed, old, old_range);
                push_run(&mut segments, DiffKind::Added, new, new_range);
            }
        }
    }

    segments
}

fn push_run(segments: &mut Vec<DiffSegment>, kind: DiffKind, tokens: &[&str], range: Range<usize>) {
    let text: String = tokens[range].concat();
    if !text.is_empty() {
        segments.push(DiffSegment::new(kind, text));
    }
}

/// Merge neighbours of the same kind
fn merge_adjacent(segments: Vec<DiffSegment>) -> Vec<DiffSegment> {
    let mut merged: Vec<DiffSegment> = Vec::with_capacity(segments.len());

    for segment in segments {
        match merged.last_mut() {
            Some(current) if current.kind == segment.kind => current.text.push_str(&segment.text),
            _ => merged.push(segment),
        }
    }

    merged
}
