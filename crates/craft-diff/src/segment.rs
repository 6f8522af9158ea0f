//! Diff segments
//!
//! A revision is an ordered sequence of [`DiffSegment`]s. Concatenating the
//! text of the `unchanged` and `removed` segments gives the original
//! document; concatenating `unchanged` and `added` gives the revised one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a span of text relates to the before/after comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Present in both versions
    Unchanged,
    /// Only present in the revised version
    Added,
    /// Only present in the original version
    Removed,
}

impl DiffKind {
    /// All kinds, in display order
    pub const ALL: [DiffKind; 3] = [Self::Unchanged, Self::Added, Self::Removed];

    /// Whether text of this kind belongs to the original document
    #[inline]
    #[must_use]
    pub fn in_original(self) -> bool {
        matches!(self, Self::Unchanged | Self::Removed)
    }

    /// Whether text of this kind belongs to the revised document
    #[inline]
    #[must_use]
    pub fn in_revised(self) -> bool {
        matches!(self, Self::Unchanged | Self::Added)
    }

    /// Wire name (`unchanged`, `added`, `removed`)
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Added => "added",
            Self::Removed => "removed",
        }
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A span of text tagged with its [`DiffKind`]
///
/// Serializes as `{"type": "...", "text": "..."}`. Extra fields sent by the
/// generation backend (`original`, `revised`) are ignored on input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffSegment {
    /// Segment kind
    #[serde(rename = "type")]
    pub kind: DiffKind,

    /// Segment text
    pub text: String,
}

impl DiffSegment {
    /// Create new segment
    #[inline]
    #[must_use]
    pub fn new(kind: DiffKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Unchanged segment
    #[inline]
    #[must_use]
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self::new(DiffKind::Unchanged, text)
    }

    /// Added segment
    #[inline]
    #[must_use]
    pub fn added(text: impl Into<String>) -> Self {
        Self::new(DiffKind::Added, text)
    }

    /// Removed segment
    #[inline]
    #[must_use]
    pub fn removed(text: impl Into<String>) -> Self {
        Self::new(DiffKind::Removed, text)
    }

    /// Number of whitespace-delimited words in the text
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Concatenate the text of every segment belonging to the original document
#[must_use]
pub fn original_text(segments: &[DiffSegment]) -> String {
    segments
        .iter()
        .filter(|s| s.kind.in_original())
        .map(|s| s.text.as_str())
        .collect()
}

/// Concatenate the text of every segment belonging to the revised document
#[must_use]
pub fn revised_text(segments: &[DiffSegment]) -> String {
    segments
        .iter()
        .filter(|s| s.kind.in_revised())
        .map(|s| s.text.as_str())
        .collect()
}
