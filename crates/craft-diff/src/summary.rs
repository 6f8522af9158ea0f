//! Word-count summary of a diff

use crate::segment::{DiffKind, DiffSegment};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Word counts grouped by segment kind
///
/// Derived from a segment sequence; recompute rather than mutate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Words in `added` segments
    pub words_added: usize,
    /// Words in `removed` segments
    pub words_removed: usize,
    /// Words in `unchanged` segments
    pub words_unchanged: usize,
}

impl DiffSummary {
    /// Count words per kind
    #[must_use]
    pub fn from_segments(segments: &[DiffSegment]) -> Self {
        segments.iter().fold(Self::default(), |mut stats, segment| {
            let words = segment.word_count();
            match segment.kind {
                DiffKind::Added => stats.words_added += words,
                DiffKind::Removed => stats.words_removed += words,
                DiffKind::Unchanged => stats.words_unchanged += words,
            }
            stats
        })
    }

    /// True when nothing was added or removed
    #[inline]
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.words_added == 0 && self.words_removed == 0
    }

    /// Total number of changed words
    #[inline]
    #[must_use]
    pub fn words_changed(&self) -> usize {
        self.words_added + self.words_removed
    }
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "+{} words, -{} words, {} unchanged",
            self.words_added, self.words_removed, self.words_unchanged
        )
    }
}
