//! Side-by-side splitting
//!
//! Partitions a segment sequence into the left (original) and right
//! (revised) panes. Unchanged text lands on both sides.

use crate::segment::DiffSegment;

/// Left and right panes of a side-by-side comparison
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitSegments {
    /// Original side: `removed` and `unchanged` segments
    pub left: Vec<DiffSegment>,
    /// Revised side: `added` and `unchanged` segments
    pub right: Vec<DiffSegment>,
}

impl SplitSegments {
    /// Both panes empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// Split segments for a side-by-side view
///
/// Stable partition in a single pass: relative order on each side matches
/// the input.
#[must_use]
pub fn split_for_side_by_side(segments: &[DiffSegment]) -> SplitSegments {
    let mut split = SplitSegments::default();

    for segment in segments {
        if segment.kind.in_original() {
            split.left.push(segment.clone());
        }
        if segment.kind.in_revised() {
            split.right.push(segment.clone());
        }
    }

    split
}
