//! CRAFT Diff
//!
//! Diff segments for comparing a current draft with a proposed draft.
//!
//! # Core Concepts
//!
//! - [`DiffSegment`]: A span of text tagged unchanged / added / removed
//! - [`split_for_side_by_side`]: Partition segments into left and right panes
//! - [`style_for`]: Highlight style for a segment in unified or split views
//! - [`DiffSummary`]: Word counts grouped by segment kind
//! - [`compute_document_diff`]: Word- or line-level diff of two drafts
//!
//! # Example
//!
//! ```rust
//! use craft_diff::{compute_document_diff, split_for_side_by_side, style_for, Side};
//!
//! let segments = compute_document_diff("a quick draft", "a polished draft");
//! let split = split_for_side_by_side(&segments);
//!
//! for segment in &split.left {
//!     let style = style_for(segment.kind, Some(Side::Left));
//!     assert_eq!(style.strike_through, segment.kind == craft_diff::DiffKind::Removed);
//! }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
mod engine;
mod segment;
mod split;
mod style;
mod summary;

// Re-exports
pub use engine::{compute_document_diff, DocumentDiff, Granularity};
pub use segment::{original_text, revised_text, DiffKind, DiffSegment};
pub use split::{split_for_side_by_side, SplitSegments};
pub use style::{
    container_style, style_for, ContainerStyle, KindColors, PaneFont, SegmentStyle, Side,
    ADDED_COLORS, REMOVED_COLORS, UNCHANGED_COLORS,
};
pub use summary::DiffSummary;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
