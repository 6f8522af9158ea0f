//! CRAFT View
//!
//! Comparison views of a current draft against a proposed draft.
//!
//! # Core Concepts
//!
//! - [`DiffViewMode`]: unified, side-by-side or side-by-side-diff
//! - [`ViewRequest`]: Content, table flag, field order and segments to show
//! - [`render_view`]: Build a [`DiffView`] of styled panes
//! - [`render_text`]: Plain-text rendering for terminals
//!
//! # Example
//!
//! ```rust
//! use craft_diff::compute_document_diff;
//! use craft_view::{render_text, render_view, DiffViewMode, ViewRequest};
//!
//! let segments = compute_document_diff("risk is low", "risk is high");
//! let request = ViewRequest::new("risk is low", "risk is high", DiffViewMode::Unified)
//!     .with_segments(&segments);
//! let text = render_text(&render_view(&request));
//! assert!(text.contains("[-low-]{+high+}"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
mod mode;
mod text;
mod view;

// Re-exports
pub use mode::{DiffViewMode, UnknownViewMode};
pub use text::render_text;
pub use view::{
    render_view, DiffView, Pane, StyledSegment, ViewRequest, CURRENT_DIFF_TITLE, CURRENT_TITLE,
    PROPOSED_DIFF_TITLE, PROPOSED_TITLE, UNIFIED_TITLE,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
