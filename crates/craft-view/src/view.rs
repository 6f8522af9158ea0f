//! Building comparison views
//!
//! A [`ViewRequest`] describes what the reviewer is looking at; [`render_view`]
//! turns it into panes of styled segments or formatted text.

use crate::mode::DiffViewMode;
use craft_diff::{
    container_style, split_for_side_by_side, style_for, ContainerStyle, DiffKind, DiffSegment,
    SegmentStyle, Side,
};
use craft_format::{format_content_with, FieldOrder, Formatter};
use serde::Serialize;

/// Title of the unified pane
pub const UNIFIED_TITLE: &str = "Proposed Changes (Highlighted)";
/// Title of the plain current pane
pub const CURRENT_TITLE: &str = "Current Version";
/// Title of the plain proposed pane
pub const PROPOSED_TITLE: &str = "Proposed Changes";
/// Title of the highlighted current pane
pub const CURRENT_DIFF_TITLE: &str = "Current Version (Removals Highlighted)";
/// Title of the highlighted proposed pane
pub const PROPOSED_DIFF_TITLE: &str = "Proposed Changes (Additions Highlighted)";

/// Segment with its resolved style
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledSegment {
    /// Segment kind
    pub kind: DiffKind,
    /// Segment text
    pub text: String,
    /// Style to render with
    pub style: SegmentStyle,
}

impl StyledSegment {
    fn new(segment: &DiffSegment, side: Option<Side>) -> Self {
        Self {
            kind: segment.kind,
            text: segment.text.clone(),
            style: style_for(segment.kind, side),
        }
    }
}

/// A titled pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pane<T> {
    /// Pane heading
    pub title: &'static str,
    /// Pane body
    pub body: T,
}

impl<T> Pane<T> {
    fn new(title: &'static str, body: T) -> Self {
        Self { title, body }
    }
}

/// A rendered comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum DiffView {
    /// One pane, every change highlighted inline
    Unified {
        /// Highlighted pane
        pane: Pane<Vec<StyledSegment>>,
        /// Container style
        container: ContainerStyle,
    },
    /// Current and proposed content, formatted but not highlighted
    SideBySide {
        /// Current content
        left: Pane<String>,
        /// Proposed content
        right: Pane<String>,
        /// Container style
        container: ContainerStyle,
    },
    /// Current and proposed segments, each side highlighting its own changes
    SideBySideDiff {
        /// Original side
        left: Pane<Vec<StyledSegment>>,
        /// Revised side
        right: Pane<Vec<StyledSegment>>,
        /// Container style
        container: ContainerStyle,
    },
}

impl DiffView {
    /// Mode this view was rendered in
    #[must_use]
    pub fn mode(&self) -> DiffViewMode {
        match self {
            Self::Unified { .. } => DiffViewMode::Unified,
            Self::SideBySide { .. } => DiffViewMode::SideBySide,
            Self::SideBySideDiff { .. } => DiffViewMode::SideBySideDiff,
        }
    }

    /// Container style shared by all panes
    #[must_use]
    pub fn container(&self) -> &ContainerStyle {
        match self {
            Self::Unified { container, .. }
            | Self::SideBySide { container, .. }
            | Self::SideBySideDiff { container, .. } => container,
        }
    }
}

/// Inputs of a comparison view
#[derive(Debug, Clone)]
pub struct ViewRequest<'a> {
    current: &'a str,
    proposed: &'a str,
    mode: DiffViewMode,
    is_table: bool,
    segments: Option<&'a [DiffSegment]>,
    formatter: Formatter,
}

impl<'a> ViewRequest<'a> {
    /// Compare `current` with `proposed` in `mode`
    #[must_use]
    pub fn new(current: &'a str, proposed: &'a str, mode: DiffViewMode) -> Self {
        Self {
            current,
            proposed,
            mode,
            is_table: false,
            segments: None,
            formatter: Formatter::new(),
        }
    }

    /// Treat content as a table draft (JSON, monospace)
    #[must_use]
    pub fn table(mut self, field_order: Option<FieldOrder>) -> Self {
        self.is_table = true;
        if let Some(order) = field_order {
            self.formatter = self.formatter.with_field_order(order);
        }
        self
    }

    /// Diff segments between current and proposed
    #[must_use]
    pub fn with_segments(mut self, segments: &'a [DiffSegment]) -> Self {
        self.segments = Some(segments);
        self
    }

    /// Indentation used when formatting table content
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.formatter = self.formatter.with_indent(indent);
        self
    }
}

/// Build the view for `request`
///
/// Unified and side-by-side-diff need segments; without them the view falls
/// back to plain side-by-side panes.
#[must_use]
pub fn render_view(request: &ViewRequest<'_>) -> DiffView {
    let container = container_style(request.is_table);

    match (request.mode, request.segments) {
        (DiffViewMode::Unified, Some(segments)) => DiffView::Unified {
            pane: Pane::new(UNIFIED_TITLE, styled(segments, None)),
            container,
        },
        (DiffViewMode::SideBySideDiff, Some(segments)) => {
            let split = split_for_side_by_side(segments);
            DiffView::SideBySideDiff {
                left: Pane::new(CURRENT_DIFF_TITLE, styled(&split.left, Some(Side::Left))),
                right: Pane::new(PROPOSED_DIFF_TITLE, styled(&split.right, Some(Side::Right))),
                container,
            }
        }
        (mode, segments) => {
            if mode != DiffViewMode::SideBySide && segments.is_none() {
                tracing::debug!(%mode, "no diff segments, showing plain side-by-side");
            }
            DiffView::SideBySide {
                left: Pane::new(CURRENT_TITLE, formatted(request, request.current)),
                right: Pane::new(PROPOSED_TITLE, formatted(request, request.proposed)),
                container,
            }
        }
    }
}

fn styled(segments: &[DiffSegment], side: Option<Side>) -> Vec<StyledSegment> {
    segments.iter().map(|s| StyledSegment::new(s, side)).collect()
}

fn formatted(request: &ViewRequest<'_>, content: &str) -> String {
    format_content_with(content, request.is_table, &request.formatter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use craft_diff::PaneFont;

    fn segments() -> Vec<DiffSegment> {
        vec![
            DiffSegment::unchanged("a "),
            DiffSegment::removed("b"),
            DiffSegment::added("c"),
        ]
    }

    #[test]
    fn unified_with_segments() {
        let segs = segments();
        let request = ViewRequest::new("a b", "a c", DiffViewMode::Unified).with_segments(&segs);
        let view = render_view(&request);

        let DiffView::Unified { pane, .. } = &view else {
            panic!("expected unified view, got {view:?}");
        };
        assert_eq!(pane.title, UNIFIED_TITLE);
        assert_eq!(pane.body.len(), 3);
        assert!(pane.body[1].style.strike_through);
        assert!(pane.body[2].style.underline.is_some());
    }

    #[test]
    fn unified_without_segments_falls_back() {
        let view = render_view(&ViewRequest::new("a b", "a c", DiffViewMode::Unified));
        assert_eq!(view.mode(), DiffViewMode::SideBySide);
    }

    #[test]
    fn side_by_side_diff_splits_panes() {
        let segs = segments();
        let view = render_view(
            &ViewRequest::new("a b", "a c", DiffViewMode::SideBySideDiff).with_segments(&segs),
        );

        let DiffView::SideBySideDiff { left, right, .. } = &view else {
            panic!("expected split view, got {view:?}");
        };
        let left_text: Vec<_> = left.body.iter().map(|s| s.text.as_str()).collect();
        let right_text: Vec<_> = right.body.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(left_text, vec!["a ", "b"]);
        assert_eq!(right_text, vec!["a ", "c"]);
    }

    #[test]
    fn side_by_side_formats_tables() {
        let view = render_view(
            &ViewRequest::new("{\"b\":1,\"a\":2}", "not json", DiffViewMode::SideBySide)
                .table(Some(FieldOrder::new(["a"]))),
        );

        let DiffView::SideBySide { left, right, container } = &view else {
            panic!("expected side-by-side view, got {view:?}");
        };
        assert_eq!(left.body, "{\n  \"a\": 2,\n  \"b\": 1\n}");
        assert_eq!(right.body, "not json");
        assert_eq!(container.font, PaneFont::Monospace);
    }

    #[test]
    fn side_by_side_ignores_segments() {
        let segs = segments();
        let view = render_view(
            &ViewRequest::new("a b", "a c", DiffViewMode::SideBySide).with_segments(&segs),
        );
        let DiffView::SideBySide { left, right, .. } = &view else {
            panic!("expected side-by-side view, got {view:?}");
        };
        assert_eq!(left.body, "a b");
        assert_eq!(right.body, "a c");
        assert_eq!(left.title, CURRENT_TITLE);
        assert_eq!(right.title, PROPOSED_TITLE);
    }
}
