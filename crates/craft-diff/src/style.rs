//! Highlight styles for diff segments
//!
//! Only the three-way kind distinction and the side-relevance rule are
//! behaviour; the concrete colours are the CRAFT palette.

use crate::segment::DiffKind;
use serde::Serialize;

/// Pane of a side-by-side view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Original version
    Left,
    /// Revised version
    Right,
}

impl Side {
    /// Whether a segment of `kind` shows up as a change (or as context) on this side
    #[inline]
    #[must_use]
    pub fn is_relevant(self, kind: DiffKind) -> bool {
        match (self, kind) {
            (_, DiffKind::Unchanged)
            | (Self::Left, DiffKind::Removed)
            | (Self::Right, DiffKind::Added) => true,
            (Self::Left, DiffKind::Added) | (Self::Right, DiffKind::Removed) => false,
        }
    }
}

/// Colours bound to one diff kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KindColors {
    /// Background colour
    pub background: &'static str,
    /// Text colour
    pub color: &'static str,
    /// Border / underline colour
    pub border: &'static str,
}

/// Added text palette
pub const ADDED_COLORS: KindColors = KindColors {
    background: "#d4f4dd",
    color: "#1b5e20",
    border: "#4caf50",
};

/// Removed text palette
pub const REMOVED_COLORS: KindColors = KindColors {
    background: "#ffebee",
    color: "#b71c1c",
    border: "#f44336",
};

/// Unchanged text palette
pub const UNCHANGED_COLORS: KindColors = KindColors {
    background: "transparent",
    color: "inherit",
    border: "transparent",
};

impl DiffKind {
    /// Palette for this kind
    #[inline]
    #[must_use]
    pub fn colors(self) -> KindColors {
        match self {
            Self::Added => ADDED_COLORS,
            Self::Removed => REMOVED_COLORS,
            Self::Unchanged => UNCHANGED_COLORS,
        }
    }
}

/// Visual style of one rendered segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentStyle {
    /// Background colour
    pub background: &'static str,
    /// Text colour
    pub color: &'static str,
    /// Draw a line through the text
    pub strike_through: bool,
    /// Underline border colour, if any
    pub underline: Option<&'static str>,
}

impl SegmentStyle {
    /// Style with no emphasis
    pub const NEUTRAL: SegmentStyle = SegmentStyle {
        background: UNCHANGED_COLORS.background,
        color: UNCHANGED_COLORS.color,
        strike_through: false,
        underline: None,
    };

    /// Whether the style carries any emphasis
    #[inline]
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        *self != Self::NEUTRAL
    }
}

/// Style for a segment of `kind`
///
/// `side == None` is the unified view. In a split view a segment that is
/// not relevant to its side falls back to [`SegmentStyle::NEUTRAL`].
#[must_use]
pub fn style_for(kind: DiffKind, side: Option<Side>) -> SegmentStyle {
    if let Some(side) = side {
        if !side.is_relevant(kind) {
            return SegmentStyle::NEUTRAL;
        }
    }

    let colors = kind.colors();
    SegmentStyle {
        background: colors.background,
        color: colors.color,
        strike_through: kind == DiffKind::Removed,
        underline: (kind == DiffKind::Added).then_some(colors.border),
    }
}

/// Font used by a diff pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaneFont {
    /// Fixed width, used for table (JSON) content
    Monospace,
    /// Inherit the surrounding font
    Inherit,
}

/// Style of the container holding a rendered diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContainerStyle {
    /// Pane font
    pub font: PaneFont,
    /// CSS font size
    pub font_size: &'static str,
    /// Preserve whitespace and wrap long lines
    pub pre_wrap: bool,
    /// Pane background
    pub background: &'static str,
    /// Pane border colour
    pub border: &'static str,
}

/// Container style for table or text content
#[must_use]
pub fn container_style(is_table: bool) -> ContainerStyle {
    let (font, font_size) = if is_table {
        (PaneFont::Monospace, "0.875rem")
    } else {
        (PaneFont::Inherit, "inherit")
    };
    ContainerStyle {
        font,
        font_size,
        pre_wrap: true,
        background: "#fafafa",
        border: "#e0e0e0",
    }
}
