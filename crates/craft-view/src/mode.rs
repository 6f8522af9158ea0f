//! Comparison view modes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a current/proposed pair is displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiffViewMode {
    /// Single pane with inline change markup
    Unified,
    /// Two panes of formatted content, no highlighting
    SideBySide,
    /// Two panes, removals highlighted left and additions right
    #[default]
    SideBySideDiff,
}

impl DiffViewMode {
    /// All modes
    pub const ALL: [DiffViewMode; 3] = [Self::Unified, Self::SideBySide, Self::SideBySideDiff];

    /// Name used in configuration and on the command line
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unified => "unified",
            Self::SideBySide => "side-by-side",
            Self::SideBySideDiff => "side-by-side-diff",
        }
    }
}

impl fmt::Display for DiffViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown view mode name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view mode '{0}' (expected unified, side-by-side or side-by-side-diff)")]
pub struct UnknownViewMode(pub String);

impl FromStr for DiffViewMode {
    type Err = UnknownViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownViewMode(s.to_string()))
    }
}
