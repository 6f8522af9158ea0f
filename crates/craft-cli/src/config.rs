//! Command line configuration
//!
//! Loaded from a TOML file; every field has a default.
//!
//! ```toml
//! indent = 2
//! view_mode = "side-by-side-diff"
//! log_filter = "craft=info"
//!
//! [[tables]]
//! section_type = "validation_findings"
//! columns = [
//!     { id = "finding", label = "Finding", type = "text", required = true },
//!     { id = "severity", label = "Severity", type = "select", options = ["Low", "High"] },
//! ]
//! ```

use crate::error::ConfigError;
use craft_format::{TableConfiguration, TableRegistry, DEFAULT_INDENT};
use craft_view::DiffViewMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest accepted indentation
pub const MAX_INDENT: usize = 16;

/// CRAFT command line configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraftConfig {
    /// Spaces per nesting level when formatting table content
    pub indent: usize,
    /// View mode used when `--mode` is not given
    pub view_mode: DiffViewMode,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Extra table configurations, merged over the built-ins
    pub tables: Vec<TableConfiguration>,
}

impl Default for CraftConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            view_mode: DiffViewMode::default(),
            log_filter: "warn".to_string(),
            log_json: false,
            tables: Vec::new(),
        }
    }
}

impl CraftConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read, is not valid TOML, or
    /// holds out-of-range values
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), tables = config.tables.len(), "loaded config");
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns error if indent exceeds [`MAX_INDENT`] or a table has no columns
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent > MAX_INDENT {
            return Err(ConfigError::InvalidValue(format!(
                "indent {} exceeds maximum {MAX_INDENT}",
                self.indent
            )));
        }
        if let Some(table) = self.tables.iter().find(|t| t.columns.is_empty()) {
            return Err(ConfigError::InvalidValue(format!(
                "table '{}' has no columns",
                table.section_type
            )));
        }
        Ok(())
    }

    /// With indentation
    #[inline]
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// With default view mode
    #[inline]
    #[must_use]
    pub fn with_view_mode(mut self, mode: DiffViewMode) -> Self {
        self.view_mode = mode;
        self
    }

    /// With log filter
    #[inline]
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Built-in tables plus configured ones
    #[must_use]
    pub fn table_registry(&self) -> TableRegistry {
        let mut registry = TableRegistry::with_defaults();
        for table in &self.tables {
            registry.register(table.clone());
        }
        registry
    }
}
