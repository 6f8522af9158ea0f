//! Table section configurations
//!
//! A table section's draft is a JSON document whose rows are keyed by
//! column id. The column order doubles as the display field order.

use crate::order::FieldOrder;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Section type used when a lookup misses
pub const DEFAULT_SECTION_TYPE: &str = "model_limitations";

/// Cell editor kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Free text
    Text,
    /// Numeric
    Number,
    /// Calendar date
    Date,
    /// One of a fixed set of options
    Select,
}

/// One table column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    /// Key used in row objects
    pub id: String,
    /// Header label
    pub label: String,
    /// Editor kind
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// CSS width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Cell must be filled in
    #[serde(default)]
    pub required: bool,
    /// Allowed values for [`ColumnType::Select`]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl TableColumn {
    /// Free-text column
    #[must_use]
    pub fn text(id: &str, label: &str, width: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            column_type: ColumnType::Text,
            width: Some(width.to_string()),
            required: false,
            options: Vec::new(),
        }
    }

    /// Select column with fixed options
    #[must_use]
    pub fn select(id: &str, label: &str, width: &str, options: &[&str]) -> Self {
        Self {
            column_type: ColumnType::Select,
            options: options.iter().map(ToString::to_string).collect(),
            ..Self::text(id, label, width)
        }
    }

    /// Mark as required
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Columns of one table section type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfiguration {
    /// Section type this table belongs to
    pub section_type: String,
    /// Columns in display order
    pub columns: Vec<TableColumn>,
}

impl TableConfiguration {
    /// Column ids in display order
    #[must_use]
    pub fn field_order(&self) -> FieldOrder {
        self.columns.iter().map(|c| c.id.as_str()).collect()
    }

    /// Column by id
    #[must_use]
    pub fn column(&self, id: &str) -> Option<&TableColumn> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Model limitations table
    #[must_use]
    pub fn model_limitations() -> Self {
        Self {
            section_type: "model_limitations".to_string(),
            columns: vec![
                TableColumn::text("item", "Limitation", "200px").required(),
                TableColumn::text("description", "Description", "300px"),
                TableColumn::select(
                    "quantity",
                    "Severity",
                    "100px",
                    &["Low", "Medium", "High", "Critical"],
                ),
                TableColumn::select(
                    "status",
                    "Impact",
                    "150px",
                    &["Performance", "Accuracy", "Reliability", "Usability"],
                ),
                TableColumn::text("notes", "Mitigation", "200px"),
            ],
        }
    }

    /// Model risk issues table
    #[must_use]
    pub fn model_risk_issues() -> Self {
        Self {
            section_type: "model_risk_issues".to_string(),
            columns: vec![
                TableColumn::text("item", "Risk Issue", "200px").required(),
                TableColumn::text("description", "Description", "300px"),
                TableColumn::select(
                    "quantity",
                    "Likelihood",
                    "120px",
                    &["Very Low", "Low", "Medium", "High", "Very High"],
                ),
                TableColumn::select(
                    "status",
                    "Risk Level",
                    "120px",
                    &["Low", "Medium", "High", "Critical"],
                ),
                TableColumn::text("notes", "Controls", "200px"),
            ],
        }
    }
}

/// Table configurations by section type
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    tables: IndexMap<String, TableConfiguration>,
}

impl TableRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in tables
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(TableConfiguration::model_limitations());
        registry.register(TableConfiguration::model_risk_issues());
        registry
    }

    /// Register a table, replacing any with the same section type
    pub fn register(&mut self, table: TableConfiguration) {
        self.tables.insert(table.section_type.clone(), table);
    }

    /// Exact lookup
    #[must_use]
    pub fn get(&self, section_type: &str) -> Option<&TableConfiguration> {
        self.tables.get(section_type)
    }

    /// Lookup falling back to the model limitations table
    ///
    /// `None` only when the registry holds neither.
    #[must_use]
    pub fn resolve(&self, section_type: &str) -> Option<&TableConfiguration> {
        self.get(section_type).or_else(|| self.get(DEFAULT_SECTION_TYPE))
    }

    /// Registered section types
    #[must_use]
    pub fn section_types(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }
}
