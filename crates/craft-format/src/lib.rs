//! CRAFT Format
//!
//! Deterministic, indented rendering of structured draft content.
//!
//! # Core Concepts
//!
//! - [`StructuredValue`]: JSON-like value with insertion-ordered mappings
//! - [`FieldOrder`]: Preferred order of top-level keys
//! - [`Formatter`]: Indented renderer; field order applies at depth 0 only
//! - [`format_content`]: Parse-or-passthrough wrapper for draft text
//! - [`TableRegistry`]: Table section columns, whose ids give the field order
//!
//! # Example
//!
//! ```rust
//! use craft_format::{format_content, FieldOrder};
//!
//! let order = FieldOrder::new(["a", "b"]);
//! let out = format_content(r#"{"b": 2, "a": 1}"#, true, Some(&order));
//! assert_eq!(out, "{\n  \"a\": 1,\n  \"b\": 2\n}");
//!
//! // Not structured: shown as is
//! assert_eq!(format_content("hello world", true, None), "hello world");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
mod content;
pub mod error;
mod formatter;
mod order;
pub mod tables;

// Re-exports
pub use content::{format_content, format_content_with, parse_structured};
pub use error::{FormatError, FormatResult};
pub use formatter::{format_value, Formatter, DEFAULT_INDENT};
pub use order::FieldOrder;
pub use tables::{ColumnType, TableColumn, TableConfiguration, TableRegistry};

/// JSON-like value: null, bool, number, string, sequence or mapping
///
/// Mappings preserve insertion order.
pub type StructuredValue = serde_json::Value;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
