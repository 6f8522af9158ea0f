//! Parse-or-passthrough formatting of draft content
//!
//! Table drafts arrive as JSON text. Anything that does not parse as a JSON
//! object is shown exactly as received.

use crate::error::{FormatError, FormatResult};
use crate::formatter::Formatter;
use crate::order::FieldOrder;
use serde_json::Value;

/// Parse content as a structured object
///
/// # Errors
/// [`FormatError::NotAnObject`] if the trimmed text does not start with `{`,
/// [`FormatError::Syntax`] if it is not valid JSON.
pub fn parse_structured(content: &str) -> FormatResult<Value> {
    if !content.trim_start().starts_with('{') {
        return Err(FormatError::NotAnObject);
    }
    Ok(serde_json::from_str(content)?)
}

/// Format draft content for display
///
/// Plain text (`is_table == false`) is returned unchanged. Table content is
/// parsed and rendered with `formatter`; when parsing fails the original
/// text is returned unchanged.
#[must_use]
pub fn format_content_with(content: &str, is_table: bool, formatter: &Formatter) -> String {
    if !is_table {
        return content.to_string();
    }

    match parse_structured(content) {
        Ok(value) => formatter.format(&value),
        Err(err) => {
            tracing::debug!(error = %err, "showing table content unformatted");
            content.to_string()
        }
    }
}

/// [`format_content_with`] using two-space indentation
#[must_use]
pub fn format_content(content: &str, is_table: bool, field_order: Option<&FieldOrder>) -> String {
    let formatter = match field_order {
        Some(order) => Formatter::new().with_field_order(order.clone()),
        None => Formatter::new(),
    };
    format_content_with(content, is_table, &formatter)
}
