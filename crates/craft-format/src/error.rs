//! Error types for structured content parsing
//!
//! These never reach callers of [`format_content`](crate::format_content);
//! they explain why content was passed through unformatted.

/// Why content could not be treated as a structured value
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Content does not start with an object
    #[error("content is not a JSON object")]
    NotAnObject,

    /// JSON syntax error
    #[error("JSON parse error: {0}")]
    Syntax(#[from] serde_json::Error),
}

/// Result type alias for format operations
pub type FormatResult<T> = Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_an_object_display() {
        assert_eq!(FormatError::NotAnObject.to_string(), "content is not a JSON object");
    }

    #[test]
    fn syntax_error_conversion() {
        let err: FormatError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, FormatError::Syntax(_)));
        assert!(err.to_string().starts_with("JSON parse error"));
    }
}
