//! Indented rendering of structured values
//!
//! Output is deterministic: sequences keep their order, mappings keep
//! insertion order except at the top level where a [`FieldOrder`] may be
//! applied.

use crate::order::FieldOrder;
use serde_json::{Map, Number, Value};

/// Default indentation unit (spaces per nesting level)
pub const DEFAULT_INDENT: usize = 2;

/// Structured value formatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    indent: usize,
    field_order: Option<FieldOrder>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    /// Two-space indentation, no field order
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            field_order: None,
        }
    }

    /// Set spaces per nesting level
    #[inline]
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set top-level field order
    #[inline]
    #[must_use]
    pub fn with_field_order(mut self, order: FieldOrder) -> Self {
        self.field_order = Some(order);
        self
    }

    /// Field order, if any
    #[inline]
    #[must_use]
    pub fn field_order(&self) -> Option<&FieldOrder> {
        self.field_order.as_ref()
    }

    /// Render `value`
    #[must_use]
    pub fn format(&self, value: &Value) -> String {
        let mut out = String::new();
        self.write_value(&mut out, value, 0);
        out
    }

    fn write_value(&self, out: &mut String, value: &Value, depth: usize) {
        match value {
            Value::Null => out.push_str("null"),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write_number(out, n),
            Value::String(s) => write_string(out, s),
            Value::Array(items) => self.write_array(out, items, depth),
            Value::Object(map) => self.write_object(out, map, depth),
        }
    }

    fn write_array(&self, out: &mut String, items: &[Value], depth: usize) {
        if items.is_empty() {
            out.push_str("[]");
            return;
        }

        out.push_str("[\n");
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push_str(",\n");
            }
            self.pad(out, depth + 1);
            self.write_value(out, item, depth + 1);
        }
        out.push('\n');
        self.pad(out, depth);
        out.push(']');
    }

    fn write_object(&self, out: &mut String, map: &Map<String, Value>, depth: usize) {
        if map.is_empty() {
            out.push_str("{}");
            return;
        }

        // Field order applies to the top level only
        let keys: Vec<&str> = match &self.field_order {
            Some(order) if depth == 0 => order.apply(map),
            _ => map.keys().map(String::as_str).collect(),
        };

        out.push_str("{\n");
        for (i, key) in keys.into_iter().enumerate() {
            if i > 0 {
                out.push_str(",\n");
            }
            self.pad(out, depth + 1);
            write_string(out, key);
            out.push_str(": ");
            if let Some(value) = map.get(key) {
                self.write_value(out, value, depth + 1);
            }
        }
        out.push('\n');
        self.pad(out, depth);
        out.push('}');
    }

    fn pad(&self, out: &mut String, depth: usize) {
        out.push_str(&" ".repeat(self.indent * depth));
    }
}

/// Largest integer an f64 holds exactly (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Natural decimal form: whole-number floats print without a trailing `.0`
#[allow(clippy::cast_possible_truncation)]
fn write_number(out: &mut String, n: &Number) {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_INTEGER => {
            out.push_str(&(f as i64).to_string());
        }
        _ => out.push_str(&n.to_string()),
    }
}

/// Quoted, JSON-escaped string literal
fn write_string(out: &mut String, s: &str) {
    out.push_str(&serde_json::to_string(s).unwrap_or_default());
}

/// Render `value` with the default indentation and optional top-level order
#[must_use]
pub fn format_value(value: &Value, field_order: Option<&FieldOrder>) -> String {
    let formatter = Formatter::new();
    match field_order {
        Some(order) => formatter.with_field_order(order.clone()).format(value),
        None => formatter.format(value),
    }
}
