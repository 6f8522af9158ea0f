//! Testing utilities for CRAFT workspace
//!
//! Shared fixtures and proptest strategies.

#![allow(missing_docs)]

use craft_diff::{DiffKind, DiffSegment};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

/// Segments from `(kind, text)` pairs
pub fn segments(parts: &[(DiffKind, &str)]) -> Vec<DiffSegment> {
    parts
        .iter()
        .map(|(kind, text)| DiffSegment::new(*kind, *text))
        .collect()
}

/// A short revision touching every kind
pub fn sample_revision() -> Vec<DiffSegment> {
    segments(&[
        (DiffKind::Unchanged, "The model "),
        (DiffKind::Removed, "underestimates"),
        (DiffKind::Added, "overestimates"),
        (DiffKind::Unchanged, " default rates in "),
        (DiffKind::Added, "stressed "),
        (DiffKind::Unchanged, "scenarios."),
    ])
}

/// A table draft as the generation backend returns it
pub fn sample_table() -> Value {
    json!({
        "rows": [
            {
                "notes": "Quarterly recalibration",
                "status": "Accuracy",
                "item": "Data drift",
                "quantity": "High",
                "description": "Input distributions shift over time"
            }
        ]
    })
}

/// A single table row with keys out of column order
pub fn sample_row() -> Value {
    json!({
        "notes": "Manual override",
        "description": "Thin history for new products",
        "item": "Sparse data",
        "status": "Reliability",
        "quantity": "Medium"
    })
}

pub fn arb_kind() -> impl Strategy<Value = DiffKind> {
    prop_oneof![
        Just(DiffKind::Unchanged),
        Just(DiffKind::Added),
        Just(DiffKind::Removed),
    ]
}

pub fn arb_segment() -> impl Strategy<Value = DiffSegment> {
    (arb_kind(), "[a-z ]{1,12}").prop_map(|(kind, text)| DiffSegment::new(kind, text))
}

pub fn arb_segments() -> impl Strategy<Value = Vec<DiffSegment>> {
    proptest::collection::vec(arb_segment(), 0..24)
}

/// Short prose built from a small vocabulary, so diffs share words
pub fn arb_prose() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just("model"),
            Just("risk"),
            Just("data"),
            Just("the"),
            Just("validation"),
            Just("is"),
            Just("low"),
            Just("high"),
        ],
        0..16,
    )
    .prop_map(|words| words.join(" "))
}

/// Arbitrary JSON value. Numbers are integers, halves or whole-number
/// floats so they survive a text round trip exactly.
pub fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1000i32..1000).prop_map(|n| Value::from(f64::from(n) + 0.5)),
        (-100_000i32..100_000).prop_map(|n| Value::from(f64::from(n))),
        ".{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            proptest::collection::vec(("[a-z\"\\\\]{1,6}", inner), 0..6).prop_map(|entries| {
                let mut map = Map::new();
                for (key, value) in entries {
                    map.insert(key, value);
                }
                Value::Object(map)
            }),
        ]
    })
}

/// Copy of `value` with every number as an f64, so `1` and `1.0` compare equal
pub fn numbers_as_f64(value: &Value) -> Value {
    match value {
        Value::Number(n) => n.as_f64().map_or(Value::Null, Value::from),
        Value::Array(items) => Value::Array(items.iter().map(numbers_as_f64).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), numbers_as_f64(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}
