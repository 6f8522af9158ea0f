//! Top-level field ordering

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Preferred order of top-level mapping keys
///
/// Keys listed here come first, in this order; names missing from the
/// mapping are skipped. Remaining keys follow in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldOrder(Vec<String>);

impl FieldOrder {
    /// Create from key names
    #[must_use]
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    /// Parse a comma separated list (`"item,description"`)
    #[must_use]
    pub fn parse_list(list: &str) -> Self {
        Self::new(
            list.split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty()),
        )
    }

    /// Preferred keys
    #[inline]
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.0
    }

    /// No preference given
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Emission order for the keys of `map`
    #[must_use]
    pub fn apply<'a>(&self, map: &'a Map<String, Value>) -> Vec<&'a str> {
        let mut ordered: IndexSet<&'a str> = self
            .0
            .iter()
            .filter_map(|key| map.get_key_value(key.as_str()))
            .map(|(key, _)| key.as_str())
            .collect();
        ordered.extend(map.keys().map(String::as_str));
        ordered.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for FieldOrder {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<String>> for FieldOrder {
    fn from(keys: Vec<String>) -> Self {
        Self(keys)
    }
}
