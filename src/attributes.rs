//! Append-only attribute multimaps.
//!
//! Words and equivalence groups can carry free-form attributes: every
//! attribute name maps to the ordered list of values added under it. Values
//! are only ever appended.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An attribute multimap: name → ordered values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, Vec<String>>);

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Attributes(BTreeMap::new())
    }

    /// Append a value under the given name.
    pub fn add<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.entry(name.into()).or_default().push(value.into());
    }

    /// Values recorded under the given name, in insertion order.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Append every value of `other` to this map.
    pub fn extend(&mut self, other: &Attributes) {
        for (name, values) in &other.0 {
            self.0
                .entry(name.clone())
                .or_default()
                .extend(values.iter().cloned());
        }
    }

    /// Iterate over names and their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends() {
        let mut attributes = Attributes::new();
        attributes.add("color", "blue");
        attributes.add("color", "green");
        attributes.add("source", "catalog");

        assert_eq!(attributes.len(), 2);
        assert_eq!(
            attributes.get("color"),
            Some(&["blue".to_string(), "green".to_string()][..])
        );
        assert_eq!(attributes.get("missing"), None);
    }

    #[test]
    fn test_extend() {
        let mut left = Attributes::new();
        left.add("color", "blue");
        let mut right = Attributes::new();
        right.add("color", "teal");
        right.add("size", "xl");

        left.extend(&right);
        assert_eq!(left.get("color").unwrap().len(), 2);
        assert_eq!(left.get("size").unwrap(), &["xl".to_string()]);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut attributes = Attributes::new();
        attributes.add("color", "blue");
        let json = serde_json::to_string(&attributes).unwrap();
        assert_eq!(json, r#"{"color":["blue"]}"#);
    }
}
