//! The generic equivalence group.

use serde::{Deserialize, Serialize};

use crate::analysis::case::casefold;
use crate::attributes::Attributes;
use crate::error::{Result, WordMongerError};

/// Function turning a raw member into its stored key.
pub type Normalizer = fn(&str) -> String;

/// An ordered, duplicate-free set of equivalent keys.
///
/// The first key is the preferred one. A group is never empty.
///
/// # Examples
///
/// ```
/// use wordmonger::equivalence::Equivalents;
///
/// let mut group = Equivalents::new(["Transparent", "trans"]).unwrap();
/// assert_eq!(group.preferred(), "transparent");
///
/// assert!(!group.add("TRANS", false));
/// assert!(group.add("tr", false));
/// assert_eq!(group.keys(), ["transparent", "trans", "tr"]);
/// ```
#[derive(Clone, Debug)]
pub struct Equivalents {
    keys: Vec<String>,
    attributes: Attributes,
    normalize: Normalizer,
}

impl Equivalents {
    /// Create a group whose keys are case-folded.
    pub fn new<I, S>(members: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_normalizer(members, casefold)
    }

    /// Create a group with a caller-supplied normalization function.
    pub fn with_normalizer<I, S>(members: I, normalize: Normalizer) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut group = Equivalents {
            keys: Vec::new(),
            attributes: Attributes::new(),
            normalize,
        };
        for member in members {
            group.add(member.as_ref(), false);
        }

        if group.keys.is_empty() {
            return Err(WordMongerError::empty_group("Equivalents"));
        }
        Ok(group)
    }

    /// Normalize a member the way this group stores it.
    pub fn normalize(&self, member: &str) -> String {
        (self.normalize)(member)
    }

    /// Add a member, at the front when `preferred`.
    ///
    /// Returns `false` (and changes nothing) if the member is already present.
    pub fn add(&mut self, member: &str, preferred: bool) -> bool {
        let key = self.normalize(member);
        if self.keys.contains(&key) {
            return false;
        }
        if preferred {
            self.keys.insert(0, key);
        } else {
            self.keys.push(key);
        }
        true
    }

    /// The preferred key.
    pub fn preferred(&self) -> &str {
        &self.keys[0]
    }

    /// All keys, preferred first.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// All keys except the preferred one.
    pub fn alternates(&self) -> &[String] {
        &self.keys[1..]
    }

    pub fn contains(&self, member: &str) -> bool {
        self.position(member).is_some()
    }

    /// Index of a member in the key list.
    pub fn position(&self, member: &str) -> Option<usize> {
        let key = self.normalize(member);
        self.keys.iter().position(|k| *k == key)
    }

    /// Append the members of `other` that are not yet present, and its
    /// attribute values.
    pub fn merge(&mut self, other: &Equivalents) {
        for key in &other.keys {
            self.add(key, false);
        }
        self.attributes.extend(&other.attributes);
    }

    /// Move a member to the front. Returns the index it was moved from.
    pub fn make_preferred(&mut self, member: &str) -> Result<usize> {
        let index = self.position(member).ok_or_else(|| {
            WordMongerError::preferred_not_found(format!(
                "{member:?} is not in {:?}",
                self.keys
            ))
        })?;
        let key = self.keys.remove(index);
        self.keys.insert(0, key);
        Ok(index)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub(crate) fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Append an attribute value.
    pub fn add_attribute<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes.add(name, value);
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Serialized form: keys plus attributes when there are any.
    pub fn serialize(&self) -> SerializedEquivalents {
        SerializedEquivalents {
            keys: self.keys.clone(),
            attributes: self.attributes.clone(),
        }
    }
}

impl PartialEq for Equivalents {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.attributes == other.attributes
    }
}

/// Serialized form of an [`Equivalents`] group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedEquivalents {
    pub keys: Vec<String>,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_group_fails() {
        let result = Equivalents::new(Vec::<String>::new());
        assert!(matches!(result, Err(WordMongerError::EmptyGroup(_))));
    }

    #[test]
    fn test_construction_normalizes_and_dedups() {
        let group = Equivalents::new(["Trans", "TRANS", "tr"]).unwrap();
        assert_eq!(group.keys(), ["trans", "tr"]);
        assert_eq!(group.preferred(), "trans");
        assert_eq!(group.alternates(), ["tr"]);
    }

    #[test]
    fn test_add_preferred() {
        let mut group = Equivalents::new(["trans"]).unwrap();
        assert!(group.add("Transparent", true));
        assert_eq!(group.preferred(), "transparent");
        assert!(!group.add("transparent", false));
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_custom_normalizer() {
        fn keep(s: &str) -> String {
            s.to_string()
        }
        let group = Equivalents::with_normalizer(["Blue", "blue"], keep).unwrap();
        assert_eq!(group.keys(), ["Blue", "blue"]);
    }

    #[test]
    fn test_make_preferred() {
        let mut group = Equivalents::new(["transparent", "trans", "tr"]).unwrap();
        assert_eq!(group.make_preferred("TR").unwrap(), 2);
        assert_eq!(group.keys(), ["tr", "transparent", "trans"]);

        let result = group.make_preferred("opaque");
        assert!(matches!(result, Err(WordMongerError::PreferredNotFound(_))));
        assert_eq!(group.keys(), ["tr", "transparent", "trans"]);
    }

    #[test]
    fn test_merge() {
        let mut left = Equivalents::new(["a", "b"]).unwrap();
        left.add_attribute("source", "left");
        let mut right = Equivalents::new(["b", "c"]).unwrap();
        right.add_attribute("source", "right");

        left.merge(&right);
        assert_eq!(left.keys(), ["a", "b", "c"]);
        assert_eq!(left.attributes().get("source").unwrap().len(), 2);
    }

    #[test]
    fn test_serialize_omits_empty_attributes() {
        let mut group = Equivalents::new(["transparent", "trans"]).unwrap();
        let json = serde_json::to_string(&group.serialize()).unwrap();
        assert_eq!(json, r#"{"keys":["transparent","trans"]}"#);

        group.add_attribute("kind", "color");
        let json = serde_json::to_string(&group.serialize()).unwrap();
        assert_eq!(
            json,
            r#"{"keys":["transparent","trans"],"attributes":{"kind":["color"]}}"#
        );
    }
}
