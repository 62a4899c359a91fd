//! Structured serialization of a dictionary.
//!
//! A serialized dictionary is a mapping with up to four keys, each present
//! only when it has something to say:
//!
//! ```json
//! {
//!   "words": ["teal", {"text": "azure", "attributes": {"family": ["blue"]}}],
//!   "phrases": ["Trans Blue"],
//!   "synonyms": [["transparent", "trans", "tr"]],
//!   "wordings": [{"keys": ["Trans Blue Green", "Translucent Aqua"], "attributes": {"hue": ["cyan"]}}]
//! }
//! ```
//!
//! Groups without attributes are written as a plain member list.
//!
//! Loading replays words, synonyms, wordings and phrases in that order
//! through the same registration logic as live construction, so a round trip
//! reproduces equal groups and equal substitution indexes. Wordings come
//! before phrases so that a loose phrase sharing a key with a group member
//! joins that group instead of displacing the member.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Dictionary;
use crate::attributes::Attributes;
use crate::equivalence::SerializedEquivalents;
use crate::error::{Result, WordMongerError};
use crate::word::SerializedWord;

/// Top-level keys a serialized dictionary may carry.
pub const SERIALIZATION_KEYS: [&str; 4] = ["words", "phrases", "synonyms", "wordings"];

/// A group as it appears in a serialized dictionary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SerializedGroup {
    /// A group without attributes
    Members(Vec<String>),
    /// A group with attributes
    Record(SerializedEquivalents),
}

impl SerializedGroup {
    fn new(members: Vec<String>, attributes: &Attributes) -> Self {
        if attributes.is_empty() {
            SerializedGroup::Members(members)
        } else {
            SerializedGroup::Record(SerializedEquivalents {
                keys: members,
                attributes: attributes.clone(),
            })
        }
    }

    /// Members, preferred first.
    pub fn members(&self) -> &[String] {
        match self {
            SerializedGroup::Members(members) => members,
            SerializedGroup::Record(record) => &record.keys,
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            SerializedGroup::Members(_) => None,
            SerializedGroup::Record(record) => Some(&record.attributes),
        }
    }
}

/// Serialized form of a [`Dictionary`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedDictionary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<SerializedWord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<SerializedGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wordings: Option<Vec<SerializedGroup>>,
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}

impl Dictionary {
    /// The compact serialized form of this dictionary.
    ///
    /// Generated words without attributes and single-member groups are left
    /// out; they are recreated when phrases are replayed.
    pub fn serialize(&self) -> SerializedDictionary {
        SerializedDictionary {
            words: non_empty(
                self.words()
                    .filter(|word| word.is_persistent())
                    .map(|word| word.serialize())
                    .collect(),
            ),
            phrases: non_empty(self.phrases().map(|phrase| phrase.serialize()).collect()),
            synonyms: non_empty(
                self.synonym_groups()
                    .filter(|group| group.len() > 1)
                    .map(|group| SerializedGroup::new(group.serialize(), group.attributes()))
                    .collect(),
            ),
            wordings: non_empty(
                self.wording_groups()
                    .filter(|group| group.len() > 1)
                    .map(|group| SerializedGroup::new(group.serialize(), group.attributes()))
                    .collect(),
            ),
        }
    }

    /// Serialize to a compact JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.serialize())?)
    }

    /// Serialize to an indented JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.serialize())?)
    }

    /// Reset this dictionary and rebuild it from a serialized mapping.
    ///
    /// Fails with [`WordMongerError::UnknownSerializationKey`] on an
    /// unrecognized top-level key. A failure part-way leaves the dictionary
    /// reset and partially repopulated.
    pub fn deserialize(&mut self, value: &Value) -> Result<()> {
        self.reset();

        let Value::Object(map) = value else {
            return Err(WordMongerError::invalid_argument(
                "serialized dictionary must be an object",
            ));
        };
        if let Some(key) = map
            .keys()
            .find(|key| !SERIALIZATION_KEYS.contains(&key.as_str()))
        {
            return Err(WordMongerError::unknown_key(key.as_str()));
        }

        let serialized: SerializedDictionary = serde_json::from_value(value.clone())?;
        self.load(serialized)
    }

    /// Reset this dictionary and rebuild it from JSON text.
    pub fn deserialize_json(&mut self, json: &str) -> Result<()> {
        let value: Value = serde_json::from_str(json)?;
        self.deserialize(&value)
    }

    /// Replay a serialized dictionary on top of the current contents.
    pub fn load(&mut self, serialized: SerializedDictionary) -> Result<()> {
        for word in serialized.words.unwrap_or_default() {
            self.insert_word(word.into_word());
        }
        for entry in serialized.synonyms.unwrap_or_default() {
            let preferred = self.register_synonyms(entry.members())?.preferred().to_string();
            if let Some(attributes) = entry.attributes()
                && let Some(group) = self.synonyms.get_mut(&preferred)
            {
                group.equivalents_mut().attributes_mut().extend(attributes);
            }
        }
        for entry in serialized.wordings.unwrap_or_default() {
            let preferred = self.register_wordings(entry.members())?.preferred().to_string();
            if let Some(attributes) = entry.attributes()
                && let Some(group) = self.wordings.get_mut(&preferred)
            {
                group.attributes_mut().extend(attributes);
            }
        }
        for phrase in serialized.phrases.unwrap_or_default() {
            self.add_phrase(&phrase)?;
        }

        info!(
            "dictionary {}: loaded {} words, {} phrases, {} synonym groups, {} wording groups",
            self.display_name(),
            self.word_count(),
            self.phrase_count(),
            self.synonyms.len(),
            self.wordings.len()
        );
        debug!("dictionary {}: now at {:?}", self.display_name(), self.revision());
        Ok(())
    }
}
