//! Words: the atomic tokens a dictionary knows about.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::attributes::Attributes;

/// A word registered in a dictionary.
///
/// The text of a word never changes after construction. Words produced by a
/// scanner while registering phrases are flagged as *generated*; they are
/// left out of serialized output unless they carry attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    text: String,
    attributes: Attributes,
    generated: bool,
}

impl Word {
    /// Create a word added explicitly by a caller.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Word {
            text: text.into(),
            attributes: Attributes::new(),
            generated: false,
        }
    }

    /// Create a word produced by a scanner.
    pub fn generated<S: Into<String>>(text: S) -> Self {
        Word {
            generated: true,
            ..Word::new(text)
        }
    }

    /// Create a word with attributes.
    pub fn with_attributes<S: Into<String>>(text: S, attributes: Attributes) -> Self {
        Word {
            attributes,
            ..Word::new(text)
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Append an attribute value.
    pub fn add_attribute<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes.add(name, value);
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Mark the word as explicitly added.
    pub(crate) fn confirm(&mut self) {
        self.generated = false;
    }

    /// Whether the word belongs in serialized output.
    pub fn is_persistent(&self) -> bool {
        !self.generated || !self.attributes.is_empty()
    }

    /// Serialized form: the bare text, or a record when attributes exist.
    pub fn serialize(&self) -> SerializedWord {
        if self.attributes.is_empty() {
            SerializedWord::Text(self.text.clone())
        } else {
            SerializedWord::Record {
                text: self.text.clone(),
                attributes: self.attributes.clone(),
            }
        }
    }
}

impl From<&Token> for Word {
    fn from(token: &Token) -> Self {
        Word::generated(token.text.clone())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A word as it appears in a serialized dictionary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SerializedWord {
    /// A word without attributes
    Text(String),
    /// A word with attributes
    Record { text: String, attributes: Attributes },
}

impl SerializedWord {
    /// Rebuild the word this entry describes.
    pub fn into_word(self) -> Word {
        match self {
            SerializedWord::Text(text) => Word::new(text),
            SerializedWord::Record { text, attributes } => Word::with_attributes(text, attributes),
        }
    }
}
