//! Word-level equivalence groups.

use crate::attributes::Attributes;
use crate::equivalence::equivalents::Equivalents;
use crate::error::Result;

/// A group of words that mean the same thing.
///
/// A `Synonyms` value on its own is just a group; registering it with
/// [`Dictionary::register_synonyms`](crate::dictionary::Dictionary::register_synonyms)
/// merges it with any overlapping group and makes every alternate word
/// substitute to the preferred one.
///
/// # Examples
///
/// ```
/// use wordmonger::dictionary::Dictionary;
///
/// let mut dictionary = Dictionary::new(None);
/// dictionary.register_synonyms(["transparent", "trans"]).unwrap();
/// dictionary.register_synonyms(["trans", "tr"]).unwrap();
///
/// let group = dictionary.synonyms_for("TR").unwrap();
/// assert_eq!(group.words(), ["transparent", "trans", "tr"]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Synonyms {
    equivalents: Equivalents,
}

impl Synonyms {
    /// Create an unregistered group from its members.
    pub fn new<I, S>(members: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Synonyms {
            equivalents: Equivalents::new(members)?,
        })
    }

    pub(crate) fn from_equivalents(equivalents: Equivalents) -> Self {
        Synonyms { equivalents }
    }

    /// The preferred word.
    pub fn preferred(&self) -> &str {
        self.equivalents.preferred()
    }

    /// All words, preferred first.
    pub fn words(&self) -> &[String] {
        self.equivalents.keys()
    }

    /// Words that substitute to the preferred one.
    pub fn alternates(&self) -> &[String] {
        self.equivalents.alternates()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.equivalents.contains(word)
    }

    pub fn len(&self) -> usize {
        self.equivalents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equivalents.is_empty()
    }

    pub fn attributes(&self) -> &Attributes {
        self.equivalents.attributes()
    }

    pub fn add_attribute<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.equivalents.add_attribute(name, value);
    }

    pub fn equivalents(&self) -> &Equivalents {
        &self.equivalents
    }

    pub(crate) fn equivalents_mut(&mut self) -> &mut Equivalents {
        &mut self.equivalents
    }

    /// Substitution pairs `alternate → preferred` this group contributes.
    pub fn substitutions(&self) -> impl Iterator<Item = (&str, &str)> {
        let preferred = self.preferred();
        self.alternates()
            .iter()
            .map(move |alternate| (alternate.as_str(), preferred))
    }

    /// Serialized form: the member list, preferred first.
    pub fn serialize(&self) -> Vec<String> {
        self.words().to_vec()
    }
}
