//! Phrase-level equivalence groups.

use crate::attributes::Attributes;
use crate::dictionary::Dictionary;
use crate::equivalence::equivalents::Equivalents;
use crate::error::{Result, WordMongerError};
use crate::phrase::{Phrase, PhraseSource};

/// A group of phrases that mean the same thing.
///
/// Keys are the case-folded synonymized texts of the member phrases,
/// qualified by lexicon for tagged phrases. Alongside each key the group
/// keeps the phrase it came from, so it can report the lexicons it spans
/// and render its preferred phrase.
#[derive(Clone, Debug)]
pub struct Wordings {
    equivalents: Equivalents,
    /// Member phrases, aligned with the keys of `equivalents`
    phrases: Vec<Phrase>,
}

impl Wordings {
    /// Create an unregistered group, keying phrases against `dictionary`.
    pub fn new<I, P>(dictionary: &Dictionary, phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PhraseSource>,
    {
        let mut members = Vec::new();
        for source in phrases {
            let phrase = source.into().into_phrase();
            let key = phrase.wording_key(dictionary)?;
            members.push((key, phrase));
        }
        Self::from_members(members)
    }

    pub(crate) fn from_members(members: Vec<(String, Phrase)>) -> Result<Self> {
        let mut members = members.into_iter();
        let (key, phrase) = members
            .next()
            .ok_or_else(|| WordMongerError::empty_group("Wordings"))?;

        let mut wordings = Wordings {
            equivalents: Equivalents::new([key])?,
            phrases: vec![phrase],
        };
        for (key, phrase) in members {
            wordings.insert(&key, phrase, false);
        }
        Ok(wordings)
    }

    pub(crate) fn insert(&mut self, key: &str, phrase: Phrase, preferred: bool) -> bool {
        if !self.equivalents.add(key, preferred) {
            return false;
        }
        if preferred {
            self.phrases.insert(0, phrase);
        } else {
            self.phrases.push(phrase);
        }
        true
    }

    /// Add a phrase to an unregistered group.
    ///
    /// Returns `false` if a member with the same synonymized text exists.
    pub fn add(&mut self, dictionary: &Dictionary, phrase: Phrase, preferred: bool) -> Result<bool> {
        let key = phrase.wording_key(dictionary)?;
        Ok(self.insert(&key, phrase, preferred))
    }

    /// The preferred key.
    pub fn preferred(&self) -> &str {
        self.equivalents.preferred()
    }

    /// The phrase behind the preferred key.
    pub fn preferred_phrase(&self) -> &Phrase {
        &self.phrases[0]
    }

    /// All keys, preferred first.
    pub fn keys(&self) -> &[String] {
        self.equivalents.keys()
    }

    /// Keys that substitute to the preferred one.
    pub fn alternates(&self) -> &[String] {
        self.equivalents.alternates()
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// Keys paired with the phrases they were computed from.
    pub fn members(&self) -> impl Iterator<Item = (&str, &Phrase)> {
        self.keys()
            .iter()
            .map(String::as_str)
            .zip(self.phrases.iter())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.equivalents.contains(key)
    }

    /// Distinct lexicon tags across the member phrases; `None` stands for
    /// untagged members.
    pub fn lexicons(&self) -> Vec<Option<&str>> {
        let mut lexicons = Vec::new();
        for lexicon in self.phrases.iter().map(Phrase::lexicon) {
            if !lexicons.contains(&lexicon) {
                lexicons.push(lexicon);
            }
        }
        lexicons
    }

    pub(crate) fn make_preferred(&mut self, key: &str) -> Result<()> {
        let index = self.equivalents.make_preferred(key)?;
        let phrase = self.phrases.remove(index);
        self.phrases.insert(0, phrase);
        Ok(())
    }

    pub(crate) fn merge(&mut self, other: &Wordings) {
        for (key, phrase) in other.members() {
            self.insert(key, phrase.clone(), false);
        }
        self.equivalents
            .attributes_mut()
            .extend(other.equivalents.attributes());
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

    pub(crate) fn attributes_mut(&mut self) -> &mut Attributes {
        self.equivalents.attributes_mut()
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

    /// Serialized form: the member phrase texts, preferred first.
    pub fn serialize(&self) -> Vec<String> {
        self.phrases.iter().map(Phrase::serialize).collect()
    }
}

impl PartialEq for Wordings {
    fn eq(&self, other: &Self) -> bool {
        self.equivalents == other.equivalents && self.phrases == other.phrases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_follow_synonyms() {
        let mut dictionary = Dictionary::new(None);
        dictionary.register_synonyms(["transparent", "trans"]).unwrap();

        let wordings = Wordings::new(&dictionary, ["Trans Blue", "Clear Blue"]).unwrap();
        assert_eq!(wordings.keys(), ["transparent blue", "clear blue"]);
        assert_eq!(wordings.preferred_phrase().text(), "Trans Blue");
    }

    #[test]
    fn test_add_ignores_same_synonymized_text() {
        let mut dictionary = Dictionary::new(None);
        dictionary.register_synonyms(["transparent", "trans"]).unwrap();

        let mut wordings = Wordings::new(&dictionary, ["Transparent Blue"]).unwrap();
        assert!(!wordings.add(&dictionary, Phrase::new("trans blue"), false).unwrap());
        assert!(wordings.add(&dictionary, Phrase::new("See-through Blue"), true).unwrap());
        assert_eq!(wordings.preferred(), "see-through blue");
        assert_eq!(wordings.phrases()[0].text(), "See-through Blue");
        assert_eq!(wordings.len(), 2);
    }

    #[test]
    fn test_lexicons() {
        let dictionary = Dictionary::new(None);
        let wordings = Wordings::new(
            &dictionary,
            ["Paint::Sky Blue", "Azure", "Paint::Cerulean", "Fabric::Azure Blue"],
        )
        .unwrap();
        assert_eq!(
            wordings.lexicons(),
            vec![Some("Paint"), None, Some("Fabric")]
        );
    }

    #[test]
    fn test_empty_wordings_fail() {
        let dictionary = Dictionary::new(None);
        let result = Wordings::new(&dictionary, Vec::<String>::new());
        assert!(matches!(result, Err(WordMongerError::EmptyGroup(_))));
    }

    #[test]
    fn test_serialize_keeps_lexicon_prefix() {
        let dictionary = Dictionary::new(None);
        let wordings = Wordings::new(&dictionary, ["Paint::Sky Blue", "azure"]).unwrap();
        assert_eq!(
            wordings.serialize(),
            vec!["Paint::Sky Blue".to_string(), "azure".to_string()]
        );
    }
}
