//! The dictionary: registry of words, phrases and equivalence groups.
//!
//! A [`Dictionary`] owns everything for one named namespace:
//!
//! - words and phrases, keyed by their text
//! - synonym groups keyed by preferred word, plus the substitution index
//!   mapping every alternate word to its preferred word
//! - wording groups keyed by preferred phrase key, plus the analogous
//!   substitution index
//! - the scanner used to split text into words
//!
//! Registering a group that overlaps existing groups merges them, so each
//! cluster of equivalent spellings is represented by exactly one group and
//! the substitution indexes always mirror the live groups.
//!
//! A dictionary is not safe for concurrent mutation: merges are multi-map
//! read-modify-write sequences. Share it across threads only behind external
//! synchronization.
//!
//! # Examples
//!
//! ```
//! use wordmonger::dictionary::Dictionary;
//!
//! let mut dictionary = Dictionary::named("catalog");
//! dictionary.register_synonyms(["transparent", "trans"]).unwrap();
//! dictionary
//!     .register_wordings(["Trans Blue Green", "Translucent Aqua"])
//!     .unwrap();
//!
//! assert_eq!(
//!     dictionary.synonymize_text("Trans-Blue Green").unwrap(),
//!     "Transparent-Blue Green"
//! );
//! assert_eq!(
//!     dictionary.normalize_text("TRANSLUCENT AQUA").unwrap(),
//!     "TRANSPARENT BLUE GREEN"
//! );
//! ```

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use ahash::AHashMap;
use log::{debug, info};

use crate::analysis::scanner::{RegexScanner, Scanner};
use crate::config::DictionaryConfig;
use crate::equivalence::{Synonyms, Wordings};
use crate::error::Result;
use crate::phrase::Phrase;
use crate::word::Word;

pub mod groups;
pub mod matching;
pub mod pipeline;
pub mod registry;
pub mod serialization;

pub use matching::MatchOptions;
pub use registry::DictionaryRegistry;
pub use serialization::SerializedDictionary;

/// Display name of the unnamed default dictionary.
pub const DEFAULT_DICTIONARY_NAME: &str = "<default>";

static NEXT_DICTIONARY_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one state of one dictionary.
///
/// Changes to synonyms, wordings or the scanner produce a new revision;
/// values derived from text against a dictionary are valid for exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Revision {
    dictionary: u64,
    generation: u64,
}

/// A named collection of words, phrases and equivalence groups.
#[derive(Debug)]
pub struct Dictionary {
    id: u64,
    generation: u64,
    name: Option<String>,
    scanner: Box<dyn Scanner>,
    words: BTreeMap<String, Word>,
    phrases: BTreeMap<String, Phrase>,
    synonyms: BTreeMap<String, Synonyms>,
    synonym_substitutions: AHashMap<String, String>,
    wordings: BTreeMap<String, Wordings>,
    wording_substitutions: AHashMap<String, String>,
}

impl Dictionary {
    /// Create an empty dictionary with the default scanner.
    ///
    /// `None` names the default dictionary.
    pub fn new(name: Option<&str>) -> Self {
        Self::with_scanner(name, &RegexScanner::default())
    }

    /// Create an empty named dictionary.
    pub fn named(name: &str) -> Self {
        Self::new(Some(name))
    }

    /// Create an empty dictionary using a copy of `scanner`.
    pub fn with_scanner(name: Option<&str>, scanner: &dyn Scanner) -> Self {
        Dictionary {
            id: NEXT_DICTIONARY_ID.fetch_add(1, Ordering::Relaxed),
            generation: 0,
            name: name.map(str::to_string),
            scanner: scanner.clone_box(),
            words: BTreeMap::new(),
            phrases: BTreeMap::new(),
            synonyms: BTreeMap::new(),
            synonym_substitutions: AHashMap::new(),
            wordings: BTreeMap::new(),
            wording_substitutions: AHashMap::new(),
        }
    }

    /// Create an empty dictionary from configuration.
    pub fn from_config(config: &DictionaryConfig) -> Result<Self> {
        let scanner = config.scanner.build()?;
        Ok(Self::with_scanner(config.name.as_deref(), scanner.as_ref()))
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The name for messages; the default dictionary shows as `<default>`.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_DICTIONARY_NAME)
    }

    pub fn scanner(&self) -> &dyn Scanner {
        self.scanner.as_ref()
    }

    /// Install a copy of `scanner` and re-key the wording groups with it.
    pub fn set_scanner(&mut self, scanner: &dyn Scanner) -> Result<()> {
        debug!(
            "dictionary {}: scanner {} replaced by {}",
            self.display_name(),
            self.scanner.name(),
            scanner.name()
        );
        self.scanner = scanner.clone_box();
        self.touch();
        self.rekey_wordings()
    }

    /// The current revision of this dictionary.
    pub fn revision(&self) -> Revision {
        Revision {
            dictionary: self.id,
            generation: self.generation,
        }
    }

    fn touch(&mut self) {
        self.generation += 1;
    }

    /// Remove all words, phrases and groups. The scanner is kept.
    pub fn reset(&mut self) {
        info!("dictionary {}: reset", self.display_name());
        self.words.clear();
        self.phrases.clear();
        self.synonyms.clear();
        self.synonym_substitutions.clear();
        self.wordings.clear();
        self.wording_substitutions.clear();
        self.touch();
    }

    /// Scan text into generated words.
    pub fn scan(&self, text: &str) -> Result<Vec<Word>> {
        Ok(self.scanner.scan(text)?.iter().map(Word::from).collect())
    }

    /// Register a word, or confirm an existing generated one.
    pub fn add_word(&mut self, text: &str) -> &Word {
        self.insert_word(Word::new(text))
    }

    /// Register a word; attributes of an already known word are appended to.
    pub fn insert_word(&mut self, word: Word) -> &Word {
        let known = self
            .words
            .entry(word.text().to_string())
            .or_insert_with(|| Word::generated(word.text()));
        known.confirm();
        for (name, values) in word.attributes().iter() {
            for value in values {
                known.add_attribute(name, value.as_str());
            }
        }
        known
    }

    /// Append an attribute to a word, registering the word if needed.
    pub fn add_word_attribute(&mut self, text: &str, name: &str, value: &str) -> &Word {
        let word = self
            .words
            .entry(text.to_string())
            .or_insert_with(|| Word::new(text));
        word.add_attribute(name, value);
        word
    }

    pub fn word(&self, text: &str) -> Option<&Word> {
        self.words.get(text)
    }

    pub fn delete_word(&mut self, text: &str) -> Option<Word> {
        self.words.remove(text)
    }

    /// All words, ordered by text.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.words.values()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Register a phrase, the words it scans into and a wording group for it.
    ///
    /// Registering the same text twice returns the phrase registered first.
    pub fn add_phrase(&mut self, text: &str) -> Result<&Phrase> {
        let phrase = Phrase::new(text);
        if !self.phrases.contains_key(phrase.source()) {
            self.register_wordings([&phrase])?;
        }
        Ok(self
            .phrases
            .entry(phrase.source().to_string())
            .or_insert(phrase))
    }

    /// Record a phrase and its generated words, unless the text is known.
    fn remember_phrase(&mut self, phrase: &Phrase) -> Result<()> {
        if self.phrases.contains_key(phrase.source()) {
            return Ok(());
        }
        for word in phrase.words(self)? {
            self.words.entry(word.text().to_string()).or_insert(word);
        }
        self.phrases
            .insert(phrase.source().to_string(), phrase.clone());
        Ok(())
    }

    pub fn phrase(&self, text: &str) -> Option<&Phrase> {
        self.phrases.get(text)
    }

    /// Remove a phrase from the phrase map. Its wording group is kept.
    pub fn delete_phrase(&mut self, text: &str) -> Option<Phrase> {
        self.phrases.remove(text)
    }

    /// All phrases, ordered by text.
    pub fn phrases(&self) -> impl Iterator<Item = &Phrase> {
        self.phrases.values()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Synonymize text, keeping any lexicon prefix.
    pub fn synonymize_text(&self, text: &str) -> Result<String> {
        Ok(Phrase::new(text).synonymized(self)?.serialize())
    }

    /// Normalize text, keeping any lexicon prefix.
    pub fn normalize_text(&self, text: &str) -> Result<String> {
        Ok(Phrase::new(text).normalized(self)?.serialize())
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Clone for Dictionary {
    /// Copies every map and the scanner; the copy is a distinct dictionary
    /// with its own revision history.
    fn clone(&self) -> Self {
        Dictionary {
            id: NEXT_DICTIONARY_ID.fetch_add(1, Ordering::Relaxed),
            generation: 0,
            name: self.name.clone(),
            scanner: self.scanner.clone_box(),
            words: self.words.clone(),
            phrases: self.phrases.clone(),
            synonyms: self.synonyms.clone(),
            synonym_substitutions: self.synonym_substitutions.clone(),
            wordings: self.wordings.clone(),
            wording_substitutions: self.wording_substitutions.clone(),
        }
    }
}
