//! Phrases: free text, optionally tagged with a lexicon.
//!
//! A phrase written as `Lexicon::Text` carries the lexicon tag `Lexicon` and
//! the body `Text`. Everything derived from a phrase (its words, its
//! synonymized and normalized forms) is computed from the body against a
//! [`Dictionary`] and memoized. The memo remembers which dictionary and which
//! dictionary revision it was computed for, so a phrase never serves results
//! that predate a change to that dictionary's synonyms, wordings or scanner.
//!
//! # Examples
//!
//! ```
//! use wordmonger::dictionary::Dictionary;
//! use wordmonger::phrase::Phrase;
//!
//! let mut dictionary = Dictionary::new(None);
//! dictionary.register_synonyms(["transparent", "trans"]).unwrap();
//!
//! let phrase = Phrase::new("Catalog::Trans-Blue Green");
//! assert_eq!(phrase.lexicon(), Some("Catalog"));
//! assert_eq!(phrase.text(), "Trans-Blue Green");
//!
//! let synonymized = phrase.synonymized(&dictionary).unwrap();
//! assert_eq!(synonymized.text(), "Transparent-Blue Green");
//! assert_eq!(synonymized.source(), "Catalog::Transparent-Blue Green");
//! ```

use std::cell::RefCell;
use std::fmt;

use crate::analysis::case::casefold;
use crate::dictionary::{Dictionary, Revision, pipeline};
use crate::error::Result;
use crate::word::Word;

/// Separator between a lexicon tag and the phrase body.
pub const LEXICON_SEPARATOR: &str = "::";

/// Split `Lexicon::Body` into its tag and body.
///
/// The tag must be non-empty and free of whitespace; otherwise the whole
/// text is the body.
pub fn split_lexicon(text: &str) -> (Option<&str>, &str) {
    match text.split_once(LEXICON_SEPARATOR) {
        Some((lexicon, body))
            if !lexicon.is_empty() && !lexicon.chars().any(char::is_whitespace) =>
        {
            (Some(lexicon), body)
        }
        _ => (None, text),
    }
}

/// Prefix a body with a lexicon tag, if any.
pub fn join_lexicon(lexicon: Option<&str>, body: &str) -> String {
    match lexicon {
        Some(lexicon) => format!("{lexicon}{LEXICON_SEPARATOR}{body}"),
        None => body.to_string(),
    }
}

/// Memoized forms, valid for one dictionary revision.
#[derive(Clone, Debug, Default)]
struct Derived {
    revision: Option<Revision>,
    words: Option<Vec<Word>>,
    synonymized: Option<Box<Phrase>>,
    normalized: Option<Box<Phrase>>,
}

/// An immutable piece of text with an optional lexicon tag.
#[derive(Clone, Debug)]
pub struct Phrase {
    source: String,
    lexicon: Option<String>,
    body_start: usize,
    derived: RefCell<Derived>,
}

impl Phrase {
    /// Create a phrase, parsing an optional `Lexicon::` prefix.
    pub fn new<S: Into<String>>(source: S) -> Self {
        let source = source.into();
        let (lexicon, body) = split_lexicon(&source);
        let lexicon = lexicon.map(str::to_string);
        let body_start = source.len() - body.len();
        Phrase {
            source,
            lexicon,
            body_start,
            derived: RefCell::new(Derived::default()),
        }
    }

    /// Create a phrase from a lexicon tag and a body.
    pub fn with_lexicon(lexicon: Option<&str>, body: &str) -> Self {
        Phrase::new(join_lexicon(lexicon, body))
    }

    /// The full text, including any lexicon prefix.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The body, without the lexicon prefix.
    pub fn text(&self) -> &str {
        &self.source[self.body_start..]
    }

    pub fn lexicon(&self) -> Option<&str> {
        self.lexicon.as_deref()
    }

    /// Serialized form: the full text.
    pub fn serialize(&self) -> String {
        self.source.clone()
    }

    fn cached<T: Clone>(
        &self,
        revision: Revision,
        select: impl Fn(&Derived) -> &Option<T>,
    ) -> Option<T> {
        let derived = self.derived.borrow();
        if derived.revision == Some(revision) {
            select(&derived).clone()
        } else {
            None
        }
    }

    fn remember(&self, revision: Revision, store: impl FnOnce(&mut Derived)) {
        let mut derived = self.derived.borrow_mut();
        if derived.revision != Some(revision) {
            *derived = Derived {
                revision: Some(revision),
                ..Derived::default()
            };
        }
        store(&mut derived);
    }

    /// The words of the body, as scanned by the dictionary's scanner.
    pub fn words(&self, dictionary: &Dictionary) -> Result<Vec<Word>> {
        let revision = dictionary.revision();
        if let Some(words) = self.cached(revision, |d| &d.words) {
            return Ok(words);
        }
        let words = dictionary.scan(self.text())?;
        self.remember(revision, |d| d.words = Some(words.clone()));
        Ok(words)
    }

    /// The phrase with every known synonym replaced by its preferred word.
    pub fn synonymized(&self, dictionary: &Dictionary) -> Result<Phrase> {
        let revision = dictionary.revision();
        if let Some(phrase) = self.cached(revision, |d| &d.synonymized) {
            return Ok(*phrase);
        }
        let body = pipeline::synonymize(dictionary, self.text())?;
        let phrase = Phrase::with_lexicon(self.lexicon(), &body);
        self.remember(revision, |d| d.synonymized = Some(Box::new(phrase.clone())));
        Ok(phrase)
    }

    /// The body of [`synonymized`](Self::synonymized).
    pub fn synonymized_text(&self, dictionary: &Dictionary) -> Result<String> {
        Ok(self.synonymized(dictionary)?.text().to_string())
    }

    /// The phrase replaced by its wording group's preferred phrase, rendered
    /// in this phrase's case pattern.
    pub fn normalized(&self, dictionary: &Dictionary) -> Result<Phrase> {
        let revision = dictionary.revision();
        if let Some(phrase) = self.cached(revision, |d| &d.normalized) {
            return Ok(*phrase);
        }
        let body = pipeline::normalize(dictionary, self.lexicon(), self.text())?;
        let phrase = Phrase::with_lexicon(self.lexicon(), &body);
        self.remember(revision, |d| d.normalized = Some(Box::new(phrase.clone())));
        Ok(phrase)
    }

    /// The body of [`normalized`](Self::normalized).
    pub fn normalized_text(&self, dictionary: &Dictionary) -> Result<String> {
        Ok(self.normalized(dictionary)?.text().to_string())
    }

    /// The words of the normalized body.
    pub fn normalized_words(&self, dictionary: &Dictionary) -> Result<Vec<String>> {
        let normalized = self.normalized(dictionary)?;
        Ok(normalized
            .words(dictionary)?
            .iter()
            .map(|word| word.text().to_string())
            .collect())
    }

    /// The key this phrase has in a wording group: the case-folded
    /// synonymized body, qualified by the case-folded lexicon tag.
    pub fn wording_key(&self, dictionary: &Dictionary) -> Result<String> {
        let body = casefold(&self.synonymized_text(dictionary)?);
        let lexicon = self.lexicon().map(casefold);
        Ok(join_lexicon(lexicon.as_deref(), &body))
    }
}

impl PartialEq for Phrase {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Phrase {}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// Anything a phrase argument can be given as: raw text or a phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhraseSource {
    Text(String),
    Phrase(Phrase),
}

impl PhraseSource {
    pub fn into_phrase(self) -> Phrase {
        match self {
            PhraseSource::Text(text) => Phrase::new(text),
            PhraseSource::Phrase(phrase) => phrase,
        }
    }
}

impl From<&str> for PhraseSource {
    fn from(text: &str) -> Self {
        PhraseSource::Text(text.to_string())
    }
}

impl From<String> for PhraseSource {
    fn from(text: String) -> Self {
        PhraseSource::Text(text)
    }
}

impl From<&String> for PhraseSource {
    fn from(text: &String) -> Self {
        PhraseSource::Text(text.clone())
    }
}

impl From<Phrase> for PhraseSource {
    fn from(phrase: Phrase) -> Self {
        PhraseSource::Phrase(phrase)
    }
}

impl From<&Phrase> for PhraseSource {
    fn from(phrase: &Phrase) -> Self {
        PhraseSource::Phrase(phrase.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lexicon() {
        assert_eq!(split_lexicon("Lexicon::Tr Blue"), (Some("Lexicon"), "Tr Blue"));
        assert_eq!(split_lexicon("Tr Blue"), (None, "Tr Blue"));
        assert_eq!(split_lexicon("::Tr Blue"), (None, "::Tr Blue"));
        assert_eq!(split_lexicon("Two words::Blue"), (None, "Two words::Blue"));
        assert_eq!(split_lexicon("A::B::C"), (Some("A"), "B::C"));
    }

    #[test]
    fn test_phrase_parts() {
        let phrase = Phrase::new("Lexicon::Tr Blue");
        assert_eq!(phrase.source(), "Lexicon::Tr Blue");
        assert_eq!(phrase.text(), "Tr Blue");
        assert_eq!(phrase.lexicon(), Some("Lexicon"));
        assert_eq!(phrase.serialize(), "Lexicon::Tr Blue");
        assert_eq!(phrase.to_string(), "Lexicon::Tr Blue");

        let phrase = Phrase::new("the quick, Brown fox");
        assert_eq!(phrase.text(), "the quick, Brown fox");
        assert_eq!(phrase.lexicon(), None);
    }

    #[test]
    fn test_words() {
        let dictionary = Dictionary::new(None);
        let phrase = Phrase::new("the quick, Brown fox");
        let words: Vec<_> = phrase
            .words(&dictionary)
            .unwrap()
            .into_iter()
            .map(|w| w.text().to_string())
            .collect();
        assert_eq!(words, vec!["the", "quick", "Brown", "fox"]);
    }

    #[test]
    fn test_memo_follows_dictionary_changes() {
        let mut dictionary = Dictionary::new(None);
        let phrase = Phrase::new("Trans Blue");
        assert_eq!(phrase.synonymized_text(&dictionary).unwrap(), "Trans Blue");

        dictionary.register_synonyms(["transparent", "trans"]).unwrap();
        assert_eq!(
            phrase.synonymized_text(&dictionary).unwrap(),
            "Transparent Blue"
        );
    }

    #[test]
    fn test_memo_is_per_dictionary() {
        let mut first = Dictionary::new(None);
        first.register_synonyms(["transparent", "trans"]).unwrap();
        let second = Dictionary::new(None);

        let phrase = Phrase::new("trans blue");
        assert_eq!(phrase.synonymized_text(&first).unwrap(), "transparent blue");
        assert_eq!(phrase.synonymized_text(&second).unwrap(), "trans blue");
    }

    #[test]
    fn test_wording_key() {
        let mut dictionary = Dictionary::new(None);
        dictionary.register_synonyms(["transparent", "trans", "tr"]).unwrap();

        assert_eq!(
            Phrase::new("Tr Blue").wording_key(&dictionary).unwrap(),
            "transparent blue"
        );
        assert_eq!(
            Phrase::new("Lexicon::Tr Blue").wording_key(&dictionary).unwrap(),
            "lexicon::transparent blue"
        );
    }

    #[test]
    fn test_phrase_source_conversions() {
        let from_text: PhraseSource = "Paint::Azure".into();
        assert_eq!(from_text.into_phrase().lexicon(), Some("Paint"));

        let phrase = Phrase::new("Azure");
        let from_phrase: PhraseSource = (&phrase).into();
        assert_eq!(from_phrase.into_phrase(), phrase);
    }
}
