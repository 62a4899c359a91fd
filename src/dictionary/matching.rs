//! Matching query text against registered wording groups.

use super::Dictionary;
use crate::analysis::case::casefold;
use crate::equivalence::Wordings;
use crate::error::Result;
use crate::phrase::Phrase;

/// How [`Dictionary::matching_phrases`] compares a query with a wording group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchOptions {
    /// Compare case-folded keys
    pub case_insensitive: bool,
    /// Only accept groups with a member in the query's lexicon; lexicon tags
    /// compare case-folded when `case_insensitive` is set
    pub in_lexicon: bool,
    /// Compare normalized text; otherwise compare the sorted normalized words
    pub in_order: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions {
            case_insensitive: true,
            in_lexicon: false,
            in_order: true,
        }
    }
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn in_lexicon(mut self, in_lexicon: bool) -> Self {
        self.in_lexicon = in_lexicon;
        self
    }

    pub fn in_order(mut self, in_order: bool) -> Self {
        self.in_order = in_order;
        self
    }

    fn key(&self, dictionary: &Dictionary, phrase: &Phrase) -> Result<String> {
        let key = if self.in_order {
            phrase.normalized_text(dictionary)?
        } else {
            let mut words = phrase.normalized_words(dictionary)?;
            words.sort();
            words.join(" ")
        };
        Ok(if self.case_insensitive {
            casefold(&key)
        } else {
            key
        })
    }

    fn same_lexicon(&self, left: Option<&str>, right: Option<&str>) -> bool {
        match (left, right) {
            (Some(left), Some(right)) if self.case_insensitive => casefold(left) == casefold(right),
            _ => left == right,
        }
    }
}

impl Dictionary {
    /// Wording groups whose preferred phrase compares equal to `query`.
    ///
    /// Both sides are normalized against this dictionary. With
    /// `in_lexicon`, a group also needs a member in the query's lexicon; an
    /// untagged query is only in the untagged lexicon. No match is an empty
    /// result.
    pub fn matching_phrases(&self, query: &str, options: &MatchOptions) -> Result<Vec<&Wordings>> {
        let query = Phrase::new(query);
        let query_key = options.key(self, &query)?;

        let mut matches = Vec::new();
        for wordings in self.wording_groups() {
            if options.key(self, wordings.preferred_phrase())? != query_key {
                continue;
            }
            if options.in_lexicon
                && !wordings
                    .lexicons()
                    .into_iter()
                    .any(|lexicon| options.same_lexicon(lexicon, query.lexicon()))
            {
                continue;
            }
            matches.push(wordings);
        }
        Ok(matches)
    }
}
