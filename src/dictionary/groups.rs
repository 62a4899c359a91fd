//! Registration, merging and removal of synonym and wording groups.
//!
//! Both kinds of group follow the same register-or-merge rule: every
//! candidate member that already belongs to a live group pulls that whole
//! group into the candidate, and the absorbed group is unregistered. The
//! union, de-duplicated in first-seen order, is registered under its
//! preferred key and the substitution index is rebuilt for its members.
//! Introducing overlapping groups in any order therefore converges on one
//! group per cluster.
//!
//! Wording keys are synonymized text, so every change to the synonym groups
//! re-keys the wording groups and merges any that now coincide.

use log::{debug, warn};

use ahash::AHashMap;

use super::Dictionary;
use crate::analysis::case::casefold;
use crate::equivalence::{Equivalents, Synonyms, Wordings};
use crate::error::{Result, WordMongerError};
use crate::phrase::{Phrase, PhraseSource};
use crate::word::Word;

impl Dictionary {
    /// Register a synonym group, merging it with every group it overlaps.
    ///
    /// Returns the resulting canonical group.
    pub fn register_synonyms<I, S>(&mut self, members: I) -> Result<&Synonyms>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let candidate = Equivalents::new(members)?;
        let mut merged: Vec<String> = Vec::with_capacity(candidate.len());
        let mut absorbed: Vec<Synonyms> = Vec::new();

        for key in candidate.keys() {
            match self.synonym_group_key(key).map(str::to_string) {
                Some(group_key) => {
                    if let Some(group) = self.unregister_synonyms(&group_key) {
                        debug!(
                            "dictionary {}: synonyms {:?} absorbed into new group",
                            self.display_name(),
                            group.words()
                        );
                        push_unique(&mut merged, group.words());
                        absorbed.push(group);
                    }
                }
                None => push_unique(&mut merged, std::slice::from_ref(key)),
            }
        }

        let mut equivalents = Equivalents::new(&merged)?;
        equivalents.attributes_mut().extend(candidate.attributes());
        for group in &absorbed {
            equivalents
                .attributes_mut()
                .extend(group.equivalents().attributes());
        }
        let preferred = self.install_synonyms(Synonyms::from_equivalents(equivalents));
        self.settle_synonyms(&preferred)
    }

    /// The group stored under a preferred word.
    pub fn synonyms(&self, preferred: &str) -> Option<&Synonyms> {
        self.synonyms.get(&casefold(preferred))
    }

    /// The group containing a word, preferred or not.
    pub fn synonyms_for(&self, word: &str) -> Option<&Synonyms> {
        self.synonym_group_key(&casefold(word))
            .and_then(|key| self.synonyms.get(key))
    }

    /// The synonym group a registered word belongs to.
    pub fn synonyms_of(&self, word: &Word) -> Option<&Synonyms> {
        self.synonyms_for(word.text())
    }

    /// All synonym groups, ordered by preferred word.
    pub fn synonym_groups(&self) -> impl Iterator<Item = &Synonyms> {
        self.synonyms.values()
    }

    /// The preferred word an alternate word substitutes to.
    pub fn synonym_substitute(&self, word: &str) -> Option<&str> {
        self.synonym_substitutions
            .get(&casefold(word))
            .map(String::as_str)
    }

    /// The substitution index: alternate word → preferred word.
    pub fn synonym_substitutions(&self) -> &AHashMap<String, String> {
        &self.synonym_substitutions
    }

    /// Add a word to the group stored under `preferred`.
    ///
    /// A word that belongs to another group brings that group along.
    pub fn add_synonym(&mut self, preferred: &str, word: &str) -> Result<&Synonyms> {
        let preferred = self
            .synonyms(preferred)
            .map(|group| group.preferred().to_string())
            .ok_or_else(|| {
                WordMongerError::invalid_argument(format!("no synonym group {preferred:?}"))
            })?;
        self.register_synonyms([preferred.as_str(), word])
    }

    /// Append an attribute to the group stored under `preferred`.
    pub fn add_synonyms_attribute(
        &mut self,
        preferred: &str,
        name: &str,
        value: &str,
    ) -> Option<&Synonyms> {
        let group = self.synonyms.get_mut(&casefold(preferred))?;
        group.add_attribute(name, value);
        Some(group)
    }

    /// Remove the group stored under `preferred` and its substitutions.
    pub fn delete_synonyms(&mut self, preferred: &str) -> Result<Option<Synonyms>> {
        let Some(removed) = self.unregister_synonyms(&casefold(preferred)) else {
            warn!(
                "dictionary {}: no synonym group {preferred:?} to delete",
                self.display_name()
            );
            return Ok(None);
        };
        self.rekey_wordings()?;
        Ok(Some(removed))
    }

    /// Make `word` the preferred member of the group stored under `preferred`.
    pub fn make_preferred_synonym(&mut self, preferred: &str, word: &str) -> Result<&Synonyms> {
        let key = casefold(preferred);
        let group = self.synonyms.get(&key).ok_or_else(|| {
            WordMongerError::invalid_argument(format!("no synonym group {preferred:?}"))
        })?;
        if !group.contains(word) {
            return Err(WordMongerError::preferred_not_found(format!(
                "{word:?} is not in {:?}",
                group.words()
            )));
        }

        if let Some(mut group) = self.unregister_synonyms(&key) {
            group.equivalents_mut().make_preferred(word)?;
            let preferred = self.install_synonyms(group);
            return self.settle_synonyms(&preferred);
        }
        Err(WordMongerError::invalid_argument(format!(
            "no synonym group {preferred:?}"
        )))
    }

    fn synonym_group_key(&self, key: &str) -> Option<&str> {
        if let Some((preferred, _)) = self.synonyms.get_key_value(key) {
            return Some(preferred.as_str());
        }
        self.synonym_substitutions.get(key).map(String::as_str)
    }

    fn unregister_synonyms(&mut self, preferred: &str) -> Option<Synonyms> {
        let group = self.synonyms.remove(preferred)?;
        for alternate in group.alternates() {
            self.synonym_substitutions.remove(alternate);
        }
        self.touch();
        Some(group)
    }

    fn install_synonyms(&mut self, group: Synonyms) -> String {
        for (alternate, preferred) in group.substitutions() {
            self.synonym_substitutions
                .insert(alternate.to_string(), preferred.to_string());
        }
        self.touch();
        debug!(
            "dictionary {}: registered synonyms {:?}",
            self.display_name(),
            group.words()
        );
        let preferred = group.preferred().to_string();
        self.synonyms.insert(preferred.clone(), group);
        preferred
    }

    /// Re-key the wordings after a synonym change and return the group
    /// stored under `preferred`.
    fn settle_synonyms(&mut self, preferred: &str) -> Result<&Synonyms> {
        self.rekey_wordings()?;
        self.synonyms.get(preferred).ok_or_else(|| {
            WordMongerError::invalid_argument(format!("no synonym group {preferred:?}"))
        })
    }

    /// Register a wording group, merging it with every group it overlaps.
    ///
    /// Phrases are keyed by their case-folded synonymized text. Each phrase
    /// and the words it scans into are registered with the dictionary too.
    /// Returns the resulting canonical group.
    pub fn register_wordings<I, P>(&mut self, phrases: I) -> Result<&Wordings>
    where
        I: IntoIterator<Item = P>,
        P: Into<PhraseSource>,
    {
        let phrases: Vec<Phrase> = phrases
            .into_iter()
            .map(|source| source.into().into_phrase())
            .collect();
        for phrase in &phrases {
            self.remember_phrase(phrase)?;
        }
        let candidate = Wordings::new(self, phrases)?;
        self.merge_wordings(candidate)
    }

    fn merge_wordings(&mut self, candidate: Wordings) -> Result<&Wordings> {
        let mut merged: Vec<(String, Phrase)> = Vec::with_capacity(candidate.len());
        let mut absorbed: Vec<Wordings> = Vec::new();

        for (key, phrase) in candidate.members() {
            match self.wording_group_key(key).map(str::to_string) {
                Some(group_key) => {
                    if let Some(group) = self.unregister_wordings(&group_key) {
                        debug!(
                            "dictionary {}: wordings {:?} absorbed into new group",
                            self.display_name(),
                            group.keys()
                        );
                        for (key, phrase) in group.members() {
                            push_unique_member(&mut merged, key, phrase);
                        }
                        absorbed.push(group);
                    }
                }
                None => push_unique_member(&mut merged, key, phrase),
            }
        }

        let mut wordings = Wordings::from_members(merged)?;
        for group in &absorbed {
            wordings.merge(group);
        }
        wordings.merge(&candidate);
        Ok(self.install_wordings(wordings))
    }

    /// Recompute every wording key against the current synonyms and scanner.
    ///
    /// Groups whose members now share a key are merged and the wording
    /// substitution index is rebuilt. Nothing changes if no key moved.
    pub(crate) fn rekey_wordings(&mut self) -> Result<()> {
        let mut rekeyed = Vec::with_capacity(self.wordings.len());
        let mut moved = false;
        for group in self.wordings.values() {
            let mut members = Vec::with_capacity(group.len());
            for phrase in group.phrases() {
                members.push((phrase.wording_key(self)?, phrase.clone()));
            }
            let mut wordings = Wordings::from_members(members)?;
            wordings.attributes_mut().extend(group.attributes());
            moved |= wordings.keys() != group.keys();
            rekeyed.push(wordings);
        }
        if !moved {
            return Ok(());
        }

        let before = self.wordings.len();
        self.wordings.clear();
        self.wording_substitutions.clear();
        for group in rekeyed {
            self.merge_wordings(group)?;
        }
        debug!(
            "dictionary {}: re-keyed {before} wording groups into {}",
            self.display_name(),
            self.wordings.len()
        );
        Ok(())
    }

    /// The group stored under a preferred key.
    pub fn wordings(&self, preferred: &str) -> Option<&Wordings> {
        self.wordings.get(&casefold(preferred))
    }

    /// The group a phrase belongs to, found through its wording key.
    pub fn wordings_for(&self, text: &str) -> Result<Option<&Wordings>> {
        let key = Phrase::new(text).wording_key(self)?;
        Ok(self
            .wording_group_key(&key)
            .and_then(|key| self.wordings.get(key)))
    }

    /// All wording groups, ordered by preferred key.
    pub fn wording_groups(&self) -> impl Iterator<Item = &Wordings> {
        self.wordings.values()
    }

    /// The preferred key an alternate wording key substitutes to.
    pub fn wording_substitute(&self, key: &str) -> Option<&str> {
        self.wording_substitutions
            .get(&casefold(key))
            .map(String::as_str)
    }

    /// The substitution index: alternate key → preferred key.
    pub fn wording_substitutions(&self) -> &AHashMap<String, String> {
        &self.wording_substitutions
    }

    /// Add a phrase to the group stored under `preferred`.
    pub fn add_wording<P>(&mut self, preferred: &str, phrase: P) -> Result<&Wordings>
    where
        P: Into<PhraseSource>,
    {
        let group_phrase = self
            .wordings(preferred)
            .map(|group| group.preferred_phrase().clone())
            .ok_or_else(|| {
                WordMongerError::invalid_argument(format!("no wording group {preferred:?}"))
            })?;
        self.register_wordings([PhraseSource::Phrase(group_phrase), phrase.into()])
    }

    /// Append an attribute to the group stored under `preferred`.
    pub fn add_wordings_attribute(
        &mut self,
        preferred: &str,
        name: &str,
        value: &str,
    ) -> Option<&Wordings> {
        let group = self.wordings.get_mut(&casefold(preferred))?;
        group.add_attribute(name, value);
        Some(group)
    }

    /// Remove the group stored under `preferred` and its substitutions.
    pub fn delete_wordings(&mut self, preferred: &str) -> Option<Wordings> {
        let removed = self.unregister_wordings(&casefold(preferred));
        if removed.is_none() {
            warn!(
                "dictionary {}: no wording group {preferred:?} to delete",
                self.display_name()
            );
        }
        removed
    }

    /// Make the member keyed like `phrase` the preferred member of the group
    /// stored under `preferred`.
    pub fn make_preferred_wording(&mut self, preferred: &str, phrase: &str) -> Result<&Wordings> {
        let key = casefold(preferred);
        let member = Phrase::new(phrase).wording_key(self)?;
        let group = self.wordings.get(&key).ok_or_else(|| {
            WordMongerError::invalid_argument(format!("no wording group {preferred:?}"))
        })?;
        if !group.contains(&member) {
            return Err(WordMongerError::preferred_not_found(format!(
                "{phrase:?} is not in {:?}",
                group.keys()
            )));
        }

        if let Some(mut group) = self.unregister_wordings(&key) {
            group.make_preferred(&member)?;
            return Ok(self.install_wordings(group));
        }
        Err(WordMongerError::invalid_argument(format!(
            "no wording group {preferred:?}"
        )))
    }

    fn wording_group_key(&self, key: &str) -> Option<&str> {
        if let Some((preferred, _)) = self.wordings.get_key_value(key) {
            return Some(preferred.as_str());
        }
        self.wording_substitutions.get(key).map(String::as_str)
    }

    fn unregister_wordings(&mut self, preferred: &str) -> Option<Wordings> {
        let group = self.wordings.remove(preferred)?;
        for alternate in group.alternates() {
            self.wording_substitutions.remove(alternate);
        }
        self.touch();
        Some(group)
    }

    fn install_wordings(&mut self, group: Wordings) -> &Wordings {
        let preferred = group.preferred().to_string();
        for alternate in group.alternates() {
            self.wording_substitutions
                .insert(alternate.clone(), preferred.clone());
        }
        self.touch();
        debug!(
            "dictionary {}: registered wordings {:?}",
            self.display_name(),
            group.keys()
        );
        self.wordings.entry(preferred).or_insert(group)
    }
}

fn push_unique(merged: &mut Vec<String>, keys: &[String]) {
    for key in keys {
        if !merged.contains(key) {
            merged.push(key.clone());
        }
    }
}

fn push_unique_member(merged: &mut Vec<(String, Phrase)>, key: &str, phrase: &Phrase) {
    if !merged.iter().any(|(k, _)| k == key) {
        merged.push((key.to_string(), phrase.clone()));
    }
}
