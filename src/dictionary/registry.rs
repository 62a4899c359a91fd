//! Named dictionaries and the active-dictionary context.

use std::collections::HashMap;

use log::{debug, info};

use super::Dictionary;
use crate::config::DictionaryConfig;
use crate::error::{Result, WordMongerError};

/// Owns every dictionary of a process, keyed by name.
///
/// The unnamed default dictionary always exists. One dictionary is *active*
/// at a time; it is the one used when a caller does not name one.
/// [`push_active`](Self::push_active) and [`pop_active`](Self::pop_active)
/// switch it for a scope and restore the previous one afterwards.
///
/// # Examples
///
/// ```
/// use wordmonger::dictionary::DictionaryRegistry;
///
/// let mut registry = DictionaryRegistry::new();
/// registry.create(Some("paint")).unwrap();
///
/// registry.push_active(Some("paint")).unwrap();
/// registry
///     .active_mut()
///     .register_synonyms(["transparent", "trans"])
///     .unwrap();
/// registry.pop_active();
///
/// assert_eq!(registry.active().name(), None);
/// assert!(registry.dictionary(Some("paint")).unwrap().synonyms("transparent").is_some());
/// ```
#[derive(Debug)]
pub struct DictionaryRegistry {
    dictionaries: HashMap<Option<String>, Dictionary>,
    active: Vec<Option<String>>,
}

impl DictionaryRegistry {
    /// Create a registry holding only the default dictionary, which is active.
    pub fn new() -> Self {
        let mut dictionaries = HashMap::new();
        dictionaries.insert(None, Dictionary::new(None));
        DictionaryRegistry {
            dictionaries,
            active: vec![None],
        }
    }

    /// Take ownership of a dictionary under its own name.
    pub fn add(&mut self, dictionary: Dictionary) -> Result<&mut Dictionary> {
        let name = dictionary.name().map(str::to_string);
        if self.dictionaries.contains_key(&name) {
            return Err(WordMongerError::duplicate_dictionary(
                dictionary.display_name(),
            ));
        }
        info!("registered dictionary {}", dictionary.display_name());
        Ok(self.dictionaries.entry(name).or_insert(dictionary))
    }

    /// Create and register an empty dictionary.
    pub fn create(&mut self, name: Option<&str>) -> Result<&mut Dictionary> {
        self.add(Dictionary::new(name))
    }

    /// Create and register an empty dictionary from configuration.
    pub fn create_from_config(&mut self, config: &DictionaryConfig) -> Result<&mut Dictionary> {
        self.add(Dictionary::from_config(config)?)
    }

    /// Remove a named dictionary. The default dictionary cannot be removed,
    /// nor can a dictionary that is on the active stack.
    pub fn remove(&mut self, name: &str) -> Result<Dictionary> {
        let key = Some(name.to_string());
        if self.active.contains(&key) {
            return Err(WordMongerError::invalid_argument(format!(
                "dictionary {name} is active"
            )));
        }
        self.dictionaries
            .remove(&key)
            .ok_or_else(|| WordMongerError::undefined_dictionary(name))
    }

    pub fn dictionary(&self, name: Option<&str>) -> Option<&Dictionary> {
        self.dictionaries.get(&name.map(str::to_string))
    }

    pub fn dictionary_mut(&mut self, name: Option<&str>) -> Option<&mut Dictionary> {
        self.dictionaries.get_mut(&name.map(str::to_string))
    }

    pub fn contains(&self, name: Option<&str>) -> bool {
        self.dictionary(name).is_some()
    }

    /// Names of the named dictionaries, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.dictionaries.keys().flatten().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    /// Always `false`: the default dictionary is never removed.
    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }

    fn require(&self, name: Option<&str>) -> Result<Option<String>> {
        if self.contains(name) {
            Ok(name.map(str::to_string))
        } else {
            Err(WordMongerError::undefined_dictionary(
                name.unwrap_or(super::DEFAULT_DICTIONARY_NAME),
            ))
        }
    }

    /// Make a dictionary active, replacing the current active dictionary.
    pub fn activate(&mut self, name: Option<&str>) -> Result<()> {
        let name = self.require(name)?;
        debug!("activating dictionary {name:?}");
        if let Some(top) = self.active.last_mut() {
            *top = name;
        }
        Ok(())
    }

    /// Make a dictionary active until the matching [`pop_active`](Self::pop_active).
    pub fn push_active(&mut self, name: Option<&str>) -> Result<()> {
        let name = self.require(name)?;
        debug!("pushing active dictionary {name:?}");
        self.active.push(name);
        Ok(())
    }

    /// Restore the previously active dictionary. Returns `false` when there
    /// is nothing to restore.
    pub fn pop_active(&mut self) -> bool {
        if self.active.len() > 1 {
            self.active.pop();
            true
        } else {
            false
        }
    }

    fn active_name(&self) -> Option<&str> {
        self.active.last().and_then(|name| name.as_deref())
    }

    /// The active dictionary.
    pub fn active(&self) -> &Dictionary {
        let name = self.active_name().map(str::to_string);
        match self.dictionaries.get(&name) {
            Some(dictionary) => dictionary,
            None => &self.dictionaries[&None],
        }
    }

    /// The active dictionary, mutably.
    pub fn active_mut(&mut self) -> &mut Dictionary {
        let mut name = self.active_name().map(str::to_string);
        if !self.dictionaries.contains_key(&name) {
            name = None;
        }
        self.dictionaries
            .entry(name)
            .or_insert_with(|| Dictionary::new(None))
    }
}

impl Default for DictionaryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
