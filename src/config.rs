//! Configuration for dictionaries and their scanners.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::scanner::{RegexScanner, Scanner, WhitespaceScanner};
use crate::error::{Result, WordMongerError};

/// Configuration for a dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Dictionary name. `None` is the default dictionary.
    pub name: Option<String>,

    /// Scanner used to split text into words.
    pub scanner: ScannerConfig,
}

impl DictionaryConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Configuration for a scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// One of `default`, `regex` or `whitespace`.
    pub kind: String,

    /// Token pattern; required by the `regex` kind.
    pub pattern: Option<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            kind: "default".to_string(),
            pattern: None,
        }
    }
}

impl ScannerConfig {
    /// A `regex` scanner configuration.
    pub fn regex<S: Into<String>>(pattern: S) -> Self {
        Self {
            kind: "regex".to_string(),
            pattern: Some(pattern.into()),
        }
    }

    /// Build the configured scanner.
    pub fn build(&self) -> Result<Box<dyn Scanner>> {
        match self.kind.as_str() {
            "default" => Ok(Box::new(RegexScanner::new()?)),
            "regex" => {
                let pattern = self.pattern.as_deref().ok_or_else(|| {
                    WordMongerError::scanner("the regex scanner requires a pattern")
                })?;
                Ok(Box::new(RegexScanner::with_pattern(pattern)?))
            }
            "whitespace" => Ok(Box::new(WhitespaceScanner::new())),
            other => Err(WordMongerError::scanner(format!(
                "unknown scanner kind: {other}"
            ))),
        }
    }
}
