//! Regex-based scanner implementation.

use std::sync::Arc;

use regex::Regex;

use super::Scanner;
use crate::analysis::token::Token;
use crate::error::{Result, WordMongerError};

/// Pattern used by the default scanner: runs of word characters.
pub const DEFAULT_PATTERN: &str = r"\w+";

/// A scanner that extracts every match of a regular expression as a token.
#[derive(Clone, Debug)]
pub struct RegexScanner {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexScanner {
    /// Create a new regex scanner with the default pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_PATTERN)
    }

    /// Create a new regex scanner with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| WordMongerError::scanner(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexScanner {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this scanner.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexScanner {
    fn default() -> Self {
        RegexScanner {
            pattern: Arc::new(Regex::new(DEFAULT_PATTERN).expect("default pattern is valid")),
        }
    }
}

impl Scanner for RegexScanner {
    fn scan(&self, text: &str) -> Result<Vec<Token>> {
        Ok(self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "regex"
    }

    fn clone_box(&self) -> Box<dyn Scanner> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_scanner() {
        let scanner = RegexScanner::new().unwrap();
        let tokens = scanner.scan("hello world").unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
    }

    #[test]
    fn test_default_pattern_skips_punctuation() {
        let scanner = RegexScanner::default();
        let tokens = scanner.scan("the quick, Brown fox").unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["the", "quick", "Brown", "fox"]);
    }

    #[test]
    fn test_hyphen_pattern() {
        let scanner = RegexScanner::with_pattern(r"\w+-?").unwrap();
        let tokens = scanner.scan("Trans-Blue Green").unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Trans-", "Blue", "Green"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let result = RegexScanner::with_pattern("(unclosed");
        assert!(matches!(result, Err(WordMongerError::ScannerFailure(_))));
    }

    #[test]
    fn test_scanner_name() {
        assert_eq!(RegexScanner::new().unwrap().name(), "regex");
    }
}
