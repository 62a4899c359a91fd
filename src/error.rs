//! Error types for the WordMonger library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`WordMongerError`] enum. Lookups that simply find nothing (an unknown
//! dictionary name, a query without matches) return `Option`/empty values
//! instead of an error.
//!
//! # Examples
//!
//! ```
//! use wordmonger::error::{Result, WordMongerError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordMongerError::empty_group("Synonyms"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for WordMonger operations.
#[derive(Error, Debug)]
pub enum WordMongerError {
    /// An equivalence group was constructed without members
    #[error("Empty group: {0} cannot be empty")]
    EmptyGroup(String),

    /// `make_preferred` was asked to promote a key that is not a member
    #[error("Preferred not found: {0}")]
    PreferredNotFound(String),

    /// A dictionary with the same name is already registered
    #[error("Duplicate dictionary: {0}")]
    DuplicateDictionary(String),

    /// No dictionary is registered under the requested name
    #[error("Undefined dictionary: {0}")]
    UndefinedDictionary(String),

    /// A serialized dictionary carried a top-level key we do not know
    #[error("Unknown serialization key: {0}")]
    UnknownSerializationKey(String),

    /// The scanner configuration could not be turned into a scanner
    #[error("Scanner failure: {0}")]
    ScannerFailure(String),

    /// Structurally invalid input (wrong shape of serialized data, bad arguments)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors (dictionary and config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with WordMongerError.
pub type Result<T> = std::result::Result<T, WordMongerError>;

impl WordMongerError {
    /// Create a new empty group error.
    pub fn empty_group<S: Into<String>>(kind: S) -> Self {
        WordMongerError::EmptyGroup(kind.into())
    }

    /// Create a new preferred-not-found error.
    pub fn preferred_not_found<S: Into<String>>(msg: S) -> Self {
        WordMongerError::PreferredNotFound(msg.into())
    }

    /// Create a new duplicate dictionary error.
    pub fn duplicate_dictionary<S: Into<String>>(name: S) -> Self {
        WordMongerError::DuplicateDictionary(name.into())
    }

    /// Create a new undefined dictionary error.
    pub fn undefined_dictionary<S: Into<String>>(name: S) -> Self {
        WordMongerError::UndefinedDictionary(name.into())
    }

    /// Create a new unknown serialization key error.
    pub fn unknown_key<S: Into<String>>(key: S) -> Self {
        WordMongerError::UnknownSerializationKey(key.into())
    }

    /// Create a new scanner failure.
    pub fn scanner<S: Into<String>>(msg: S) -> Self {
        WordMongerError::ScannerFailure(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WordMongerError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = WordMongerError::empty_group("Synonyms");
        assert_eq!(error.to_string(), "Empty group: Synonyms cannot be empty");

        let error = WordMongerError::unknown_key("abbreviations");
        assert_eq!(
            error.to_string(),
            "Unknown serialization key: abbreviations"
        );

        let error = WordMongerError::scanner("Unknown scanner kind: \"stemmer\"");
        assert_eq!(
            error.to_string(),
            "Scanner failure: Unknown scanner kind: \"stemmer\""
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = WordMongerError::from(io_error);

        match error {
            WordMongerError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
