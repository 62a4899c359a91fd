//! # WordMonger
//!
//! Normalize words and phrases into canonical forms using dictionary-scoped
//! equivalence groups.
//!
//! ## Features
//!
//! - Synonym groups for words and wording groups for phrases, merged on
//!   overlap so every cluster of equivalent spellings has one group
//! - Case-preserving substitution: `TRANS` becomes `TRANSPARENT`
//! - Lexicon-tagged phrases (`Lexicon::Text`) for scoped matching
//! - Pluggable scanners
//! - Compact JSON serialization with a lossless round trip
//!
//! ## Example
//!
//! ```
//! use wordmonger::prelude::*;
//!
//! let mut dictionary = Dictionary::new(None);
//! dictionary.register_synonyms(["transparent", "trans", "tr"]).unwrap();
//! dictionary.add_phrase("Trans Blue").unwrap();
//!
//! assert_eq!(dictionary.synonymize_text("TR BLUE").unwrap(), "TRANSPARENT BLUE");
//!
//! let matches = dictionary
//!     .matching_phrases("tr Blue", &MatchOptions::default())
//!     .unwrap();
//! assert_eq!(matches.len(), 1);
//! ```

pub mod analysis;
pub mod attributes;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod equivalence;
pub mod error;
pub mod phrase;
pub mod word;

pub mod prelude {
    pub use crate::analysis::{CasePattern, FnScanner, RegexScanner, Scanner, Token, WhitespaceScanner};
    pub use crate::attributes::Attributes;
    pub use crate::config::{DictionaryConfig, ScannerConfig};
    pub use crate::dictionary::{Dictionary, DictionaryRegistry, MatchOptions, SerializedDictionary};
    pub use crate::equivalence::{Equivalents, Synonyms, Wordings};
    pub use crate::error::{Result, WordMongerError};
    pub use crate::phrase::{Phrase, PhraseSource};
    pub use crate::word::Word;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
