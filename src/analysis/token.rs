//! Token type produced by scanners.
//!
//! A [`Token`] is one scanned unit of text together with the byte span it
//! occupies in the text it was scanned from. The spans are what allow the
//! pipeline to substitute a token in place without disturbing the
//! punctuation and spacing around it.
//!
//! # Examples
//!
//! ```
//! use wordmonger::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordMongerError};

/// A token represents a single unit of text after scanning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the scanned sequence (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    ///
    /// The offsets cover the token text as if it started at byte 0.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let end_offset = text.len();
        Token {
            text,
            position,
            start_offset: 0,
            end_offset,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Get the length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

}

/// The bytes `start..end` of `text`.
///
/// Offsets outside `text`, reversed offsets and offsets inside a character
/// fail with [`WordMongerError::ScannerFailure`].
pub fn span(text: &str, start: usize, end: usize) -> Result<&str> {
    text.get(start..end).ok_or_else(|| {
        WordMongerError::scanner(format!(
            "token offsets {start}..{end} do not fit text of length {}",
            text.len()
        ))
    })
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
