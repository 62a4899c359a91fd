//! Scanners split text into the ordered tokens a dictionary works with.
//!
//! Every [`Dictionary`](crate::dictionary::Dictionary) owns exactly one
//! scanner. Installing a scanner copies it through [`Scanner::clone_box`], so
//! two dictionaries never share a scanner instance.
//!
//! # Available Scanners
//!
//! - [`regex::RegexScanner`] - Matches a regular expression; the default
//!   scanner matches runs of word characters (`\w+`)
//! - [`whitespace::WhitespaceScanner`] - Splits on whitespace
//! - [`func::FnScanner`] - Delegates to a closure
//!
//! # Examples
//!
//! ```
//! use wordmonger::analysis::scanner::{RegexScanner, Scanner};
//!
//! let scanner = RegexScanner::new().unwrap();
//! let tokens = scanner.scan("the quick, Brown fox").unwrap();
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["the", "quick", "Brown", "fox"]);
//! ```

use std::fmt::Debug;

use crate::analysis::token::Token;
use crate::error::Result;

/// Trait for scanners that convert text into an ordered sequence of tokens.
///
/// Tokens are returned in left-to-right order of occurrence and carry the
/// byte offsets of the text they were taken from.
///
/// # Examples
///
/// Implementing a custom scanner:
///
/// ```
/// use wordmonger::analysis::scanner::Scanner;
/// use wordmonger::analysis::token::Token;
/// use wordmonger::error::Result;
///
/// #[derive(Clone, Debug)]
/// struct CommaScanner;
///
/// impl Scanner for CommaScanner {
///     fn scan(&self, text: &str) -> Result<Vec<Token>> {
///         let mut offset = 0;
///         let mut tokens = Vec::new();
///         for (position, part) in text.split(',').enumerate() {
///             tokens.push(Token::with_offsets(part, position, offset, offset + part.len()));
///             offset += part.len() + 1;
///         }
///         Ok(tokens)
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
///
///     fn clone_box(&self) -> Box<dyn Scanner> {
///         Box::new(self.clone())
///     }
/// }
/// ```
pub trait Scanner: Send + Sync + Debug {
    /// Scan the given text into tokens.
    fn scan(&self, text: &str) -> Result<Vec<Token>>;

    /// Get the name of this scanner (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Copy this scanner into a new box.
    fn clone_box(&self) -> Box<dyn Scanner>;
}

impl Clone for Box<dyn Scanner> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

pub mod func;
pub mod regex;
pub mod whitespace;

pub use func::FnScanner;
pub use regex::RegexScanner;
pub use whitespace::WhitespaceScanner;
