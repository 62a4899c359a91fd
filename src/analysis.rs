//! Text analysis for WordMonger.
//!
//! This module turns raw text into the ordered tokens the dictionary works
//! with, and carries the case-pattern helpers used to render substitutions
//! in the casing of the text they replace.

pub mod case;
pub mod scanner;
pub mod token;

pub use case::CasePattern;
pub use scanner::{FnScanner, RegexScanner, Scanner, WhitespaceScanner};
pub use token::Token;
