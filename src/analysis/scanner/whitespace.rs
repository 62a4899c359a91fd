//! Whitespace scanner implementation.

use super::Scanner;
use crate::analysis::token::Token;
use crate::error::Result;

/// A scanner that splits text on whitespace, keeping punctuation attached.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceScanner;

impl WhitespaceScanner {
    /// Create a new whitespace scanner.
    pub fn new() -> Self {
        WhitespaceScanner
    }
}

impl Scanner for WhitespaceScanner {
    fn scan(&self, text: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        for (offset, c) in text.char_indices() {
            match (c.is_whitespace(), start) {
                (true, Some(begin)) => {
                    tokens.push(Token::with_offsets(
                        &text[begin..offset],
                        tokens.len(),
                        begin,
                        offset,
                    ));
                    start = None;
                }
                (false, None) => start = Some(offset),
                _ => {}
            }
        }

        if let Some(begin) = start {
            tokens.push(Token::with_offsets(
                &text[begin..],
                tokens.len(),
                begin,
                text.len(),
            ));
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn clone_box(&self) -> Box<dyn Scanner> {
        Box::new(self.clone())
    }
}
