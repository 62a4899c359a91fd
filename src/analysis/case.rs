//! Case pattern detection and rendering.
//!
//! Substitutions are stored case-folded; when one is written back into text
//! it takes on the case pattern of what it replaces. Three patterns are
//! recognised: all-uppercase, capitalized (first letter upper, rest lower),
//! and everything else, which renders as lowercase.

use crate::analysis::token::{Token, span};
use crate::error::Result;

/// The case pattern of a token or a whole phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CasePattern {
    /// `TRANSPARENT`
    Upper,
    /// `Transparent`
    Capitalized,
    /// `transparent`, and any mixed casing such as `tRaNs`
    Lower,
}

/// Shape flags of a single token. A token without cased letters has neither.
#[derive(Clone, Copy, Debug)]
struct Shape {
    cased: bool,
    upper: bool,
    capitalized: bool,
}

fn shape(word: &str) -> Shape {
    let cased = word.chars().any(|c| c.is_uppercase() || c.is_lowercase());
    let upper = cased && !word.chars().any(char::is_lowercase);
    let mut chars = word.chars();
    let capitalized = match chars.next() {
        Some(first) => first.is_uppercase() && !chars.any(char::is_uppercase),
        None => false,
    };
    Shape {
        cased,
        upper,
        capitalized,
    }
}

impl CasePattern {
    /// Detect the case pattern of a single token.
    ///
    /// A lone capital letter (`"A"`) counts as capitalized, not uppercase.
    pub fn of_word(word: &str) -> Self {
        let shape = shape(word);
        if shape.capitalized {
            CasePattern::Capitalized
        } else if shape.upper {
            CasePattern::Upper
        } else {
            CasePattern::Lower
        }
    }

    /// Detect the case pattern of a phrase from its tokens.
    ///
    /// Tokens without cased letters (numbers, symbols) do not vote. A phrase
    /// with no cased tokens is lowercase.
    pub fn of_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let shapes: Vec<Shape> = words
            .into_iter()
            .map(shape)
            .filter(|shape| shape.cased)
            .collect();

        if shapes.is_empty() {
            return CasePattern::Lower;
        }
        if shapes.iter().all(|s| s.upper) && shapes.iter().any(|s| !s.capitalized) {
            CasePattern::Upper
        } else if shapes.iter().all(|s| s.capitalized) {
            CasePattern::Capitalized
        } else {
            CasePattern::Lower
        }
    }

    /// Render a single word in this pattern.
    pub fn apply(&self, word: &str) -> String {
        match self {
            CasePattern::Upper => word.to_uppercase(),
            CasePattern::Lower => word.to_lowercase(),
            CasePattern::Capitalized => {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        let mut rendered: String = first.to_uppercase().collect();
                        rendered.push_str(&chars.as_str().to_lowercase());
                        rendered
                    }
                    None => String::new(),
                }
            }
        }
    }

    /// Render every token of `text` in this pattern, leaving the text between
    /// tokens untouched. `tokens` must have been scanned from `text`, in
    /// order; offsets that do not fit fail with a scanner error.
    pub fn apply_to_tokens(&self, text: &str, tokens: &[Token]) -> Result<String> {
        let mut rendered = String::with_capacity(text.len());
        let mut last_end = 0;

        for token in tokens {
            rendered.push_str(span(text, last_end, token.start_offset)?);
            rendered.push_str(&self.apply(span(text, token.start_offset, token.end_offset)?));
            last_end = token.end_offset;
        }
        rendered.push_str(span(text, last_end, text.len())?);
        Ok(rendered)
    }
}

/// Case-fold a key the way every dictionary map expects it.
pub fn casefold(text: &str) -> String {
    text.to_lowercase()
}
