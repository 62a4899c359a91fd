//! Text transforms behind [`Phrase::synonymized`](crate::phrase::Phrase::synonymized)
//! and [`Phrase::normalized`](crate::phrase::Phrase::normalized).
//!
//! Both operate on a phrase body; lexicon prefixes are handled by the caller.

use log::trace;

use super::Dictionary;
use crate::analysis::case::{CasePattern, casefold};
use crate::analysis::token::{Token, span};
use crate::error::Result;
use crate::phrase::{join_lexicon, split_lexicon};

/// Replace every token with a synonym substitute by that substitute, rendered
/// in the token's own case pattern. Text between tokens is kept as is.
pub(crate) fn synonymize(dictionary: &Dictionary, text: &str) -> Result<String> {
    let tokens = dictionary.scanner().scan(text)?;
    let mut synonymized = String::with_capacity(text.len());
    let mut last_end = 0;

    for Token {
        text: word,
        start_offset,
        end_offset,
        ..
    } in &tokens
    {
        synonymized.push_str(span(text, last_end, *start_offset)?);
        match dictionary.synonym_substitute(word) {
            Some(preferred) => {
                trace!("synonym {word:?} -> {preferred:?}");
                synonymized.push_str(&CasePattern::of_word(word).apply(preferred));
            }
            None => synonymized.push_str(span(text, *start_offset, *end_offset)?),
        }
        last_end = *end_offset;
    }
    synonymized.push_str(span(text, last_end, text.len())?);
    Ok(synonymized)
}

/// Synonymize, then replace the whole phrase by its wording substitute
/// rendered in the phrase's case pattern. Phrases without a wording
/// substitute come back synonymized.
pub(crate) fn normalize(dictionary: &Dictionary, lexicon: Option<&str>, text: &str) -> Result<String> {
    let synonymized = synonymize(dictionary, text)?;
    let key = join_lexicon(lexicon.map(casefold).as_deref(), &casefold(&synonymized));

    let Some(preferred) = dictionary.wording_substitute(&key) else {
        return Ok(synonymized);
    };
    trace!("wording {key:?} -> {preferred:?}");

    let tokens = dictionary.scanner().scan(&synonymized)?;
    let pattern = CasePattern::of_words(tokens.iter().map(|token| token.text.as_str()));

    let (_, body) = split_lexicon(preferred);
    let substitute_tokens = dictionary.scanner().scan(body)?;
    pattern.apply_to_tokens(body, &substitute_tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scanner::{FnScanner, RegexScanner};
    use crate::error::WordMongerError;

    fn dictionary() -> Dictionary {
        let mut dictionary = Dictionary::new(None);
        dictionary
            .register_synonyms(["transparent", "trans", "tr"])
            .unwrap();
        dictionary
    }

    #[test]
    fn test_synonymize_preserves_token_case() {
        let dictionary = dictionary();
        assert_eq!(
            synonymize(&dictionary, "Trans-Blue Green").unwrap(),
            "Transparent-Blue Green"
        );
        assert_eq!(synonymize(&dictionary, "TR blue").unwrap(), "TRANSPARENT blue");
        assert_eq!(synonymize(&dictionary, "tr, tr").unwrap(), "transparent, transparent");
        assert_eq!(synonymize(&dictionary, "tRaNs").unwrap(), "transparent");
    }

    #[test]
    fn test_synonymize_leaves_unknown_words() {
        let dictionary = dictionary();
        assert_eq!(
            synonymize(&dictionary, "  Opaque  Red! ").unwrap(),
            "  Opaque  Red! "
        );
        assert_eq!(synonymize(&dictionary, "").unwrap(), "");
    }

    #[test]
    fn test_synonymize_with_custom_scanner() {
        let mut dictionary = dictionary();
        dictionary
            .set_scanner(&RegexScanner::with_pattern(r"\w+-?").unwrap())
            .unwrap();
        // "Trans-" is no longer the word "trans"
        assert_eq!(
            synonymize(&dictionary, "Trans-Blue Green").unwrap(),
            "Trans-Blue Green"
        );
    }

    #[test]
    fn test_normalize_to_preferred_wording() {
        let mut dictionary = Dictionary::new(None);
        dictionary
            .register_wordings(["Trans Blue Green", "Translucent Aqua"])
            .unwrap();

        assert_eq!(
            normalize(&dictionary, None, "Translucent Aqua").unwrap(),
            "Trans Blue Green"
        );
        assert_eq!(
            normalize(&dictionary, None, "translucent aqua").unwrap(),
            "trans blue green"
        );
        assert_eq!(
            normalize(&dictionary, None, "TRANSLUCENT AQUA").unwrap(),
            "TRANS BLUE GREEN"
        );
        assert_eq!(
            normalize(&dictionary, None, "Translucent aqua").unwrap(),
            "trans blue green"
        );
    }

    #[test]
    fn test_normalize_synonymizes_first() {
        let mut dictionary = dictionary();
        dictionary
            .register_wordings(["Sky Blue", "Tr Azure"])
            .unwrap();
        assert_eq!(
            normalize(&dictionary, None, "Transparent Azure").unwrap(),
            "Sky Blue"
        );
        assert_eq!(
            normalize(&dictionary, None, "Tr Red").unwrap(),
            "Transparent Red"
        );
    }

    #[test]
    fn test_normalize_respects_lexicon() {
        let mut dictionary = Dictionary::new(None);
        dictionary
            .register_wordings(["Paint::Sky Blue", "Paint::Azure"])
            .unwrap();

        assert_eq!(
            normalize(&dictionary, Some("Paint"), "Azure").unwrap(),
            "Sky Blue"
        );
        assert_eq!(normalize(&dictionary, None, "Azure").unwrap(), "Azure");
    }

    #[test]
    fn test_bad_scanner_offsets_are_errors() {
        let mut dictionary = Dictionary::new(None);
        dictionary
            .set_scanner(&FnScanner::new(|text: &str| {
                Ok(vec![Token::with_offsets(text, 0, 0, text.len() + 3)])
            }))
            .unwrap();

        assert!(matches!(
            synonymize(&dictionary, "Trans Blue"),
            Err(WordMongerError::ScannerFailure(_))
        ));
        assert!(matches!(
            normalize(&dictionary, None, "Trans Blue"),
            Err(WordMongerError::ScannerFailure(_))
        ));
    }
}
