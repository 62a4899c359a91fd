use wordmonger::prelude::*;

fn sorted(mut words: Vec<String>) -> Vec<String> {
    words.sort();
    words
}

fn substitution_pairs(dictionary: &Dictionary) -> Vec<(String, String)> {
    let mut pairs: Vec<_> = dictionary
        .synonym_substitutions()
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    pairs.sort();
    pairs
}

#[test]
fn test_identical_group_registered_twice() {
    let mut dictionary = Dictionary::new(None);
    dictionary
        .register_synonyms(["transparent", "trans", "tr"])
        .unwrap();
    let index = substitution_pairs(&dictionary);

    dictionary
        .register_synonyms(["transparent", "trans", "tr"])
        .unwrap();
    assert_eq!(dictionary.synonym_groups().count(), 1);
    assert_eq!(substitution_pairs(&dictionary), index);
}

#[test]
fn test_overlapping_groups_converge_in_any_order() {
    let groups: [&[&str]; 3] = [&["a", "b"], &["c", "d"], &["b", "c"]];
    let orders = [[0, 1, 2], [2, 1, 0], [1, 2, 0], [2, 0, 1]];

    for order in orders {
        let mut dictionary = Dictionary::new(None);
        for index in order {
            dictionary.register_synonyms(groups[index]).unwrap();
        }

        assert_eq!(dictionary.synonym_groups().count(), 1, "order {order:?}");
        let group = dictionary.synonyms_for("d").unwrap();
        assert_eq!(
            sorted(group.words().to_vec()),
            vec!["a", "b", "c", "d"],
            "order {order:?}"
        );
        assert_eq!(dictionary.synonym_substitutions().len(), 3);
        for alternate in group.alternates() {
            assert_eq!(
                dictionary.synonym_substitute(alternate),
                Some(group.preferred())
            );
        }
    }
}

#[test]
fn test_case_preserving_synonymization() {
    let mut dictionary = Dictionary::new(None);
    dictionary
        .register_synonyms(["transparent", "trans", "tr"])
        .unwrap();

    assert_eq!(
        dictionary.synonymize_text("Trans-Blue Green").unwrap(),
        "Transparent-Blue Green"
    );
    assert_eq!(
        dictionary.synonymize_text("TRANS blue").unwrap(),
        "TRANSPARENT blue"
    );
    assert_eq!(
        dictionary.synonymize_text("Paint::tr blue").unwrap(),
        "Paint::transparent blue"
    );
}

#[test]
fn test_normalization_to_preferred_wording() {
    let mut dictionary = Dictionary::new(None);
    dictionary
        .register_wordings(["Trans Blue Green", "Translucent Aqua"])
        .unwrap();

    assert_eq!(
        dictionary.normalize_text("Translucent Aqua").unwrap(),
        "Trans Blue Green"
    );
    assert_eq!(
        dictionary.normalize_text("Opaque Red").unwrap(),
        "Opaque Red"
    );
}

#[test]
fn test_matching_with_lexicons() {
    let mut dictionary = Dictionary::new(None);
    dictionary.add_phrase("Trans Blue").unwrap();
    dictionary
        .register_synonyms(["transparent", "trans", "tr"])
        .unwrap();

    let defaults = MatchOptions::default();
    assert_eq!(dictionary.matching_phrases("tr Blue", &defaults).unwrap().len(), 1);

    dictionary.add_phrase("Lexicon::Tr Blue").unwrap();
    assert_eq!(
        dictionary.matching_phrases("trans Blue", &defaults).unwrap().len(),
        2
    );

    let in_lexicon = MatchOptions::new().in_lexicon(true);
    let matches = dictionary.matching_phrases("tr Blue", &in_lexicon).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].lexicons(), vec![None]);
}

#[test]
fn test_scanner_override() {
    let mut dictionary = Dictionary::new(None);
    dictionary
        .set_scanner(&RegexScanner::with_pattern(r"\w+-?").unwrap())
        .unwrap();

    let phrase = Phrase::new("Trans-Blue Green");
    let words: Vec<String> = phrase
        .words(&dictionary)
        .unwrap()
        .iter()
        .map(|word| word.text().to_string())
        .collect();
    assert_eq!(words, vec!["Trans-", "Blue", "Green"]);
}

#[test]
fn test_function_scanner() {
    let mut dictionary = Dictionary::new(None);
    let scanner = FnScanner::new(|text: &str| {
        let mut tokens = Vec::new();
        let mut offset = 0;
        for (position, part) in text.split('/').enumerate() {
            tokens.push(Token::with_offsets(part, position, offset, offset + part.len()));
            offset += part.len() + 1;
        }
        Ok(tokens)
    });
    dictionary.set_scanner(&scanner).unwrap();
    dictionary.register_synonyms(["navy blue", "navy"]).unwrap();

    assert_eq!(
        dictionary.synonymize_text("Navy/sky blue").unwrap(),
        "Navy blue/sky blue"
    );
}

#[test]
fn test_deletion_removes_alternates() {
    let mut dictionary = Dictionary::new(None);
    dictionary
        .register_synonyms(["transparent", "trans", "tr", "translucent"])
        .unwrap();
    dictionary.register_synonyms(["blue", "bl"]).unwrap();
    let before = dictionary.synonym_substitutions().len();

    let removed = dictionary.delete_synonyms("transparent").unwrap().unwrap();
    assert_eq!(
        before - dictionary.synonym_substitutions().len(),
        removed.len() - 1
    );

    dictionary
        .register_wordings(["Sky Blue", "Azure", "Cerulean"])
        .unwrap();
    let removed = dictionary.delete_wordings("sky blue").unwrap();
    assert_eq!(removed.len(), 3);
    assert!(dictionary.wording_substitutions().is_empty());
}

#[test]
fn test_synonyms_registered_after_wordings() {
    let mut dictionary = Dictionary::new(None);
    dictionary
        .register_wordings(["Trans Blue Green", "Translucent Aqua"])
        .unwrap();
    dictionary.register_synonyms(["clear", "translucent"]).unwrap();

    assert_eq!(
        dictionary.normalize_text("Translucent Aqua").unwrap(),
        "Trans Blue Green"
    );
    assert_eq!(
        dictionary.normalize_text("CLEAR AQUA").unwrap(),
        "TRANS BLUE GREEN"
    );
}

#[test]
fn test_wording_groups_converge_whatever_comes_first() {
    let mut wordings_first = Dictionary::new(None);
    wordings_first
        .register_wordings(["Trans Blue", "Clear Blue"])
        .unwrap();
    wordings_first
        .register_wordings(["Transparent Blue", "See Blue"])
        .unwrap();
    wordings_first
        .register_synonyms(["transparent", "trans"])
        .unwrap();

    let mut synonyms_first = Dictionary::new(None);
    synonyms_first
        .register_synonyms(["transparent", "trans"])
        .unwrap();
    synonyms_first
        .register_wordings(["Trans Blue", "Clear Blue"])
        .unwrap();
    synonyms_first
        .register_wordings(["Transparent Blue", "See Blue"])
        .unwrap();

    for dictionary in [&wordings_first, &synonyms_first] {
        assert_eq!(dictionary.wording_groups().count(), 1);
        assert_eq!(
            sorted(dictionary.wordings("transparent blue").unwrap().keys().to_vec()),
            vec!["clear blue", "see blue", "transparent blue"]
        );
        assert_eq!(
            dictionary.normalize_text("See Blue").unwrap(),
            "Transparent Blue"
        );
    }
}

#[test]
fn test_scanner_change_rekeys_wordings() {
    let mut dictionary = Dictionary::new(None);
    dictionary
        .register_synonyms(["transparent", "trans"])
        .unwrap();
    dictionary
        .register_wordings(["Trans-Blue", "Clear Blue"])
        .unwrap();
    assert!(dictionary.wordings("transparent-blue").is_some());

    dictionary
        .set_scanner(&RegexScanner::with_pattern(r"\w+-?").unwrap())
        .unwrap();
    let group = dictionary.wordings("trans-blue").unwrap();
    assert_eq!(group.keys(), ["trans-blue", "clear blue"]);
    assert_eq!(dictionary.normalize_text("clear blue").unwrap(), "trans-blue");
}

#[test]
fn test_memoized_forms_follow_changes() {
    let mut dictionary = Dictionary::new(None);
    let phrase = Phrase::new("Translucent Aqua");
    assert_eq!(phrase.normalized_text(&dictionary).unwrap(), "Translucent Aqua");
    assert!(dictionary.phrase("Translucent Aqua").is_none());

    dictionary
        .register_wordings(["Trans Blue Green", "Translucent Aqua"])
        .unwrap();
    assert_eq!(phrase.normalized_text(&dictionary).unwrap(), "Trans Blue Green");

    dictionary.reset();
    assert_eq!(phrase.normalized_text(&dictionary).unwrap(), "Translucent Aqua");
}

#[test]
fn test_registry_scopes_dictionaries() {
    let mut registry = DictionaryRegistry::new();
    registry.create(Some("paint")).unwrap();

    registry.push_active(Some("paint")).unwrap();
    registry
        .active_mut()
        .register_synonyms(["transparent", "trans"])
        .unwrap();
    registry.pop_active();

    assert_eq!(
        registry.active().synonymize_text("trans blue").unwrap(),
        "trans blue"
    );
    assert_eq!(
        registry
            .dictionary(Some("paint"))
            .unwrap()
            .synonymize_text("trans blue")
            .unwrap(),
        "transparent blue"
    );
    assert!(matches!(
        registry.create(Some("paint")),
        Err(WordMongerError::DuplicateDictionary(_))
    ));
}
