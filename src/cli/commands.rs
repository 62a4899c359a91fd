//! Command implementations for the WordMonger CLI.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::DictionaryConfig;
use crate::dictionary::Dictionary;
use crate::equivalence::Wordings;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: WordMongerArgs) -> Result<()> {
    match &args.command {
        Command::Synonymize(text_args) => synonymize(text_args, &args),
        Command::Normalize(text_args) => normalize(text_args, &args),
        Command::Match(match_args) => match_phrases(match_args, &args),
        Command::AddSynonyms(add_args) => add_synonyms(add_args, &args),
        Command::AddWording(add_args) => add_wording(add_args, &args),
        Command::AddPhrase(add_args) => add_phrase(add_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Synonymize a text.
fn synonymize(args: &TextArgs, cli_args: &WordMongerArgs) -> Result<()> {
    let dictionary = load_dictionary(&args.dictionary, cli_args)?;
    let output = dictionary.synonymize_text(&args.text)?;

    output_result(
        "Synonymized",
        &TransformResult {
            input: args.text.clone(),
            output,
        },
        cli_args,
    )
}

/// Normalize a text.
fn normalize(args: &TextArgs, cli_args: &WordMongerArgs) -> Result<()> {
    let dictionary = load_dictionary(&args.dictionary, cli_args)?;
    let output = dictionary.normalize_text(&args.text)?;

    output_result(
        "Normalized",
        &TransformResult {
            input: args.text.clone(),
            output,
        },
        cli_args,
    )
}

/// Match a query against the registered wordings.
fn match_phrases(args: &MatchArgs, cli_args: &WordMongerArgs) -> Result<()> {
    let dictionary = load_dictionary(&args.dictionary, cli_args)?;
    let options = args.options();
    debug!("matching {:?} with {options:?}", args.query);

    let matches: Vec<WordingMatch> = dictionary
        .matching_phrases(&args.query, &options)?
        .into_iter()
        .map(wording_match)
        .collect();

    output_result(
        "Matching wordings",
        &MatchResults {
            query: args.query.clone(),
            total_matches: matches.len(),
            matches,
        },
        cli_args,
    )
}

fn wording_match(wordings: &Wordings) -> WordingMatch {
    WordingMatch {
        preferred: wordings.preferred().to_string(),
        phrases: wordings.serialize(),
        lexicons: wordings
            .lexicons()
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect(),
    }
}

/// Register a synonym group and save the dictionary.
fn add_synonyms(args: &AddSynonymsArgs, cli_args: &WordMongerArgs) -> Result<()> {
    let mut dictionary = load_dictionary(&args.dictionary, cli_args)?;
    let group = dictionary.register_synonyms(&args.words)?;
    let result = GroupResult {
        preferred: group.preferred().to_string(),
        members: group.words().to_vec(),
    };
    save_dictionary(&dictionary, &args.dictionary)?;

    output_result("Synonyms registered", &result, cli_args)
}

/// Register a wording group and save the dictionary.
fn add_wording(args: &AddWordingArgs, cli_args: &WordMongerArgs) -> Result<()> {
    let mut dictionary = load_dictionary(&args.dictionary, cli_args)?;
    let group = dictionary.register_wordings(&args.phrases)?;
    let result = GroupResult {
        preferred: group.preferred().to_string(),
        members: group.serialize(),
    };
    save_dictionary(&dictionary, &args.dictionary)?;

    output_result("Wording registered", &result, cli_args)
}

/// Register phrases and save the dictionary.
fn add_phrase(args: &AddPhraseArgs, cli_args: &WordMongerArgs) -> Result<()> {
    let mut dictionary = load_dictionary(&args.dictionary, cli_args)?;
    let before = dictionary.phrase_count();
    for phrase in &args.phrases {
        dictionary.add_phrase(phrase)?;
    }
    let result = PhraseAdditionResult {
        phrases_added: dictionary.phrase_count() - before,
        total_phrases: dictionary.phrase_count(),
    };
    save_dictionary(&dictionary, &args.dictionary)?;

    output_result("Phrases registered", &result, cli_args)
}

/// Show dictionary statistics.
fn show_stats(args: &StatsArgs, cli_args: &WordMongerArgs) -> Result<()> {
    let dictionary = load_dictionary(&args.dictionary, cli_args)?;

    let groups = args.detailed.then(|| {
        dictionary
            .synonym_groups()
            .map(|group| GroupResult {
                preferred: group.preferred().to_string(),
                members: group.words().to_vec(),
            })
            .chain(dictionary.wording_groups().map(|group| GroupResult {
                preferred: group.preferred().to_string(),
                members: group.serialize(),
            }))
            .collect()
    });

    let stats = DictionaryStats {
        name: dictionary.display_name().to_string(),
        scanner: dictionary.scanner().name().to_string(),
        words: dictionary.word_count(),
        phrases: dictionary.phrase_count(),
        synonym_groups: dictionary.synonym_groups().count(),
        synonym_substitutions: dictionary.synonym_substitutions().len(),
        wording_groups: dictionary.wording_groups().count(),
        wording_substitutions: dictionary.wording_substitutions().len(),
        groups,
    };

    output_result("Dictionary statistics", &stats, cli_args)
}

/// Load a dictionary file; a missing file is an empty dictionary.
fn load_dictionary(path: &Path, cli_args: &WordMongerArgs) -> Result<Dictionary> {
    let mut dictionary = match &cli_args.config {
        Some(config_file) => {
            debug!("loading configuration from {}", config_file.display());
            Dictionary::from_config(&DictionaryConfig::from_file(config_file)?)?
        }
        None => Dictionary::new(None),
    };

    if path.exists() {
        info!("loading dictionary from {}", path.display());
        dictionary.deserialize_json(&fs::read_to_string(path)?)?;
    } else {
        info!("{} does not exist, starting empty", path.display());
    }
    Ok(dictionary)
}

/// Write a dictionary file.
fn save_dictionary(dictionary: &Dictionary, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, dictionary.to_json_pretty()?)?;
    info!("saved dictionary to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn run(args: &[&str]) -> Result<()> {
        let mut argv = vec!["wordmonger", "-q"];
        argv.extend_from_slice(args);
        execute_command(WordMongerArgs::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_mutating_commands_write_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("colors.json");
        let file = path.to_str().unwrap();

        run(&["add-synonyms", file, "transparent", "trans", "tr"]).unwrap();
        run(&["add-wording", file, "Trans Blue Green", "Translucent Aqua"]).unwrap();
        run(&["add-phrase", file, "Tr Blue"]).unwrap();

        let mut dictionary = Dictionary::new(None);
        dictionary
            .deserialize_json(&fs::read_to_string(&path).unwrap())
            .unwrap();
        assert_eq!(dictionary.synonym_groups().count(), 1);
        assert_eq!(dictionary.phrase_count(), 3);
        assert_eq!(
            dictionary.normalize_text("Translucent Aqua").unwrap(),
            "Transparent Blue Green"
        );
    }

    #[test]
    fn test_read_only_commands_leave_missing_file_alone() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");
        let file = path.to_str().unwrap();

        run(&["normalize", file, "Trans Blue"]).unwrap();
        run(&["match", file, "Trans Blue"]).unwrap();
        run(&["stats", file, "--detailed"]).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_config_selects_scanner() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("config.json");
        fs::write(&config, r#"{"scanner": {"kind": "whitespace"}}"#).unwrap();

        let args = WordMongerArgs::try_parse_from([
            "wordmonger",
            "--config",
            config.to_str().unwrap(),
            "stats",
            "colors.json",
        ])
        .unwrap();
        let dictionary = load_dictionary(Path::new("does-not-exist.json"), &args).unwrap();
        assert_eq!(dictionary.scanner().name(), "whitespace");
    }

    #[test]
    fn test_invalid_dictionary_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, r#"{"colours": []}"#).unwrap();

        let result = run(&["stats", path.to_str().unwrap()]);
        assert!(matches!(
            result,
            Err(crate::error::WordMongerError::UnknownSerializationKey(_))
        ));
    }
}
