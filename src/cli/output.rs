//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordMongerArgs};
use crate::error::Result;

/// Result structure for text transforms.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransformResult {
    pub input: String,
    pub output: String,
}

/// One matching wording group.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordingMatch {
    pub preferred: String,
    pub phrases: Vec<String>,
    pub lexicons: Vec<String>,
}

/// Result structure for matching.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResults {
    pub query: String,
    pub total_matches: usize,
    pub matches: Vec<WordingMatch>,
}

/// Result structure for registering a group.
#[derive(Debug, Serialize, Deserialize)]
pub struct GroupResult {
    pub preferred: String,
    pub members: Vec<String>,
}

/// Result structure for registering phrases.
#[derive(Debug, Serialize, Deserialize)]
pub struct PhraseAdditionResult {
    pub phrases_added: usize,
    pub total_phrases: usize,
}

/// Dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub name: String,
    pub scanner: String,
    pub words: usize,
    pub phrases: usize,
    pub synonym_groups: usize,
    pub synonym_substitutions: usize,
    pub wording_groups: usize,
    pub wording_substitutions: usize,
    pub groups: Option<Vec<GroupResult>>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &WordMongerArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &WordMongerArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;

    match value.as_object() {
        Some(obj) if obj.contains_key("matches") => output_matches_human(&value),
        Some(obj) if obj.contains_key("output") => {
            println!("{}", format_value(&obj["output"]));
            Ok(())
        }
        _ => output_generic_human(&value),
    }
}

/// Output match results in human format.
fn output_matches_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object()
        && let Some(matches) = obj.get("matches").and_then(|m| m.as_array())
    {
        if matches.is_empty() {
            println!("No matches");
            return Ok(());
        }
        for (i, wording) in matches.iter().enumerate() {
            println!(
                "Match {}: {}",
                i + 1,
                wording
                    .get("preferred")
                    .map(format_value)
                    .unwrap_or_default()
            );
            if let Some(phrases) = wording.get("phrases") {
                println!("  Phrases: {}", format_value(phrases));
            }
        }
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                if val.is_null() {
                    continue;
                }
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordMongerArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(obj) => obj
            .get("preferred")
            .map(|preferred| format!("{{{}}}", format_value(preferred)))
            .unwrap_or_else(|| "[object]".to_string()),
        serde_json::Value::Null => "null".to_string(),
    }
}
