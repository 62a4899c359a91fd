//! Command line argument parsing for the WordMonger CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::dictionary::MatchOptions;

/// WordMonger - normalize words and phrases with equivalence groups
#[derive(Parser, Debug, Clone)]
#[command(name = "wordmonger")]
#[command(about = "Normalize words and phrases with dictionary-scoped equivalence groups")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordMongerArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Dictionary configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDMONGER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordMongerArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Replace known synonyms with their preferred words
    Synonymize(TextArgs),

    /// Replace a phrase with its preferred wording
    Normalize(TextArgs),

    /// List the wording groups a query matches
    Match(MatchArgs),

    /// Register a synonym group
    #[command(name = "add-synonyms")]
    AddSynonyms(AddSynonymsArgs),

    /// Register a wording group
    #[command(name = "add-wording")]
    AddWording(AddWordingArgs),

    /// Register phrases
    #[command(name = "add-phrase")]
    AddPhrase(AddPhraseArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Arguments for commands that transform text
#[derive(Parser, Debug, Clone)]
pub struct TextArgs {
    /// Path to the dictionary file (JSON)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Text to transform, optionally prefixed with `Lexicon::`
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for matching
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// Path to the dictionary file (JSON)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Query text, optionally prefixed with `Lexicon::`
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Only match wordings in the query's lexicon
    #[arg(long)]
    pub in_lexicon: bool,

    /// Compare words regardless of their order
    #[arg(long)]
    pub any_order: bool,

    /// Compare with case
    #[arg(long)]
    pub case_sensitive: bool,
}

impl MatchArgs {
    /// Matching options selected by the flags
    pub fn options(&self) -> MatchOptions {
        MatchOptions::new()
            .case_insensitive(!self.case_sensitive)
            .in_lexicon(self.in_lexicon)
            .in_order(!self.any_order)
    }
}

/// Arguments for registering synonyms
#[derive(Parser, Debug, Clone)]
pub struct AddSynonymsArgs {
    /// Path to the dictionary file (JSON)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Words of the group, preferred first
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for registering a wording group
#[derive(Parser, Debug, Clone)]
pub struct AddWordingArgs {
    /// Path to the dictionary file (JSON)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Phrases of the group, preferred first
    #[arg(value_name = "PHRASE", required = true)]
    pub phrases: Vec<String>,
}

/// Arguments for registering phrases
#[derive(Parser, Debug, Clone)]
pub struct AddPhraseArgs {
    /// Path to the dictionary file (JSON)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Phrases to register
    #[arg(value_name = "PHRASE", required = true)]
    pub phrases: Vec<String>,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the dictionary file (JSON)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// List every group
    #[arg(short, long)]
    pub detailed: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
