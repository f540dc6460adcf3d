//! Command line argument parsing for the synotrie CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::pattern::MatchMode;

/// synotrie - synonym-aware prefix indexing of JSON documents
#[derive(Parser, Debug, Clone)]
#[command(name = "synotrie")]
#[command(about = "Index JSON documents into a synonym-aware trie and query it")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SynotrieArgs {
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

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SynotrieArgs {
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
    /// Index a JSON array or JSON Lines file
    Build(BuildArgs),

    /// Classify words as prefixes or whole words of an index
    Lookup(LookupArgs),

    /// List documents by proximity to one or more prefixes
    Search(SearchArgs),

    /// Print the regular expression equivalent to an index
    Pattern(PatternArgs),
}

/// Arguments for building an index
#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// Documents to index (JSON array or JSON Lines)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the index
    #[arg(short, long, value_name = "INDEX")]
    pub output: PathBuf,

    /// Synonym groups file (JSON array of string arrays)
    #[arg(short, long, value_name = "SYNONYMS_FILE")]
    pub synonyms: Option<PathBuf>,

    /// Trie options file (JSON)
    #[arg(long, value_name = "OPTIONS_FILE")]
    pub options: Option<PathBuf>,

    /// Minimum token length, overriding the options file
    #[arg(long)]
    pub min_size: Option<usize>,

    /// Words never indexed, added to the options file's list
    #[arg(long = "forbid", value_name = "WORD")]
    pub forbidden_words: Vec<String>,
}

/// Arguments for lookups
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Path to the index file
    #[arg(value_name = "INDEX")]
    pub index_path: PathBuf,

    /// Words to classify
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the index file
    #[arg(value_name = "INDEX")]
    pub index_path: PathBuf,

    /// Prefixes every result must be reachable from
    #[arg(value_name = "PREFIX")]
    pub prefixes: Vec<String>,

    /// Maximum number of results to return
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

/// Arguments for pattern compilation
#[derive(Parser, Debug, Clone)]
pub struct PatternArgs {
    /// Path to the index file
    #[arg(value_name = "INDEX")]
    pub index_path: PathBuf,

    /// Match strictness
    #[arg(short = 'm', long, default_value = "partial")]
    pub mode: PatternMode,

    /// Texts to test against the compiled pattern
    #[arg(long = "probe", value_name = "TEXT")]
    pub probes: Vec<String>,
}

/// Pattern modes available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternMode {
    /// Prefixes of words match
    Partial,
    /// Whole words match
    Perfect,
    /// Matches are classified as prefix or word
    Classify,
}

impl From<PatternMode> for MatchMode {
    fn from(mode: PatternMode) -> Self {
        match mode {
            PatternMode::Partial => MatchMode::Partial,
            PatternMode::Perfect => MatchMode::Perfect,
            PatternMode::Classify => MatchMode::Classify,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
