//! Command implementations for the synotrie CLI.

use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::document::loader::load_documents;
use crate::document::par_object_tokens;
use crate::error::Result;
use crate::iterate::IterateOptions;
use crate::pattern::MatchMode;
use crate::trie::{MatchType, SynonymTable, Trie, TrieOptions};

/// An index as written by `synotrie build`.
///
/// Trie values are positions in `documents`. Synonym groups travel with
/// the trie.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexFile {
    pub documents: Vec<Value>,
    pub trie: Trie<usize>,
}

impl IndexFile {
    /// Index `documents`, analyzing them in parallel.
    ///
    /// Returns the index and the number of tokens inserted.
    pub fn build(
        documents: Vec<Value>,
        synonyms: SynonymTable,
        options: TrieOptions,
    ) -> Result<(Self, usize)> {
        let mut trie = Trie::with_table(synonyms, options);

        let analyzed = par_object_tokens(&documents, trie.analyzer())?;
        let tokens = analyzed
            .iter()
            .enumerate()
            .map(|(position, tokens)| trie.insert_tokens(tokens, position))
            .sum();

        Ok((
            IndexFile {
                documents,
                trie,
            },
            tokens,
        ))
    }

    /// Write the index as JSON. Returns the number of bytes written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<u64> {
        let json = serde_json::to_string(self)?;
        fs::write(path, &json)?;
        Ok(json.len() as u64)
    }

    /// Read an index written by [`IndexFile::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let mut deserializer = serde_json::Deserializer::from_str(&content);
        deserializer.disable_recursion_limit();
        let index = IndexFile::deserialize(&mut deserializer)?;
        deserializer.end()?;

        log::info!(
            "loaded index {} with {} documents and {} words",
            path.display(),
            index.documents.len(),
            index.trie.word_count()
        );
        Ok(index)
    }

    /// Normalize user input the way indexed text was normalized.
    pub fn normalize(&self, text: &str) -> Result<Vec<String>> {
        let analyzer = PipelineAnalyzer::query_from_options(self.trie.options());
        Ok(analyzer.analyze(text)?.map(|token| token.text).collect())
    }
}

/// Execute a CLI command.
pub fn execute_command(args: SynotrieArgs) -> Result<()> {
    match &args.command {
        Command::Build(build_args) => build_index(build_args.clone(), &args),
        Command::Lookup(lookup_args) => lookup_words(lookup_args.clone(), &args),
        Command::Search(search_args) => search_index(search_args.clone(), &args),
        Command::Pattern(pattern_args) => compile_pattern(pattern_args.clone(), &args),
    }
}

/// Build an index from a document file.
fn build_index(args: BuildArgs, cli_args: &SynotrieArgs) -> Result<()> {
    let start_time = Instant::now();

    let mut options = match &args.options {
        Some(path) => TrieOptions::load_from_file(path)?,
        None => TrieOptions::default(),
    };
    if let Some(min_size) = args.min_size {
        options.min_size = min_size;
    }
    options.forbidden_words.extend(args.forbidden_words.iter().cloned());

    let synonyms = match &args.synonyms {
        Some(path) => SynonymTable::load_from_file(path)?,
        None => SynonymTable::default(),
    };

    log::info!("loading documents from {}", args.input.display());
    let documents = load_documents(&args.input)?;
    let document_count = documents.len();

    let (index, tokens) = IndexFile::build(documents, synonyms, options)?;
    let index_size_bytes = index.save(&args.output)?;

    let result = BuildResult {
        index_path: args.output.display().to_string(),
        documents: document_count,
        tokens,
        words: index.trie.word_count(),
        nodes: index.trie.len(),
        synonym_groups: index.trie.synonyms().map_or(0, SynonymTable::len),
        index_size_bytes,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };

    output_result("Index built", &result, cli_args)
}

/// Classify words against an index.
fn lookup_words(args: LookupArgs, cli_args: &SynotrieArgs) -> Result<()> {
    let index = IndexFile::load(&args.index_path)?;

    let mut lookups = Vec::new();
    for input in &args.words {
        let words = index.normalize(input)?;
        if words.is_empty() {
            log::warn!("{input:?} has no indexable characters");
            lookups.push(LookupEntry {
                input: input.clone(),
                word: String::new(),
                match_type: MatchType::None,
            });
        }
        for word in words {
            let match_type = index.trie.lookup(&word);
            lookups.push(LookupEntry {
                input: input.clone(),
                word,
                match_type,
            });
        }
    }

    output_result("Lookup results", &LookupResults { lookups }, cli_args)
}

/// List documents reachable from every prefix, closest first.
fn search_index(args: SearchArgs, cli_args: &SynotrieArgs) -> Result<()> {
    let index = IndexFile::load(&args.index_path)?;
    let start_time = Instant::now();

    let mut prefixes = Vec::new();
    for prefix in &args.prefixes {
        prefixes.extend(index.normalize(prefix)?);
    }
    log::debug!("searching for prefixes {:?}", prefixes);

    let mut found: Vec<(f64, usize)> = index
        .trie
        .iter_values(IterateOptions::new().prefixes(prefixes.iter().cloned()))?
        .map(|found| (found.proximity, *found.value))
        .collect();
    found.sort_by(|a, b| a.0.total_cmp(&b.0));

    let total_hits = found.len();
    let hits = found
        .into_iter()
        .take(args.limit)
        .filter_map(|(proximity, position)| {
            let document = index.documents.get(position)?.clone();
            Some(SearchHit {
                position,
                proximity,
                document,
            })
        })
        .collect();

    let results = SearchResults {
        prefixes,
        hits,
        total_hits,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };

    output_result("Search results", &results, cli_args)
}

/// Print the regular expression equivalent to an index.
fn compile_pattern(args: PatternArgs, cli_args: &SynotrieArgs) -> Result<()> {
    let index = IndexFile::load(&args.index_path)?;
    let mode = MatchMode::from(args.mode);
    let pattern = index.trie.to_pattern(mode)?;

    let mut probes = Vec::with_capacity(args.probes.len());
    for text in &args.probes {
        let match_type = match mode {
            MatchMode::Classify => Some(pattern.classify(text)?),
            _ => None,
        };
        probes.push(ProbeResult {
            text: text.clone(),
            matched: pattern.is_match(text),
            match_type,
        });
    }

    let result = PatternResult {
        mode,
        pattern: pattern.as_str().to_string(),
        probes,
    };

    output_result("Compiled pattern", &result, cli_args)
}
