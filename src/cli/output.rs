//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::args::{OutputFormat, SynotrieArgs};
use crate::error::Result;
use crate::pattern::MatchMode;
use crate::trie::MatchType;

/// Result structure for index building.
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildResult {
    pub index_path: String,
    pub documents: usize,
    pub tokens: usize,
    pub words: usize,
    pub nodes: usize,
    pub synonym_groups: usize,
    pub index_size_bytes: u64,
    pub duration_ms: u64,
}

/// One classified lookup input.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupEntry {
    pub input: String,
    pub word: String,
    pub match_type: MatchType,
}

/// Result structure for lookups.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResults {
    pub lookups: Vec<LookupEntry>,
}

/// A document found by a search.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchHit {
    pub position: usize,
    pub proximity: f64,
    pub document: Value,
}

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub prefixes: Vec<String>,
    pub hits: Vec<SearchHit>,
    pub total_hits: usize,
    pub duration_ms: u64,
}

/// A probe text tested against a pattern.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProbeResult {
    pub text: String,
    pub matched: bool,
    pub match_type: Option<MatchType>,
}

/// Result structure for pattern compilation.
#[derive(Debug, Serialize, Deserialize)]
pub struct PatternResult {
    pub mode: MatchMode,
    pub pattern: String,
    pub probes: Vec<ProbeResult>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &SynotrieArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &SynotrieArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("SearchResults") => {
            output_search_results_human(&value)
        }
        _ if std::any::type_name::<T>().contains("LookupResults") => {
            output_lookup_results_human(&value)
        }
        _ if std::any::type_name::<T>().contains("PatternResult") => {
            output_pattern_result_human(&value)
        }
        _ if std::any::type_name::<T>().contains("BuildResult") => output_build_result_human(&value),
        _ => output_generic_human(&value),
    }
}

/// Output search results in human format.
fn output_search_results_human(value: &Value) -> Result<()> {
    if let Some(obj) = value.as_object()
        && let Some(hits) = obj.get("hits").and_then(|h| h.as_array())
    {
        println!("Search Results:");
        println!("═══════════════");

        for (i, hit) in hits.iter().enumerate() {
            println!();
            println!(
                "Result {}: (Proximity: {:.2}, Document #{})",
                i + 1,
                hit.get("proximity").and_then(|p| p.as_f64()).unwrap_or(0.0),
                hit.get("position").and_then(|p| p.as_u64()).unwrap_or(0)
            );
            println!("─────────────");

            match hit.get("document") {
                Some(Value::Object(fields)) => {
                    for (field_name, field_value) in fields {
                        println!("{field_name}: {}", format_value(field_value));
                    }
                }
                Some(other) => println!("{}", format_value(other)),
                None => {}
            }
        }

        println!();

        if let Some(total) = obj.get("total_hits").and_then(|t| t.as_u64()) {
            println!("Total hits: {total}");
        }

        if let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64()) {
            println!("Search time: {duration}ms");
        }
    }
    Ok(())
}

/// Output lookups in human format, one line per word.
fn output_lookup_results_human(value: &Value) -> Result<()> {
    if let Some(lookups) = value.get("lookups").and_then(|l| l.as_array()) {
        for lookup in lookups {
            let input = lookup.get("input").and_then(|i| i.as_str()).unwrap_or("");
            let word = lookup.get("word").and_then(|w| w.as_str()).unwrap_or("");
            let match_type = lookup
                .get("match_type")
                .and_then(|m| m.as_str())
                .unwrap_or("none")
                .to_uppercase();

            if input == word {
                println!("{word}: {match_type}");
            } else {
                println!("{word} ({input}): {match_type}");
            }
        }
    }
    Ok(())
}

/// Output a compiled pattern in human format.
fn output_pattern_result_human(value: &Value) -> Result<()> {
    if let Some(pattern) = value.get("pattern").and_then(|p| p.as_str()) {
        println!("{pattern}");
    }

    if let Some(probes) = value.get("probes").and_then(|p| p.as_array())
        && !probes.is_empty()
    {
        println!();
        for probe in probes {
            let text = probe.get("text").and_then(|t| t.as_str()).unwrap_or("");
            let outcome = match probe.get("match_type").and_then(|m| m.as_str()) {
                Some(match_type) => match_type.to_uppercase(),
                None => {
                    let matched = probe.get("matched").and_then(|m| m.as_bool()).unwrap_or(false);
                    if matched { "match" } else { "no match" }.to_string()
                }
            };
            println!("{text:?}: {outcome}");
        }
    }
    Ok(())
}

/// Output a build summary in human format.
fn output_build_result_human(value: &Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        for (key, val) in obj {
            match key.as_str() {
                "index_size_bytes" => {
                    println!("index_size: {}", format_bytes(val.as_u64().unwrap_or(0)))
                }
                _ => println!("{key}: {}", format_value(val)),
            }
        }
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &Value) -> Result<()> {
    match value {
        Value::Object(obj) => {
            for (key, val) in obj {
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
fn output_json<T: Serialize>(result: &T, args: &SynotrieArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        Value::Object(_) => "[object]".to_string(),
        Value::Null => "null".to_string(),
    }
}

/// Format bytes into human-readable format.
fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    let unit = UNITS[unit_index];
    if unit_index == 0 {
        format!("{bytes} {unit}")
    } else {
        format!("{size:.1} {unit}")
    }
}
