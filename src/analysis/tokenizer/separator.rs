//! Separator-run tokenizer implementation.
//!
//! Text is split into maximal runs of characters that are either all
//! separators or all non-separators. Separators are ASCII punctuation, the
//! space character and any other Unicode whitespace. Every run is trimmed and
//! empty runs are skipped, so punctuation runs such as `"!!"` or `":("` come
//! out as tokens of their own; the filters of the indexing chain normally
//! remove them.

use lazy_static::lazy_static;
use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

lazy_static! {
    /// One maximal run of separators, or one maximal run of anything else.
    static ref SEPARATOR_RUN: Regex =
        Regex::new(r"[\s!-/:-@\[-`{-~]+|[^\s!-/:-@\[-`{-~]+").unwrap();
}

/// Check whether a character belongs to the separator class.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation()
}

/// A tokenizer that emits alternating word and punctuation runs.
#[derive(Clone, Debug, Default)]
pub struct SeparatorTokenizer;

impl SeparatorTokenizer {
    /// Create a new separator tokenizer.
    pub fn new() -> Self {
        SeparatorTokenizer
    }
}

impl Tokenizer for SeparatorTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(SeparatorRuns {
            text: text.to_owned(),
            offset: 0,
            position: 0,
        }))
    }

    fn name(&self) -> &'static str {
        "separator"
    }
}

/// Lazy iterator over the trimmed, non-empty runs of a text.
struct SeparatorRuns {
    text: String,
    offset: usize,
    position: usize,
}

impl Iterator for SeparatorRuns {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while let Some(run) = SEPARATOR_RUN.find_at(&self.text, self.offset) {
            self.offset = run.end();

            let raw = run.as_str();
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }

            let start = run.start() + (raw.len() - raw.trim_start().len());
            let token = Token::with_offsets(trimmed, self.position, start, start + trimmed.len());
            self.position += 1;
            return Some(token);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        SeparatorTokenizer::new()
            .tokenize(input)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_alternating_runs() {
        assert_eq!(
            texts("what a mess!!That string is"),
            vec!["what", "a", "mess", "!!", "That", "string", "is"]
        );
        assert_eq!(
            texts("totally*screwed!That's for sure:("),
            vec![
                "totally", "*", "screwed", "!", "That", "'", "s", "for", "sure", ":("
            ]
        );
    }

    #[test]
    fn test_offsets_and_positions() {
        let tokens: Vec<Token> = SeparatorTokenizer::new()
            .tokenize("  hi, you")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hi");
        assert_eq!(tokens[0].start_offset, 2);
        assert_eq!(tokens[0].end_offset, 4);
        assert_eq!(tokens[1].text, ",");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[2].text, "you");
        assert_eq!(tokens[2].start_offset, 6);
    }

    #[test]
    fn test_single_character_and_empty_text() {
        assert_eq!(texts("a"), vec!["a"]);
        assert!(texts("").is_empty());
        assert!(texts("   \t\n").is_empty());
    }

    #[test]
    fn test_whitespace_splits_words() {
        assert_eq!(texts("a\tb"), vec!["a", "b"]);
        assert_eq!(texts("line\nbreak\u{a0}here"), vec!["line", "break", "here"]);
    }

    #[test]
    fn test_non_ascii_words_stay_whole() {
        assert_eq!(texts("Isn't it? Demodé"), vec!["Isn", "'", "t", "it", "?", "Demodé"]);
    }

    #[test]
    fn test_is_separator() {
        assert!(is_separator(' '));
        assert!(is_separator('$'));
        assert!(is_separator('\n'));
        assert!(!is_separator('é'));
        assert!(!is_separator('7'));
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(SeparatorTokenizer::new().name(), "separator");
    }
}
