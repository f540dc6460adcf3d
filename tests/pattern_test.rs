//! Agreement between compiled trie patterns and trie lookups.

use proptest::collection::vec;
use proptest::prelude::*;

use synotrie::ascii::AsciiTrie;
use synotrie::error::Result;
use synotrie::pattern::{MatchMode, TriePattern};
use synotrie::trie::{MatchType, Trie};

#[test]
fn test_pattern_agrees_on_known_words() -> Result<()> {
    let trie = Trie::<()>::from_words(["testing", "taste", "thirsty", "test"]);
    let classify = trie.to_pattern(MatchMode::Classify)?;

    for probe in ["", "t", "tes", "test", "testi", "testing", "testings", "thirst", "x"] {
        assert_eq!(classify.classify(probe)?, trie.lookup(probe), "{probe:?}");
    }

    Ok(())
}

#[test]
fn test_pattern_source_is_anchored() -> Result<()> {
    let trie = Trie::<()>::from_words(["a+b", "a"]);

    let source = TriePattern::source(&trie, MatchMode::Perfect)?;
    assert!(source.starts_with('^'));
    assert_eq!(source, r"^a(?:\+b$|$)");

    let pattern = TriePattern::compile(&trie, MatchMode::Perfect)?;
    assert!(pattern.is_match("a+b"));
    assert!(!pattern.is_match("aab"));
    assert!(!pattern.is_match("xa+b"));

    Ok(())
}

proptest! {
    #[test]
    fn compiled_patterns_agree_with_lookup(
        words in vec("[a-c.*]{0,5}", 0..8),
        probes in vec("[a-c.*]{0,6}", 1..16),
    ) {
        let trie = Trie::<()>::from_words(&words);
        let partial = trie.to_pattern(MatchMode::Partial).unwrap();
        let perfect = trie.to_pattern(MatchMode::Perfect).unwrap();
        let classify = trie.to_pattern(MatchMode::Classify).unwrap();

        for probe in &probes {
            let expected = trie.lookup(probe);
            prop_assert_eq!(partial.is_match(probe), expected.is_match());
            prop_assert_eq!(perfect.is_match(probe), expected == MatchType::Perfect);
            prop_assert_eq!(classify.classify(probe).unwrap(), expected);
        }
    }

    #[test]
    fn ascii_trie_agrees_with_trie(
        words in vec("[a-d]{0,6}", 0..10),
        probes in vec("[a-e]{0,7}", 1..16),
    ) {
        let trie = Trie::<()>::from_words(&words);
        let ascii = AsciiTrie::new(&words).unwrap();

        for probe in &probes {
            prop_assert_eq!(ascii.lookup(probe), trie.lookup(probe));
        }
    }
}
