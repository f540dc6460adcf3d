//! Integration tests for proximity-ranked value iteration.

use synotrie::error::{ConfigurationError, Result, SynotrieError};
use synotrie::iterate::IterateOptions;
use synotrie::trie::Trie;

fn by_value(mut found: Vec<(f64, i32)>) -> Vec<(f64, i32)> {
    found.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.total_cmp(&b.0)));
    found
}

fn collect(trie: &Trie<i32>, options: IterateOptions<'_, i32>) -> Result<Vec<(f64, i32)>> {
    Ok(trie
        .iter_values(options)?
        .map(|m| (m.proximity, *m.value))
        .collect())
}

#[test]
fn test_trie_without_values_yields_nothing() -> Result<()> {
    let trie = Trie::<()>::from_words(["testing", "taste", "thirsty"]);

    assert_eq!(trie.iter_values(IterateOptions::new())?.count(), 0);

    Ok(())
}

#[test]
fn test_repeated_words_keep_every_value() -> Result<()> {
    let trie = Trie::from_pairs([
        ("testing", 1),
        ("taste", 2),
        ("thirsty", 3),
        ("tester", 4),
        ("test", 5),
        ("taste", 6),
        ("thirsty", 7),
        ("testing", 8),
    ]);

    let found: Vec<_> = trie
        .iter_prefix("tes")
        .map(|m| (m.proximity, *m.value))
        .collect();

    assert_eq!(
        by_value(found),
        vec![(4.0, 1), (3.0, 4), (1.0, 5), (4.0, 8)]
    );

    Ok(())
}

#[test]
fn test_uniqueness_keeps_the_closest_occurrence() -> Result<()> {
    let trie = Trie::from_pairs([
        ("testing", 1),
        ("taste", 2),
        ("thirsty", 3),
        ("tester", 4),
        ("test", 5),
        ("taste", 6),
        ("thirsty", 7),
        ("testingzing", 1),
    ]);

    let found = collect(&trie, IterateOptions::new().prefix("tes").uniqueness(true))?;

    assert_eq!(by_value(found), vec![(4.0, 1), (3.0, 4), (1.0, 5)]);

    Ok(())
}

#[test]
fn test_two_prefixes_intersect_and_average() -> Result<()> {
    let trie = Trie::from_pairs([
        ("testing", 1),
        ("taste", 2),
        ("thirsty", 3),
        ("tester", 4),
        ("test", 5),
        ("tastening", 4),
        ("tastier", 5),
        ("thirsty", 7),
        ("testingzing", 1),
        ("tastingzing", 5),
    ]);

    let found = collect(&trie, IterateOptions::new().prefixes(["tes", "tas"]))?;

    assert_eq!(by_value(found), vec![(4.5, 4), (2.5, 5)]);

    Ok(())
}

#[test]
fn test_three_prefixes_take_the_mean() -> Result<()> {
    let trie = Trie::from_pairs([("ab", 7), ("bcde", 7), ("cdefgh", 7), ("cd", 8)]);

    let found = collect(&trie, IterateOptions::new().prefixes(["a", "b", "c"]))?;

    assert_eq!(found, vec![(3.0, 7)]);

    Ok(())
}

#[test]
fn test_whole_trie_in_breadth_first_order() -> Result<()> {
    let trie = Trie::from_pairs([
        ("testing", 1),
        ("taste", 2),
        ("thirsty", 3),
        ("tester", 4),
        ("test", 5),
    ]);

    let found = collect(&trie, IterateOptions::new())?;

    assert_eq!(found, vec![(4.0, 5), (5.0, 2), (6.0, 4), (7.0, 1), (7.0, 3)]);

    Ok(())
}

#[test]
fn test_unresolved_prefix_yields_nothing() -> Result<()> {
    let trie = Trie::from_pairs([("testing", 1), ("taste", 2)]);

    assert!(collect(&trie, IterateOptions::new().prefix("tesla"))?.is_empty());
    assert!(collect(&trie, IterateOptions::new().prefixes(["tas", "tesla"]))?.is_empty());

    Ok(())
}

#[test]
fn test_disabled_uniqueness_with_many_prefixes_fails() {
    let trie = Trie::from_pairs([("testing", 1)]);
    let options = IterateOptions::new()
        .prefixes(["te", "tes"])
        .uniqueness(false);

    assert!(matches!(
        trie.iter_values(options),
        Err(SynotrieError::Configuration(ConfigurationError::InvalidUniqueness))
    ));
}

#[test]
fn test_iteration_is_lazy() -> Result<()> {
    let pairs: Vec<(String, i32)> = (0..10_000).map(|i| (format!("w{i}"), i)).collect();
    let trie = Trie::from_pairs(pairs.iter().map(|(word, value)| (word.as_str(), *value)));

    let first: Vec<_> = trie
        .iter_values(IterateOptions::new().prefix("w1"))?
        .take(2)
        .map(|m| (m.proximity, *m.value))
        .collect();

    assert_eq!(first, vec![(0.0, 1), (1.0, 10)]);

    Ok(())
}
