//! Integration tests for indexing JSON documents.

use std::io::Write;

use serde_json::{Value, json};
use tempfile::NamedTempFile;

use synotrie::document::loader::{JsonlReader, load_documents};
use synotrie::document::object_ref::ObjectRef;
use synotrie::document::walker::StringLeaves;
use synotrie::document::{object_list_to_trie, par_object_list_to_trie};
use synotrie::error::Result;
use synotrie::iterate::IterateOptions;
use synotrie::trie::{MatchType, Trie, TrieOptions};

fn catalog() -> Vec<Value> {
    vec![
        json!({"name": "Tasting menu", "tags": ["dinner", "Thursday"]}),
        json!({"name": "Testing kit", "price": 12.5, "tags": []}),
        json!({"name": "Thirsty Thursday", "details": {"drinks": ["tea", "Tonic"]}}),
    ]
}

#[test]
fn test_documents_are_found_by_any_leaf() -> Result<()> {
    let objects: Vec<ObjectRef> = catalog().into_iter().map(ObjectRef::new).collect();
    let trie = object_list_to_trie(objects.clone(), Vec::<Vec<String>>::new(), TrieOptions::default())?;

    assert_eq!(trie.lookup("tonic"), MatchType::Perfect);
    assert_eq!(trie.lookup("thurs"), MatchType::Partial);
    assert_eq!(trie.lookup("12"), MatchType::None);

    let thursday = trie.values("thursday").expect("indexed word");
    assert_eq!(thursday.as_slice(), &[objects[0].clone(), objects[2].clone()]);

    Ok(())
}

#[test]
fn test_prefixes_intersect_across_documents() -> Result<()> {
    let objects: Vec<ObjectRef> = catalog().into_iter().map(ObjectRef::new).collect();
    let trie = par_object_list_to_trie(&objects, Vec::<Vec<String>>::new(), TrieOptions::default())?;

    let found: Vec<_> = trie
        .iter_values(IterateOptions::new().prefixes(["thu", "t"]))?
        .map(|m| m.value.clone())
        .collect();

    assert_eq!(found.len(), 2);
    assert!(found.contains(&objects[0]));
    assert!(found.contains(&objects[2]));

    Ok(())
}

#[test]
fn test_synonyms_apply_to_document_text() -> Result<()> {
    let objects: Vec<ObjectRef> = catalog().into_iter().map(ObjectRef::new).collect();
    let trie = object_list_to_trie(objects, vec![vec!["th", "t"]], TrieOptions::default())?;

    assert_eq!(trie.lookup("thonic"), MatchType::Perfect);
    assert_eq!(trie.lookup("tursday"), MatchType::Perfect);

    Ok(())
}

#[test]
fn test_positions_as_values() -> Result<()> {
    let documents = catalog();
    let mut trie: Trie<usize> = Trie::with_options(TrieOptions::default().with_min_size(4));
    for (position, document) in documents.iter().enumerate() {
        trie.add_object_as(document, position)?;
    }

    assert_eq!(trie.values("thursday").expect("indexed word").as_slice(), &[0, 2]);
    assert_eq!(trie.lookup("tea"), MatchType::None);
    assert_eq!(trie.lookup("kit"), MatchType::None);

    Ok(())
}

#[test]
fn test_persisted_object_identity() -> Result<()> {
    let document = json!({"name": "rust trust"});
    fn prefixes<'f, V: Clone + 'f>() -> IterateOptions<'f, V> {
        IterateOptions::new().prefixes(["ru", "tr"])
    }

    let mut objects: Trie<ObjectRef> = Trie::new();
    objects.add_object(ObjectRef::new(document.clone()))?;
    assert_eq!(objects.iter_values(prefixes())?.count(), 1);

    // Each deserialized occurrence is a distinct object.
    let restored: Trie<ObjectRef> = Trie::from_json(&objects.to_json()?)?;
    assert_eq!(restored.iter_values(prefixes())?.count(), 0);

    let mut positions: Trie<usize> = Trie::new();
    positions.add_object_as(&document, 0)?;
    let restored: Trie<usize> = Trie::from_json(&positions.to_json()?)?;
    let found: Vec<_> = restored.iter_values(prefixes())?.map(|m| *m.value).collect();
    assert_eq!(found, vec![0]);

    Ok(())
}

#[test]
fn test_string_leaves_in_document_order() {
    let leaves = catalog()[2].string_leaves();
    assert_eq!(leaves, vec!["Thirsty Thursday", "tea", "Tonic"]);
}

#[test]
fn test_load_json_array_and_lines() -> Result<()> {
    let mut array_file = NamedTempFile::new()?;
    write!(array_file, "{}", serde_json::to_string(&catalog())?)?;

    let mut lines_file = NamedTempFile::new()?;
    for document in catalog() {
        writeln!(lines_file, "{document}")?;
    }
    writeln!(lines_file)?;

    assert_eq!(load_documents(array_file.path())?, catalog());
    assert_eq!(load_documents(lines_file.path())?, catalog());

    Ok(())
}

#[test]
fn test_jsonl_errors_name_the_line() -> Result<()> {
    let input = "{\"a\": \"ok\"}\n{broken\n";
    let results: Vec<_> = JsonlReader::new(input.as_bytes()).collect();

    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    let error = results[1].as_ref().expect_err("second line is malformed");
    assert!(error.to_string().contains("line 2"));

    Ok(())
}
