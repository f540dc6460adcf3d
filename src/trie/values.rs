//! Value collection attached to terminal nodes.
//!
//! A [`ValueSet`] suppresses duplicates and keeps first-insertion order. It
//! serializes as a plain JSON array; deserializing yields the degraded
//! [`ValueSet::Plain`] form, which is promoted back to the deduplicating form
//! the next time a value is inserted.
//!
//! # Examples
//!
//! ```
//! use synotrie::trie::values::ValueSet;
//!
//! let mut values = ValueSet::new();
//! values.insert(1);
//! values.insert(1);
//! values.insert(2);
//!
//! assert_eq!(values.len(), 2);
//! assert_eq!(serde_json::to_string(&values).unwrap(), "[1,2]");
//! ```

use std::hash::Hash;
use std::slice;

use ahash::AHashSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A duplicate-suppressing, add-only collection that serializes as an array.
#[derive(Debug, Clone)]
pub enum ValueSet<V> {
    /// Deduplicating form.
    Unique {
        /// Values in first-insertion order.
        items: Vec<V>,
        /// Membership index over `items`.
        seen: AHashSet<V>,
    },
    /// Degraded form produced by deserialization.
    Plain(Vec<V>),
}

impl<V> Default for ValueSet<V> {
    fn default() -> Self {
        ValueSet::Unique {
            items: Vec::new(),
            seen: AHashSet::new(),
        }
    }
}

impl<V> ValueSet<V> {
    /// Create an empty, deduplicating set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the stored values in order.
    pub fn as_slice(&self) -> &[V] {
        match self {
            ValueSet::Unique { items, .. } => items,
            ValueSet::Plain(items) => items,
        }
    }

    /// Iterate over the stored values.
    pub fn iter(&self) -> slice::Iter<'_, V> {
        self.as_slice().iter()
    }

    /// Get the number of stored values.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Check if no value is stored.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Check whether the set is in its degraded plain-list form.
    pub fn is_plain(&self) -> bool {
        matches!(self, ValueSet::Plain(_))
    }
}

impl<V: Clone + Eq + Hash> ValueSet<V> {
    /// Add a value. Returns `false` when it was already present.
    pub fn insert(&mut self, value: V) -> bool {
        self.promote();
        match self {
            ValueSet::Unique { items, seen } => {
                if seen.contains(&value) {
                    return false;
                }
                seen.insert(value.clone());
                items.push(value);
                true
            }
            ValueSet::Plain(_) => unreachable!("promoted above"),
        }
    }

    /// Check whether a value is present.
    pub fn contains(&self, value: &V) -> bool {
        match self {
            ValueSet::Unique { seen, .. } => seen.contains(value),
            ValueSet::Plain(items) => items.contains(value),
        }
    }

    /// Convert the plain-list form into the deduplicating form, dropping
    /// repeated values.
    pub fn promote(&mut self) {
        if let ValueSet::Plain(plain) = self {
            let mut items = Vec::with_capacity(plain.len());
            let mut seen = AHashSet::with_capacity(plain.len());
            for value in plain.drain(..) {
                if seen.insert(value.clone()) {
                    items.push(value);
                }
            }
            *self = ValueSet::Unique { items, seen };
        }
    }
}

impl<V: Clone + Eq + Hash> FromIterator<V> for ValueSet<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut set = ValueSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<V: PartialEq> PartialEq for ValueSet<V> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, V> IntoIterator for &'a ValueSet<V> {
    type Item = &'a V;
    type IntoIter = slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Serialize> Serialize for ValueSet<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for ValueSet<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<V>::deserialize(deserializer).map(ValueSet::Plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_are_suppressed() {
        let set: ValueSet<i32> = vec![1, 1, 2, 3, 4, 5].into_iter().collect();

        assert_eq!(set.len(), 5);
        assert_eq!(serde_json::to_string(&set).unwrap(), "[1,2,3,4,5]");
    }

    #[test]
    fn test_insert_reports_novelty() {
        let mut set = ValueSet::new();
        assert!(set.insert("a"));
        assert!(!set.insert("a"));
        assert!(set.insert("b"));
        assert_eq!(set.as_slice(), &["a", "b"]);
    }

    #[test]
    fn test_deserialized_set_is_promoted_on_insert() {
        let mut set: ValueSet<i32> = serde_json::from_str("[3, 3, 7]").unwrap();
        assert!(set.is_plain());
        assert_eq!(set.len(), 3);
        assert!(set.contains(&7));

        assert!(!set.insert(7));
        assert!(!set.is_plain());
        assert_eq!(set.as_slice(), &[3, 7]);

        assert!(set.insert(10));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_equality_ignores_form() {
        let plain: ValueSet<i32> = ValueSet::Plain(vec![1, 2]);
        let unique: ValueSet<i32> = vec![1, 2].into_iter().collect();
        assert_eq!(plain, unique);
    }
}
