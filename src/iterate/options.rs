//! Options for proximity iteration.

use std::rc::Rc;

use crate::error::{Result, SynotrieError};

/// Prefixes, uniqueness and value identity for
/// [`Trie::iter_values`](crate::trie::Trie::iter_values).
///
/// `K` is the identity key extracted from each value. It defaults to the
/// value itself.
///
/// # Examples
///
/// ```
/// use synotrie::iterate::IterateOptions;
/// use synotrie::trie::Trie;
///
/// let trie = Trie::from_pairs([("tester", 4), ("test", 5), ("taste", 2)]);
///
/// let options = IterateOptions::new().prefix("tes");
/// let found: Vec<_> = trie
///     .iter_values(options)
///     .unwrap()
///     .map(|m| (m.proximity, *m.value))
///     .collect();
///
/// assert_eq!(found, vec![(1.0, 5), (3.0, 4)]);
/// ```
pub struct IterateOptions<'f, V, K = V> {
    pub(crate) prefixes: Option<Vec<String>>,
    pub(crate) uniqueness: Option<bool>,
    pub(crate) get_id: Rc<dyn Fn(&V) -> K + 'f>,
    pub(crate) custom_id: bool,
}

impl<'f, V: Clone + 'f> IterateOptions<'f, V, V> {
    /// Iterate the whole trie, identifying values by themselves.
    pub fn new() -> Self {
        IterateOptions {
            prefixes: None,
            uniqueness: None,
            get_id: Rc::new(|value: &V| value.clone()),
            custom_id: false,
        }
    }
}

impl<'f, V: Clone + 'f> Default for IterateOptions<'f, V, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'f, V, K> IterateOptions<'f, V, K> {
    /// Restrict iteration to one prefix.
    pub fn prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefixes = Some(vec![prefix.into()]);
        self
    }

    /// Restrict iteration to the values reachable from every prefix.
    ///
    /// An empty collection iterates the whole trie.
    pub fn prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    /// Emit each identity at most once per prefix.
    pub fn uniqueness(mut self, uniqueness: bool) -> Self {
        self.uniqueness = Some(uniqueness);
        self
    }

    /// Identify values by a derived key instead of the value itself.
    pub fn id_by<K2, F>(self, get_id: F) -> IterateOptions<'f, V, K2>
    where
        F: Fn(&V) -> K2 + 'f,
    {
        IterateOptions {
            prefixes: self.prefixes,
            uniqueness: self.uniqueness,
            get_id: Rc::new(get_id),
            custom_id: true,
        }
    }

    /// Get the requested prefixes.
    pub fn requested_prefixes(&self) -> &[String] {
        self.prefixes.as_deref().unwrap_or(&[])
    }

    /// Decide whether identities are deduplicated.
    ///
    /// Defaults to `true` with several prefixes or without a custom identity.
    /// Disabling it while several prefixes are requested is an error.
    pub fn effective_uniqueness(&self) -> Result<bool> {
        let many = self.requested_prefixes().len() > 1;
        match self.uniqueness {
            Some(false) if many => Err(SynotrieError::invalid_uniqueness()),
            Some(uniqueness) => Ok(uniqueness),
            None => Ok(many || !self.custom_id),
        }
    }
}
