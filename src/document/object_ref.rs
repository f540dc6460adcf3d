//! Shared JSON objects compared by identity.

use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::document::walker::StringLeaves;

/// A reference-counted JSON value whose equality is pointer identity.
///
/// Indexing an object attaches the same `ObjectRef` to every word found in
/// it, so value sets deduplicate per object rather than per content: two
/// distinct objects with equal fields stay two values.
///
/// Identity does not survive serialization: each deserialized occurrence is
/// a new object, so a trie of `ObjectRef` values read back from JSON no
/// longer intersects an object across the words it was indexed under. Index
/// positions instead (see [`Trie::add_object_as`](crate::trie::Trie::add_object_as))
/// when the trie is persisted.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use synotrie::document::object_ref::ObjectRef;
///
/// let a = ObjectRef::new(json!({"name": "thing"}));
/// let b = ObjectRef::new(json!({"name": "thing"}));
///
/// assert_eq!(a, a.clone());
/// assert_ne!(a, b);
/// assert_eq!(a["name"], "thing");
/// ```
#[derive(Debug, Clone)]
pub struct ObjectRef(Arc<Value>);

impl ObjectRef {
    /// Wrap a value.
    pub fn new(value: Value) -> Self {
        ObjectRef(Arc::new(value))
    }

    /// Get the wrapped value.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Get the shared pointer.
    pub fn as_arc(&self) -> &Arc<Value> {
        &self.0
    }
}

impl From<Value> for ObjectRef {
    fn from(value: Value) -> Self {
        ObjectRef::new(value)
    }
}

impl From<Arc<Value>> for ObjectRef {
    fn from(value: Arc<Value>) -> Self {
        ObjectRef(value)
    }
}

impl Deref for ObjectRef {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ObjectRef {}

impl Hash for ObjectRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state)
    }
}

impl StringLeaves for ObjectRef {
    fn for_each_string(&self, visit: &mut dyn FnMut(&str)) {
        self.0.for_each_string(visit)
    }
}

impl Serialize for ObjectRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ObjectRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(ObjectRef::new)
    }
}

#[cfg(test)]
mod tests {
    use ahash::AHashSet;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_identity_hashing() {
        let a = ObjectRef::new(json!("x"));
        let b = ObjectRef::new(json!("x"));

        let set: AHashSet<ObjectRef> = [a.clone(), a.clone(), b].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serializes_transparently() {
        let object = ObjectRef::new(json!({"field1": "some"}));
        assert_eq!(serde_json::to_string(&object).unwrap(), r#"{"field1":"some"}"#);

        let back: ObjectRef = serde_json::from_str(r#"{"field1":"some"}"#).unwrap();
        assert_eq!(back.value(), object.value());
    }
}
