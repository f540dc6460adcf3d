//! Discovery of the string leaves of nested values.

use std::sync::Arc;

use serde_json::Value;

/// Values whose string leaves can be indexed.
///
/// Strings yield themselves, containers recurse into their items in order,
/// and every other leaf (numbers, booleans, null) is ignored.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use synotrie::document::walker::StringLeaves;
///
/// let value = json!({"a": "one", "b": [2, "three", {"c": null}]});
/// assert_eq!(value.string_leaves(), vec!["one", "three"]);
/// ```
pub trait StringLeaves {
    /// Call `visit` for every string leaf, in document order.
    fn for_each_string(&self, visit: &mut dyn FnMut(&str));

    /// Collect the string leaves.
    fn string_leaves(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        self.for_each_string(&mut |leaf| leaves.push(leaf.to_string()));
        leaves
    }
}

impl StringLeaves for Value {
    fn for_each_string(&self, visit: &mut dyn FnMut(&str)) {
        match self {
            Value::String(text) => visit(text),
            Value::Array(items) => {
                for item in items {
                    item.for_each_string(visit);
                }
            }
            Value::Object(fields) => {
                for field in fields.values() {
                    field.for_each_string(visit);
                }
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }
    }
}

impl StringLeaves for str {
    fn for_each_string(&self, visit: &mut dyn FnMut(&str)) {
        visit(self)
    }
}

impl StringLeaves for String {
    fn for_each_string(&self, visit: &mut dyn FnMut(&str)) {
        visit(self)
    }
}

impl<T: StringLeaves> StringLeaves for [T] {
    fn for_each_string(&self, visit: &mut dyn FnMut(&str)) {
        for item in self {
            item.for_each_string(visit);
        }
    }
}

impl<T: StringLeaves> StringLeaves for Vec<T> {
    fn for_each_string(&self, visit: &mut dyn FnMut(&str)) {
        self.as_slice().for_each_string(visit)
    }
}

impl<T: StringLeaves> StringLeaves for Option<T> {
    fn for_each_string(&self, visit: &mut dyn FnMut(&str)) {
        if let Some(inner) = self {
            inner.for_each_string(visit);
        }
    }
}

impl<T: StringLeaves + ?Sized> StringLeaves for Box<T> {
    fn for_each_string(&self, visit: &mut dyn FnMut(&str)) {
        (**self).for_each_string(visit)
    }
}

impl<T: StringLeaves + ?Sized> StringLeaves for Arc<T> {
    fn for_each_string(&self, visit: &mut dyn FnMut(&str)) {
        (**self).for_each_string(visit)
    }
}

impl<T: StringLeaves + ?Sized> StringLeaves for &T {
    fn for_each_string(&self, visit: &mut dyn FnMut(&str)) {
        (**self).for_each_string(visit)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_nested_object_order() {
        let value = json!({
            "field1": 1,
            "field2": true,
            "field3": "some words",
            "field4": ["more words", {"field5": null, "field6": "even more"}],
            "field12": {"field14": "Almost done"}
        });

        assert_eq!(
            value.string_leaves(),
            vec!["some words", "more words", "even more", "Almost done"]
        );
    }

    #[test]
    fn test_plain_strings_and_containers() {
        assert_eq!("word".string_leaves(), vec!["word"]);
        assert_eq!(
            vec![Some("a".to_string()), None, Some("b".to_string())].string_leaves(),
            vec!["a", "b"]
        );
        assert_eq!(Arc::new(json!(42)).string_leaves(), Vec::<String>::new());
    }
}
