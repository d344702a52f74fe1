use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Orders two entities along one field; `descending` reverses the result.
pub type FieldComparator<T> = fn(&T, &T, bool) -> Ordering;

/// Comparator registry for one entity type, built once and read-only afterwards.
pub struct FieldMap<T> {
    fields: BTreeMap<&'static str, FieldComparator<T>>,
}

impl<T> FieldMap<T> {
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Registers `key`. A later registration of the same key replaces the earlier one.
    pub fn register(mut self, key: &'static str, comparator: FieldComparator<T>) -> Self {
        self.fields.insert(key, comparator);
        self
    }

    pub fn lookup(&self, key: &str) -> Result<FieldComparator<T>> {
        self.fields
            .get(key)
            .copied()
            .ok_or_else(|| Error::UnknownSortKey {
                key: key.to_string(),
                available: self.available_keys().into_iter().map(String::from).collect(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Registered keys in alphabetical order.
    pub fn available_keys(&self) -> Vec<&'static str> {
        self.fields.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T> Default for FieldMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multisort::compare;

    fn fields() -> FieldMap<(u32, &'static str)> {
        FieldMap::<(u32, &'static str)>::new()
            .register("num", |a, b, d| compare(&a.0, &b.0, d))
            .register("name", |a, b, d| compare(a.1, b.1, d))
    }

    #[test]
    fn test_lookup_registered_key() {
        let map = fields();
        let cmp = map.lookup("num").unwrap();
        assert_eq!(cmp(&(1, "x"), &(2, "y"), false), Ordering::Less);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_lookup_unknown_key() {
        let err = fields().lookup("size").err().unwrap();
        assert_eq!(
            err,
            Error::UnknownSortKey {
                key: "size".to_string(),
                available: vec!["name".to_string(), "num".to_string()],
            }
        );
    }
}
