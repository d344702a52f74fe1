use std::cmp::Ordering;
use std::fmt;

use super::{FieldComparator, FieldMap, SortKey};
use crate::error::Result;

/// Sorts entities of one type by an ordered list of [`SortKey`]s.
pub struct Sorter<T> {
    fields: FieldMap<T>,
    defaults: Vec<SortKey>,
}

impl<T> Sorter<T> {
    /// Fails with `UnknownSortKey` when a default key is not registered.
    pub fn new(fields: FieldMap<T>, defaults: Vec<SortKey>) -> Result<Self> {
        let sorter = Self { fields, defaults };
        sorter.resolve(&sorter.defaults)?;
        Ok(sorter)
    }

    /// Sorts with the default key sequence.
    pub fn sort(&self, items: &mut [T]) -> Result<()> {
        self.sort_by(items, &[])
    }

    /// Sorts in place; an empty `keys` falls back to the defaults.
    ///
    /// Every key is resolved before the slice is touched, so an unknown key
    /// leaves `items` in its original order. Entities that compare equal on
    /// all keys keep their relative order.
    pub fn sort_by(&self, items: &mut [T], keys: &[SortKey]) -> Result<()> {
        let keys = if keys.is_empty() {
            self.defaults.as_slice()
        } else {
            keys
        };
        let comparators = self.resolve(keys)?;

        items.sort_by(|a, b| {
            comparators
                .iter()
                .map(|(cmp, descending)| cmp(a, b, *descending))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        });
        Ok(())
    }

    pub fn validate(&self, keys: &[SortKey]) -> Result<()> {
        self.resolve(keys).map(|_| ())
    }

    pub fn available_keys(&self) -> Vec<&'static str> {
        self.fields.available_keys()
    }

    pub fn default_keys(&self) -> &[SortKey] {
        &self.defaults
    }

    fn resolve(&self, keys: &[SortKey]) -> Result<Vec<(FieldComparator<T>, bool)>> {
        keys.iter()
            .map(|key| Ok((self.fields.lookup(&key.id)?, key.descending)))
            .collect()
    }
}

impl<T> fmt::Debug for Sorter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sorter")
            .field("keys", &self.available_keys())
            .field("defaults", &self.defaults)
            .finish()
    }
}
