//! Multi-key sorting.
//!
//! A [`FieldMap`] registers one comparator per sort key, a [`Sorter`] combines
//! the map with a default key sequence and applies caller supplied
//! [`SortKey`]s as a stable, first-difference-wins ordering.

mod defaults;
mod key;
mod registry;
mod sorter;

pub use defaults::SortDefaults;
pub use key::{SortKey, parse_sort_keys};
pub use registry::{FieldComparator, FieldMap};
pub use sorter::Sorter;

use std::cmp::Ordering;

/// Compares two values, reversing the result when `descending` is set.
pub fn compare<V: Ord + ?Sized>(a: &V, b: &V, descending: bool) -> Ordering {
    with_direction(a.cmp(b), descending)
}

/// Applies a sort direction to an already computed ordering.
pub fn with_direction(ordering: Ordering, descending: bool) -> Ordering {
    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}
