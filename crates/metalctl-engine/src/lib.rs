// Engine module - ordering and reshaping of API entities for display.
// Sits between the entity model (metalctl-types) and CLI presentation; it never
// mutates entities, it only reorders and derives display values from them.

pub mod error;
pub mod hierarchy;
pub mod humanize;
pub mod interface;
pub mod multisort;
pub mod sorters;
pub mod status;

pub use error::{Error, Result};
pub use hierarchy::{FlatRow, Hierarchical, TreePrefix, flatten, max_line_count, pad_multiline};
pub use multisort::{FieldComparator, FieldMap, SortDefaults, SortKey, Sorter, compare, parse_sort_keys};
pub use sorters::{Sortable, sorter_for};
