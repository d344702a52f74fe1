//! Comparator registries for every sortable entity.

mod context;
mod image;
mod ip;
mod machine;
mod network;
mod partition;
mod project;
mod size;
mod switch;
mod task;
mod tenant;
mod token;
mod vpn;

use chrono::{DateTime, Utc};
use metalctl_types::Entity;

use crate::error::Result;
use crate::multisort::{FieldMap, SortDefaults, Sorter};

/// An entity with a registered set of sort keys.
pub trait Sortable: Entity + Sized {
    fn fields() -> FieldMap<Self>;
}

/// Builds the sorter for `T` with the default keys configured for its kind.
pub fn sorter_for<T: Sortable>(defaults: &SortDefaults) -> Result<Sorter<T>> {
    Sorter::new(T::fields(), defaults.keys_for(T::KIND).to_vec())
}

/// Missing timestamps compare as the Unix epoch.
pub(crate) fn millis(ts: Option<DateTime<Utc>>) -> i64 {
    ts.map_or(0, |t| t.timestamp_millis())
}
