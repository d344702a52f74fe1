use metalctl_types::Network;

use super::Sortable;
use crate::multisort::{FieldMap, compare};

fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

impl Sortable for Network {
    fn fields() -> FieldMap<Self> {
        FieldMap::<Self>::new()
            .register("id", |a, b, d| compare(&a.id, &b.id, d))
            .register("name", |a, b, d| compare(or_empty(&a.name), or_empty(&b.name), d))
            .register("description", |a, b, d| {
                compare(or_empty(&a.description), or_empty(&b.description), d)
            })
            .register("partition", |a, b, d| {
                compare(or_empty(&a.partition), or_empty(&b.partition), d)
            })
            .register("project", |a, b, d| {
                compare(or_empty(&a.project), or_empty(&b.project), d)
            })
    }
}
