use metalctl_types::Size;

use super::Sortable;
use crate::multisort::{FieldMap, compare};

impl Sortable for Size {
    fn fields() -> FieldMap<Self> {
        FieldMap::<Self>::new()
            .register("id", |a, b, d| compare(&a.id, &b.id, d))
            .register("name", |a, b, d| compare(&a.name, &b.name, d))
            .register("description", |a, b, d| {
                compare(&a.description, &b.description, d)
            })
    }
}
