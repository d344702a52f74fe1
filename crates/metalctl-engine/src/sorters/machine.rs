use metalctl_types::Machine;

use super::{Sortable, millis};
use crate::multisort::{FieldMap, compare};

impl Sortable for Machine {
    fn fields() -> FieldMap<Self> {
        FieldMap::<Self>::new()
            .register("partition", |a, b, d| {
                compare(a.partition_id(), b.partition_id(), d)
            })
            .register("size", |a, b, d| compare(a.size_id(), b.size_id(), d))
            .register("uuid", |a, b, d| compare(&a.uuid, &b.uuid, d))
            .register("image", |a, b, d| compare(a.image_id(), b.image_id(), d))
            .register("rack", |a, b, d| compare(&a.rack, &b.rack, d))
            .register("project", |a, b, d| compare(a.project(), b.project(), d))
            .register("age", |a, b, d| {
                compare(&millis(a.allocated_at()), &millis(b.allocated_at()), d)
            })
    }
}
