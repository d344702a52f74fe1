use metalctl_types::{Partition, PartitionCapacity};

use super::Sortable;
use crate::multisort::{FieldMap, compare};

impl Sortable for Partition {
    fn fields() -> FieldMap<Self> {
        FieldMap::<Self>::new()
            .register("id", |a, b, d| compare(&a.id, &b.id, d))
            .register("description", |a, b, d| {
                compare(&a.description, &b.description, d)
            })
    }
}

impl Sortable for PartitionCapacity {
    fn fields() -> FieldMap<Self> {
        FieldMap::<Self>::new()
            .register("id", |a, b, d| compare(&a.partition, &b.partition, d))
            // compares the size ids of both capacities element-wise
            .register("size", |a, b, d| compare(&a.size_ids(), &b.size_ids(), d))
    }
}
