use metalctl_types::VpnNode;

use super::{Sortable, millis};
use crate::multisort::{FieldMap, compare};

impl Sortable for VpnNode {
    fn fields() -> FieldMap<Self> {
        FieldMap::<Self>::new()
            .register("id", |a, b, d| compare(&a.number(), &b.number(), d))
            .register("name", |a, b, d| compare(&a.name, &b.name, d))
            .register("project", |a, b, d| compare(&a.project, &b.project, d))
            .register("last-seen", |a, b, d| {
                compare(&millis(a.last_seen), &millis(b.last_seen), d)
            })
    }
}
