use metalctl_types::TaskInfo;

use super::{Sortable, millis};
use crate::multisort::{FieldMap, compare};

impl Sortable for TaskInfo {
    fn fields() -> FieldMap<Self> {
        FieldMap::<Self>::new()
            .register("id", |a, b, d| compare(&a.id, &b.id, d))
            .register("queue", |a, b, d| compare(&a.queue, &b.queue, d))
            .register("type", |a, b, d| compare(&a.task_type, &b.task_type, d))
            .register("state", |a, b, d| compare(a.state.as_str(), b.state.as_str(), d))
            .register("issued", |a, b, d| {
                compare(&millis(a.issued_at()), &millis(b.issued_at()), d)
            })
    }
}
