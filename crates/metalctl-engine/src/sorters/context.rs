use metalctl_types::Context;

use super::Sortable;
use crate::multisort::{FieldMap, compare};

impl Sortable for Context {
    fn fields() -> FieldMap<Self> {
        FieldMap::<Self>::new().register("name", |a, b, d| compare(&a.name, &b.name, d))
    }
}
