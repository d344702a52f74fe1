use metalctl_types::Image;

use super::{Sortable, millis};
use crate::multisort::{FieldMap, compare};

impl Sortable for Image {
    fn fields() -> FieldMap<Self> {
        FieldMap::<Self>::new()
            .register("id", |a, b, d| compare(&a.id, &b.id, d))
            .register("name", |a, b, d| compare(&a.name, &b.name, d))
            .register("classification", |a, b, d| {
                compare(&a.classification, &b.classification, d)
            })
            .register("expiration", |a, b, d| {
                compare(&millis(a.expires_at), &millis(b.expires_at), d)
            })
    }
}
