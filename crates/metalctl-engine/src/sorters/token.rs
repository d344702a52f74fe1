use metalctl_types::Token;

use super::{Sortable, millis};
use crate::multisort::{FieldMap, compare};

impl Sortable for Token {
    fn fields() -> FieldMap<Self> {
        FieldMap::<Self>::new()
            .register("id", |a, b, d| compare(&a.uuid, &b.uuid, d))
            .register("user", |a, b, d| compare(&a.user_id, &b.user_id, d))
            .register("type", |a, b, d| {
                compare(a.token_type.as_str(), b.token_type.as_str(), d)
            })
            .register("description", |a, b, d| {
                compare(&a.description, &b.description, d)
            })
            .register("expires", |a, b, d| {
                compare(&millis(a.expires), &millis(b.expires), d)
            })
    }
}
