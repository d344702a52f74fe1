use metalctl_types::{Tenant, TenantInvite, TenantMember};

use super::{Sortable, millis};
use crate::multisort::{FieldMap, compare};

impl Sortable for Tenant {
    fn fields() -> FieldMap<Self> {
        FieldMap::<Self>::new()
            .register("id", |a, b, d| compare(&a.login, &b.login, d))
            .register("name", |a, b, d| compare(&a.name, &b.name, d))
            .register("since", |a, b, d| {
                compare(&millis(a.meta.created_at), &millis(b.meta.created_at), d)
            })
    }
}

impl Sortable for TenantInvite {
    fn fields() -> FieldMap<Self> {
        FieldMap::<Self>::new()
            .register("tenant", |a, b, d| compare(&a.tenant, &b.tenant, d))
            .register("secret", |a, b, d| compare(&a.secret, &b.secret, d))
            .register("role", |a, b, d| compare(&a.role, &b.role, d))
            .register("expiration", |a, b, d| {
                compare(&millis(a.expires_at), &millis(b.expires_at), d)
            })
    }
}

impl Sortable for TenantMember {
    fn fields() -> FieldMap<Self> {
        FieldMap::<Self>::new()
            .register("id", |a, b, d| compare(&a.id, &b.id, d))
            .register("role", |a, b, d| compare(&a.role, &b.role, d))
            .register("created", |a, b, d| {
                compare(&millis(a.created_at), &millis(b.created_at), d)
            })
    }
}
