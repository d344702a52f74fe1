use metalctl_types::{Project, ProjectInvite, ProjectMember};

use super::{Sortable, millis};
use crate::multisort::{FieldMap, compare};

impl Sortable for Project {
    fn fields() -> FieldMap<Self> {
        FieldMap::<Self>::new()
            .register("id", |a, b, d| compare(&a.uuid, &b.uuid, d))
            .register("name", |a, b, d| compare(&a.name, &b.name, d))
            .register("tenant", |a, b, d| compare(&a.tenant, &b.tenant, d))
    }
}

impl Sortable for ProjectInvite {
    fn fields() -> FieldMap<Self> {
        FieldMap::<Self>::new()
            .register("project", |a, b, d| compare(&a.project, &b.project, d))
            .register("secret", |a, b, d| compare(&a.secret, &b.secret, d))
            .register("role", |a, b, d| compare(&a.role, &b.role, d))
            .register("expiration", |a, b, d| {
                compare(&millis(a.expires_at), &millis(b.expires_at), d)
            })
    }
}

impl Sortable for ProjectMember {
    fn fields() -> FieldMap<Self> {
        FieldMap::<Self>::new()
            .register("id", |a, b, d| compare(&a.id, &b.id, d))
            .register("role", |a, b, d| compare(&a.role, &b.role, d))
            .register("created", |a, b, d| {
                compare(&millis(a.created_at), &millis(b.created_at), d)
            })
            .register("inherited", |a, b, d| {
                compare(&a.inherited_membership, &b.inherited_membership, d)
            })
    }
}
