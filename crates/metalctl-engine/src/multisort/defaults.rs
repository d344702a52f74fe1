use metalctl_types::EntityKind;
use std::collections::BTreeMap;

use super::SortKey;

/// Default sort key sequence per entity type.
///
/// Starts from the built-in table and may be overridden from configuration.
/// Overrides are only checked against the comparator registry when a sorter
/// is built from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDefaults {
    keys: BTreeMap<EntityKind, Vec<SortKey>>,
}

impl SortDefaults {
    pub fn builtin() -> Self {
        use SortKey as K;

        let table = [
            (EntityKind::Context, vec![K::asc("name")]),
            (EntityKind::Image, vec![K::asc("id")]),
            (EntityKind::Ip, vec![K::asc("project"), K::asc("ip")]),
            (
                EntityKind::Machine,
                vec![K::asc("uuid"), K::asc("size"), K::asc("partition")],
            ),
            (EntityKind::Network, vec![K::asc("partition"), K::asc("id")]),
            (EntityKind::Partition, vec![K::asc("id"), K::asc("description")]),
            (EntityKind::PartitionCapacity, vec![K::asc("id"), K::asc("size")]),
            (
                EntityKind::Project,
                vec![K::asc("tenant"), K::asc("name"), K::asc("id")],
            ),
            (
                EntityKind::ProjectInvite,
                vec![K::asc("project"), K::asc("role"), K::asc("expiration")],
            ),
            (
                EntityKind::ProjectMember,
                vec![K::asc("inherited"), K::asc("role"), K::asc("id")],
            ),
            (EntityKind::Size, vec![K::asc("id")]),
            (EntityKind::Switch, vec![K::asc("id")]),
            (
                EntityKind::Task,
                vec![K::asc("queue"), K::asc("issued"), K::asc("id")],
            ),
            (EntityKind::Tenant, vec![K::desc("since")]),
            (
                EntityKind::TenantInvite,
                vec![K::asc("tenant"), K::asc("role"), K::asc("expiration")],
            ),
            (EntityKind::TenantMember, vec![K::asc("role"), K::asc("id")]),
            (
                EntityKind::Token,
                vec![K::asc("type"), K::asc("user"), K::asc("expires"), K::asc("id")],
            ),
            (EntityKind::VpnNode, vec![K::asc("project"), K::asc("name")]),
        ];

        Self {
            keys: table.into_iter().collect(),
        }
    }

    /// Replaces the defaults of one entity type. An empty list is ignored.
    pub fn with_override(mut self, kind: EntityKind, keys: Vec<SortKey>) -> Self {
        if !keys.is_empty() {
            self.keys.insert(kind, keys);
        }
        self
    }

    /// Default keys for `kind`; empty for types that are never sorted.
    pub fn keys_for(&self, kind: EntityKind) -> &[SortKey] {
        self.keys.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for SortDefaults {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tenant_default_is_descending() {
        let defaults = SortDefaults::builtin();
        assert_eq!(defaults.keys_for(EntityKind::Tenant), &[SortKey::desc("since")]);
        assert!(defaults.keys_for(EntityKind::Health).is_empty());
    }

    #[test]
    fn test_override_replaces_one_kind() {
        let defaults =
            SortDefaults::builtin().with_override(EntityKind::Machine, vec![SortKey::desc("age")]);
        assert_eq!(defaults.keys_for(EntityKind::Machine), &[SortKey::desc("age")]);
        assert_eq!(
            defaults.keys_for(EntityKind::Network),
            &[SortKey::asc("partition"), SortKey::asc("id")]
        );
    }

    #[test]
    fn test_empty_override_keeps_builtin() {
        let defaults = SortDefaults::builtin().with_override(EntityKind::Size, Vec::new());
        assert_eq!(defaults.keys_for(EntityKind::Size), &[SortKey::asc("id")]);
    }
}
