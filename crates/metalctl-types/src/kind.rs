use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tag for every entity type the CLI can sort or render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Context,
    Health,
    Image,
    Ip,
    Machine,
    Network,
    Partition,
    PartitionCapacity,
    Project,
    ProjectInvite,
    ProjectMember,
    Size,
    Switch,
    SwitchWithMachines,
    Task,
    Tenant,
    TenantInvite,
    TenantMember,
    Token,
    VpnNode,
}

impl EntityKind {
    pub const ALL: [EntityKind; 20] = [
        EntityKind::Context,
        EntityKind::Health,
        EntityKind::Image,
        EntityKind::Ip,
        EntityKind::Machine,
        EntityKind::Network,
        EntityKind::Partition,
        EntityKind::PartitionCapacity,
        EntityKind::Project,
        EntityKind::ProjectInvite,
        EntityKind::ProjectMember,
        EntityKind::Size,
        EntityKind::Switch,
        EntityKind::SwitchWithMachines,
        EntityKind::Task,
        EntityKind::Tenant,
        EntityKind::TenantInvite,
        EntityKind::TenantMember,
        EntityKind::Token,
        EntityKind::VpnNode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Context => "context",
            EntityKind::Health => "health",
            EntityKind::Image => "image",
            EntityKind::Ip => "ip",
            EntityKind::Machine => "machine",
            EntityKind::Network => "network",
            EntityKind::Partition => "partition",
            EntityKind::PartitionCapacity => "partition-capacity",
            EntityKind::Project => "project",
            EntityKind::ProjectInvite => "project-invite",
            EntityKind::ProjectMember => "project-member",
            EntityKind::Size => "size",
            EntityKind::Switch => "switch",
            EntityKind::SwitchWithMachines => "switch-with-machines",
            EntityKind::Task => "task",
            EntityKind::Tenant => "tenant",
            EntityKind::TenantInvite => "tenant-invite",
            EntityKind::TenantMember => "tenant-member",
            EntityKind::Token => "token",
            EntityKind::VpnNode => "vpn-node",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity kind: {0}")]
pub struct UnknownEntityKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEntityKind(s.to_string()))
    }
}
