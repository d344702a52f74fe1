use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Entity, EntityKind, Meta};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tenant {
    pub login: String,
    pub name: String,
    pub email: String,
    pub meta: Meta,
}

impl Entity for Tenant {
    const KIND: EntityKind = EntityKind::Tenant;

    fn id(&self) -> &str {
        &self.login
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TenantInvite {
    pub secret: String,
    pub target_tenant: String,
    pub target_tenant_name: String,
    pub role: TenantRole,
    pub joined: bool,
    /// Tenant that issued the invite.
    pub tenant: String,
    pub tenant_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Entity for TenantInvite {
    const KIND: EntityKind = EntityKind::TenantInvite;

    fn id(&self) -> &str {
        &self.secret
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TenantMember {
    pub id: String,
    pub role: TenantRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for TenantMember {
    const KIND: EntityKind = EntityKind::TenantMember;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TenantRole {
    Owner = 1,
    Editor = 2,
    Viewer = 3,
    Guest = 4,
    #[default]
    #[serde(other)]
    Unspecified = 0,
}

string_enum!(TenantRole {
    Unspecified => "unspecified",
    Owner => "owner",
    Editor => "editor",
    Viewer => "viewer",
    Guest => "guest",
});
