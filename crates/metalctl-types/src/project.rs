use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Entity, EntityKind, Meta};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub uuid: String,
    pub name: String,
    pub description: String,
    pub tenant: String,
    pub meta: Meta,
}

impl Entity for Project {
    const KIND: EntityKind = EntityKind::Project;

    fn id(&self) -> &str {
        &self.uuid
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectInvite {
    pub secret: String,
    pub project: String,
    pub project_name: String,
    pub role: ProjectRole,
    pub joined: bool,
    pub tenant: String,
    pub tenant_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Entity for ProjectInvite {
    const KIND: EntityKind = EntityKind::ProjectInvite;

    fn id(&self) -> &str {
        &self.secret
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectMember {
    pub id: String,
    pub role: ProjectRole,
    pub inherited_membership: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for ProjectMember {
    const KIND: EntityKind = EntityKind::ProjectMember;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Ordered by privilege, owner first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectRole {
    Owner = 1,
    Editor = 2,
    Viewer = 3,
    #[default]
    #[serde(other)]
    Unspecified = 0,
}

string_enum!(ProjectRole {
    Unspecified => "unspecified",
    Owner => "owner",
    Editor => "editor",
    Viewer => "viewer",
});
