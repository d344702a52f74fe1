use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{Entity, EntityKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Token {
    pub uuid: String,
    pub user_id: String,
    pub description: String,
    pub token_type: TokenType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_role: Option<AdminRole>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub tenant_roles: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub project_roles: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<MethodPermission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<DateTime<Utc>>,
}

impl Token {
    pub fn role_count(&self) -> usize {
        self.tenant_roles.len() + self.project_roles.len()
    }
}

impl Entity for Token {
    const KIND: EntityKind = EntityKind::Token;

    fn id(&self) -> &str {
        &self.uuid
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodPermission {
    pub subject: String,
    pub methods: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenType {
    Api = 1,
    Console = 2,
    #[default]
    #[serde(other)]
    Unspecified = 0,
}

string_enum!(TokenType {
    Unspecified => "unspecified",
    Api => "api",
    Console => "console",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdminRole {
    Editor = 1,
    Viewer = 2,
    #[default]
    #[serde(other)]
    Unspecified = 0,
}

string_enum!(AdminRole {
    Unspecified => "unspecified",
    Editor => "editor",
    Viewer => "viewer",
});
