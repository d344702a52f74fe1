use serde::{Deserialize, Serialize};

use crate::{Entity, EntityKind, Meta};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ip {
    pub uuid: String,
    pub ip: String,
    pub name: String,
    pub description: String,
    pub project: String,
    pub network: String,
    #[serde(rename = "type")]
    pub ip_type: IpType,
    pub meta: Meta,
}

impl Entity for Ip {
    const KIND: EntityKind = EntityKind::Ip;

    fn id(&self) -> &str {
        &self.ip
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IpType {
    Ephemeral = 1,
    Static = 2,
    #[default]
    #[serde(other)]
    Unspecified = 0,
}

string_enum!(IpType {
    Unspecified => "unspecified",
    Ephemeral => "ephemeral",
    Static => "static",
});
