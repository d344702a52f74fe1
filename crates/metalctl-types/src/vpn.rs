use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Entity, EntityKind};

/// A machine or firewall registered at the VPN control plane.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VpnNode {
    /// Numeric node id; JSON encodes it as a number or a string.
    #[serde(deserialize_with = "number_or_string")]
    pub id: String,
    pub name: String,
    pub project: String,
    pub ip_addresses: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
}

impl VpnNode {
    /// The id as a number, for numeric ordering.
    pub fn number(&self) -> Option<u64> {
        self.id.parse().ok()
    }
}

impl Entity for VpnNode {
    const KIND: EntityKind = EntityKind::VpnNode;

    fn id(&self) -> &str {
        &self.id
    }
}

fn number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(u64),
        Text(String),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Number(n) => n.to_string(),
        Id::Text(s) => s,
    })
}
