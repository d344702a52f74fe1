use serde::{Deserialize, Serialize};

use crate::{Entity, EntityKind, Meta};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Network {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_network: Option<String>,
    pub prefixes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nat_type: Option<NatType>,
    #[serde(rename = "type")]
    pub network_type: NetworkType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumption: Option<NetworkConsumption>,
    pub meta: Meta,
}

impl Entity for Network {
    const KIND: EntityKind = EntityKind::Network;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConsumption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<NetworkUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<NetworkUsage>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkUsage {
    pub available_ips: u64,
    pub used_ips: u64,
    pub available_prefixes: u64,
    pub used_prefixes: u64,
}

impl NetworkUsage {
    /// Share of used IPs; zero when nothing is available.
    pub fn ip_ratio(&self) -> f64 {
        ratio(self.used_ips, self.available_ips)
    }

    pub fn prefix_ratio(&self) -> f64 {
        ratio(self.used_prefixes, self.available_prefixes)
    }
}

fn ratio(used: u64, available: u64) -> f64 {
    if available == 0 {
        return 0.0;
    }
    used as f64 / available as f64
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NatType {
    None = 1,
    Ipv4Masquerade = 2,
    #[default]
    #[serde(other)]
    Unspecified = 0,
}

string_enum!(NatType {
    Unspecified => "unspecified",
    None => "none",
    Ipv4Masquerade => "ipv4-masquerade",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NetworkType {
    External = 1,
    Underlay = 2,
    Super = 3,
    SuperNamespaced = 4,
    Child = 5,
    ChildShared = 6,
    #[default]
    #[serde(other)]
    Unspecified = 0,
}

string_enum!(NetworkType {
    Unspecified => "unknown",
    External => "external",
    Underlay => "underlay",
    Super => "super",
    SuperNamespaced => "super-namespaced",
    Child => "child",
    ChildShared => "child-shared",
});
