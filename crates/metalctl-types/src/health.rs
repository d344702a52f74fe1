use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{Entity, EntityKind};

/// Health report of the API and the services behind it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Health {
    pub services: Vec<ServiceHealth>,
}

impl Entity for Health {
    const KIND: EntityKind = EntityKind::Health;

    fn id(&self) -> &str {
        "health"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceHealth {
    pub name: String,
    pub status: ServiceStatus,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Keyed by partition id, so iteration is already ordered.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub partitions: BTreeMap<String, PartitionHealth>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionHealth {
    pub status: ServiceStatus,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceStatus {
    Healthy = 1,
    Degraded = 2,
    Unhealthy = 3,
    #[default]
    #[serde(other)]
    Unspecified = 0,
}

string_enum!(ServiceStatus {
    Unspecified => "unspecified",
    Healthy => "healthy",
    Degraded => "degraded",
    Unhealthy => "unhealthy",
});
