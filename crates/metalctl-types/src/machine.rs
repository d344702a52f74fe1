use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Entity, EntityKind, Meta};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Machine {
    pub uuid: String,
    pub rack: String,
    pub meta: Meta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition: Option<IdRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<IdRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation: Option<MachineAllocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MachineStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_provisioning_events: Option<MachineRecentProvisioningEvents>,
}

impl Machine {
    pub fn partition_id(&self) -> &str {
        self.partition.as_ref().map_or("", |p| p.id.as_str())
    }

    pub fn size_id(&self) -> &str {
        self.size.as_ref().map_or("", |s| s.id.as_str())
    }

    pub fn project(&self) -> &str {
        self.allocation.as_ref().map_or("", |a| a.project.as_str())
    }

    pub fn image_id(&self) -> &str {
        self.allocation
            .as_ref()
            .and_then(|a| a.image.as_ref())
            .map_or("", |i| i.id.as_str())
    }

    /// Creation time of the current allocation, if the machine is allocated.
    pub fn allocated_at(&self) -> Option<DateTime<Utc>> {
        self.allocation.as_ref().and_then(|a| a.meta.created_at)
    }

    pub fn vpn_connected(&self) -> bool {
        self.allocation
            .as_ref()
            .and_then(|a| a.vpn.as_ref())
            .is_some_and(|vpn| vpn.connected)
    }
}

impl Entity for Machine {
    const KIND: EntityKind = EntityKind::Machine;

    fn id(&self) -> &str {
        &self.uuid
    }
}

/// Reference to another entity by id (partition, size).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdRef {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MachineAllocation {
    pub uuid: String,
    pub meta: Meta,
    pub name: String,
    pub description: String,
    pub hostname: String,
    pub project: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<MachineNetwork>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn: Option<MachineVpn>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageRef {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineNetwork {
    pub network: String,
    pub ips: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineVpn {
    pub connected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MachineStatus {
    pub liveliness: MachineLiveliness,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<MachineCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub led_state: Option<LedState>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineCondition {
    pub state: MachineState,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedState {
    pub value: String,
}

impl LedState {
    pub fn is_on(&self) -> bool {
        self.value == "LED-ON"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MachineLiveliness {
    Alive = 1,
    Dead = 2,
    Unknown = 3,
    #[default]
    #[serde(other)]
    Unspecified = 0,
}

string_enum!(MachineLiveliness {
    Unspecified => "unspecified",
    Alive => "alive",
    Dead => "dead",
    Unknown => "unknown",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MachineState {
    Available = 1,
    Locked = 2,
    Reserved = 3,
    #[default]
    #[serde(other)]
    Unspecified = 0,
}

string_enum!(MachineState {
    Unspecified => "unspecified",
    Available => "available",
    Locked => "locked",
    Reserved => "reserved",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MachineRecentProvisioningEvents {
    /// Newest first.
    pub events: Vec<MachineProvisioningEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_event_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error_event: Option<MachineProvisioningEvent>,
    pub state: ProvisioningEventState,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineProvisioningEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    pub event: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProvisioningEventState {
    FailedReclaim = 1,
    Crashloop = 2,
    #[default]
    #[serde(other)]
    Unspecified = 0,
}

string_enum!(ProvisioningEventState {
    Unspecified => "unspecified",
    FailedReclaim => "failed-reclaim",
    Crashloop => "crashloop",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_machine_deserializes() {
        let machine: Machine = serde_json::from_str(r#"{"uuid": "m1"}"#).unwrap();
        assert_eq!(machine.uuid, "m1");
        assert_eq!(machine.partition_id(), "");
        assert_eq!(machine.project(), "");
        assert!(machine.allocated_at().is_none());
        assert!(!machine.vpn_connected());
    }

    #[test]
    fn test_unknown_enum_values_fall_back_to_unspecified() {
        let status: MachineStatus =
            serde_json::from_str(r#"{"liveliness": "zombie", "condition": {"state": "bogus"}}"#)
                .unwrap();
        assert_eq!(status.liveliness, MachineLiveliness::Unspecified);
        assert_eq!(status.condition.unwrap().state, MachineState::Unspecified);
    }

    #[test]
    fn test_nested_accessors() {
        let machine: Machine = serde_json::from_value(serde_json::json!({
            "uuid": "m1",
            "partition": {"id": "fra-equ01"},
            "size": {"id": "c1-large-x86"},
            "allocation": {
                "project": "p1",
                "image": {"id": "debian-12"},
                "vpn": {"connected": true},
                "meta": {"createdAt": "2024-01-01T00:00:00Z"}
            }
        }))
        .unwrap();

        assert_eq!(machine.partition_id(), "fra-equ01");
        assert_eq!(machine.size_id(), "c1-large-x86");
        assert_eq!(machine.project(), "p1");
        assert_eq!(machine.image_id(), "debian-12");
        assert!(machine.vpn_connected());
        assert!(machine.allocated_at().is_some());
    }

    #[test]
    fn test_provisioning_state_strings() {
        assert_eq!(ProvisioningEventState::FailedReclaim.to_string(), "failed-reclaim");
        let state: ProvisioningEventState = serde_json::from_str(r#""crashloop""#).unwrap();
        assert_eq!(state, ProvisioningEventState::Crashloop);
    }
}
