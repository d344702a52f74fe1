use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{Entity, EntityKind, Machine};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Switch {
    pub id: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rack: Option<String>,
    pub partition: String,
    pub replace_mode: SwitchReplaceMode,
    pub management_ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<SwitchOs>,
    pub nics: Vec<SwitchNic>,
    pub machine_connections: Vec<MachineConnection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<SwitchSync>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync_error: Option<SwitchSync>,
}

impl Entity for Switch {
    const KIND: EntityKind = EntityKind::Switch;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwitchOs {
    pub vendor: SwitchOsVendor,
    pub version: String,
    /// Full build string, e.g. `v0.9.1 (1d5e42ea), tags/v0.9.1-0-g1d5e42e, go1.20.5`.
    pub metal_core_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwitchNic {
    pub name: String,
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<NicState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_filter: Option<BgpFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_port_state: Option<BgpPortState>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NicState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired: Option<SwitchPortStatus>,
    pub actual: SwitchPortStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BgpFilter {
    pub cidrs: Vec<String>,
    pub vnis: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BgpPortState {
    pub neighbor: String,
    pub bgp_state: BgpState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_timer_up_established: Option<DateTime<Utc>>,
    pub sent_prefix_counter: u64,
    pub accepted_prefix_counter: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MachineConnection {
    pub machine_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nic: Option<SwitchNic>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchSync {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::serde_duration",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A switch together with the machines cabled to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwitchWithMachines {
    pub id: String,
    pub partition: String,
    pub rack: String,
    pub connections: Vec<SwitchNicWithMachine>,
}

impl Entity for SwitchWithMachines {
    const KIND: EntityKind = EntityKind::SwitchWithMachines;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchNicWithMachine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nic: Option<SwitchNic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine: Option<Machine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fru: Option<MachineFru>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MachineFru {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_serial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chassis_part_serial: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwitchPortStatus {
    Up = 1,
    Down = 2,
    Unknown = 3,
    #[default]
    #[serde(other)]
    Unspecified = 0,
}

string_enum!(SwitchPortStatus {
    Unspecified => "unspecified",
    Up => "up",
    Down => "down",
    Unknown => "unknown",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BgpState {
    Idle = 1,
    Connect = 2,
    Active = 3,
    OpenSent = 4,
    OpenConfirm = 5,
    Established = 6,
    #[default]
    #[serde(other)]
    Unspecified = 0,
}

string_enum!(BgpState {
    Unspecified => "unspecified",
    Idle => "Idle",
    Connect => "Connect",
    Active => "Active",
    OpenSent => "OpenSent",
    OpenConfirm => "OpenConfirm",
    Established => "Established",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwitchOsVendor {
    Cumulus = 1,
    Sonic = 2,
    #[default]
    #[serde(other)]
    Unspecified = 0,
}

string_enum!(SwitchOsVendor {
    Unspecified => "unspecified",
    Cumulus => "Cumulus",
    Sonic => "SONiC",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwitchReplaceMode {
    Operational = 1,
    Replace = 2,
    #[default]
    #[serde(other)]
    Unspecified = 0,
}

string_enum!(SwitchReplaceMode {
    Unspecified => "unspecified",
    Operational => "operational",
    Replace => "replace",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_duration_parses_human_readable() {
        let sync: SwitchSync = serde_yaml::from_str("time: 2024-05-01T10:00:00Z\nduration: 1s 500ms\n").unwrap();
        assert_eq!(sync.duration, Some(Duration::from_millis(1500)));
        assert!(sync.error.is_none());
    }

    #[test]
    fn test_empty_duration_is_none() {
        let sync: SwitchSync = serde_json::from_str(r#"{"duration": ""}"#).unwrap();
        assert_eq!(sync.duration, None);
    }

    #[test]
    fn test_duration_serializes_back() {
        let sync = SwitchSync {
            duration: Some(Duration::from_secs(90)),
            ..Default::default()
        };
        let json = serde_json::to_value(&sync).unwrap();
        assert_eq!(json["duration"], "1m 30s");
    }

    #[test]
    fn test_vendor_display() {
        assert_eq!(SwitchOsVendor::Sonic.to_string(), "SONiC");
        let vendor: SwitchOsVendor = serde_json::from_str(r#""cumulus""#).unwrap();
        assert_eq!(vendor, SwitchOsVendor::Cumulus);
    }
}
