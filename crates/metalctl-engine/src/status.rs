//! Compact status indicators derived from entity state.
//!
//! Every derivation takes `now` explicitly so results are reproducible.

use chrono::{DateTime, TimeDelta, Utc};
use metalctl_types::{
    Machine, MachineLiveliness, MachineState, Network, ProvisioningEventState, ServiceStatus,
    Switch, SwitchPortStatus, SwitchReplaceMode,
};
use std::time::Duration;

use crate::humanize::humanize_duration;

/// Non-breaking space, keeps adjacent symbols on one table line.
pub const NBR: &str = "\u{a0}";

pub const DOT: &str = "●";
pub const HALF_PIE: &str = "◒";
pub const THREE_QUARTER_PIE: &str = "◕";

pub const SKULL: &str = "💀";
pub const QUESTION: &str = "❓";
pub const LOCK: &str = "🔒";
pub const BARK: &str = "🚧";
pub const AMBULANCE: &str = "🚑";
pub const LOOP: &str = "🔁";
pub const EXCLAMATION: &str = "❗";
pub const VPN: &str = "🛡";

/// Severity, mapped to green, yellow and red by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Ok,
    Warning,
    Critical,
}

/// Symbols describing everything unusual about a machine, in fixed order:
/// liveliness, condition, provisioning state, recent error, VPN.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineIndicator {
    symbols: Vec<&'static str>,
    labels: Vec<&'static str>,
}

impl MachineIndicator {
    fn push(&mut self, symbol: &'static str, label: &'static str) {
        self.symbols.push(symbol);
        self.labels.push(label);
    }

    pub fn symbols(&self) -> &[&'static str] {
        &self.symbols
    }

    /// Symbols joined by non-breaking spaces, empty for a healthy machine.
    pub fn short(&self) -> String {
        self.symbols.join(NBR)
    }

    /// Textual labels, e.g. `Dead, Locked`.
    pub fn wide(&self) -> String {
        self.labels.join(", ")
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Derives the machine indicator. A provisioning error counts as recent while
/// `now - error_time < error_threshold`.
pub fn machine_indicator(
    machine: &Machine,
    now: DateTime<Utc>,
    error_threshold: Duration,
) -> MachineIndicator {
    let mut indicator = MachineIndicator::default();

    if let Some(status) = &machine.status {
        match status.liveliness {
            MachineLiveliness::Alive => {}
            MachineLiveliness::Dead => indicator.push(SKULL, "Dead"),
            MachineLiveliness::Unknown | MachineLiveliness::Unspecified => {
                indicator.push(QUESTION, "Unknown")
            }
        }

        if let Some(condition) = &status.condition {
            match condition.state {
                MachineState::Locked => indicator.push(LOCK, "Locked"),
                MachineState::Reserved => indicator.push(BARK, "Reserved"),
                MachineState::Available | MachineState::Unspecified => {}
            }
        }
    }

    if let Some(events) = &machine.recent_provisioning_events {
        match events.state {
            ProvisioningEventState::FailedReclaim => indicator.push(AMBULANCE, "FailedReclaim"),
            ProvisioningEventState::Crashloop => indicator.push(LOOP, "CrashLoop"),
            ProvisioningEventState::Unspecified => {}
        }

        let threshold = TimeDelta::from_std(error_threshold).unwrap_or(TimeDelta::MAX);
        let recent_error = events
            .last_error_event
            .as_ref()
            .and_then(|e| e.time)
            .is_some_and(|t| now.signed_duration_since(t) < threshold);
        if recent_error {
            indicator.push(EXCLAMATION, "LastEventErrors");
        }
    }

    if machine.vpn_connected() {
        indicator.push(VPN, "VPN");
    }

    indicator
}

const SYNC_AGE_CRITICAL: TimeDelta = TimeDelta::minutes(10);
const SYNC_AGE_WARNING: TimeDelta = TimeDelta::minutes(1);
const SYNC_DURATION_CRITICAL: Duration = Duration::from_secs(30);
const SYNC_DURATION_WARNING: Duration = Duration::from_secs(20);
const SYNC_ERROR_RETENTION: TimeDelta = TimeDelta::days(7);

/// Health of a switch as reported by its last sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchStatus {
    /// `None` when the switch never reported a sync.
    pub level: Option<Level>,
    pub replace_mode: bool,
    /// Time since the last sync, only set when it lies in the past.
    pub sync_age: Option<TimeDelta>,
    /// Duration of the last sync, rounded to milliseconds.
    pub sync_duration: Option<Duration>,
    pub last_error: Option<String>,
}

impl SwitchStatus {
    pub fn mode(&self) -> &'static str {
        if self.replace_mode {
            "replace"
        } else {
            "operational"
        }
    }

    /// `4m 2s ago`, empty when unknown.
    pub fn last_sync(&self) -> String {
        self.sync_age
            .map(|age| format!("{} ago", humanize_duration(age)))
            .unwrap_or_default()
    }
}

/// Drops sub-millisecond precision, saturating at `u64::MAX` milliseconds.
fn whole_millis(d: Duration) -> Duration {
    Duration::from_millis(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

/// Derives the sync status of a switch.
///
/// Red when the last sync is 10 minutes old or took 30 seconds, or when a sync
/// error newer than the last sync happened within the last 7 days. Yellow when
/// the sync is a minute old, took 20 seconds, or a connected port is not up.
/// Green otherwise.
pub fn switch_status(switch: &Switch, now: DateTime<Utc>) -> SwitchStatus {
    let (all_up, mut last_error) = port_status(switch);

    let mut level = None;
    let mut sync_time = None;
    let mut sync_age = None;
    let mut sync_duration = None;

    if let Some(sync) = &switch.last_sync {
        let age = match sync.time {
            Some(t) => {
                sync_time = Some(t);
                now.signed_duration_since(t)
            }
            None => TimeDelta::zero(),
        };
        let duration = sync
            .duration
            .map(whole_millis)
            .unwrap_or_default();

        level = Some(
            if age >= SYNC_AGE_CRITICAL || duration >= SYNC_DURATION_CRITICAL {
                Level::Critical
            } else if age >= SYNC_AGE_WARNING || duration >= SYNC_DURATION_WARNING || !all_up {
                Level::Warning
            } else {
                Level::Ok
            },
        );

        if age > TimeDelta::zero() {
            sync_age = Some(age);
        }
        if !duration.is_zero() {
            sync_duration = Some(duration);
        }
    }

    let sync_error = switch
        .last_sync_error
        .as_ref()
        .and_then(|e| e.time.map(|t| (t, e.error.as_deref().unwrap_or_default())));
    if let Some((error_time, error)) = sync_error {
        let since = now.signed_duration_since(error_time);
        if since < SYNC_ERROR_RETENTION {
            last_error = Some(format!("{} ago: {}", humanize_duration(since), error));
            if sync_time.is_none_or(|t| error_time > t) {
                level = Some(Level::Critical);
            }
        }
    }

    let replace_mode = switch.replace_mode == SwitchReplaceMode::Replace;
    if replace_mode {
        level = Some(Level::Critical);
    }

    SwitchStatus {
        level,
        replace_mode,
        sync_age,
        sync_duration,
        last_error,
    }
}

/// Whether all connected ports are up, plus a message for the first one that
/// is not where it should be.
fn port_status(switch: &Switch) -> (bool, Option<String>) {
    for nic in switch.machine_connections.iter().filter_map(|c| c.nic.as_ref()) {
        let Some(state) = &nic.state else {
            return (false, Some(format!("port status of {:?} is unknown", nic.name)));
        };

        let up = state.actual == SwitchPortStatus::Up;
        match state.desired {
            Some(desired) if desired != state.actual => {
                return (
                    up,
                    Some(format!(
                        "{:?} is {} but should be {}",
                        nic.name, state.actual, desired
                    )),
                );
            }
            _ => {}
        }
        if !up {
            return (false, Some(format!("{:?} is {}", nic.name, state.actual)));
        }
    }
    (true, None)
}

/// Usage level of a ratio between 0 and 1.
pub fn usage_level(ratio: f64) -> Level {
    if ratio >= 0.9 {
        Level::Critical
    } else if ratio >= 0.7 {
        Level::Warning
    } else {
        Level::Ok
    }
}

pub fn usage_symbol(level: Level) -> &'static str {
    match level {
        Level::Ok => DOT,
        Level::Warning => HALF_PIE,
        Level::Critical => THREE_QUARTER_PIE,
    }
}

/// IP and prefix usage of a network, the worse of IPv4 and IPv6 each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkUsageLevels {
    pub ips: Level,
    pub prefixes: Level,
}

/// `None` when the network reports no consumption.
pub fn network_usage(network: &Network) -> Option<NetworkUsageLevels> {
    let consumption = network.consumption.as_ref()?;
    let families = [consumption.ipv4, consumption.ipv6];

    let worst = |ratio: fn(&metalctl_types::NetworkUsage) -> f64| {
        families
            .iter()
            .flatten()
            .map(|u| usage_level(ratio(u)))
            .max()
            .unwrap_or(Level::Ok)
    };

    Some(NetworkUsageLevels {
        ips: worst(|u| u.ip_ratio()),
        prefixes: worst(|u| u.prefix_ratio()),
    })
}

/// Icon and severity of a service health status.
pub fn service_status(status: ServiceStatus) -> (&'static str, Level) {
    match status {
        ServiceStatus::Healthy => ("✔", Level::Ok),
        ServiceStatus::Degraded => ("✗", Level::Warning),
        ServiceStatus::Unhealthy => ("✗", Level::Critical),
        ServiceStatus::Unspecified => ("?", Level::Warning),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use metalctl_types::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn machine(json: serde_json::Value) -> Machine {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_healthy_machine_has_empty_indicator() {
        let m = machine(serde_json::json!({
            "uuid": "m1",
            "status": {"liveliness": "alive", "condition": {"state": "available"}},
            "recentProvisioningEvents": {"state": "unspecified"}
        }));
        let indicator = machine_indicator(&m, now(), Duration::from_secs(3600));
        assert!(indicator.is_empty());
        assert_eq!(indicator.short(), "");
    }

    #[test]
    fn test_symbols_follow_fixed_order() {
        let m = machine(serde_json::json!({
            "uuid": "m1",
            "status": {"liveliness": "dead", "condition": {"state": "locked"}},
            "recentProvisioningEvents": {
                "state": "crashloop",
                "lastErrorEvent": {"time": "2024-06-15T11:30:00Z", "event": "Crashed"}
            },
            "allocation": {"vpn": {"connected": true}}
        }));
        let indicator = machine_indicator(&m, now(), Duration::from_secs(3600));
        assert_eq!(indicator.symbols(), &[SKULL, LOCK, LOOP, EXCLAMATION, VPN]);
        assert_eq!(indicator.wide(), "Dead, Locked, CrashLoop, LastEventErrors, VPN");
        assert_eq!(indicator.short(), ["💀", "🔒", "🔁", "❗", "🛡"].join("\u{a0}"));
    }

    #[test]
    fn test_error_threshold_is_exclusive() {
        let m = machine(serde_json::json!({
            "uuid": "m1",
            "status": {"liveliness": "alive"},
            "recentProvisioningEvents": {
                "lastErrorEvent": {"time": "2024-06-15T11:00:00Z", "event": "Crashed"}
            }
        }));
        assert!(machine_indicator(&m, now(), Duration::from_secs(3600)).is_empty());
        assert_eq!(
            machine_indicator(&m, now(), Duration::from_secs(3601)).symbols(),
            &[EXCLAMATION]
        );
    }

    #[test]
    fn test_unknown_liveliness_and_reserved() {
        let m = machine(serde_json::json!({
            "uuid": "m1",
            "status": {"liveliness": "unknown", "condition": {"state": "reserved"}},
            "recentProvisioningEvents": {"state": "failed-reclaim"}
        }));
        let indicator = machine_indicator(&m, now(), Duration::ZERO);
        assert_eq!(indicator.symbols(), &[QUESTION, BARK, AMBULANCE]);
        assert_eq!(indicator.wide(), "Unknown, Reserved, FailedReclaim");
    }

    fn switch(json: serde_json::Value) -> Switch {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_switch_fresh_sync_is_green() {
        let s = switch(serde_json::json!({
            "id": "leaf01",
            "lastSync": {"time": "2024-06-15T11:59:30Z", "duration": "2s"}
        }));
        let status = switch_status(&s, now());
        assert_eq!(status.level, Some(Level::Ok));
        assert_eq!(status.last_sync(), "30s ago");
        assert_eq!(status.sync_duration, Some(Duration::from_secs(2)));
        assert_eq!(status.mode(), "operational");
    }

    #[test]
    fn test_switch_thresholds() {
        let old = switch(serde_json::json!({"lastSync": {"time": "2024-06-15T11:50:00Z"}}));
        assert_eq!(switch_status(&old, now()).level, Some(Level::Critical));

        let slow = switch(serde_json::json!({"lastSync": {"time": "2024-06-15T11:59:59Z", "duration": "25s"}}));
        assert_eq!(switch_status(&slow, now()).level, Some(Level::Warning));

        let never = switch(serde_json::json!({"id": "leaf01"}));
        assert_eq!(switch_status(&never, now()).level, None);
    }

    #[test]
    fn test_switch_port_down_is_yellow() {
        let s = switch(serde_json::json!({
            "lastSync": {"time": "2024-06-15T11:59:59Z"},
            "machineConnections": [
                {"machineId": "m1", "nic": {"name": "swp1", "state": {"actual": "up"}}},
                {"machineId": "m2", "nic": {"name": "swp2", "state": {"actual": "down", "desired": "up"}}}
            ]
        }));
        let status = switch_status(&s, now());
        assert_eq!(status.level, Some(Level::Warning));
        assert_eq!(status.last_error.as_deref(), Some(r#""swp2" is down but should be up"#));
    }

    #[test]
    fn test_switch_recent_error_after_sync_is_red() {
        let s = switch(serde_json::json!({
            "lastSync": {"time": "2024-06-15T11:59:00Z"},
            "lastSyncError": {"time": "2024-06-15T11:59:50Z", "error": "bgp reload failed"}
        }));
        let status = switch_status(&s, now());
        assert_eq!(status.level, Some(Level::Critical));
        assert_eq!(status.last_error.as_deref(), Some("10s ago: bgp reload failed"));
    }

    #[test]
    fn test_switch_old_error_is_ignored() {
        let s = switch(serde_json::json!({
            "lastSync": {"time": "2024-06-15T11:59:55Z"},
            "lastSyncError": {"time": "2024-06-01T00:00:00Z", "error": "gone"}
        }));
        let status = switch_status(&s, now());
        assert_eq!(status.level, Some(Level::Ok));
        assert_eq!(status.last_error, None);
    }

    #[test]
    fn test_sync_duration_keeps_whole_millis() {
        assert_eq!(whole_millis(Duration::new(2, 1_500_000)), Duration::from_millis(2001));
        assert_eq!(whole_millis(Duration::MAX), Duration::from_millis(u64::MAX));
    }

    #[test]
    fn test_switch_replace_mode() {
        let s = switch(serde_json::json!({
            "replaceMode": "replace",
            "lastSync": {"time": "2024-06-15T11:59:55Z"}
        }));
        let status = switch_status(&s, now());
        assert!(status.replace_mode);
        assert_eq!(status.level, Some(Level::Critical));
        assert_eq!(status.mode(), "replace");
    }

    #[test]
    fn test_network_usage_levels() {
        let n: Network = serde_json::from_value(serde_json::json!({
            "id": "n1",
            "consumption": {
                "ipv4": {"availableIps": 100, "usedIps": 75, "availablePrefixes": 0, "usedPrefixes": 0},
                "ipv6": {"availableIps": 100, "usedIps": 95, "availablePrefixes": 10, "usedPrefixes": 1}
            }
        }))
        .unwrap();
        let usage = network_usage(&n).unwrap();
        assert_eq!(usage.ips, Level::Critical);
        assert_eq!(usage.prefixes, Level::Ok);
        assert_eq!(usage_symbol(usage.ips), THREE_QUARTER_PIE);

        let without = Network::default();
        assert!(network_usage(&without).is_none());
    }

    #[test]
    fn test_usage_boundaries() {
        assert_eq!(usage_level(0.69), Level::Ok);
        assert_eq!(usage_level(0.7), Level::Warning);
        assert_eq!(usage_level(0.9), Level::Critical);
    }
}
