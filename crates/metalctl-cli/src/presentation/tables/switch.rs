use super::{RenderContext, Renderable, TableData};
use metalctl_engine::humanize::humanize_duration;
use metalctl_engine::interface::sort_connections;
use metalctl_engine::status::{DOT, NBR, machine_indicator, switch_status};
use metalctl_engine::TreePrefix;
use metalctl_types::{BgpFilter, BgpState, Switch, SwitchOs, SwitchOsVendor, SwitchWithMachines};
use serde::Serialize;
use std::collections::HashMap;

fn os_icon(os: &SwitchOs) -> String {
    match os.vendor {
        SwitchOsVendor::Cumulus => "🐢".to_string(),
        SwitchOsVendor::Sonic => "🦔".to_string(),
        SwitchOsVendor::Unspecified => os.vendor.to_string(),
    }
}

/// `SONiC (202211)`
fn os_name(os: &SwitchOs) -> String {
    let vendor = match os.vendor {
        SwitchOsVendor::Unspecified => "",
        vendor => vendor.as_str(),
    };
    if os.version.is_empty() {
        vendor.to_string()
    } else {
        format!("{} ({})", vendor, os.version)
    }
}

/// Only the version part of `v0.9.1 (1d5e42ea), tags/v0.9.1-0-g1d5e42e, go1.20.5`.
fn metal_core(os: &SwitchOs) -> String {
    os.metal_core_version
        .split(',')
        .next()
        .unwrap_or_default()
        .to_string()
}

impl Renderable for Switch {
    fn header(wide: bool) -> Vec<&'static str> {
        if wide {
            vec![
                "ID",
                "Partition",
                "Rack",
                "OS",
                "Metalcore",
                "IP",
                "Mode",
                "Last Sync",
                "Sync Duration",
                "Last Error",
            ]
        } else {
            vec!["ID", "Partition", "Rack", "OS", "Status", "Last Sync"]
        }
    }

    fn rows(&self, ctx: &RenderContext) -> Vec<Vec<String>> {
        let status = switch_status(self, ctx.now);
        let rack = self.rack.clone().unwrap_or_default();

        if ctx.wide {
            let os = self.os.as_ref();
            return vec![vec![
                self.id.clone(),
                self.partition.clone(),
                rack,
                os.map(os_name).unwrap_or_default(),
                os.map(metal_core).unwrap_or_default(),
                self.management_ip.clone(),
                status.mode().to_string(),
                status.last_sync(),
                status
                    .sync_duration
                    .map(|d| humantime::format_duration(d).to_string())
                    .unwrap_or_default(),
                status.last_error.clone().unwrap_or_default(),
            ]];
        }

        let indicator = match status.level {
            _ if status.replace_mode => format!("{}{}", NBR, ctx.palette.red(DOT)),
            Some(level) => ctx.palette.level(DOT, level),
            None => NBR.to_string(),
        };

        vec![vec![
            self.id.clone(),
            self.partition.clone(),
            rack,
            self.os.as_ref().map(os_icon).unwrap_or_default(),
            indicator,
            status.last_sync(),
        ]]
    }

    /// Wide switch tables carry long error messages that must not wrap.
    fn table(items: &[Self], ctx: &RenderContext) -> TableData {
        TableData {
            header: Self::header(ctx.wide).into_iter().map(String::from).collect(),
            rows: items.iter().flat_map(|s| s.rows(ctx)).collect(),
            auto_wrap: !ctx.wide,
        }
    }
}

impl Renderable for SwitchWithMachines {
    const AUTO_WRAP: bool = false;

    fn header(wide: bool) -> Vec<&'static str> {
        if wide {
            vec![
                "ID",
                "",
                "NIC Name",
                "Identifier",
                "Partition",
                "Rack",
                "Size",
                "Hostname",
                "Product Serial",
                "Chassis Serial",
            ]
        } else {
            vec![
                "ID",
                "NIC Name",
                "Identifier",
                "Partition",
                "Rack",
                "Size",
                "Product Serial",
                "Chassis Serial",
            ]
        }
    }

    /// The switch followed by one row per cabled machine, ordered by port name.
    fn rows(&self, ctx: &RenderContext) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        let blank = if ctx.wide { 3 } else { 2 };
        let mut switch_row = vec![self.id.clone()];
        switch_row.extend(std::iter::repeat_n(String::new(), blank));
        switch_row.extend([self.partition.clone(), self.rack.clone()]);
        rows.push(switch_row);

        let mut connections = self.connections.clone();
        sort_connections(&mut connections);
        let complete: Vec<_> = connections
            .iter()
            .filter_map(|c| Some((c.nic.as_ref()?, c.machine.as_ref()?, c.fru.as_ref()?)))
            .collect();

        for (i, (nic, machine, fru)) in complete.iter().enumerate() {
            let id = format!(
                "{}{}",
                TreePrefix::for_child(i, complete.len()).as_str(),
                machine.uuid
            );

            let mut nic_name = match &nic.state {
                Some(state) => format!("{} ({})", nic.name, state.actual),
                None => nic.name.clone(),
            };
            if ctx.wide
                && let Some(bgp) = &nic.bgp_port_state
            {
                let state = match (bgp.bgp_state, bgp.bgp_timer_up_established) {
                    (BgpState::Established, Some(up)) => format!(
                        "Established({})",
                        humanize_duration(ctx.now.signed_duration_since(up))
                    ),
                    (state, _) => state.to_string(),
                };
                nic_name = format!("{} (BGP:{})", nic_name, state);
            }

            let product_serial = fru.product_serial.clone().unwrap_or_default();
            let chassis_serial = fru.chassis_part_serial.clone().unwrap_or_default();
            let size = machine.size_id().to_string();

            let row = if ctx.wide {
                let hostname = machine
                    .allocation
                    .as_ref()
                    .map(|a| a.hostname.clone())
                    .unwrap_or_default();
                vec![
                    id,
                    machine_indicator(machine, ctx.now, ctx.last_event_error_threshold).short(),
                    nic_name,
                    nic.identifier.clone(),
                    self.partition.clone(),
                    self.rack.clone(),
                    size,
                    hostname,
                    product_serial,
                    chassis_serial,
                ]
            } else {
                vec![
                    id,
                    nic_name,
                    nic.identifier.clone(),
                    self.partition.clone(),
                    self.rack.clone(),
                    size,
                    product_serial,
                    chassis_serial,
                ]
            };
            rows.push(row);
        }
        rows
    }
}

/// A switch rendered port by port with the BGP filters of each port.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct SwitchDetail(pub Switch);

fn filter_columns(filter: &BgpFilter, i: usize) -> [String; 2] {
    [
        filter.vnis.get(i).cloned().unwrap_or_default(),
        filter.cidrs.get(i).cloned().unwrap_or_default(),
    ]
}

impl Renderable for SwitchDetail {
    fn header(_wide: bool) -> Vec<&'static str> {
        vec![
            "Partition",
            "Rack",
            "Switch",
            "Port",
            "Machine",
            "VNI-Filter",
            "CIDR-Filter",
        ]
    }

    fn rows(&self, _ctx: &RenderContext) -> Vec<Vec<String>> {
        let sw = &self.0;
        let filters: HashMap<&str, &BgpFilter> = sw
            .nics
            .iter()
            .filter_map(|nic| Some((nic.name.as_str(), nic.bgp_filter.as_ref()?)))
            .collect();

        let mut rows = Vec::new();
        for conn in &sw.machine_connections {
            let Some(nic) = &conn.nic else {
                continue;
            };

            let mut row = vec![
                sw.partition.clone(),
                sw.rack.clone().unwrap_or_default(),
                sw.id.clone(),
                nic.name.clone(),
                conn.machine_id.clone(),
            ];

            let Some(filter) = filters.get(nic.name.as_str()) else {
                rows.push(row);
                continue;
            };
            row.extend(filter_columns(filter, 0));
            rows.push(row);

            for i in 1..filter.cidrs.len().max(filter.vnis.len()) {
                let mut extra = vec![String::new(); 5];
                extra.extend(filter_columns(filter, i));
                rows.push(extra);
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::super::{render_plain, test_now};
    use super::*;
    use crate::presentation::formatters::Palette;

    fn switch(json: serde_json::Value) -> Switch {
        serde_json::from_value(json).unwrap()
    }

    fn leaf01() -> Switch {
        switch(serde_json::json!({
            "id": "leaf01",
            "partition": "fra-equ01",
            "rack": "rack-1",
            "managementIp": "10.1.0.1",
            "os": {
                "vendor": "sonic",
                "version": "202211",
                "metalCoreVersion": "v0.9.1 (1d5e42ea), tags/v0.9.1-0-g1d5e42e, go1.20.5"
            },
            "nics": [
                {"name": "Ethernet0", "identifier": "Eth1/1",
                 "bgpFilter": {"cidrs": ["10.0.0.0/22", "10.0.4.0/22", "203.0.113.7/32"], "vnis": ["104"]}},
                {"name": "Ethernet4", "identifier": "Eth1/2"}
            ],
            "machineConnections": [
                {"machineId": "m1", "nic": {"name": "Ethernet0", "state": {"actual": "up"}}},
                {"machineId": "m2", "nic": {"name": "Ethernet4", "state": {"actual": "up"}}}
            ],
            "lastSync": {"time": "2024-06-15T11:59:30Z", "duration": "1s 500ms"}
        }))
    }

    #[test]
    fn test_switch_short_and_wide() {
        let ctx = RenderContext::new(test_now());
        insta::assert_snapshot!(render_plain(&[leaf01()], &ctx), @r"
        |ID|Partition|Rack|OS|Status|Last Sync|
        |leaf01|fra-equ01|rack-1|🦔|●|30s ago|
        ");

        let wide = ctx.wide(true);
        insta::assert_snapshot!(render_plain(&[leaf01()], &wide), @r"
        |ID|Partition|Rack|OS|Metalcore|IP|Mode|Last Sync|Sync Duration|Last Error|
        |leaf01|fra-equ01|rack-1|SONiC (202211)|v0.9.1 (1d5e42ea)|10.1.0.1|operational|30s ago|1s 500ms||
        ");
        assert!(!Switch::table(&[leaf01()], &wide).auto_wrap);
    }

    #[test]
    fn test_status_without_sync_and_in_replace_mode() {
        let never_synced = switch(serde_json::json!({"id": "leaf02"}));
        let replaced = switch(serde_json::json!({"id": "leaf03", "replaceMode": "replace"}));

        let mut ctx = RenderContext::new(test_now());
        let table = Switch::table(&[never_synced, replaced.clone()], &ctx);
        assert_eq!(table.rows[0][4], NBR);
        assert_eq!(table.rows[1][4], format!("{}{}", NBR, DOT));

        ctx.palette = Palette::new(true);
        let table = Switch::table(&[replaced], &ctx);
        assert!(table.rows[0][4].starts_with(NBR));
        assert!(table.rows[0][4].contains("\u{1b}[31m"));
    }

    #[test]
    fn test_connected_machines_ordered_by_port() {
        let sw: SwitchWithMachines = serde_json::from_value(serde_json::json!({
            "id": "leaf01",
            "partition": "fra-equ01",
            "rack": "rack-1",
            "connections": [
                {
                    "nic": {"name": "Ethernet10", "identifier": "Eth1/3", "state": {"actual": "down"}},
                    "machine": {"uuid": "m3", "size": {"id": "c1-large-x86"}},
                    "fru": {"productSerial": "P3", "chassisPartSerial": "C3"}
                },
                {
                    "nic": {"name": "Ethernet2", "identifier": "Eth1/2", "state": {"actual": "up"}},
                    "machine": {"uuid": "m2", "size": {"id": "c1-large-x86"}},
                    "fru": {"productSerial": "P2"}
                },
                {
                    "nic": {"name": "Ethernet1", "identifier": "Eth1/1"},
                    "machine": {"uuid": "m1"}
                }
            ]
        }))
        .unwrap();

        insta::assert_snapshot!(render_plain(&[sw], &RenderContext::new(test_now())), @r"
        |ID|NIC Name|Identifier|Partition|Rack|Size|Product Serial|Chassis Serial|
        |leaf01|||fra-equ01|rack-1|
        |├─╴m2|Ethernet2 (up)|Eth1/2|fra-equ01|rack-1|c1-large-x86|P2||
        |└─╴m3|Ethernet10 (down)|Eth1/3|fra-equ01|rack-1|c1-large-x86|P3|C3|
        ");
    }

    #[test]
    fn test_connected_machines_wide_shows_bgp_state() {
        let sw: SwitchWithMachines = serde_json::from_value(serde_json::json!({
            "id": "leaf01",
            "connections": [{
                "nic": {
                    "name": "Ethernet0",
                    "state": {"actual": "up"},
                    "bgpPortState": {"bgpState": "established", "bgpTimerUpEstablished": "2024-06-15T10:00:00Z"}
                },
                "machine": {"uuid": "m1", "allocation": {"hostname": "worker-1"}},
                "fru": {}
            }]
        }))
        .unwrap();

        let ctx = RenderContext::new(test_now()).wide(true);
        let table = SwitchWithMachines::table(&[sw], &ctx);
        assert_eq!(table.rows[0].len(), 6);
        assert_eq!(table.rows[1][2], "Ethernet0 (up) (BGP:Established(2h))");
        assert_eq!(table.rows[1][7], "worker-1");
    }

    #[test]
    fn test_detail_lists_filters_per_port() {
        let detail = SwitchDetail(leaf01());
        insta::assert_snapshot!(render_plain(&[detail], &RenderContext::new(test_now())), @r"
        |Partition|Rack|Switch|Port|Machine|VNI-Filter|CIDR-Filter|
        |fra-equ01|rack-1|leaf01|Ethernet0|m1|104|10.0.0.0/22|
        |||||||10.0.4.0/22|
        |||||||203.0.113.7/32|
        |fra-equ01|rack-1|leaf01|Ethernet4|m2|
        ");
    }
}
