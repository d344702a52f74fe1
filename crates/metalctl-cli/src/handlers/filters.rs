//! Client side filters of the list commands. Unset flags match everything.

use crate::args::{
    IpFilter, MachineFilter, NetworkFilter, ProjectFilter, SwitchFilter, TaskFilter, VpnFilter,
};
use metalctl_types::{Ip, Machine, Network, Project, Switch, SwitchWithMachines, TaskInfo, VpnNode};

pub trait Filter<T> {
    fn matches(&self, item: &T) -> bool;
}

/// No filter flags for this command.
impl<T> Filter<T> for () {
    fn matches(&self, _item: &T) -> bool {
        true
    }
}

fn eq(wanted: &Option<String>, actual: &str) -> bool {
    wanted.as_deref().is_none_or(|w| w == actual)
}

fn eq_opt(wanted: &Option<String>, actual: &Option<String>) -> bool {
    eq(wanted, actual.as_deref().unwrap_or_default())
}

impl Filter<Ip> for IpFilter {
    fn matches(&self, ip: &Ip) -> bool {
        eq(&self.project, &ip.project)
            && eq(&self.network, &ip.network)
            && eq(&self.ip_type, ip.ip_type.as_str())
            && eq(&self.name, &ip.name)
    }
}

impl Filter<Machine> for MachineFilter {
    fn matches(&self, machine: &Machine) -> bool {
        let hostname = machine
            .allocation
            .as_ref()
            .map_or("", |a| a.hostname.as_str());

        eq(&self.partition, machine.partition_id())
            && eq(&self.project, machine.project())
            && eq(&self.size, machine.size_id())
            && eq(&self.rack, &machine.rack)
            && eq(&self.hostname, hostname)
    }
}

impl Filter<Network> for NetworkFilter {
    fn matches(&self, network: &Network) -> bool {
        eq_opt(&self.partition, &network.partition)
            && eq_opt(&self.project, &network.project)
            && eq_opt(&self.name, &network.name)
    }
}

impl Filter<Project> for ProjectFilter {
    fn matches(&self, project: &Project) -> bool {
        eq(&self.tenant, &project.tenant) && eq(&self.name, &project.name)
    }
}

impl Filter<Switch> for SwitchFilter {
    fn matches(&self, switch: &Switch) -> bool {
        eq(&self.partition, &switch.partition) && eq_opt(&self.rack, &switch.rack)
    }
}

impl Filter<SwitchWithMachines> for SwitchFilter {
    fn matches(&self, switch: &SwitchWithMachines) -> bool {
        eq(&self.partition, &switch.partition) && eq(&self.rack, &switch.rack)
    }
}

impl Filter<TaskInfo> for TaskFilter {
    fn matches(&self, task: &TaskInfo) -> bool {
        eq(&self.queue, &task.queue)
    }
}

impl Filter<VpnNode> for VpnFilter {
    fn matches(&self, node: &VpnNode) -> bool {
        eq(&self.project, &node.project)
    }
}
