use metalctl_types::Ip;
use std::net::IpAddr;

use super::Sortable;
use crate::multisort::{FieldMap, compare};

/// Unparseable addresses sort before every valid one, IPv4 before IPv6.
fn addr(ip: &Ip) -> Option<IpAddr> {
    ip.ip.parse().ok()
}

impl Sortable for Ip {
    fn fields() -> FieldMap<Self> {
        FieldMap::<Self>::new()
            .register("ip", |a, b, d| compare(&addr(a), &addr(b), d))
            .register("name", |a, b, d| compare(&a.name, &b.name, d))
            .register("project", |a, b, d| compare(&a.project, &b.project, d))
            .register("type", |a, b, d| compare(&a.ip_type, &b.ip_type, d))
            .register("network", |a, b, d| compare(&a.network, &b.network, d))
            .register("uuid", |a, b, d| compare(&a.uuid, &b.uuid, d))
    }
}
