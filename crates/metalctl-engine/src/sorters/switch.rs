use metalctl_types::{Switch, SwitchOsVendor};

use super::Sortable;
use crate::multisort::{FieldMap, compare};

fn vendor(s: &Switch) -> SwitchOsVendor {
    s.os.as_ref().map(|os| os.vendor).unwrap_or_default()
}

fn metal_core_version(s: &Switch) -> &str {
    s.os.as_ref().map_or("", |os| os.metal_core_version.as_str())
}

impl Sortable for Switch {
    fn fields() -> FieldMap<Self> {
        FieldMap::<Self>::new()
            .register("id", |a, b, d| compare(&a.id, &b.id, d))
            .register("description", |a, b, d| {
                compare(&a.description, &b.description, d)
            })
            .register("partition", |a, b, d| compare(&a.partition, &b.partition, d))
            .register("rack", |a, b, d| {
                compare(
                    a.rack.as_deref().unwrap_or_default(),
                    b.rack.as_deref().unwrap_or_default(),
                    d,
                )
            })
            .register("os", |a, b, d| compare(&vendor(a), &vendor(b), d))
            .register("metal-core-version", |a, b, d| {
                compare(metal_core_version(a), metal_core_version(b), d)
            })
            .register("management-ip", |a, b, d| {
                compare(&a.management_ip, &b.management_ip, d)
            })
    }
}
