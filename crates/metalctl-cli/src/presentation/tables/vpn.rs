use super::{RenderContext, Renderable};
use crate::presentation::formatters::time;
use metalctl_types::VpnNode;

impl Renderable for VpnNode {
    fn header(_wide: bool) -> Vec<&'static str> {
        vec!["ID", "Name", "Project", "IPs", "Last Seen"]
    }

    fn rows(&self, _ctx: &RenderContext) -> Vec<Vec<String>> {
        vec![vec![
            self.id.clone(),
            self.name.clone(),
            self.project.clone(),
            self.ip_addresses.join(","),
            self.last_seen.map(time::date_time).unwrap_or_default(),
        ]]
    }
}

#[cfg(test)]
mod tests {
    use super::super::{render_plain, test_now};
    use super::*;

    #[test]
    fn test_vpn_rows() {
        let nodes = [
            VpnNode {
                id: "3".to_string(),
                name: "fw-1".to_string(),
                project: "p-1".to_string(),
                ip_addresses: vec!["100.64.0.3".to_string(), "fd7a:115c:a1e0::3".to_string()],
                last_seen: Some(test_now()),
            },
            VpnNode {
                id: "4".to_string(),
                name: "m-2".to_string(),
                project: "p-1".to_string(),
                ..Default::default()
            },
        ];

        insta::assert_snapshot!(render_plain(&nodes, &RenderContext::new(test_now())), @r"
        |ID|Name|Project|IPs|Last Seen|
        |3|fw-1|p-1|100.64.0.3,fd7a:115c:a1e0::3|2024-06-15 12:00:00 UTC|
        |4|m-2|p-1|||
        ");
    }
}
