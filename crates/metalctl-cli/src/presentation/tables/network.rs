use super::{RenderContext, Renderable, TableData};
use metalctl_engine::status::{NBR, network_usage, usage_symbol};
use metalctl_engine::{flatten, max_line_count, pad_multiline};
use metalctl_types::Network;

/// Row cells after the id, before padding the id for multi-line cells.
fn cells(network: &Network, ctx: &RenderContext) -> Vec<String> {
    let description = network.description.clone().unwrap_or_default();
    let name = network.name.clone().unwrap_or_default();
    let project = network.project.clone().unwrap_or_default();
    let partition = network.partition.clone().unwrap_or_default();
    let nat = network
        .nat_type
        .map(|n| n.as_str().to_string())
        .unwrap_or_default();
    let prefixes = network.prefixes.join(",");
    let network_type = network.network_type.to_string();

    if ctx.wide {
        return vec![
            description,
            name,
            network_type,
            project,
            partition,
            nat,
            prefixes,
            network.meta.label_pairs().join("\n"),
        ];
    }

    let (prefix_usage, ip_usage) = match network_usage(network) {
        Some(usage) => (
            ctx.palette.level(usage_symbol(usage.prefixes), usage.prefixes),
            ctx.palette.level(usage_symbol(usage.ips), usage.ips),
        ),
        None => (NBR.to_string(), NBR.to_string()),
    };

    vec![
        name,
        network_type,
        project,
        partition,
        nat,
        prefixes,
        prefix_usage,
        ip_usage,
    ]
}

impl Renderable for Network {
    fn header(wide: bool) -> Vec<&'static str> {
        if wide {
            vec![
                "ID",
                "Description",
                "Name",
                "Type",
                "Project",
                "Partition",
                "Nat",
                "Prefixes",
                "Annotations",
            ]
        } else {
            vec![
                "ID",
                "Name",
                "Type",
                "Project",
                "Partition",
                "Nat",
                "Prefixes",
                "Prefix Usage",
                "IP Usage",
            ]
        }
    }

    /// A single network without its tree context.
    fn rows(&self, ctx: &RenderContext) -> Vec<Vec<String>> {
        let cells = cells(self, ctx);
        let mut row = vec![pad_multiline(&self.id, max_line_count(&cells))];
        row.extend(cells);
        vec![row]
    }

    /// Children are listed below their parent network, orphans become roots.
    fn table(items: &[Self], ctx: &RenderContext) -> TableData {
        let rows = flatten(items)
            .into_iter()
            .map(|flat| {
                let cells = cells(flat.item, ctx);
                let mut row = vec![pad_multiline(&flat.label(), max_line_count(&cells))];
                row.extend(cells);
                row
            })
            .collect();

        TableData {
            header: Self::header(ctx.wide).into_iter().map(String::from).collect(),
            rows,
            auto_wrap: Self::AUTO_WRAP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{render_plain, test_now};
    use super::*;

    fn networks() -> Vec<Network> {
        serde_json::from_value(serde_json::json!([
            {
                "id": "tenant-super-fra",
                "name": "tenant super",
                "type": "super-namespaced",
                "partition": "fra-equ01",
                "prefixes": ["10.0.0.0/16"],
                "consumption": {
                    "ipv4": {"availableIps": 100, "usedIps": 95, "availablePrefixes": 10, "usedPrefixes": 1}
                }
            },
            {
                "id": "n-1",
                "name": "shoot",
                "type": "child",
                "parentNetwork": "tenant-super-fra",
                "project": "p-1",
                "natType": "ipv4-masquerade",
                "prefixes": ["10.0.1.0/22"],
                "consumption": {
                    "ipv4": {"availableIps": 100, "usedIps": 75, "availablePrefixes": 0, "usedPrefixes": 0}
                }
            },
            {
                "id": "internet",
                "type": "external",
                "prefixes": ["203.0.113.0/24", "198.51.100.0/24"]
            },
            {
                "id": "n-2",
                "name": "lost",
                "type": "child",
                "parentNetwork": "gone"
            },
            {
                "id": "n-3",
                "type": "child",
                "parentNetwork": "tenant-super-fra"
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_children_are_indented_below_parent() {
        let ctx = RenderContext::new(test_now());
        insta::assert_snapshot!(render_plain(&networks(), &ctx), @r"
        |ID|Name|Type|Project|Partition|Nat|Prefixes|Prefix Usage|IP Usage|
        |tenant-super-fra|tenant super|super-namespaced||fra-equ01||10.0.0.0/16|●|◕|
        |├─╴n-1|shoot|child|p-1||ipv4-masquerade|10.0.1.0/22|●|◒|
        |└─╴n-3||child|||||␣|␣|
        |internet||external||||203.0.113.0/24,198.51.100.0/24|␣|␣|
        |n-2|lost|child|||||␣|␣|
        ");
    }

    #[test]
    fn test_wide_pads_id_for_multiline_annotations() {
        let mut networks = networks();
        networks[1].meta.labels = [
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ]
        .into_iter()
        .collect();

        let ctx = RenderContext::new(test_now()).wide(true);
        let table = Network::table(&networks, &ctx);
        assert_eq!(table.rows[1][0], "├─╴n-1\n│");
        assert_eq!(table.rows[1][8], "a=1\nb=2");
        assert_eq!(table.rows.len(), networks.len());
    }
}
