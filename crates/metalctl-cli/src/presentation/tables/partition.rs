use super::{RenderContext, Renderable, TableData};
use metalctl_types::{MachineSizeCapacity, Partition, PartitionCapacity};

/// Column separator cell; the markdown printer drops these columns.
pub const DIVIDER: &str = "|";

impl Renderable for Partition {
    fn header(wide: bool) -> Vec<&'static str> {
        if wide {
            vec!["ID", "Description", "Labels"]
        } else {
            vec!["ID", "Description"]
        }
    }

    fn rows(&self, ctx: &RenderContext) -> Vec<Vec<String>> {
        let mut row = vec![self.id.clone(), self.description.clone()];
        if ctx.wide {
            row.push(self.meta.label_pairs().join("\n"));
        }
        vec![row]
    }
}

fn reservations(c: &MachineSizeCapacity) -> String {
    if c.reservations > 0 {
        format!(
            "{} ({}/{} used)",
            c.reservations - c.used_reservations,
            c.used_reservations,
            c.reservations
        )
    } else {
        "0".to_string()
    }
}

fn capacity_row(
    partition: &str,
    size: &str,
    c: &MachineSizeCapacity,
    reservations: String,
    wide: bool,
) -> Vec<String> {
    let mut row = vec![
        partition.to_string(),
        size.to_string(),
        c.allocated.to_string(),
        c.free.to_string(),
        c.unavailable.to_string(),
        reservations,
        DIVIDER.to_string(),
        c.total.to_string(),
        DIVIDER.to_string(),
        c.faulty.to_string(),
    ];
    if wide {
        row.extend([
            c.phoned_home.to_string(),
            c.waiting.to_string(),
            c.other.to_string(),
        ]);
    }
    row
}

impl Renderable for PartitionCapacity {
    fn header(wide: bool) -> Vec<&'static str> {
        let mut header = vec![
            "Partition",
            "Size",
            "Allocated",
            "Free",
            "Unavailable",
            "Reservations",
            DIVIDER,
            "Total",
            DIVIDER,
            "Faulty",
        ];
        if wide {
            header.extend(["Phoned Home", "Waiting", "Other"]);
        }
        header
    }

    fn rows(&self, ctx: &RenderContext) -> Vec<Vec<String>> {
        self.machine_size_capacities
            .iter()
            .map(|c| capacity_row(&self.partition, &c.size, c, reservations(c), ctx.wide))
            .collect()
    }

    /// Appends a `Total` row summing every size of every partition.
    fn table(items: &[Self], ctx: &RenderContext) -> TableData {
        let mut rows: Vec<Vec<String>> = items.iter().flat_map(|pc| pc.rows(ctx)).collect();

        let sum = items
            .iter()
            .flat_map(|pc| &pc.machine_size_capacities)
            .fold(MachineSizeCapacity::default(), |mut acc, c| {
                acc.total += c.total;
                acc.free += c.free;
                acc.allocated += c.allocated;
                acc.reservations += c.reservations;
                acc.used_reservations += c.used_reservations;
                acc.faulty += c.faulty;
                acc.unavailable += c.unavailable;
                acc.phoned_home += c.phoned_home;
                acc.waiting += c.waiting;
                acc.other += c.other;
                acc
            });
        let open_reservations = (sum.reservations - sum.used_reservations).to_string();
        rows.push(capacity_row("Total", "", &sum, open_reservations, ctx.wide));

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
    use metalctl_types::Meta;

    fn capacities() -> Vec<PartitionCapacity> {
        serde_json::from_value(serde_json::json!([
            {
                "partition": "fra-equ01",
                "machineSizeCapacities": [
                    {"size": "c1-large-x86", "total": 10, "free": 3, "allocated": 5, "faulty": 1, "unavailable": 1,
                     "reservations": 4, "usedReservations": 1},
                    {"size": "n1-medium-x86", "total": 4, "free": 4}
                ]
            },
            {
                "partition": "fra-equ02",
                "machineSizeCapacities": [
                    {"size": "c1-large-x86", "total": 2, "allocated": 2, "phonedHome": 2}
                ]
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_capacity_with_total_row() {
        insta::assert_snapshot!(render_plain(&capacities(), &RenderContext::new(test_now())), @r"
        |Partition|Size|Allocated|Free|Unavailable|Reservations|||Total|||Faulty|
        |fra-equ01|c1-large-x86|5|3|1|3 (1/4 used)|||10|||1|
        |fra-equ01|n1-medium-x86|0|4|0|0|||4|||0|
        |fra-equ02|c1-large-x86|2|0|0|0|||2|||0|
        |Total||7|7|1|3|||16|||1|
        ");
    }

    #[test]
    fn test_wide_capacity_adds_machine_states() {
        let ctx = RenderContext::new(test_now()).wide(true);
        let table = PartitionCapacity::table(&capacities(), &ctx);
        assert_eq!(table.header.len(), 13);
        assert_eq!(table.rows[2][10..], ["2", "0", "0"]);
        assert_eq!(table.rows[3][10..], ["2", "0", "0"]);
    }

    #[test]
    fn test_empty_capacity_still_has_total() {
        let table = PartitionCapacity::table(&[], &RenderContext::new(test_now()));
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][0], "Total");
    }

    #[test]
    fn test_partition_labels_in_wide() {
        let partition = Partition {
            id: "fra-equ01".to_string(),
            description: "Frankfurt".to_string(),
            meta: Meta {
                labels: [
                    ("zone".to_string(), "a".to_string()),
                    ("region".to_string(), "eu".to_string()),
                ]
                .into_iter()
                .collect(),
                ..Default::default()
            },
        };

        let ctx = RenderContext::new(test_now()).wide(true);
        insta::assert_snapshot!(render_plain(&[partition], &ctx), @r"
        |ID|Description|Labels|
        |fra-equ01|Frankfurt|region=eu\nzone=a|
        ");
    }
}
