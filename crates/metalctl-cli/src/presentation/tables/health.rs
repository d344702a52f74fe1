use super::{RenderContext, Renderable};
use metalctl_engine::TreePrefix;
use metalctl_engine::status::service_status;
use metalctl_types::{Health, ServiceStatus};

const OPERATIONAL: &str = "All systems operational";

fn icon(status: ServiceStatus, ctx: &RenderContext) -> String {
    let (symbol, level) = service_status(status);
    ctx.palette.level(symbol, level)
}

fn message_or_default(message: &str) -> String {
    if message.is_empty() {
        OPERATIONAL.to_string()
    } else {
        message.to_string()
    }
}

impl Renderable for Health {
    fn header(_wide: bool) -> Vec<&'static str> {
        vec!["", "Name", "Message"]
    }

    fn rows(&self, ctx: &RenderContext) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        for service in &self.services {
            rows.push(vec![
                icon(service.status, ctx),
                service.name.clone(),
                message_or_default(&service.message),
            ]);

            // partitions are keyed by id, iteration order is already sorted
            let count = service.partitions.len();
            for (i, (id, partition)) in service.partitions.iter().enumerate() {
                rows.push(vec![
                    icon(partition.status, ctx),
                    format!("{}{}", TreePrefix::for_child(i, count).as_str(), id),
                    message_or_default(&partition.message),
                ]);
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::super::{render_plain, test_now};
    use super::*;
    use metalctl_types::{PartitionHealth, ServiceHealth};

    #[test]
    fn test_partitions_are_grouped_below_their_service() {
        let partition = |status, message: &str| PartitionHealth {
            status,
            message: message.to_string(),
        };
        let health = Health {
            services: vec![
                ServiceHealth {
                    name: "machines".to_string(),
                    status: ServiceStatus::Degraded,
                    message: "one partition is degraded".to_string(),
                    partitions: [
                        ("fra-2".to_string(), partition(ServiceStatus::Degraded, "bmc unreachable")),
                        ("fra-1".to_string(), partition(ServiceStatus::Healthy, "")),
                    ]
                    .into_iter()
                    .collect(),
                },
                ServiceHealth {
                    name: "ipam".to_string(),
                    status: ServiceStatus::Healthy,
                    ..Default::default()
                },
            ],
        };

        insta::assert_snapshot!(render_plain(&[health], &RenderContext::new(test_now())), @r"
        ||Name|Message|
        |✗|machines|one partition is degraded|
        |✔|├─╴fra-1|All systems operational|
        |✗|└─╴fra-2|bmc unreachable|
        |✔|ipam|All systems operational|
        ");
    }
}
