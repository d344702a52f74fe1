use super::{RenderContext, Renderable};
use metalctl_types::Ip;

/// Label set by the cloud controller on IPs bound to a Kubernetes service.
const SERVICE_LABEL: &str = "cluster.metal-stack.io/id/namespace/service";

impl Renderable for Ip {
    const AUTO_WRAP: bool = false;

    fn header(wide: bool) -> Vec<&'static str> {
        if wide {
            vec!["IP", "Project", "ID", "Type", "Name", "Description", "Labels"]
        } else {
            vec!["IP", "Project", "ID", "Type", "Name", "Attached Service"]
        }
    }

    fn rows(&self, ctx: &RenderContext) -> Vec<Vec<String>> {
        let mut row = vec![
            self.ip.clone(),
            self.project.clone(),
            self.uuid.clone(),
            self.ip_type.to_string(),
            self.name.clone(),
        ];

        if ctx.wide {
            row.push(self.description.clone());
            row.push(self.meta.label_pairs().join("\n"));
        } else {
            let service = self.meta.labels.get(SERVICE_LABEL).cloned();
            row.push(service.unwrap_or_default());
        }
        vec![row]
    }
}

#[cfg(test)]
mod tests {
    use super::super::{render_plain, test_now};
    use super::*;
    use metalctl_types::{IpType, Meta};

    fn ip() -> Ip {
        Ip {
            uuid: "0a1b".to_string(),
            ip: "203.0.113.7".to_string(),
            name: "ingress".to_string(),
            description: "shoot ingress".to_string(),
            project: "p-1".to_string(),
            network: "internet".to_string(),
            ip_type: IpType::Static,
            meta: Meta {
                labels: [
                    (SERVICE_LABEL.to_string(), "c1/default/nginx".to_string()),
                    ("team".to_string(), "infra".to_string()),
                ]
                .into_iter()
                .collect(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_short_and_wide() {
        let ctx = RenderContext::new(test_now());
        insta::assert_snapshot!(render_plain(&[ip()], &ctx), @r"
        |IP|Project|ID|Type|Name|Attached Service|
        |203.0.113.7|p-1|0a1b|static|ingress|c1/default/nginx|
        ");

        insta::assert_snapshot!(render_plain(&[ip()], &ctx.wide(true)), @r"
        |IP|Project|ID|Type|Name|Description|Labels|
        |203.0.113.7|p-1|0a1b|static|ingress|shoot ingress|cluster.metal-stack.io/id/namespace/service=c1/default/nginx\nteam=infra|
        ");
    }
}
