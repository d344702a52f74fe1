use super::{RenderContext, Renderable};
use metalctl_types::Contexts;

impl Renderable for Contexts {
    fn header(_wide: bool) -> Vec<&'static str> {
        vec!["", "Name", "Default Project"]
    }

    fn rows(&self, ctx: &RenderContext) -> Vec<Vec<String>> {
        self.contexts
            .iter()
            .map(|c| {
                let active = if self.is_current(&c.name) {
                    ctx.palette.green("✔")
                } else {
                    String::new()
                };
                vec![
                    active,
                    c.name.clone(),
                    c.default_project.clone().unwrap_or_default(),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::{render_plain, test_now};
    use super::*;
    use metalctl_types::Context;

    #[test]
    fn test_active_context_is_marked() {
        let contexts = Contexts {
            current_context: Some("prod".to_string()),
            contexts: vec![
                Context {
                    name: "dev".to_string(),
                    ..Default::default()
                },
                Context {
                    name: "prod".to_string(),
                    default_project: Some("p-1".to_string()),
                    ..Default::default()
                },
            ],
        };

        insta::assert_snapshot!(render_plain(&[contexts], &RenderContext::new(test_now())), @r"
        ||Name|Default Project|
        ||dev||
        |✔|prod|p-1|
        ");
    }
}
