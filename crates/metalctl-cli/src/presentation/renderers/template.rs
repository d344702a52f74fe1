use anyhow::{Context, Result};
use handlebars::{Handlebars, no_escape};
use serde::Serialize;

const NAME: &str = "entity";

/// Renders every entity through a handlebars template, one per line.
///
/// Fields are addressed by their API (camelCase) names, e.g.
/// `{{uuid}} {{allocation.hostname}}`.
pub fn render<T: Serialize>(template: &str, items: &[T]) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(no_escape);
    handlebars
        .register_template_string(NAME, template)
        .context("invalid template")?;

    let mut out = String::new();
    for item in items {
        let line = handlebars
            .render(NAME, item)
            .context("failed to render template")?;
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}
