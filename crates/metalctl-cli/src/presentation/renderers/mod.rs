mod markdown;
mod structured;
mod table;
mod template;

use crate::args::OutputFormat;
use crate::presentation::formatters::Palette;
use crate::presentation::tables::{RenderContext, Renderable};
use anyhow::{Result, bail};
use serde::Serialize;

/// Turns entities into text in one of the `--output-format`s.
#[derive(Debug, Clone)]
pub struct Printer {
    format: OutputFormat,
    template: Option<String>,
    no_headers: bool,
    render: RenderContext,
}

impl Printer {
    pub fn new(format: OutputFormat, render: RenderContext) -> Self {
        let mut render = render.wide(format == OutputFormat::Wide);
        if format == OutputFormat::Markdown {
            render.palette = Palette::plain();
        }
        Self {
            format,
            template: None,
            no_headers: false,
            render,
        }
    }

    pub fn with_template(mut self, template: Option<String>) -> Self {
        self.template = template;
        self
    }

    pub fn with_no_headers(mut self, no_headers: bool) -> Self {
        self.no_headers = no_headers;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Renders a list in the given order.
    pub fn render_list<T: Renderable + Serialize>(&self, items: &[T]) -> Result<String> {
        match self.format {
            OutputFormat::Table | OutputFormat::Wide => {
                Ok(table::render(&T::table(items, &self.render), self.no_headers))
            }
            OutputFormat::Markdown => Ok(markdown::render(&T::table(items, &self.render))),
            OutputFormat::Json => structured::json(items),
            OutputFormat::Yaml => structured::yaml(items),
            OutputFormat::Template => {
                let Some(tpl) = &self.template else {
                    bail!("--template is required for output format template");
                };
                template::render(tpl, items)
            }
        }
    }

    /// Renders a single entity; structured formats print the object itself
    /// instead of a one element list.
    pub fn render_one<T: Renderable + Serialize>(&self, item: &T) -> Result<String> {
        match self.format {
            OutputFormat::Json => structured::json(item),
            OutputFormat::Yaml => structured::yaml(item),
            _ => self.render_list(std::slice::from_ref(item)),
        }
    }

    pub fn print_list<T: Renderable + Serialize>(&self, items: &[T]) -> Result<()> {
        print!("{}", self.render_list(items)?);
        Ok(())
    }

    pub fn print_one<T: Renderable + Serialize>(&self, item: &T) -> Result<()> {
        print!("{}", self.render_one(item)?);
        Ok(())
    }
}
