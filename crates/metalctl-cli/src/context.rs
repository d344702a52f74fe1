use crate::args::{Cli, OutputFormat};
use crate::config::{self, Config, ConfigError};
use crate::presentation::formatters::Palette;
use crate::presentation::tables::DEFAULT_LAST_EVENT_ERROR_THRESHOLD;
use crate::presentation::{Printer, RenderContext};
use anyhow::Result;
use chrono::{DateTime, Utc};
use is_terminal::IsTerminal;
use metalctl_engine::{SortDefaults, Sortable, Sorter, sorter_for};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Output flags given on the command line; unset ones fall back to the config.
#[derive(Debug, Clone, Default)]
pub struct OutputOverrides {
    pub format: Option<OutputFormat>,
    pub template: Option<String>,
    pub no_headers: bool,
    pub force_color: bool,
    pub last_event_error_threshold: Option<Duration>,
}

impl From<&Cli> for OutputOverrides {
    fn from(cli: &Cli) -> Self {
        Self {
            format: cli.output_format,
            template: cli.template.clone(),
            no_headers: cli.no_headers,
            force_color: cli.force_color,
            last_event_error_threshold: cli.last_event_error_threshold,
        }
    }
}

pub struct ExecutionContext {
    config_path: PathBuf,
    config: OnceCell<Config>,
    sort_defaults: OnceCell<SortDefaults>,
    output: OutputOverrides,
    /// Fixed once per invocation so every relative time in one output agrees.
    pub now: DateTime<Utc>,
}

impl ExecutionContext {
    pub fn new(config_path: PathBuf, output: OutputOverrides) -> Self {
        Self {
            config_path,
            config: OnceCell::new(),
            sort_defaults: OnceCell::new(),
            output,
            now: Utc::now(),
        }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_path = config::resolve_config_path(cli.config.as_deref())?;
        Ok(Self::new(config_path, OutputOverrides::from(cli)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> Result<&Config> {
        let config = self
            .config
            .get_or_try_init(|| Config::load_from(&self.config_path))?;
        Ok(config)
    }

    pub fn sort_defaults(&self) -> Result<&SortDefaults> {
        let defaults = self
            .sort_defaults
            .get_or_try_init(|| self.config()?.sort_defaults().map_err(anyhow::Error::from))?;
        Ok(defaults)
    }

    /// Sorter for `T` with the configured default keys.
    ///
    /// A broken `[sort.defaults]` entry is a config problem, not a usage error,
    /// so it is reported as [`ConfigError::InvalidSortDefaults`].
    pub fn sorter<T: Sortable>(&self) -> Result<Sorter<T>> {
        let sorter = sorter_for::<T>(self.sort_defaults()?).map_err(|source| {
            ConfigError::InvalidSortDefaults {
                kind: T::KIND,
                source,
            }
        })?;
        Ok(sorter)
    }

    pub fn last_event_error_threshold(&self) -> Result<Duration> {
        if let Some(threshold) = self.output.last_event_error_threshold {
            return Ok(threshold);
        }
        Ok(self
            .config()?
            .output
            .last_event_error_threshold
            .unwrap_or(DEFAULT_LAST_EVENT_ERROR_THRESHOLD))
    }

    pub fn render_context(&self) -> Result<RenderContext> {
        let config = self.config()?;
        let color = self.output.force_color
            || config.output.force_color
            || std::io::stdout().is_terminal();

        let mut render = RenderContext::new(self.now);
        render.last_event_error_threshold = self.last_event_error_threshold()?;
        render.palette = Palette::new(color);
        Ok(render)
    }

    /// Resolves the output format: flag, then config, then `table`. Describe
    /// commands print YAML unless a format was given on the command line.
    pub fn output_format(&self, describe: bool) -> Result<OutputFormat> {
        if let Some(format) = self.output.format {
            return Ok(format);
        }
        if describe {
            return Ok(OutputFormat::Yaml);
        }
        Ok(self.config()?.output.format.unwrap_or(OutputFormat::Table))
    }

    pub fn printer(&self, describe: bool) -> Result<Printer> {
        let format = self.output_format(describe)?;
        let no_headers = self.output.no_headers || self.config()?.output.no_headers;
        Ok(Printer::new(format, self.render_context()?)
            .with_template(self.output.template.clone())
            .with_no_headers(no_headers))
    }
}
