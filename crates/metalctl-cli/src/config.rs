use crate::args::OutputFormat;
use metalctl_engine::{SortDefaults, SortKey};
use metalctl_types::{Context, Contexts, EntityKind, UnknownEntityKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write config {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("could not determine config path: no HOME or config directory found")]
    NoConfigDir,

    #[error("invalid [sort.defaults] entry: {0}")]
    UnknownEntityKind(#[from] UnknownEntityKind),

    #[error("invalid default sort keys for {kind}: {source}")]
    InvalidSortDefaults {
        kind: EntityKind,
        source: metalctl_engine::Error,
    },

    #[error("context {0:?} not found in config")]
    UnknownContext(String),
}

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. METALCTL_CONFIG environment variable (with tilde expansion)
/// 3. User config directory (`~/.config/metal-stack/config.toml` on Linux)
/// 4. ~/.metal-stack/config.toml
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var("METALCTL_CONFIG")
        && !env_path.is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("metal-stack").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".metal-stack").join("config.toml"));
    }

    Err(ConfigError::NoConfigDir)
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    pub force_color: bool,
    pub no_headers: bool,
    #[serde(
        with = "metalctl_types::serde_duration",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_event_error_threshold: Option<Duration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Entity kind (`machine`, `tenant-member`, ...) to its default sort keys.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub defaults: BTreeMap<String, Vec<SortKey>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_context: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contexts: Vec<Context>,
    pub output: OutputConfig,
    pub sort: SortConfig,
}

impl Config {
    /// Loads the config, a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(write_err)?;
        Ok(())
    }

    pub fn contexts(&self) -> Contexts {
        Contexts {
            current_context: self.current_context.clone(),
            contexts: self.contexts.clone(),
        }
    }

    /// Makes `name` the active context.
    pub fn switch_context(&mut self, name: &str) -> Result<()> {
        if !self.contexts.iter().any(|c| c.name == name) {
            return Err(ConfigError::UnknownContext(name.to_string()));
        }
        self.current_context = Some(name.to_string());
        Ok(())
    }

    /// Built-in default sort keys with the `[sort.defaults]` overrides applied.
    pub fn sort_defaults(&self) -> Result<SortDefaults> {
        let mut defaults = SortDefaults::builtin();
        for (kind, keys) in &self.sort.defaults {
            let kind: EntityKind = kind.parse()?;
            defaults = defaults.with_override(kind, keys.clone());
        }
        Ok(defaults)
    }
}
