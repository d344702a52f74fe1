//! Where entities come from.
//!
//! Every command works on already fetched API entities. [`FileSource`] reads
//! them from a JSON or YAML dump; a network client would implement
//! [`EntitySource`] the same way.

use is_terminal::IsTerminal;
use metalctl_types::{Entity, EntityKind};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {origin}: {source}")]
    Io {
        origin: String,
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        source: serde_json::Error,
    },

    #[error("invalid YAML in {origin}: {source}")]
    Yaml {
        origin: String,
        source: serde_yaml::Error,
    },

    #[error("no input: pass --file or pipe a JSON/YAML document to stdin")]
    NoInput,

    #[error("{kind} {id:?} not found")]
    NotFound { kind: EntityKind, id: String },
}

pub type Result<T> = std::result::Result<T, SourceError>;

pub trait EntitySource {
    /// All entities of the document; a single entity loads as a list of one.
    fn load<T: DeserializeOwned>(&self) -> Result<Vec<T>>;

    /// The first entity whose id equals `id`.
    fn find<T: DeserializeOwned + Entity>(&self, id: &str) -> Result<T> {
        self.load::<T>()?
            .into_iter()
            .find(|e| e.id() == id)
            .ok_or_else(|| SourceError::NotFound {
                kind: T::KIND,
                id: id.to_string(),
            })
    }
}

/// A document on disk, or stdin for `-`.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }

    fn origin(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            self.path.display().to_string()
        }
    }

    fn read(&self) -> Result<String> {
        let io_err = |source| SourceError::Io {
            origin: self.origin(),
            source,
        };

        if !self.is_stdin() {
            return std::fs::read_to_string(&self.path).map_err(io_err);
        }

        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(SourceError::NoInput);
        }
        let mut content = String::new();
        stdin.read_to_string(&mut content).map_err(io_err)?;
        Ok(content)
    }

    fn detect(&self, content: &str) -> Format {
        let json_extension = self
            .path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let trimmed = content.trim_start();
        if json_extension || trimmed.starts_with('[') || trimmed.starts_with('{') {
            Format::Json
        } else {
            Format::Yaml
        }
    }

    /// Parses a document that was already read.
    pub fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<Vec<T>> {
        match self.detect(content) {
            Format::Json => {
                let json_err = |source| SourceError::Json {
                    origin: self.origin(),
                    source,
                };
                let value: serde_json::Value = serde_json::from_str(content).map_err(json_err)?;
                if value.is_null() {
                    Ok(Vec::new())
                } else if value.is_array() {
                    serde_json::from_value(value).map_err(json_err)
                } else {
                    Ok(vec![serde_json::from_value(value).map_err(json_err)?])
                }
            }
            Format::Yaml => {
                let yaml_err = |source| SourceError::Yaml {
                    origin: self.origin(),
                    source,
                };
                let value: serde_yaml::Value = if content.trim().is_empty() {
                    serde_yaml::Value::Null
                } else {
                    serde_yaml::from_str(content).map_err(yaml_err)?
                };
                if value.is_null() {
                    Ok(Vec::new())
                } else if value.is_sequence() {
                    serde_yaml::from_value(value).map_err(yaml_err)
                } else {
                    Ok(vec![serde_yaml::from_value(value).map_err(yaml_err)?])
                }
            }
        }
    }
}

impl EntitySource for FileSource {
    fn load<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let content = self.read()?;
        let entities = self.parse(&content)?;
        tracing::debug!(origin = %self.origin(), count = entities.len(), "loaded entities");
        Ok(entities)
    }
}
