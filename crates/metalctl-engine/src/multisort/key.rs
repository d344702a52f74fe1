use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A named comparator reference plus direction, written as `id[:asc|:desc]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SortKey {
    pub id: String,
    pub descending: bool,
}

impl SortKey {
    pub fn asc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            descending: false,
        }
    }

    pub fn desc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            descending: true,
        }
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        let malformed = |reason: &str| Error::MalformedSortKey {
            token: s.to_string(),
            reason: reason.to_string(),
        };

        let (id, descending) = match token.split_once(':') {
            None => (token, false),
            Some((id, direction)) => match direction.to_ascii_lowercase().as_str() {
                "asc" => (id, false),
                "desc" => (id, true),
                "" => return Err(malformed("missing direction after ':'")),
                _ => return Err(malformed("direction must be 'asc' or 'desc'")),
            },
        };

        let id = id.trim();
        if id.is_empty() {
            return Err(malformed("empty key"));
        }

        Ok(SortKey {
            id: id.to_string(),
            descending,
        })
    }
}

impl TryFrom<String> for SortKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "{}:desc", self.id)
        } else {
            f.write_str(&self.id)
        }
    }
}

/// Parses `--sort-by` values. Each value may hold several comma separated keys.
pub fn parse_sort_keys<I, S>(values: I) -> Result<Vec<SortKey>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut keys = Vec::new();
    for value in values {
        for token in value.as_ref().split(',') {
            keys.push(token.parse()?);
        }
    }
    Ok(keys)
}
