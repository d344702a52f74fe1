/// Result type for metalctl-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving sort specifications.
///
/// Both variants are caller mistakes and are reported before any entity is
/// reordered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown sort key {key:?}, available keys: {}", .available.join(", "))]
    UnknownSortKey { key: String, available: Vec<String> },

    #[error("malformed sort key {token:?}: {reason}")]
    MalformedSortKey { token: String, reason: String },
}

impl Error {
    /// Whether the error stems from command line usage rather than data.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::UnknownSortKey { .. } | Error::MalformedSortKey { .. }
        )
    }
}
