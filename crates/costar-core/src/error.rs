//! Error types for Costar Core

use thiserror::Error;

/// Result type alias using Costar's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Costar error types
///
/// Only loading can fail. Unknown names, dangling star links and
/// unconnected people are ordinary outcomes, not errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to open {resource}: {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed data in {resource}: {source}")]
    Csv {
        resource: String,
        #[source]
        source: csv::Error,
    },
}

impl Error {
    pub(crate) fn io(resource: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            resource: resource.into(),
            source,
        }
    }

    pub(crate) fn csv(resource: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            resource: resource.into(),
            source,
        }
    }

    /// Name of the data resource the error came from
    pub fn resource(&self) -> &str {
        match self {
            Self::Io { resource, .. } | Self::Csv { resource, .. } => resource,
        }
    }
}
