//! Error types for hashfilter.

use std::fmt;

/// Errors that can occur while creating, driving, or attaching a hash filter.
#[derive(Debug)]
pub enum FilterError {
    /// The requested algorithm is not supported by any enabled hash backend.
    UnknownAlgorithm {
        /// The name that failed to resolve.
        name: String,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The filter (or its result slot) was already finalized.
    AlreadyFinalized,

    /// No filter is registered under the requested name.
    UnknownFilter {
        /// The name that was looked up.
        name: String,
    },

    /// An I/O error occurred in the stream the filter is attached to.
    Io(std::io::Error),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::UnknownAlgorithm { name } => {
                write!(f, "unknown hash algorithm: {:?}", name)
            }
            FilterError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            FilterError::AlreadyFinalized => write!(f, "hash context already finalized"),
            FilterError::UnknownFilter { name } => {
                write!(f, "no filter registered as {:?}", name)
            }
            FilterError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FilterError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FilterError {
    fn from(e: std::io::Error) -> Self {
        FilterError::Io(e)
    }
}
