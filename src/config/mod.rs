//! Configuration for attaching a hash filter.
//!
//! - [`FilterConfig`] - Algorithm name and stream direction
//! - [`Direction`] - Which side of a stream the filter hashes
//!
//! # Example
//!
//! ```
//! use hashfilter::{Direction, FilterConfig};
//!
//! let config = FilterConfig::new("sha256").with_direction(Direction::Read);
//! assert_eq!(config.algorithm(), "sha256");
//! config.validate()?;
//! # Ok::<(), hashfilter::FilterError>(())
//! ```

use crate::error::FilterError;
use crate::hash::Algorithm;

/// The side of a stream a filter is attached to.
///
/// Defaults to [`Direction::Write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Hash bytes as they are read out of the stream.
    Read,
    /// Hash bytes as they are written into the stream.
    #[default]
    Write,
}

/// Configuration supplied when a filter is created.
///
/// The algorithm is kept as a name; whether it is supported is decided by the
/// hash backends when the filter is created (or by [`FilterConfig::validate`]).
/// There is no default algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterConfig {
    algorithm: String,
    #[cfg_attr(feature = "serde", serde(default))]
    direction: Direction,
}

impl FilterConfig {
    /// Creates a configuration for the named algorithm, writing side.
    ///
    /// # Example
    ///
    /// ```
    /// use hashfilter::{Direction, FilterConfig};
    ///
    /// let config = FilterConfig::new("blake3");
    /// assert_eq!(config.direction(), Direction::Write);
    /// ```
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            direction: Direction::default(),
        }
    }

    /// Sets the direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Returns the algorithm name as configured.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Returns the direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Validates the configuration and resolves the algorithm.
    ///
    /// # Errors
    ///
    /// - [`FilterError::InvalidConfig`] if the algorithm name is empty
    /// - [`FilterError::UnknownAlgorithm`] if no enabled backend provides it
    ///
    /// # Example
    ///
    /// ```
    /// use hashfilter::{Algorithm, FilterConfig};
    ///
    /// assert_eq!(FilterConfig::new("sha256").validate()?, Algorithm::Sha256);
    /// assert!(FilterConfig::new("").validate().is_err());
    /// # Ok::<(), hashfilter::FilterError>(())
    /// ```
    pub fn validate(&self) -> Result<Algorithm, FilterError> {
        if self.algorithm.trim().is_empty() {
            return Err(FilterError::InvalidConfig {
                message: "algorithm name must be non-empty",
            });
        }
        self.algorithm.parse()
    }
}
