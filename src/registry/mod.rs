//! Process-wide filter registry.
//!
//! Pipelines instantiate filters by name. The registry maps a name to a
//! [`FilterFactory`]; registration is idempotent and the global instance is
//! initialized once on first use, so concurrent pipeline setups may register
//! and look up filters freely.
//!
//! # Example
//!
//! ```
//! use hashfilter::{FILTER_NAME, FilterConfig, FilterRegistry, FilterResult, register_filter};
//!
//! register_filter();
//! let result = FilterResult::new();
//! let mut filter = FilterRegistry::global().create(
//!     FILTER_NAME,
//!     &FilterConfig::new("sha256"),
//!     result.clone(),
//! )?;
//! filter.close()?;
//! assert!(result.is_set());
//! # Ok::<(), hashfilter::FilterError>(())
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::filter::HashFilter;
use crate::output::FilterResult;

/// Name the hash filter is registered under.
pub const FILTER_NAME: &str = "hashfilter";

/// Builds a filter for one stream attachment.
pub type FilterFactory = fn(&FilterConfig, FilterResult) -> Result<HashFilter, FilterError>;

static GLOBAL: Lazy<FilterRegistry> = Lazy::new(FilterRegistry::new);

/// Name to factory table.
#[derive(Debug, Default)]
pub struct FilterRegistry {
    filters: RwLock<HashMap<String, FilterFactory>>,
}

impl FilterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide registry.
    pub fn global() -> &'static FilterRegistry {
        &GLOBAL
    }

    /// Registers a factory under `name`.
    ///
    /// Returns `true` if the name was new. Re-registering an existing name
    /// keeps the first factory and returns `false`.
    pub fn register(&self, name: &str, factory: FilterFactory) -> bool {
        let mut filters = self.filters.write().unwrap_or_else(PoisonError::into_inner);
        if filters.contains_key(name) {
            return false;
        }
        filters.insert(name.to_string(), factory);
        debug!(name, "filter registered");
        true
    }

    /// Looks up the factory registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<FilterFactory> {
        self.filters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .copied()
    }

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self
            .filters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Creates a filter through the factory registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownFilter`] if nothing is registered under
    /// `name`, otherwise whatever the factory returns.
    pub fn create(
        &self,
        name: &str,
        config: &FilterConfig,
        result: FilterResult,
    ) -> Result<HashFilter, FilterError> {
        let factory = self.lookup(name).ok_or_else(|| FilterError::UnknownFilter {
            name: name.to_string(),
        })?;
        factory(config, result)
    }
}

/// Registers the hash filter under [`FILTER_NAME`] in the global registry.
///
/// Safe to call any number of times from any thread. Returns `true` only for
/// the call that actually registered it.
pub fn register_filter() -> bool {
    FilterRegistry::global().register(FILTER_NAME, HashFilter::create)
}
