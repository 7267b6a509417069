//! Write-once result slot.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::DigestBytes;
use crate::error::FilterError;

/// A shared slot that receives the digest when a filter closes.
///
/// The caller creates the slot, hands a clone to the filter at attachment
/// time, and inspects it after the stream is closed. The slot is empty
/// until then and can be written exactly once; it is never overwritten.
///
/// # Example
///
/// ```
/// use hashfilter::{FilterConfig, FilterResult, HashFilter};
///
/// let result = FilterResult::new();
/// let mut filter = HashFilter::create(&FilterConfig::new("sha256"), result.clone())?;
/// assert!(result.digest().is_none());
///
/// filter.close()?;
/// assert!(result.digest().is_some());
/// # Ok::<(), hashfilter::FilterError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterResult {
    slot: Arc<OnceCell<DigestBytes>>,
}

impl FilterResult {
    /// Creates an empty result slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the digest, or `None` if the filter has not been closed.
    pub fn digest(&self) -> Option<DigestBytes> {
        self.slot.get().cloned()
    }

    /// Returns true once a digest has been published.
    pub fn is_set(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Publishes the digest. Fails if the slot already holds one.
    pub(crate) fn set(&self, digest: DigestBytes) -> Result<(), FilterError> {
        self.slot
            .set(digest)
            .map_err(|_| FilterError::AlreadyFinalized)
    }
}
