//! Core filter engine - HashFilter with create/process/close lifecycle.
//!
//! This module implements the pass-through hashing filter a pipeline drives:
//!
//! - [`HashFilter::create`] - Validate the config and initialize the hash state
//! - [`HashFilter::process`] - Feed a chunk in any size, get it back unchanged
//! - [`HashFilter::close`] - Finalize once and publish the digest
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use hashfilter::{Algorithm, FilterConfig, FilterResult, HashFilter};
//!
//! let result = FilterResult::new();
//! let mut filter = HashFilter::create(&FilterConfig::new("sha256"), result.clone())?;
//!
//! for part in ["a", "b", "c"] {
//!     let emitted = filter.process(Bytes::from(part))?;
//!     assert_eq!(emitted.as_bytes(), part.as_bytes());
//! }
//!
//! filter.close()?;
//! assert_eq!(result.digest(), Some(Algorithm::Sha256.digest(b"abc")));
//! # Ok::<(), hashfilter::FilterError>(())
//! ```

use bytes::Bytes;
use tracing::{debug, trace, warn};

use crate::config::{Direction, FilterConfig};
use crate::error::FilterError;
use crate::hash::{Algorithm, HashContext};
use crate::output::{DigestBytes, FilterResult};

/// What the pipeline should do with a processed chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Emit {
    /// Forward these bytes downstream. They are the input chunk, untouched.
    PassOn(Bytes),
}

impl Emit {
    /// Returns the bytes to forward.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Emit::PassOn(data) => data,
        }
    }

    /// Consumes the decision and returns the bytes to forward.
    pub fn into_bytes(self) -> Bytes {
        match self {
            Emit::PassOn(data) => data,
        }
    }
}

/// Lifecycle state of a [`HashFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    /// Accepting chunks.
    Active,
    /// Finalized; the digest has been published. Terminal.
    Closed,
}

/// A pass-through filter that hashes every byte it forwards.
///
/// `HashFilter` owns one [`HashContext`] and holds a handle to the
/// [`FilterResult`] supplied at creation. The pipeline feeds chunks through
/// [`process`](Self::process), which returns them unchanged, and signals end
/// of stream with [`close`](Self::close), which publishes the digest.
///
/// # Determinism
///
/// The digest depends only on the concatenated input, never on how it was
/// split into chunks.
///
/// # Abandonment
///
/// Dropping the filter without calling `close` releases the hash state and
/// leaves the result slot empty. This is not an error.
///
/// # Concurrency
///
/// A filter is driven by exactly one pipeline and does no locking; distinct
/// filters share nothing and may run on different threads.
#[derive(Debug)]
pub struct HashFilter {
    context: Option<HashContext>,
    algorithm: Algorithm,
    direction: Direction,
    consumed: u64,
    result: FilterResult,
}

impl HashFilter {
    /// Creates an active filter from a configuration.
    ///
    /// # Errors
    ///
    /// - [`FilterError::InvalidConfig`] if the algorithm name is empty
    /// - [`FilterError::UnknownAlgorithm`] if the algorithm is not supported
    ///
    /// On error nothing is allocated and `result` is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use hashfilter::{FilterConfig, FilterError, FilterResult, HashFilter};
    ///
    /// let result = FilterResult::new();
    /// let err = HashFilter::create(&FilterConfig::new("not-a-real-algo"), result.clone())
    ///     .unwrap_err();
    ///
    /// assert!(matches!(err, FilterError::UnknownAlgorithm { .. }));
    /// assert!(result.digest().is_none());
    /// ```
    pub fn create(config: &FilterConfig, result: FilterResult) -> Result<Self, FilterError> {
        let algorithm = config.validate()?;

        debug!(
            algorithm = %algorithm,
            direction = ?config.direction(),
            "hash filter created"
        );

        Ok(Self {
            context: Some(HashContext::new(algorithm)),
            algorithm,
            direction: config.direction(),
            consumed: 0,
            result,
        })
    }

    /// Hashes a chunk and hands it back for forwarding.
    ///
    /// The chunk may have any size, including zero. Its length is added to
    /// the consumed counter.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::AlreadyFinalized`] after [`close`](Self::close);
    /// nothing is hashed in that case.
    pub fn process(&mut self, chunk: Bytes) -> Result<Emit, FilterError> {
        self.absorb(&chunk)?;
        Ok(Emit::PassOn(chunk))
    }

    /// Feeds bytes the caller forwards itself.
    pub(crate) fn absorb(&mut self, data: &[u8]) -> Result<(), FilterError> {
        let context = self.context.as_mut().ok_or(FilterError::AlreadyFinalized)?;
        context.update(data);
        self.consumed += data.len() as u64;

        trace!(len = data.len(), consumed = self.consumed, "chunk hashed");
        Ok(())
    }

    /// Finalizes the hash and publishes the digest into the result slot.
    ///
    /// Closing a filter that never processed a chunk yields the digest of
    /// the empty input.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::AlreadyFinalized`] if the filter was already
    /// closed.
    ///
    /// If another filter already published into the shared result slot, the
    /// slot keeps its first digest and this filter's digest is only returned.
    pub fn close(&mut self) -> Result<DigestBytes, FilterError> {
        let Some(context) = self.context.take() else {
            warn!(algorithm = %self.algorithm, "hash filter closed twice");
            return Err(FilterError::AlreadyFinalized);
        };

        let digest = context.finalize();
        if self.result.set(digest.clone()).is_err() {
            warn!(
                algorithm = %self.algorithm,
                digest = %digest,
                "result slot already populated, digest not published"
            );
        }

        debug!(
            algorithm = %self.algorithm,
            consumed = self.consumed,
            digest = %digest,
            "hash filter closed"
        );
        Ok(digest)
    }

    /// Returns the number of bytes hashed so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Returns the algorithm in use.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the configured direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> FilterState {
        if self.context.is_some() {
            FilterState::Active
        } else {
            FilterState::Closed
        }
    }

    /// Returns the result slot this filter publishes into.
    pub fn result(&self) -> &FilterResult {
        &self.result
    }
}

impl Drop for HashFilter {
    fn drop(&mut self) {
        if self.context.is_some() {
            debug!(
                algorithm = %self.algorithm,
                consumed = self.consumed,
                "hash filter dropped before close, no digest produced"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sha256_filter() -> (HashFilter, FilterResult) {
        let result = FilterResult::new();
        let filter = HashFilter::create(&FilterConfig::new("sha256"), result.clone()).unwrap();
        (filter, result)
    }

    #[test]
    fn test_process_passes_chunk_through() {
        let (mut filter, _) = sha256_filter();
        let chunk = Bytes::from_static(b"unchanged");

        let emit = filter.process(chunk.clone()).unwrap();
        assert_eq!(emit, Emit::PassOn(chunk));
    }

    #[test]
    fn test_consumed_counts_bytes() {
        let (mut filter, _) = sha256_filter();
        filter.process(Bytes::from_static(b"12345")).unwrap();
        filter.process(Bytes::new()).unwrap();
        filter.process(Bytes::from_static(b"678")).unwrap();
        assert_eq!(filter.consumed(), 8);
    }

    #[test]
    fn test_state_transitions() {
        let (mut filter, result) = sha256_filter();
        assert_eq!(filter.state(), FilterState::Active);

        filter.close().unwrap();
        assert_eq!(filter.state(), FilterState::Closed);
        assert!(result.is_set());
    }

    #[test]
    fn test_process_after_close_rejected() {
        let (mut filter, result) = sha256_filter();
        filter.process(Bytes::from_static(b"abc")).unwrap();
        let digest = filter.close().unwrap();

        let err = filter.process(Bytes::from_static(b"late")).unwrap_err();
        assert!(matches!(err, FilterError::AlreadyFinalized));
        assert_eq!(filter.consumed(), 3);
        assert_eq!(result.digest(), Some(digest));
    }

    #[test]
    fn test_shared_result_not_overwritten() {
        let result = FilterResult::new();
        let config = FilterConfig::new("sha256");
        let mut first = HashFilter::create(&config, result.clone()).unwrap();
        let mut second = HashFilter::create(&config, result.clone()).unwrap();

        first.process(Bytes::from_static(b"first")).unwrap();
        let digest = first.close().unwrap();

        second.process(Bytes::from_static(b"second")).unwrap();
        let second_digest = second.close().unwrap();
        assert_eq!(second_digest, Algorithm::Sha256.digest(b"second"));
        assert_eq!(second.state(), FilterState::Closed);
        assert_eq!(result.digest(), Some(digest));

        assert!(matches!(second.close(), Err(FilterError::AlreadyFinalized)));
    }

    #[test]
    fn test_drop_without_close_leaves_result_empty() {
        let (mut filter, result) = sha256_filter();
        filter.process(Bytes::from_static(b"partial")).unwrap();
        drop(filter);
        assert!(result.digest().is_none());
    }

    #[test]
    fn test_filter_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<HashFilter>();
    }
}
