//! `std::io` adapter that attaches a [`HashFilter`] to a stream.

use std::fmt;
use std::io::{self, Read, Write};

use tracing::warn;

use crate::config::{Direction, FilterConfig};
use crate::error::FilterError;
use crate::filter::HashFilter;
use crate::output::{DigestBytes, FilterResult};
use crate::registry::{FILTER_NAME, FilterRegistry, register_filter};

/// A stream with a hash filter attached to one of its sides.
///
/// Implements [`Read`] when `S: Read` and [`Write`] when `S: Write`. Bytes
/// moving in the configured [`Direction`] are hashed as they pass; only the
/// bytes the inner stream actually transferred are counted. The other side
/// passes through untouched.
///
/// Call [`finish`](Self::finish) at end of stream to publish the digest.
/// Dropping the stream without finishing abandons the digest.
///
/// # Example
///
/// ```
/// use std::io::Write;
/// use hashfilter::{Algorithm, FilterConfig, append_filter};
///
/// let (mut stream, result) = append_filter(Vec::new(), &FilterConfig::new("sha256"))?;
/// stream.write_all(b"hello world")?;
/// let (written, digest) = stream.finish()?;
///
/// assert_eq!(written, b"hello world");
/// assert_eq!(digest, Algorithm::Sha256.digest(b"hello world"));
/// assert_eq!(result.digest(), Some(digest));
/// # Ok::<(), hashfilter::FilterError>(())
/// ```
#[derive(Debug)]
pub struct HashStream<S> {
    inner: S,
    filter: HashFilter,
}

impl<S> HashStream<S> {
    /// Attaches a hash filter to `stream`.
    ///
    /// The filter is registered under [`FILTER_NAME`] if needed and created
    /// through the global registry. Its digest is published into `result`.
    ///
    /// # Errors
    ///
    /// If the filter cannot be created the stream is handed back inside
    /// [`AttachError`], still usable without hashing.
    pub fn attach(
        stream: S,
        config: &FilterConfig,
        result: &FilterResult,
    ) -> Result<Self, AttachError<S>> {
        match create_filter(config, result) {
            Ok(filter) => Ok(Self {
                inner: stream,
                filter,
            }),
            Err(error) => Err(AttachError::new(stream, error)),
        }
    }

    /// Signals end of stream: closes the filter and returns the inner stream
    /// with the digest.
    pub fn finish(mut self) -> Result<(S, DigestBytes), FilterError> {
        let digest = self.filter.close()?;
        Ok((self.inner, digest))
    }

    /// Returns the number of bytes hashed so far.
    pub fn consumed(&self) -> u64 {
        self.filter.consumed()
    }

    /// Returns the result slot the digest is published into.
    pub fn result(&self) -> &FilterResult {
        self.filter.result()
    }

    /// Returns a reference to the inner stream.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the inner stream.
    ///
    /// Bytes moved through this reference bypass the filter.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    fn hashes(&self, direction: Direction) -> bool {
        self.filter.direction() == direction
    }
}

impl<S: Read> Read for HashStream<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if self.hashes(Direction::Read) {
            self.filter.absorb(&buf[..n]).map_err(io::Error::other)?;
        }
        Ok(n)
    }
}

impl<S: Write> Write for HashStream<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        if self.hashes(Direction::Write) {
            self.filter.absorb(&buf[..n]).map_err(io::Error::other)?;
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Registers the hash filter if needed and creates one through the global
/// registry for an attachment.
pub(crate) fn create_filter(
    config: &FilterConfig,
    result: &FilterResult,
) -> Result<HashFilter, FilterError> {
    register_filter();
    FilterRegistry::global()
        .create(FILTER_NAME, config, result.clone())
        .inspect_err(|error| {
            warn!(
                algorithm = config.algorithm(),
                error = %error,
                "hash filter not attached"
            );
        })
}

/// Attaches a hash filter to `stream` with a fresh result slot.
///
/// Equivalent to [`HashStream::attach`]; returns the stream together with
/// the slot the digest will be published into.
///
/// # Errors
///
/// Returns the creation error; the stream is dropped. Use
/// [`HashStream::attach`] to get the stream back on failure.
pub fn append_filter<S>(
    stream: S,
    config: &FilterConfig,
) -> Result<(HashStream<S>, FilterResult), FilterError> {
    let result = FilterResult::new();
    let stream = HashStream::attach(stream, config, &result).map_err(AttachError::into_error)?;
    Ok((stream, result))
}

/// A rejected attachment. Carries the untouched stream back to the caller.
pub struct AttachError<S> {
    stream: S,
    error: FilterError,
}

impl<S> AttachError<S> {
    pub(crate) fn new(stream: S, error: FilterError) -> Self {
        Self { stream, error }
    }

    /// Returns the reason the filter was rejected.
    pub fn error(&self) -> &FilterError {
        &self.error
    }

    /// Returns the stream, still usable without hashing.
    pub fn into_inner(self) -> S {
        self.stream
    }

    /// Discards the stream and returns the error.
    pub fn into_error(self) -> FilterError {
        self.error
    }

    /// Splits into the stream and the error.
    pub fn into_parts(self) -> (S, FilterError) {
        (self.stream, self.error)
    }
}

impl<S> fmt::Debug for AttachError<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<S> fmt::Display for AttachError<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "filter attach failed: {}", self.error)
    }
}

impl<S> std::error::Error for AttachError<S> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
