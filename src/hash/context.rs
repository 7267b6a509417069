//! Incremental hash state.

use bytes::Bytes;
use digest::Digest;

use super::Algorithm;
use crate::error::FilterError;
use crate::output::DigestBytes;

/// Backend state for one computation.
#[derive(Clone)]
enum State {
    Sha224(sha2::Sha224),
    Sha256(sha2::Sha256),
    Sha384(sha2::Sha384),
    Sha512(sha2::Sha512),
    #[cfg(feature = "hash-sha3")]
    Sha3_256(sha3::Sha3_256),
    #[cfg(feature = "hash-sha3")]
    Sha3_384(sha3::Sha3_384),
    #[cfg(feature = "hash-sha3")]
    Sha3_512(sha3::Sha3_512),
    // boxed: blake3::Hasher is far larger than the other states
    #[cfg(feature = "hash-blake3")]
    Blake3(Box<blake3::Hasher>),
    #[cfg(feature = "hash-crc32")]
    Crc32(crc32fast::Hasher),
}

/// A hash computation in progress for one [`Algorithm`].
///
/// `finalize` takes `self` by value, so a finished context can be neither
/// updated nor finalized again. Dropping an unfinished context releases its
/// state without producing a digest.
///
/// # Example
///
/// ```
/// use hashfilter::{Algorithm, HashContext};
///
/// let mut ctx = HashContext::init("sha256")?;
/// ctx.update(b"hello ");
/// ctx.update(b"world");
///
/// assert_eq!(ctx.finalize(), Algorithm::Sha256.digest(b"hello world"));
/// # Ok::<(), hashfilter::FilterError>(())
/// ```
#[derive(Clone)]
pub struct HashContext {
    algorithm: Algorithm,
    state: State,
}

impl HashContext {
    /// Creates a fresh context for the algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        let state = match algorithm {
            Algorithm::Sha224 => State::Sha224(sha2::Sha224::new()),
            Algorithm::Sha256 => State::Sha256(sha2::Sha256::new()),
            Algorithm::Sha384 => State::Sha384(sha2::Sha384::new()),
            Algorithm::Sha512 => State::Sha512(sha2::Sha512::new()),
            #[cfg(feature = "hash-sha3")]
            Algorithm::Sha3_256 => State::Sha3_256(sha3::Sha3_256::new()),
            #[cfg(feature = "hash-sha3")]
            Algorithm::Sha3_384 => State::Sha3_384(sha3::Sha3_384::new()),
            #[cfg(feature = "hash-sha3")]
            Algorithm::Sha3_512 => State::Sha3_512(sha3::Sha3_512::new()),
            #[cfg(feature = "hash-blake3")]
            Algorithm::Blake3 => State::Blake3(Box::new(blake3::Hasher::new())),
            #[cfg(feature = "hash-crc32")]
            Algorithm::Crc32 => State::Crc32(crc32fast::Hasher::new()),
        };
        Self { algorithm, state }
    }

    /// Creates a context from an algorithm name.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownAlgorithm`] if no enabled backend
    /// provides the algorithm.
    pub fn init(name: &str) -> Result<Self, FilterError> {
        name.parse::<Algorithm>().map(Self::new)
    }

    /// Returns the algorithm this context computes.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Feeds more data into the computation.
    pub fn update(&mut self, data: &[u8]) {
        match &mut self.state {
            State::Sha224(h) => h.update(data),
            State::Sha256(h) => h.update(data),
            State::Sha384(h) => h.update(data),
            State::Sha512(h) => h.update(data),
            #[cfg(feature = "hash-sha3")]
            State::Sha3_256(h) => h.update(data),
            #[cfg(feature = "hash-sha3")]
            State::Sha3_384(h) => h.update(data),
            #[cfg(feature = "hash-sha3")]
            State::Sha3_512(h) => h.update(data),
            #[cfg(feature = "hash-blake3")]
            State::Blake3(h) => {
                h.update(data);
            }
            #[cfg(feature = "hash-crc32")]
            State::Crc32(h) => h.update(data),
        }
    }

    /// Consumes the context and returns the digest of everything fed to it.
    pub fn finalize(self) -> DigestBytes {
        let bytes = match self.state {
            State::Sha224(h) => Bytes::copy_from_slice(&h.finalize()),
            State::Sha256(h) => Bytes::copy_from_slice(&h.finalize()),
            State::Sha384(h) => Bytes::copy_from_slice(&h.finalize()),
            State::Sha512(h) => Bytes::copy_from_slice(&h.finalize()),
            #[cfg(feature = "hash-sha3")]
            State::Sha3_256(h) => Bytes::copy_from_slice(&h.finalize()),
            #[cfg(feature = "hash-sha3")]
            State::Sha3_384(h) => Bytes::copy_from_slice(&h.finalize()),
            #[cfg(feature = "hash-sha3")]
            State::Sha3_512(h) => Bytes::copy_from_slice(&h.finalize()),
            #[cfg(feature = "hash-blake3")]
            State::Blake3(h) => Bytes::copy_from_slice(h.finalize().as_bytes()),
            #[cfg(feature = "hash-crc32")]
            State::Crc32(h) => Bytes::copy_from_slice(&h.finalize().to_be_bytes()),
        };
        DigestBytes::new(bytes)
    }
}

impl std::fmt::Debug for HashContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashContext")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incremental_hashing() {
        for &algo in Algorithm::supported() {
            let mut ctx = HashContext::new(algo);
            ctx.update(b"hello ");
            ctx.update(b"world");
            let hash = ctx.finalize();

            // Should match one-shot hashing
            assert_eq!(hash, algo.digest(b"hello world"), "{algo}");
        }
    }

    #[test]
    fn test_zero_updates() {
        for &algo in Algorithm::supported() {
            assert_eq!(HashContext::new(algo).finalize(), algo.digest(b""), "{algo}");
        }
    }

    #[test]
    fn test_empty_updates_are_neutral() {
        let mut ctx = HashContext::new(Algorithm::Sha256);
        ctx.update(b"");
        ctx.update(b"abc");
        ctx.update(b"");
        assert_eq!(ctx.finalize(), Algorithm::Sha256.digest(b"abc"));
    }

    #[test]
    fn test_init_unknown() {
        let err = HashContext::init("not-a-real-algo").unwrap_err();
        assert!(matches!(err, FilterError::UnknownAlgorithm { .. }));
    }

    #[test]
    fn test_clone_forks_state() {
        let mut ctx = HashContext::init("sha512").unwrap();
        ctx.update(b"shared prefix ");
        let mut fork = ctx.clone();
        ctx.update(b"left");
        fork.update(b"right");

        assert_eq!(ctx.finalize(), Algorithm::Sha512.digest(b"shared prefix left"));
        assert_eq!(fork.finalize(), Algorithm::Sha512.digest(b"shared prefix right"));
    }

    #[cfg(feature = "hash-blake3")]
    #[test]
    fn test_blake3_empty_input() {
        let hash = HashContext::new(Algorithm::Blake3).finalize();
        assert_eq!(
            hash.to_hex(),
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
    }
}
