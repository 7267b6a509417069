//! Named digest algorithms.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use digest::Digest;

use crate::error::FilterError;
use crate::output::DigestBytes;

/// A digest algorithm supported by the enabled hash backends.
///
/// Algorithms are identified by a lowercase name (`"sha256"`, `"blake3"`,
/// `"crc32"`, ...). Parsing is case-insensitive. Variants whose backend
/// feature is disabled do not exist, so their names resolve to
/// [`FilterError::UnknownAlgorithm`].
///
/// # Example
///
/// ```
/// use hashfilter::Algorithm;
///
/// let algo: Algorithm = "SHA256".parse()?;
/// assert_eq!(algo, Algorithm::Sha256);
/// assert_eq!(algo.output_len(), 32);
/// # Ok::<(), hashfilter::FilterError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Algorithm {
    /// SHA-224.
    Sha224,
    /// SHA-256.
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
    /// SHA3-256.
    #[cfg(feature = "hash-sha3")]
    Sha3_256,
    /// SHA3-384.
    #[cfg(feature = "hash-sha3")]
    Sha3_384,
    /// SHA3-512.
    #[cfg(feature = "hash-sha3")]
    Sha3_512,
    /// BLAKE3 with the default 32-byte output.
    #[cfg(feature = "hash-blake3")]
    Blake3,
    /// CRC-32 (IEEE 802.3, as used by zlib), digest in big-endian byte order.
    #[cfg(feature = "hash-crc32")]
    Crc32,
}

const SUPPORTED: &[Algorithm] = &[
    Algorithm::Sha224,
    Algorithm::Sha256,
    Algorithm::Sha384,
    Algorithm::Sha512,
    #[cfg(feature = "hash-sha3")]
    Algorithm::Sha3_256,
    #[cfg(feature = "hash-sha3")]
    Algorithm::Sha3_384,
    #[cfg(feature = "hash-sha3")]
    Algorithm::Sha3_512,
    #[cfg(feature = "hash-blake3")]
    Algorithm::Blake3,
    #[cfg(feature = "hash-crc32")]
    Algorithm::Crc32,
];

impl Algorithm {
    /// Every algorithm available in this build.
    pub fn supported() -> &'static [Algorithm] {
        SUPPORTED
    }

    /// Resolves an algorithm by name (case-insensitive).
    ///
    /// Returns `None` for names no enabled backend provides.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        // crc32b is the name some tools use for the zlib CRC-32
        #[cfg(feature = "hash-crc32")]
        if name == "crc32b" {
            return Some(Algorithm::Crc32);
        }
        SUPPORTED.iter().copied().find(|algo| algo.name() == name)
    }

    /// Returns the canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Sha224 => "sha224",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
            #[cfg(feature = "hash-sha3")]
            Algorithm::Sha3_256 => "sha3-256",
            #[cfg(feature = "hash-sha3")]
            Algorithm::Sha3_384 => "sha3-384",
            #[cfg(feature = "hash-sha3")]
            Algorithm::Sha3_512 => "sha3-512",
            #[cfg(feature = "hash-blake3")]
            Algorithm::Blake3 => "blake3",
            #[cfg(feature = "hash-crc32")]
            Algorithm::Crc32 => "crc32",
        }
    }

    /// Returns the digest length in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            Algorithm::Sha224 => 28,
            Algorithm::Sha256 => 32,
            Algorithm::Sha384 => 48,
            Algorithm::Sha512 => 64,
            #[cfg(feature = "hash-sha3")]
            Algorithm::Sha3_256 => 32,
            #[cfg(feature = "hash-sha3")]
            Algorithm::Sha3_384 => 48,
            #[cfg(feature = "hash-sha3")]
            Algorithm::Sha3_512 => 64,
            #[cfg(feature = "hash-blake3")]
            Algorithm::Blake3 => 32,
            #[cfg(feature = "hash-crc32")]
            Algorithm::Crc32 => 4,
        }
    }

    /// Hashes `data` in one shot.
    ///
    /// Calls the backend's one-shot entry point directly, so it serves as a
    /// reference for the incremental [`HashContext`](crate::HashContext).
    pub fn digest(self, data: &[u8]) -> DigestBytes {
        let bytes = match self {
            Algorithm::Sha224 => Bytes::copy_from_slice(&sha2::Sha224::digest(data)),
            Algorithm::Sha256 => Bytes::copy_from_slice(&sha2::Sha256::digest(data)),
            Algorithm::Sha384 => Bytes::copy_from_slice(&sha2::Sha384::digest(data)),
            Algorithm::Sha512 => Bytes::copy_from_slice(&sha2::Sha512::digest(data)),
            #[cfg(feature = "hash-sha3")]
            Algorithm::Sha3_256 => Bytes::copy_from_slice(&sha3::Sha3_256::digest(data)),
            #[cfg(feature = "hash-sha3")]
            Algorithm::Sha3_384 => Bytes::copy_from_slice(&sha3::Sha3_384::digest(data)),
            #[cfg(feature = "hash-sha3")]
            Algorithm::Sha3_512 => Bytes::copy_from_slice(&sha3::Sha3_512::digest(data)),
            #[cfg(feature = "hash-blake3")]
            Algorithm::Blake3 => Bytes::copy_from_slice(blake3::hash(data).as_bytes()),
            #[cfg(feature = "hash-crc32")]
            Algorithm::Crc32 => Bytes::copy_from_slice(&crc32fast::hash(data).to_be_bytes()),
        };
        DigestBytes::new(bytes)
    }
}

impl FromStr for Algorithm {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| FilterError::UnknownAlgorithm {
            name: s.to_string(),
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
