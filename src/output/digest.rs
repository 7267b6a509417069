//! Digest value type.

use bytes::Bytes;
use std::fmt;

/// The raw output of a finished hash computation.
///
/// Length depends on the algorithm (4 bytes for CRC32, 32 for SHA-256, ...).
/// Cloning is cheap: the bytes are reference counted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigestBytes(Bytes);

impl DigestBytes {
    /// Creates a digest from raw bytes.
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Returns the digest as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the digest length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the digest has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        let mut result = String::with_capacity(self.0.len() * 2);
        for byte in self.0.iter() {
            result.push(HEX[(byte >> 4) as usize] as char);
            result.push(HEX[(byte & 0xf) as usize] as char);
        }
        result
    }

    /// Parses a digest from a hex string.
    ///
    /// Returns `None` if the string has odd length or contains non-hex characters.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        if hex_str.len() % 2 != 0 || !hex_str.is_ascii() {
            return None;
        }
        let mut bytes = Vec::with_capacity(hex_str.len() / 2);
        for i in (0..hex_str.len()).step_by(2) {
            bytes.push(u8::from_str_radix(&hex_str[i..i + 2], 16).ok()?);
        }
        Some(Self(Bytes::from(bytes)))
    }

    /// Consumes the digest and returns the underlying bytes.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl AsRef<[u8]> for DigestBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for DigestBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Bytes::from(bytes))
    }
}

impl fmt::Display for DigestBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
