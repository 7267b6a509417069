//! Hash backends for the filter.
//!
//! This module wraps the digest crates behind a name-addressed capability.
//! SHA-2 is always available; SHA-3, BLAKE3 and CRC32 are selected by the
//! `hash-sha3`, `hash-blake3` and `hash-crc32` features.
//!
//! - [`Algorithm`] - Named algorithm with one-shot hashing
//! - [`HashContext`] - Incremental init/update/finalize state

mod algorithm;
mod context;

pub use algorithm::Algorithm;
pub use context::HashContext;
