//! Filter output types.
//!
//! - [`DigestBytes`] - Raw digest produced when a filter closes
//! - [`FilterResult`] - Write-once slot the digest is published into

mod digest;
mod result;

pub use digest::DigestBytes;
pub use result::FilterResult;
