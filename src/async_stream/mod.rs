//! Async stream attachment for the hash filter.
//!
//! This module attaches the filter to `futures-io` streams, making it
//! runtime-agnostic and compatible with tokio, async-std, smol, and other
//! async runtimes.
//!
//! - [`HashAsyncStream`] - `AsyncRead`/`AsyncWrite` adapter hashing one side
//!
//! This module requires the `async-io` feature to be enabled.

mod stream;

pub use stream::HashAsyncStream;
