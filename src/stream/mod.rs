//! Stream attachment for the hash filter.
//!
//! - [`HashStream`] - `Read`/`Write` adapter hashing one side of a stream
//! - [`append_filter`] - Attach with a fresh result slot
//! - [`AttachError`] - Rejected attachment carrying the stream back

mod io;

pub use io::{AttachError, HashStream, append_filter};

#[cfg(feature = "async-io")]
pub(crate) use io::create_filter;
