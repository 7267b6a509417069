//! hashfilter
//!
//! Incremental hashing as a pass-through stream filter.
//!
//! `hashfilter` sits inside a byte pipeline: every byte that enters the filter
//! leaves it unchanged and in order, while a running digest is accumulated on
//! the side. When the stream closes, the digest is published into a result
//! slot the caller supplied at attachment time. It is designed for:
//!
//! - checksumming uploads and downloads while they stream
//! - verifying content without a second pass over the data
//! - content addressing of data that never fits in memory
//!
//! The crate intentionally:
//! - does NOT transform or redact stream content
//! - does NOT run more than one algorithm per filter
//! - does NOT persist or resume hash state
//!
//! It only does one thing: **Bytes in → same bytes out, digest on close**
//!
//! # Filter
//!
//! ```
//! use bytes::Bytes;
//! use hashfilter::{Algorithm, FilterConfig, FilterResult, HashFilter};
//!
//! let result = FilterResult::new();
//! let mut filter = HashFilter::create(&FilterConfig::new("sha256"), result.clone())?;
//!
//! for part in ["a", "b", "c"] {
//!     let forwarded = filter.process(Bytes::from(part))?.into_bytes();
//!     assert_eq!(forwarded, part.as_bytes());
//! }
//! filter.close()?;
//!
//! assert_eq!(result.digest(), Some(Algorithm::Sha256.digest(b"abc")));
//! # Ok::<(), hashfilter::FilterError>(())
//! ```
//!
//! # Stream
//!
//! ```no_run
//! use std::fs::File;
//! use std::io;
//! use hashfilter::{Direction, FilterConfig, append_filter};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FilterConfig::new("blake3").with_direction(Direction::Read);
//!     let (mut stream, result) = append_filter(File::open("data.bin")?, &config)?;
//!
//!     io::copy(&mut stream, &mut io::sink())?;
//!     stream.finish()?;
//!     println!("{}", result.digest().expect("published on finish"));
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::io::AsyncReadExt;
//! use hashfilter::{Direction, FilterConfig, FilterResult, HashAsyncStream};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), hashfilter::FilterError> {
//!     let result = FilterResult::new();
//!     let config = FilterConfig::new("sha256").with_direction(Direction::Read);
//!     let mut stream = HashAsyncStream::attach(reader, &config, &result)
//!         .map_err(|e| e.into_error())?;
//!
//!     let mut data = Vec::new();
//!     stream.read_to_end(&mut data).await?;
//!     let (_reader, digest) = stream.finish()?;
//!     println!("digest {}", digest);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod filter;
mod hash;
mod output;
mod registry;
mod stream;

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface
//

pub use config::{Direction, FilterConfig};
pub use error::FilterError;
pub use filter::{Emit, FilterState, HashFilter};
pub use hash::{Algorithm, HashContext};
pub use output::{DigestBytes, FilterResult};
pub use registry::{FILTER_NAME, FilterFactory, FilterRegistry, register_filter};
pub use stream::{AttachError, HashStream, append_filter};

#[cfg(feature = "async-io")]
pub use async_stream::HashAsyncStream;
