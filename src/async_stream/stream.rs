//! Async stream adapter for the hash filter.
//!
//! This module attaches a [`HashFilter`] to a `futures_io::AsyncRead` /
//! `AsyncWrite` stream, making it runtime-agnostic and compatible with tokio,
//! async-std, smol, and other async runtimes.
//!
//! # Example
//!
//! ```ignore
//! use futures_util::AsyncWriteExt;
//! use hashfilter::{FilterConfig, FilterResult, HashAsyncStream};
//!
//! async fn demo<W: futures_io::AsyncWrite + Unpin>(writer: W) -> Result<(), hashfilter::FilterError> {
//!     let result = FilterResult::new();
//!     let mut stream = HashAsyncStream::attach(writer, &FilterConfig::new("sha256"), &result)
//!         .map_err(|e| e.into_error())?;
//!
//!     stream.write_all(b"hello").await?;
//!     let (_writer, digest) = stream.finish()?;
//!     println!("digest {}", digest);
//!     Ok(())
//! }
//! ```

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_io::{AsyncRead, AsyncWrite};
use pin_project_lite::pin_project;

use crate::config::{Direction, FilterConfig};
use crate::error::FilterError;
use crate::filter::HashFilter;
use crate::output::{DigestBytes, FilterResult};
use crate::stream::{AttachError, create_filter};

pin_project! {
    /// An async stream with a hash filter attached to one of its sides.
    ///
    /// Implements `AsyncRead` when `S: AsyncRead` and `AsyncWrite` when
    /// `S: AsyncWrite`. Bytes moving in the configured direction are hashed
    /// as each poll completes; the other side passes through untouched.
    ///
    /// `poll_close` closes the inner stream only. Call
    /// [`finish`](HashAsyncStream::finish) to publish the digest.
    ///
    /// # Runtime Compatibility
    ///
    /// For tokio users, `tokio_util::compat` converts tokio I/O types:
    ///
    /// ```ignore
    /// use tokio_util::compat::TokioAsyncReadCompatExt;
    /// use hashfilter::{FilterConfig, FilterResult, HashAsyncStream};
    ///
    /// let (client, _server) = tokio::io::duplex(64 * 1024);
    /// let result = FilterResult::new();
    /// let stream = HashAsyncStream::attach(client.compat(), &FilterConfig::new("blake3"), &result);
    /// ```
    #[derive(Debug)]
    pub struct HashAsyncStream<S> {
        #[pin]
        inner: S,
        filter: HashFilter,
    }
}

impl<S> HashAsyncStream<S> {
    /// Attaches a hash filter to `stream`.
    ///
    /// # Errors
    ///
    /// If the filter cannot be created the stream is handed back inside
    /// [`AttachError`].
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
}

impl<S: AsyncRead> AsyncRead for HashAsyncStream<S> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        let this = self.project();
        let n = match this.inner.poll_read(cx, buf) {
            Poll::Pending => return Poll::Pending,
            Poll::Ready(Err(e)) => return Poll::Ready(Err(e)),
            Poll::Ready(Ok(n)) => n,
        };
        if this.filter.direction() == Direction::Read {
            this.filter.absorb(&buf[..n]).map_err(io::Error::other)?;
        }
        Poll::Ready(Ok(n))
    }
}

impl<S: AsyncWrite> AsyncWrite for HashAsyncStream<S> {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        let this = self.project();
        let n = match this.inner.poll_write(cx, buf) {
            Poll::Pending => return Poll::Pending,
            Poll::Ready(Err(e)) => return Poll::Ready(Err(e)),
            Poll::Ready(Ok(n)) => n,
        };
        if this.filter.direction() == Direction::Write {
            this.filter.absorb(&buf[..n]).map_err(io::Error::other)?;
        }
        Poll::Ready(Ok(n))
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        self.project().inner.poll_flush(cx)
    }

    fn poll_close(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        self.project().inner.poll_close(cx)
    }
}
