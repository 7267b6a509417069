//! Hashing filter for byte pipelines.
//!
//! - [`HashFilter`] - Pass-through filter with `create()`/`process()`/`close()` API
//! - [`Emit`] - Forwarding decision returned for each chunk
//! - [`FilterState`] - Active or closed

mod engine;

pub use engine::{Emit, FilterState, HashFilter};
