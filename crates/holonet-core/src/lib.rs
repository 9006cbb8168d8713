//! Holonet core: error taxonomy and the text rendering rules for SWAPI records.
//!
//! This crate carries no transport or runtime dependencies. Upstream payloads
//! are treated as opaque `serde_json::Value` field bags; everything here is a
//! pure function of those values so it can be tested without a network.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Missing or oddly
//! typed fields are rendered leniently or reported as `HolonetError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod render;

/// Shared result type.
pub use error::{ErrorKind, HolonetError, Result};
