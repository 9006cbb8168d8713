//! Data-fetch layer.
//!
//! - `Upstream`: one raw GET + JSON decode, classified into `HolonetError`.
//! - `ResponseCache`: path-keyed, process-lifetime payload store.
//! - `FetchContext`: cache + counters + debug flag, passed to every fetch.
//! - `FetchClient`: cache lookup, upstream call, error counting.

pub mod cache;
pub mod client;
pub mod context;
pub mod upstream;

pub use cache::ResponseCache;
pub use client::FetchClient;
pub use context::FetchContext;
pub use upstream::{HttpUpstream, Upstream};
