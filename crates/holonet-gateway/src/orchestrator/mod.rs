//! Run orchestration.
//!
//! One run = a fixed, strictly sequential series of fetches whose rendered
//! output is collected into a [`RunReport`]. The only state carried between
//! runs is the cache and the counters in `FetchContext`.

pub mod runner;

pub use runner::{Orchestrator, RunReport, STARSHIP_PREVIEW, VEHICLE_LIMIT};
