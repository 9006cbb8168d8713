//! Holonet server library entry.
//!
//! Wires config, the fetch layer, the orchestrator, and the HTTP surface into
//! one stack. Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod fetch;
pub mod obs;
pub mod ops;
pub mod orchestrator;
pub mod router;
