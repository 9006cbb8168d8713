//! Top-level facade crate for Holonet.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use holonet_core::*;
}

pub mod gateway {
    pub use holonet_gateway::*;
}
