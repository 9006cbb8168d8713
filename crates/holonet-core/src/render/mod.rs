//! Console rendering of SWAPI records.
//!
//! Every renderer appends lines to a caller-owned `String` so a run can keep
//! the output of completed steps even when a later step fails.
//!
//! Field semantics follow the upstream JSON loosely:
//! - a field is shown only when it is "truthy" (see [`field::is_truthy`]),
//! - numeric thresholds use the integer prefix of string fields.

pub mod character;
pub mod detail;
pub mod field;
pub mod film;
pub mod planet;

pub use character::render_character;
pub use detail::{render_detail, DetailTitle};
pub use film::{render_films, sort_chronologically};
pub use planet::{is_large_populated, render_planet};

/// Knobs shared by all renderers.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Skip detail fields whose value is falsy (0, "", false, null, absent).
    /// When off, only absent/null fields are skipped.
    pub hide_falsy: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { hide_falsy: true }
    }
}
