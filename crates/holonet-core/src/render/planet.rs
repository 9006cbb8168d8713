//! Large populated planets filter.

use std::fmt::Write;

use serde_json::Value;

use super::field::{display_field, int_of, len_of};

/// Population must be strictly greater than this.
pub const POPULATION_THRESHOLD: i64 = 1_000_000_000;
/// Diameter (km) must be strictly greater than this.
pub const DIAMETER_THRESHOLD: i64 = 10_000;

fn is_unknown(planet: &Value, key: &str) -> bool {
    planet.get(key).and_then(Value::as_str) == Some("unknown")
}

/// True when population and diameter are both known and above the thresholds.
pub fn is_large_populated(planet: &Value) -> bool {
    if is_unknown(planet, "population") || is_unknown(planet, "diameter") {
        return false;
    }
    let big_population = int_of(planet, "population").is_some_and(|p| p > POPULATION_THRESHOLD);
    let big_diameter = int_of(planet, "diameter").is_some_and(|d| d > DIAMETER_THRESHOLD);
    big_population && big_diameter
}

/// Append the planet if it passes [`is_large_populated`]. Returns whether it was shown.
pub fn render_planet(out: &mut String, planet: &Value) -> bool {
    if !is_large_populated(planet) {
        return false;
    }
    let _ = writeln!(
        out,
        "{} - Pop: {}",
        display_field(planet, "name"),
        display_field(planet, "population")
    );
    let _ = writeln!(
        out,
        "   Diameter: {} - Climate: {}",
        display_field(planet, "diameter"),
        display_field(planet, "climate")
    );
    if let Some(n) = len_of(planet, "films").filter(|n| *n > 0) {
        let _ = writeln!(out, "   Appears in {} films", n);
    }
    true
}
