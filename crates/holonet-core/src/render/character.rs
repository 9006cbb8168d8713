//! Character summary.

use std::fmt::Write;

use serde_json::Value;

use super::field::{display_field, len_of};

/// Append name, height, mass, birth year, and the film count when non-zero.
pub fn render_character(out: &mut String, person: &Value) {
    let _ = writeln!(out, "Character: {}", display_field(person, "name"));
    let _ = writeln!(out, "Height: {}", display_field(person, "height"));
    let _ = writeln!(out, "Mass: {}", display_field(person, "mass"));
    let _ = writeln!(out, "Birthday: {}", display_field(person, "birth_year"));
    if let Some(n) = len_of(person, "films").filter(|n| *n > 0) {
        let _ = writeln!(out, "Appears in {} films", n);
    }
}
