//! Film list in release order.

use std::fmt::Write;

use chrono::NaiveDate;
use serde_json::Value;

use super::field::{display_field, len_of};

/// Upstream release dates are ISO calendar dates.
const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parsed `release_date`, if any.
pub fn release_date(film: &Value) -> Option<NaiveDate> {
    let raw = film.get("release_date")?.as_str()?;
    NaiveDate::parse_from_str(raw.trim(), RELEASE_DATE_FORMAT).ok()
}

/// Stable ascending sort by release date. Films without a parseable date go
/// last, keeping their relative order.
pub fn sort_chronologically(films: &mut [Value]) {
    films.sort_by_key(|f| {
        let d = release_date(f);
        (d.is_none(), d)
    });
}

/// Append a heading-less ranked listing of `films` in the given order.
pub fn render_films(out: &mut String, films: &[Value]) {
    for (i, film) in films.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} ({})",
            i + 1,
            display_field(film, "title"),
            display_field(film, "release_date")
        );
        let _ = writeln!(out, "   Director: {}", display_field(film, "director"));
        let _ = writeln!(out, "   Producer: {}", display_field(film, "producer"));
        let _ = writeln!(out, "   Characters: {}", len_of(film, "characters").unwrap_or(0));
        let _ = writeln!(out, "   Planets: {}", len_of(film, "planets").unwrap_or(0));
    }
}
