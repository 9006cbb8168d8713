//! Detail block shared by starships and vehicles.

use std::fmt::Write;

use serde_json::Value;

use super::field::{display, is_shown, len_of};
use super::RenderOptions;

/// Heading of a detail block.
#[derive(Debug, Clone, Copy)]
pub enum DetailTitle<'a> {
    /// `"<kind> <index + 1>"`, used for list entries.
    Indexed { kind: &'a str, index: usize },
    /// `"Featured <kind>"`.
    Featured(&'a str),
}

impl std::fmt::Display for DetailTitle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailTitle::Indexed { kind, index } => write!(f, "{} {}", kind, index + 1),
            DetailTitle::Featured(kind) => write!(f, "Featured {}", kind),
        }
    }
}

/// Plain fields, in print order: (label, upstream key).
const PLAIN_FIELDS_HEAD: [(&str, &str); 3] = [
    ("Name", "name"),
    ("Model", "model"),
    ("Manufacturer", "manufacturer"),
];

const PLAIN_FIELDS_TAIL: [(&str, &str); 5] = [
    ("Length", "length"),
    ("Crew Required", "crew"),
    ("Passengers", "passengers"),
    ("Speed", "max_atmosphering_speed"),
    ("Hyperdrive Rating", "hyperdrive_rating"),
];

fn cost_text(item: &Value) -> Option<Value> {
    match item.get("cost_in_credits")? {
        Value::Null => None,
        Value::String(s) if s == "unknown" => Some(Value::String("unknown".into())),
        v => Some(Value::String(format!("{} credits", display(v)))),
    }
}

fn field_line(out: &mut String, label: &str, v: Option<&Value>, opts: RenderOptions) {
    if let Some(v) = v {
        if is_shown(v, opts) {
            let _ = writeln!(out, "{}: {}", label, display(v));
        }
    }
}

/// Append a blank line, the title, and every present field of `item`.
pub fn render_detail(out: &mut String, item: &Value, title: DetailTitle<'_>, opts: RenderOptions) {
    let _ = writeln!(out, "\n{}:", title);

    for (label, key) in PLAIN_FIELDS_HEAD {
        field_line(out, label, item.get(key), opts);
    }
    field_line(out, "Cost", cost_text(item).as_ref(), opts);
    for (label, key) in PLAIN_FIELDS_TAIL {
        field_line(out, label, item.get(key), opts);
    }
    let pilots = len_of(item, "pilots").map(Value::from);
    field_line(out, "Pilots", pilots.as_ref(), opts);
}
