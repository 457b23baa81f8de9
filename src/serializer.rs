//! The canonical serializer: the inverse of the parser on every input the
//! parser accepts. Never fails — every [`Value`] a caller can construct is
//! representable as JSON text.
use std::fmt::Write as _;

use crate::value::Value;

/// Renders `value` to a freshly allocated, canonical JSON string.
///
/// Objects are always emitted with their keys in ascending
/// byte-lexicographic order (guaranteed by [`crate::value::Map`] being a
/// `BTreeMap`), so the output for a given value is deterministic and
/// byte-identical across calls.
#[must_use]
pub fn stringify(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(*n, out),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, val)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_value(val, out);
            }
            out.push('}');
        }
    }
}

/// Writes the shortest decimal literal that round-trips to the same
/// `binary64`. Rust's own `f64` `Display` impl already computes exactly
/// this (a Grisu-family shortest round-trip algorithm), so there is no
/// reason to hand-roll a `%.17g`-style formatter: it would only produce
/// longer output for the same guarantee.
fn write_number(n: f64, out: &mut String) {
    debug_assert!(n.is_finite(), "Value::Number is never NaN/Infinite");
    write!(out, "{n}").expect("writing to a String never fails");
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                write!(out, "\\u{:04X}", c as u32).expect("writing to a String never fails");
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
