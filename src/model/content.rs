//! Structured content mini-format
//!
//! One `key=value` record per line. Values are percent-encoded so that a
//! literal newline serializes as `%0A`. Blank lines are ignored; lines without
//! an `=` separator are skipped with a diagnostic. Duplicate keys: last write
//! wins. No wildcard keys, no nested structures.

use indexmap::IndexMap;
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use crate::model::value::PathValue;

// CONTROLS covers newline and carriage return; '%' itself must survive a
// decode round-trip.
const VALUE_ESCAPE: &AsciiSet = &CONTROLS.add(b'%');

/// Parse structured content data into an insertion-ordered mapping
pub fn parse_structured(data: &str) -> IndexMap<String, PathValue> {
    let mut map = IndexMap::new();
    for (number, line) in data.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match line.split_once('=') {
            Some((key, raw)) => {
                let value = percent_decode_str(raw).decode_utf8_lossy().into_owned();
                map.insert(key.to_string(), PathValue::String(value));
            }
            None => log::warn!(
                "structured content line {}: no '=' separator, skipping",
                number + 1
            ),
        }
    }
    map
}

/// Serialize a mapping back to structured content data
pub fn serialize_structured(map: &IndexMap<String, PathValue>) -> String {
    let mut out = String::new();
    for (key, value) in map {
        let text = value.to_string_value().unwrap_or_default();
        out.push_str(key);
        out.push('=');
        out.push_str(&utf8_percent_encode(&text, VALUE_ESCAPE).to_string());
        out.push('\n');
    }
    out
}
