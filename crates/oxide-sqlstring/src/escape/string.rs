//! String literals, numbers and blobs.

use std::fmt::Write;

/// Returns the two-character escape for a byte that needs one.
const fn escape_sequence(byte: u8) -> Option<&'static str> {
    match byte {
        b'\0' => Some("\\0"),
        0x08 => Some("\\b"),
        b'\t' => Some("\\t"),
        b'\n' => Some("\\n"),
        b'\r' => Some("\\r"),
        0x1a => Some("\\Z"),
        b'"' => Some("\\\""),
        b'\'' => Some("\\'"),
        b'\\' => Some("\\\\"),
        _ => None,
    }
}

/// Escapes text and surrounds it with single quotes.
///
/// NUL, backspace, tab, newline, carriage return, Ctrl-Z, both quote
/// characters and the backslash are backslash-escaped. Everything else,
/// including any non-ASCII text, is copied unchanged.
#[must_use]
pub fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('\'');

    // Every escaped byte is ASCII, so chunk boundaries fall on char boundaries.
    let mut chunk_start = 0;
    for (index, byte) in value.bytes().enumerate() {
        if let Some(sequence) = escape_sequence(byte) {
            escaped.push_str(&value[chunk_start..index]);
            escaped.push_str(sequence);
            chunk_start = index + 1;
        }
    }

    escaped.push_str(&value[chunk_start..]);
    escaped.push('\'');
    escaped
}

/// Renders a float the way SQL expects a numeric literal.
///
/// Magnitudes in `[1e-6, 1e21)` are written in plain decimal notation with
/// the shortest digits that round-trip; others use an exponent (`1e+21`,
/// `1.5e-7`). Non-finite values become `NaN`, `Infinity` and `-Infinity`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        return String::from("0");
    }

    if (1e-6..1e21).contains(&value.abs()) {
        return format!("{value}");
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Renders bytes as a hex literal, `X'..'`.
#[must_use]
pub fn escape_blob(bytes: &[u8]) -> String {
    let hex = bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut hex, byte| {
            let _ = write!(hex, "{byte:02x}");
            hex
        });
    format!("X{}", escape_string(&hex))
}
