//! Rendering any [`SqlValue`] as a SQL literal.

use super::datetime::escape_datetime;
use super::identifier::escape_identifier;
use super::string::{escape_blob, escape_string, format_number};
use crate::timezone::Timezone;
use crate::value::{SqlMap, SqlValue, OBJECT_TOKEN};

/// Escapes a value with no stringify instruction and local dates.
///
/// A mapping is rendered as its `column = literal` assignments.
#[must_use]
pub fn escape(value: &SqlValue) -> String {
    escape_with(value, None, &Timezone::Local)
}

/// Escapes a value.
///
/// `stringify_objects` only matters for mappings: with no instruction
/// (`None`) they expand to `column = literal` assignments, with any explicit
/// instruction they render as the quoted generic object token.
#[must_use]
pub fn escape_with(
    value: &SqlValue,
    stringify_objects: Option<bool>,
    timezone: &Timezone,
) -> String {
    match value {
        SqlValue::Null => String::from("NULL"),
        SqlValue::Bool(b) => b.to_string(),
        SqlValue::Int(n) => n.to_string(),
        SqlValue::Float(f) => format_number(*f),
        SqlValue::Text(s) | SqlValue::Function(s) => escape_string(s),
        SqlValue::DateTime(dt) => escape_datetime(dt, timezone),
        SqlValue::Blob(bytes) => escape_blob(bytes),
        SqlValue::Raw(raw) => raw.to_sql_string().to_owned(),
        SqlValue::List(items) => list_to_values(items, timezone),
        SqlValue::Map(map) => {
            if stringify_objects.is_some() {
                escape_string(OBJECT_TOKEN)
            } else {
                map_to_assignments(map, timezone)
            }
        }
    }
}

/// Renders a mapping as `` `column` = literal `` pairs joined by `, `.
///
/// Function entries are skipped. Values are escaped with objects
/// stringified, so nested mappings never expand.
#[must_use]
pub fn map_to_assignments(map: &SqlMap, timezone: &Timezone) -> String {
    let mut sql = String::new();

    for (key, value) in map.iter() {
        if matches!(value, SqlValue::Function(_)) {
            continue;
        }

        if !sql.is_empty() {
            sql.push_str(", ");
        }
        sql.push_str(&escape_identifier(key, false));
        sql.push_str(" = ");
        sql.push_str(&escape_with(value, Some(true), timezone));
    }

    sql
}

/// Renders list items joined by `, `, wrapping nested lists in parentheses.
fn list_to_values(items: &[SqlValue], timezone: &Timezone) -> String {
    items
        .iter()
        .map(|item| match item {
            SqlValue::List(inner) => format!("({})", list_to_values(inner, timezone)),
            other => escape_with(other, Some(true), timezone),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
