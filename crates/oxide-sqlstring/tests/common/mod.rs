#![allow(dead_code)]

use chrono::{NaiveDate, TimeZone, Utc};

use oxide_sqlstring::{format_with, FormatOptions, SqlDateTime, SqlValue, ToSqlValue};

/// Formats with objects never stringified, the way a driver calls it.
pub fn fmt(sql: &str, values: &[SqlValue]) -> String {
    format_with(sql, values, &FormatOptions::new().stringify_objects(false)).into_owned()
}

/// Formats with objects always stringified.
pub fn fmt_stringified(sql: &str, values: &[SqlValue]) -> String {
    format_with(sql, values, &FormatOptions::new().stringify_objects(true)).into_owned()
}

/// Formats with dates rendered in the given time zone.
pub fn fmt_in(sql: &str, values: &[SqlValue], timezone: &str) -> String {
    format_with(
        sql,
        values,
        &FormatOptions::new().stringify_objects(false).timezone(timezone),
    )
    .into_owned()
}

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> SqlDateTime {
    let instant = Utc
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .unwrap_or_else(|| panic!("Invalid UTC date {y}-{mo}-{d} {h}:{mi}:{s}"));
    SqlDateTime::from_utc(instant + chrono::Duration::milliseconds(i64::from(ms)))
}

/// A date given in local calendar fields.
pub fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> SqlValue {
    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_milli_opt(h, mi, s, ms))
        .unwrap_or_else(|| panic!("Invalid local date {y}-{mo}-{d} {h}:{mi}:{s}.{ms}"))
        .to_sql_value()
}
