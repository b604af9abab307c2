//! Date and time literals.

use chrono::{DateTime, Datelike, Duration, Local, TimeZone, Timelike};

use super::string::escape_string;
use crate::timezone::Timezone;
use crate::value::SqlDateTime;

/// Renders an instant as `'YYYY-MM-DD HH:MM:SS.mmm'`, or `NULL` if it is
/// invalid.
#[must_use]
pub fn escape_datetime(value: &SqlDateTime, timezone: &Timezone) -> String {
    let Some(instant) = value.instant() else {
        return String::from("NULL");
    };

    let fields = match *timezone {
        Timezone::Local => calendar_fields(&instant.with_timezone(&Local)),
        Timezone::Offset(minutes) => {
            match instant.checked_add_signed(Duration::minutes(i64::from(minutes))) {
                Some(shifted) => calendar_fields(&shifted),
                None => return String::from("NULL"),
            }
        }
    };

    escape_string(&fields)
}

fn calendar_fields<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    // Leap seconds report a nanosecond count past one second.
    let millis = (instant.nanosecond() / 1_000_000).min(999);

    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{millis:03}",
        instant.year(),
        instant.month(),
        instant.day(),
        instant.hour(),
        instant.minute(),
        instant.second(),
    )
}
