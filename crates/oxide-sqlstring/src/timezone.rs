//! Time zone instructions for date rendering.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static OFFSET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([+\-\s])([0-9]{2}):?([0-9]{2})?").expect("Invalid timezone offset regex")
});

/// How dates are turned into calendar fields.
///
/// Parsing never fails. Empty text means `local`; text that is neither
/// `local`, `Z` nor an offset such as `+01`, `+0200` or `-05:00` falls back
/// to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Timezone {
    /// Use the calendar fields of the process-local time zone.
    #[default]
    Local,
    /// Shift by this many minutes, then use UTC calendar fields.
    Offset(i32),
}

impl Timezone {
    /// UTC, also written `Z`.
    pub const UTC: Self = Self::Offset(0);

    /// Parses a time zone instruction.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text {
            "" | "local" => Self::Local,
            "Z" => Self::UTC,
            _ => Self::Offset(parse_offset_minutes(text).unwrap_or(0)),
        }
    }
}

fn parse_offset_minutes(text: &str) -> Option<i32> {
    let caps = OFFSET_PATTERN.captures(text)?;
    let hours: i32 = caps.get(2)?.as_str().parse().ok()?;
    let minutes: i32 = caps
        .get(3)
        .map_or(Some(0), |m| m.as_str().parse().ok())?;

    let sign = if &caps[1] == "-" { -1 } else { 1 };
    Some(sign * (hours * 60 + minutes))
}

impl From<&str> for Timezone {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for Timezone {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<Timezone> for String {
    fn from(timezone: Timezone) -> Self {
        timezone.to_string()
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Local => f.write_str("local"),
            Self::Offset(0) => f.write_str("Z"),
            Self::Offset(minutes) => {
                let sign = if minutes < 0 { '-' } else { '+' };
                let minutes = minutes.unsigned_abs();
                write!(f, "{sign}{:02}:{:02}", minutes / 60, minutes % 60)
            }
        }
    }
}
