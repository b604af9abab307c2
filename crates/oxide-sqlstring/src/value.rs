//! Values that can be substituted into a SQL template.

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::error::{EscapeError, Result};
use crate::escape::format_number;

/// Text a mapping renders as when it is not expanded into assignments.
pub const OBJECT_TOKEN: &str = "[object Object]";

/// A value that can be escaped into SQL text.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL (or a missing value).
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value, including NaN and the infinities.
    Float(f64),
    /// Text value.
    Text(String),
    /// Point in time, possibly invalid.
    DateTime(SqlDateTime),
    /// Binary blob value.
    Blob(Vec<u8>),
    /// Pre-escaped SQL emitted verbatim.
    Raw(Raw),
    /// Ordered list; nested lists render as parenthesised groups.
    List(Vec<SqlValue>),
    /// String-keyed mapping.
    Map(SqlMap),
    /// A callable handed over by a dynamic host binding, kept as its printed
    /// form. Mapping expansion skips it.
    Function(String),
}

impl SqlValue {
    /// Returns a short name for the kind of value, used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "string",
            Self::DateTime(_) => "datetime",
            Self::Blob(_) => "blob",
            Self::Raw(_) => "raw",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Function(_) => "function",
        }
    }

    /// Returns the plain textual form of the value, without any quoting.
    ///
    /// This is what identifiers are built from.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Null => String::from("null"),
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Float(f) => format_number(*f),
            Self::Text(s) | Self::Function(s) => s.clone(),
            Self::DateTime(dt) => dt.instant().map_or_else(
                || String::from("Invalid Date"),
                |instant| instant.to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
            Self::Blob(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Self::Raw(raw) => raw.to_sql_string().to_owned(),
            Self::List(items) => items
                .iter()
                .map(Self::to_text)
                .collect::<Vec<_>>()
                .join(","),
            Self::Map(_) => String::from(OBJECT_TOKEN),
        }
    }
}

/// A fragment of SQL that is emitted exactly as given.
///
/// Raw fragments bypass all escaping; only build them from trusted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw(String);

impl Raw {
    /// Wraps trusted SQL text.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self(sql.into())
    }

    /// Returns the SQL text.
    #[must_use]
    pub fn to_sql_string(&self) -> &str {
        &self.0
    }

    /// Consumes the fragment, returning its text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<SqlValue> for Raw {
    type Error = EscapeError;

    fn try_from(value: SqlValue) -> Result<Self> {
        match value {
            SqlValue::Text(sql) => Ok(Self(sql)),
            other => Err(EscapeError::invalid_argument("string", other.kind_name())),
        }
    }
}

/// Builds a raw fragment from a dynamically typed value.
///
/// # Errors
///
/// Returns [`EscapeError::InvalidArgument`] unless the value is text.
pub fn raw(value: impl ToSqlValue) -> Result<Raw> {
    Raw::try_from(value.to_sql_value())
}

/// An instant in time that may be invalid.
///
/// Invalid instants render as `NULL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SqlDateTime(Option<DateTime<Utc>>);

impl SqlDateTime {
    /// Creates an invalid instant.
    #[must_use]
    pub const fn invalid() -> Self {
        Self(None)
    }

    /// Creates a valid instant.
    #[must_use]
    pub const fn from_utc(instant: DateTime<Utc>) -> Self {
        Self(Some(instant))
    }

    /// Creates an instant from milliseconds since the Unix epoch.
    #[must_use]
    pub fn from_timestamp_millis(millis: i64) -> Self {
        Self(DateTime::from_timestamp_millis(millis))
    }

    /// Interprets calendar fields in the local time zone.
    ///
    /// An ambiguous local time resolves to the earlier instant; a local time
    /// skipped by a transition is invalid.
    #[must_use]
    pub fn from_local(naive: NaiveDateTime) -> Self {
        Self(
            Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| local.with_timezone(&Utc)),
        )
    }

    /// Returns the instant, or `None` if it is invalid.
    #[must_use]
    pub const fn instant(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Returns true if the instant is valid.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0.is_some()
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for SqlDateTime {
    fn from(instant: DateTime<Tz>) -> Self {
        Self(Some(instant.with_timezone(&Utc)))
    }
}

/// An insertion-ordered mapping from column names to values.
///
/// Keys are unique: inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlMap {
    entries: Vec<(String, SqlValue)>,
}

impl SqlMap {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a value, returning the one previously stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToSqlValue) -> Option<SqlValue> {
        let key = key.into();
        let value = value.to_sql_value();

        if let Some((_, slot)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(slot, value));
        }

        self.entries.push((key, value));
        None
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SqlValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: ToSqlValue> FromIterator<(K, V)> for SqlMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Trait for types that can be converted to SQL values.
pub trait ToSqlValue {
    /// Converts the value to a `SqlValue`.
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Bool(self)
    }
}

macro_rules! int_to_sql_value {
    ($($ty:ty),*) => {
        $(
            impl ToSqlValue for $ty {
                fn to_sql_value(self) -> SqlValue {
                    SqlValue::Int(i64::from(self))
                }
            }
        )*
    };
}

int_to_sql_value!(i64, i32, i16, i8, u32, u16, u8);

impl ToSqlValue for f64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(self)
    }
}

impl ToSqlValue for f32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(f64::from(self))
    }
}

impl ToSqlValue for String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self)
    }
}

impl ToSqlValue for &String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self.clone())
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(String::from(self))
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        match self {
            Some(v) => v.to_sql_value(),
            None => SqlValue::Null,
        }
    }
}

impl ToSqlValue for Vec<u8> {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self)
    }
}

impl ToSqlValue for &[u8] {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self.to_vec())
    }
}

impl ToSqlValue for Vec<SqlValue> {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::List(self)
    }
}

impl ToSqlValue for SqlMap {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Map(self)
    }
}

impl ToSqlValue for Raw {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Raw(self)
    }
}

impl ToSqlValue for SqlDateTime {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::DateTime(self)
    }
}

impl<Tz: TimeZone> ToSqlValue for DateTime<Tz> {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::DateTime(SqlDateTime::from(self))
    }
}

impl ToSqlValue for NaiveDateTime {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::DateTime(SqlDateTime::from_local(self))
    }
}

impl ToSqlValue for serde_json::Value {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::from(self)
    }
}

/// JSON objects become mappings and arrays become lists. Integral numbers
/// that fit an `i64` become integers, every other number a float.
impl From<serde_json::Value> for SqlValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n.as_i64().map_or_else(
                || Self::Float(n.as_f64().unwrap_or(f64::NAN)),
                Self::Int,
            ),
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(object) => Self::Map(object.into_iter().collect()),
        }
    }
}

/// Builds a `Vec<SqlValue>` from heterogeneous expressions.
///
/// ```rust
/// use oxide_sqlstring::{params, SqlValue};
///
/// let values = params![1, "a", None::<i32>];
/// assert_eq!(values[2], SqlValue::Null);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        ::std::vec::Vec::<$crate::SqlValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::ToSqlValue::to_sql_value($value)),+]
    };
}

/// Builds a [`SqlMap`](crate::SqlMap) from `key => value` pairs.
///
/// ```rust
/// use oxide_sqlstring::sql_map;
///
/// let map = sql_map! { "name" => "John", "age" => 30 };
/// assert_eq!(map.len(), 2);
/// ```
#[macro_export]
macro_rules! sql_map {
    () => {
        $crate::SqlMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::SqlMap::new();
        $(map.insert($key, $value);)+
        map
    }};
}
