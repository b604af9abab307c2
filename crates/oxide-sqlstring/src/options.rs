//! Formatting options.

use serde::{Deserialize, Serialize};

use crate::timezone::Timezone;

/// Options controlling how values are rendered into a template.
///
/// Deserializes from a partial document, so the options can live inside a
/// larger connection configuration:
///
/// ```rust
/// use oxide_sqlstring::{FormatOptions, Timezone};
///
/// let options: FormatOptions = serde_json::from_str(r#"{"timezone": "+05:30"}"#).unwrap();
/// assert_eq!(options.timezone, Timezone::Offset(330));
/// assert_eq!(options.stringify_objects, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Whether mappings are rendered as the generic object token.
    ///
    /// `Some(true)` always stringifies. Otherwise a mapping placed right
    /// after a `SET` or `KEY UPDATE` clause expands into assignments.
    pub stringify_objects: Option<bool>,
    /// Time zone used to render dates.
    pub timezone: Timezone,
}

impl FormatOptions {
    /// Creates options with no stringify instruction and local dates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stringify instruction.
    #[must_use]
    pub const fn stringify_objects(self, stringify: bool) -> Self {
        Self {
            stringify_objects: Some(stringify),
            ..self
        }
    }

    /// Sets the time zone.
    #[must_use]
    pub fn timezone(self, timezone: impl Into<Timezone>) -> Self {
        Self {
            timezone: timezone.into(),
            ..self
        }
    }

    /// Returns true if mappings may expand after a clause keyword.
    pub(crate) const fn expands_objects(&self) -> bool {
        !matches!(self.stringify_objects, Some(true))
    }
}
