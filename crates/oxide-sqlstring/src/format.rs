//! Substitution of values into SQL templates.
//!
//! Placeholders are matched to values left to right. `?` takes a value
//! rendered as a literal, `??` a value rendered as an identifier, and longer
//! runs of question marks are left alone. Placeholders inside string
//! literals and comments are plain text.
//!
//! A mapping given for a `?` that directly follows `SET` or `KEY UPDATE`
//! (only whitespace in between) expands into `` `column` = literal `` pairs;
//! anywhere else it renders as a quoted generic object token.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::escape::{escape_id, escape_with, map_to_assignments};
use crate::options::FormatOptions;
use crate::scanner::{is_blank, ClauseLocator, PlaceholderKind, Scanner, Span};
use crate::value::SqlValue;

/// Formats a template with default options.
///
/// ```rust
/// use oxide_sqlstring::{format, params};
///
/// let sql = format("SELECT * FROM ?? WHERE id = ?", &params!["users", 42]);
/// assert_eq!(sql, "SELECT * FROM `users` WHERE id = 42");
/// ```
#[must_use]
pub fn format<'a>(sql: &'a str, values: &[SqlValue]) -> Cow<'a, str> {
    format_with(sql, values, &FormatOptions::default())
}

/// Formats a template.
///
/// Surplus values are ignored and surplus placeholders are left in place.
/// The template is returned borrowed when nothing was substituted.
#[must_use]
pub fn format_with<'a>(sql: &'a str, values: &[SqlValue], options: &FormatOptions) -> Cow<'a, str> {
    Formatter::new(sql, options).run(values)
}

/// Formats a template from a single dynamically typed value.
///
/// A list is taken as the value sequence and NULL leaves the template
/// untouched. Any other value fills the first placeholder.
#[must_use]
pub fn format_value<'a>(sql: &'a str, value: &SqlValue, options: &FormatOptions) -> Cow<'a, str> {
    match value {
        SqlValue::Null => Cow::Borrowed(sql),
        SqlValue::List(values) => format_with(sql, values, options),
        other => format_with(sql, std::slice::from_ref(other), options),
    }
}

/// The current clause position and the locator that produced it.
struct ClauseCursor<'a> {
    locator: ClauseLocator<'a>,
    position: Option<usize>,
}

impl<'a> ClauseCursor<'a> {
    fn new(mut locator: ClauseLocator<'a>) -> Self {
        let position = locator.next_clause();
        if let Some(position) = position {
            trace!(position, "Clause located");
        }
        Self { locator, position }
    }
}

struct Formatter<'a, 'o> {
    sql: &'a str,
    options: &'o FormatOptions,
    placeholders: Scanner<'a>,
    /// Searched the first time a mapping is met.
    clause: Option<ClauseCursor<'a>>,
}

impl<'a, 'o> Formatter<'a, 'o> {
    const fn new(sql: &'a str, options: &'o FormatOptions) -> Self {
        Self {
            sql,
            options,
            placeholders: Scanner::new(sql),
            clause: None,
        }
    }

    fn run(mut self, values: &[SqlValue]) -> Cow<'a, str> {
        let mut values = values.iter();
        let mut output = String::new();
        let mut chunk_start = 0;

        while !values.as_slice().is_empty() {
            let Some(placeholder) = self.placeholders.next_placeholder() else {
                break;
            };
            if placeholder.kind == PlaceholderKind::Ignored {
                continue;
            }
            let Some(value) = values.next() else {
                break;
            };

            let text = if placeholder.kind == PlaceholderKind::Identifier {
                escape_id(value, false)
            } else {
                self.render(value, placeholder.span)
            };

            output.push_str(&self.sql[chunk_start..placeholder.span.start]);
            output.push_str(&text);
            chunk_start = placeholder.span.end;
        }

        let unused = values.as_slice().len();
        if unused > 0 {
            trace!(unused, "Values left without a placeholder");
        }

        if chunk_start == 0 {
            return Cow::Borrowed(self.sql);
        }

        output.push_str(&self.sql[chunk_start..]);
        Cow::Owned(output)
    }

    /// Renders the value of a `?` placeholder.
    fn render(&mut self, value: &SqlValue, span: Span) -> String {
        if let SqlValue::Map(map) = value {
            if self.options.expands_objects() && self.admits_expansion(span) {
                debug!(at = span.start, entries = map.len(), "Expanding mapping");
                let assignments = map_to_assignments(map, &self.options.timezone);
                self.clause = Some(ClauseCursor::new(ClauseLocator::starting_at(
                    self.placeholders.clone(),
                )));
                return assignments;
            }
        }

        escape_with(value, Some(true), &self.options.timezone)
    }

    /// Returns true if a clause keyword sits right before the placeholder.
    fn admits_expansion(&mut self, span: Span) -> bool {
        let sql = self.sql;
        let cursor = self
            .clause
            .get_or_insert_with(|| ClauseCursor::new(ClauseLocator::new(sql)));

        while let Some(position) = cursor.position {
            if position > span.start {
                return false;
            }
            if is_blank(sql.as_bytes(), position, span.start) {
                return true;
            }
            cursor.position = cursor.locator.next_clause();
        }

        false
    }
}
