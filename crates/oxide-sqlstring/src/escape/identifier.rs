//! Backtick-quoted identifiers.

use crate::value::SqlValue;

/// Quotes an identifier.
///
/// Backticks are doubled. Unless `forbid_qualified` is set, a dotted name is
/// quoted segment by segment (`a.b` becomes `` `a`.`b` ``). Text containing
/// the JSON path operator `->` is always quoted as a whole.
#[must_use]
pub fn escape_identifier(identifier: &str, forbid_qualified: bool) -> String {
    let qualified = !forbid_qualified && !identifier.contains("->");

    if !identifier.contains('`') && !(qualified && identifier.contains('.')) {
        return format!("`{identifier}`");
    }

    let escaped = identifier.replace('`', "``");
    if qualified {
        format!("`{}`", escaped.replace('.', "`.`"))
    } else {
        format!("`{escaped}`")
    }
}

/// Quotes a value as an identifier, or a list of values as a comma-separated
/// list of identifiers. Nested lists are flattened.
#[must_use]
pub fn escape_id(value: &SqlValue, forbid_qualified: bool) -> String {
    match value {
        SqlValue::List(items) => items
            .iter()
            .map(|item| escape_id(item, forbid_qualified))
            .collect::<Vec<_>>()
            .join(", "),
        other => escape_identifier(&other.to_text(), forbid_qualified),
    }
}
