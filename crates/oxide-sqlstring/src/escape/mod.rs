//! Escaping of values and identifiers.

mod datetime;
mod identifier;
mod string;
mod value;

pub use datetime::escape_datetime;
pub use identifier::{escape_id, escape_identifier};
pub use string::{escape_blob, escape_string, format_number};
pub use value::{escape, escape_with, map_to_assignments};
