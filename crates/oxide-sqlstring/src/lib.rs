//! # oxide-sqlstring
//!
//! Context-aware placeholder formatting and MySQL-style escaping for SQL
//! templates.
//!
//! This crate provides:
//! - A scanner that finds `?` and `??` placeholders while skipping string
//!   literals and comments
//! - Value and identifier escaping with backslash escapes and backtick quoting
//! - Expansion of mappings into `column = value` pairs after `SET` and
//!   `ON DUPLICATE KEY UPDATE`
//!
//! ## Formatting
//!
//! ```rust
//! use oxide_sqlstring::{format, params, sql_map};
//!
//! let sql = format(
//!     "UPDATE ?? SET ? WHERE id = ?",
//!     &params!["users", sql_map! { "name" => "O'Brien", "active" => true }, 7],
//! );
//! assert_eq!(
//!     sql,
//!     "UPDATE `users` SET `name` = 'O\\'Brien', `active` = true WHERE id = 7"
//! );
//! ```
//!
//! ## SQL Injection Prevention
//!
//! Text values are always quoted and escaped, and placeholders inside string
//! literals or comments of the template are never substituted:
//!
//! ```rust
//! use oxide_sqlstring::{format, params};
//!
//! let user_input = "'; DROP TABLE users; --";
//! let sql = format("SELECT '?' AS q, id FROM users WHERE name = ?", &params![user_input]);
//! assert_eq!(
//!     sql,
//!     "SELECT '?' AS q, id FROM users WHERE name = '\\'; DROP TABLE users; --'"
//! );
//! ```
//!
//! ## Raw fragments
//!
//! Trusted SQL can be injected verbatim with [`Raw`]:
//!
//! ```rust
//! use oxide_sqlstring::{format, params, Raw};
//!
//! let sql = format("INSERT INTO t (created) VALUES (?)", &params![Raw::new("NOW()")]);
//! assert_eq!(sql, "INSERT INTO t (created) VALUES (NOW())");
//! ```

pub mod error;
pub mod escape;
pub mod format;
pub mod options;
pub mod scanner;
pub mod timezone;
pub mod value;

pub use error::{EscapeError, Result};
pub use escape::{escape, escape_id, escape_identifier, escape_with, map_to_assignments};
pub use format::{format, format_value, format_with};
pub use options::FormatOptions;
pub use timezone::Timezone;
pub use value::{raw, Raw, SqlDateTime, SqlMap, SqlValue, ToSqlValue, OBJECT_TOKEN};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{EscapeError, Result};
    pub use crate::escape::{escape, escape_id, escape_with};
    pub use crate::format::{format, format_value, format_with};
    pub use crate::options::FormatOptions;
    pub use crate::timezone::Timezone;
    pub use crate::value::{raw, Raw, SqlDateTime, SqlMap, SqlValue, ToSqlValue};
    pub use crate::{params, sql_map};
}
