//! Template scanning.
//!
//! This module finds placeholders and clause keywords in raw SQL text
//! without parsing it.

mod clause;
mod context;
mod span;

pub use clause::{find_clause, ClauseLocator};
pub(crate) use clause::is_blank;
pub use context::{skip_region, Placeholder, PlaceholderKind, Scanner};
pub use span::Span;
