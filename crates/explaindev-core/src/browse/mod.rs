//! Read-side helpers shared by the views.
//!
//! Filtering keeps collection order; there is no ranking.

mod query;
mod slug;

pub use query::{CategoryFilter, DEFAULT_RELATED_LIMIT, TermQuery, filter_terms, related_terms};
pub use slug::{category_label, parse_tags, slugify};
