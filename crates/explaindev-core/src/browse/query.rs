//! Search and category filtering over a term collection.

use crate::term::Term;

/// How many related terms the detail view shows.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Category restriction for a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parses a category argument; `"all"` and empty input mean no filter.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(trimmed.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

/// A search over name and short description plus a category filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermQuery {
    pub text: String,
    pub category: CategoryFilter,
}

impl TermQuery {
    pub fn new(text: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// Case-insensitive substring match on name or short description,
    /// combined with an exact category match.
    pub fn matches(&self, term: &Term) -> bool {
        if !self.category.matches(&term.category) {
            return false;
        }

        let needle = self.text.trim().to_lowercase();
        needle.is_empty()
            || term.name.to_lowercase().contains(&needle)
            || term.short_description.to_lowercase().contains(&needle)
    }
}

/// Returns the terms matching `query`, in collection order.
pub fn filter_terms<'a>(terms: &'a [Term], query: &TermQuery) -> Vec<&'a Term> {
    terms.iter().filter(|term| query.matches(term)).collect()
}

/// Returns up to `limit` other terms sharing the category or any tag with
/// `term`, in collection order.
pub fn related_terms<'a>(terms: &'a [Term], term: &Term, limit: usize) -> Vec<&'a Term> {
    terms
        .iter()
        .filter(|other| other.id != term.id)
        .filter(|other| {
            other.category == term.category || other.tags.iter().any(|tag| term.has_tag(tag))
        })
        .take(limit)
        .collect()
}
