//! Term domain models.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Category tags the views know how to present. The set is open-ended:
/// terms may carry any category string.
pub const KNOWN_CATEGORIES: [&str; 4] = ["frontend", "backend", "database", "devops"];

/// An external reference attached to a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A glossary entry describing one technical concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    /// Unique identifier assigned by the store
    pub id: String,
    pub name: String,
    /// URL-safe lookup key
    pub slug: String,
    pub category: String,
    pub short_description: String,
    pub simple_explanation: String,
    /// Markdown
    pub technical_explanation: String,
    /// Markdown
    pub analogy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_example: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Term {
    /// Builds a stored term from caller-supplied data.
    ///
    /// `created_at` defaults to `now` when the caller left it empty.
    /// `updated_at` always starts unset.
    pub fn from_new(id: impl Into<String>, data: NewTerm, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: data.name,
            slug: data.slug,
            category: data.category,
            short_description: data.short_description,
            simple_explanation: data.simple_explanation,
            technical_explanation: data.technical_explanation,
            analogy: data.analogy,
            code_example: data.code_example,
            tags: data.tags,
            resources: data.resources,
            created_by: data.created_by,
            created_at: data.created_at.unwrap_or(now),
            updated_at: None,
        }
    }

    /// Merges the provided fields over this record and stamps `updated_at`.
    pub fn apply_patch(&mut self, patch: TermPatch, now: DateTime<Utc>) {
        let TermPatch {
            name,
            slug,
            category,
            short_description,
            simple_explanation,
            technical_explanation,
            analogy,
            code_example,
            tags,
            resources,
            created_by,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(slug) = slug {
            self.slug = slug;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(short_description) = short_description {
            self.short_description = short_description;
        }
        if let Some(simple_explanation) = simple_explanation {
            self.simple_explanation = simple_explanation;
        }
        if let Some(technical_explanation) = technical_explanation {
            self.technical_explanation = technical_explanation;
        }
        if let Some(analogy) = analogy {
            self.analogy = analogy;
        }
        if let Some(code_example) = code_example {
            self.code_example = code_example;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
        if let Some(resources) = resources {
            self.resources = resources;
        }
        if let Some(created_by) = created_by {
            self.created_by = created_by;
        }

        self.updated_at = Some(self.next_update_timestamp(now));
    }

    /// Latest timestamp already recorded on this term.
    pub fn last_modified(&self) -> DateTime<Utc> {
        match self.updated_at {
            Some(updated_at) if updated_at > self.created_at => updated_at,
            _ => self.created_at,
        }
    }

    /// Returns `now`, nudged forward when the clock has not advanced past
    /// the record's latest timestamp. Update timestamps are strictly
    /// increasing per record.
    fn next_update_timestamp(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let last = self.last_modified();
        if now > last {
            now
        } else {
            last + Duration::milliseconds(1)
        }
    }

    /// True if the term carries `tag` (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Caller-supplied data for a new term.
///
/// Every field defaults to empty; the store keeps whatever it is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTerm {
    pub name: String,
    pub slug: String,
    pub category: String,
    pub short_description: String,
    pub simple_explanation: String,
    pub technical_explanation: String,
    pub analogy: String,
    pub code_example: Option<String>,
    pub tags: Vec<String>,
    pub resources: Vec<Resource>,
    pub created_by: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Partial update for an existing term. `None` leaves a field untouched.
///
/// `code_example` is doubly optional: `Some(None)` clears the sample.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub short_description: Option<String>,
    pub simple_explanation: Option<String>,
    pub technical_explanation: Option<String>,
    pub analogy: Option<String>,
    pub code_example: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub resources: Option<Vec<Resource>>,
    pub created_by: Option<String>,
}

impl TermPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
