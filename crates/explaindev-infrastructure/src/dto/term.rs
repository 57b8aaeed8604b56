//! Term DTOs and migrations
//!
//! ## Version History
//! - **1.0.0**: Initial schema, matching the browser client's record shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use explaindev_core::term::{Resource, Term};

// ============================================================================
// Resource DTOs
// ============================================================================

/// Resource DTO V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceV1_0_0 {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Resource> for ResourceV1_0_0 {
    fn from(resource: &Resource) -> Self {
        ResourceV1_0_0 {
            title: resource.title.clone(),
            url: resource.url.clone(),
            description: resource.description.clone(),
        }
    }
}

impl From<ResourceV1_0_0> for Resource {
    fn from(dto: ResourceV1_0_0) -> Self {
        Resource {
            title: dto.title,
            url: dto.url,
            description: dto.description,
        }
    }
}

// ============================================================================
// Term DTOs
// ============================================================================

/// Term DTO V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct TermV1_0_0 {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub short_description: String,
    pub simple_explanation: String,
    pub technical_explanation: String,
    pub analogy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_example: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub resources: Vec<ResourceV1_0_0>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Convert TermV1_0_0 DTO to domain model
impl IntoDomain<Term> for TermV1_0_0 {
    fn into_domain(self) -> Term {
        Term {
            id: self.id,
            name: self.name,
            slug: self.slug,
            category: self.category,
            short_description: self.short_description,
            simple_explanation: self.simple_explanation,
            technical_explanation: self.technical_explanation,
            analogy: self.analogy,
            code_example: self.code_example,
            tags: self.tags,
            resources: self.resources.into_iter().map(Into::into).collect(),
            created_by: self.created_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Convert domain model to TermV1_0_0 DTO (for version-migrate save support)
impl FromDomain<Term> for TermV1_0_0 {
    fn from_domain(term: Term) -> Self {
        TermV1_0_0 {
            resources: term.resources.iter().map(Into::into).collect(),
            id: term.id,
            name: term.name,
            slug: term.slug,
            category: term.category,
            short_description: term.short_description,
            simple_explanation: term.simple_explanation,
            technical_explanation: term.technical_explanation,
            analogy: term.analogy,
            code_example: term.code_example,
            tags: term.tags,
            created_by: term.created_by,
            created_at: term.created_at,
            updated_at: term.updated_at,
        }
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates a Migrator for Term entities.
pub fn create_term_migrator() -> version_migrate::Migrator {
    version_migrate::migrator!("term" => [
        TermV1_0_0,
        Term
    ], save = true)
    .expect("Failed to create term migrator")
}
