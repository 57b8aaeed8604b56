//! Term store trait.

use async_trait::async_trait;

use super::model::{NewTerm, Term, TermPatch};
use crate::error::Result;

/// An ordered collection of glossary entries backed by durable storage.
///
/// The collection is populated once, on first access, either from the
/// durable snapshot or from the seed list. Every successful mutation
/// rewrites the whole snapshot.
#[async_trait]
pub trait TermStore: Send + Sync {
    /// Whether the initial load has run.
    async fn is_loaded(&self) -> bool;

    /// Returns the full collection in insertion order.
    async fn terms(&self) -> Result<Vec<Term>>;

    /// Finds a term by its identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<Term>>;

    /// Finds the first term with the given slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Term>>;

    /// Appends a new term under a freshly generated identifier.
    ///
    /// No field validation is performed; partial entries are stored as-is.
    /// Fails only when slug uniqueness is enforced and violated, or when
    /// the storage port fails.
    async fn add_term(&self, data: NewTerm) -> Result<Term>;

    /// Merges `patch` over the term with identifier `id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Term)`: the updated term, with a new `updated_at`
    /// - `Err(GlossaryError::NotFound)`: no such term; collection unchanged
    async fn update_term(&self, id: &str, patch: TermPatch) -> Result<Term>;

    /// Removes the term with identifier `id`. Unknown ids are a no-op.
    async fn delete_term(&self, id: &str) -> Result<()>;
}
