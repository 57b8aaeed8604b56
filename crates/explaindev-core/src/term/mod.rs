//! Term domain models, seed collection and store trait.
//!
//! A term is one glossary entry. The store keeps terms in insertion order
//! and persists the whole collection on every mutation.

mod model;
mod seed;
mod store;

pub use model::{KNOWN_CATEGORIES, NewTerm, Resource, Term, TermPatch};
pub use seed::seed_terms;
pub use store::TermStore;
