//! Built-in collection adopted on first run.

use super::model::Term;
use crate::error::{GlossaryError, Result};

const SEED_TERMS_JSON: &str = include_str!("../../data/seed_terms.json");

/// Decodes the five built-in glossary entries.
pub fn seed_terms() -> Result<Vec<Term>> {
    serde_json::from_str(SEED_TERMS_JSON)
        .map_err(|e| GlossaryError::internal(format!("Embedded seed terms are invalid: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_terms_decode() {
        let terms = seed_terms().unwrap();
        let names: Vec<&str> = terms.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["REST API", "React Hooks", "SQL Injection", "Docker", "WebSockets"]
        );
    }

    #[test]
    fn test_seed_terms_are_consistent() {
        let terms = seed_terms().unwrap();
        let ids: Vec<&str> = terms.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        assert!(terms.iter().all(|t| t.created_by == "system"));
        assert!(terms.iter().all(|t| t.updated_at.is_none()));
        assert!(terms.iter().all(|t| !t.resources.is_empty()));
    }
}
