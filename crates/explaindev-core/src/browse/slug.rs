//! Slug, tag and label helpers used when composing new entries.

use regex::Regex;
use std::sync::LazyLock;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

/// Derives a URL-safe slug from a term name.
///
/// ```
/// use explaindev_core::browse::slugify;
///
/// assert_eq!(slugify("REST API"), "rest-api");
/// assert_eq!(slugify("  C++ / Templates! "), "c-templates");
/// ```
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    NON_SLUG_CHARS
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// Splits a comma-separated tag list, trimming entries and dropping blanks.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Display label for a category tag ("frontend" -> "Frontend").
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("GraphQL"), "graphql");
        assert_eq!(slugify("SQL Injection"), "sql-injection");
        assert_eq!(slugify("--Node.js--"), "node-js");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            parse_tags(" api, http ,, web,"),
            vec!["api".to_string(), "http".to_string(), "web".to_string()]
        );
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("frontend"), "Frontend");
        assert_eq!(category_label(""), "");
    }
}
