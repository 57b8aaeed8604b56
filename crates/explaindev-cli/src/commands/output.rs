//! Plain-text rendering of terms for the terminal.

use explaindev_core::browse::category_label;
use explaindev_core::term::Term;

/// One-line summary used by list and search.
pub fn summary_line(term: &Term) -> String {
    format!(
        "{:<20} [{}] {}",
        term.slug,
        category_label(&term.category),
        term.short_description
    )
}

/// Full detail view of a term. Markdown fields are printed verbatim.
pub fn detail(term: &Term, related: &[&Term]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} ({})\n", term.name, category_label(&term.category)));
    out.push_str(&format!("{}\n\n", term.short_description));

    section(&mut out, "Simple explanation", &term.simple_explanation);
    section(&mut out, "Technical explanation", &term.technical_explanation);
    section(&mut out, "Analogy", &term.analogy);
    if let Some(code) = &term.code_example {
        section(&mut out, "Code example", code);
    }

    if !term.tags.is_empty() {
        out.push_str(&format!("Tags: {}\n\n", term.tags.join(", ")));
    }

    if !term.resources.is_empty() {
        out.push_str("Resources:\n");
        for resource in &term.resources {
            match &resource.description {
                Some(description) => out.push_str(&format!(
                    "  - {} <{}>: {}\n",
                    resource.title, resource.url, description
                )),
                None => out.push_str(&format!("  - {} <{}>\n", resource.title, resource.url)),
            }
        }
        out.push('\n');
    }

    if !related.is_empty() {
        out.push_str("Related:\n");
        for other in related {
            out.push_str(&format!("  - {} ({})\n", other.name, other.slug));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "id {} | added by {} on {}",
        term.id,
        term.created_by,
        term.created_at.format("%Y-%m-%d")
    ));
    if let Some(updated_at) = term.updated_at {
        out.push_str(&format!(" | updated {}", updated_at.format("%Y-%m-%d %H:%M")));
    }
    out.push('\n');

    out
}

fn section(out: &mut String, title: &str, body: &str) {
    if body.trim().is_empty() {
        return;
    }
    out.push_str(&format!("## {}\n{}\n\n", title, body.trim_end()));
}
