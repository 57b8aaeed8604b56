//! Term commands: browse, show and edit.

use anyhow::{Result, bail};
use clap::Args;
use explaindev_core::browse::{
    CategoryFilter, DEFAULT_RELATED_LIMIT, TermQuery, filter_terms, parse_tags, related_terms,
    slugify,
};
use explaindev_core::term::{KNOWN_CATEGORIES, NewTerm, TermPatch};

use super::output;
use crate::app::AppState;

/// Fields accepted by `add`.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Human-readable name
    #[arg(long)]
    pub name: String,
    /// URL-safe slug; derived from the name when omitted
    #[arg(long)]
    pub slug: Option<String>,
    #[arg(long, default_value = "frontend")]
    pub category: String,
    #[arg(long)]
    pub short_description: String,
    #[arg(long)]
    pub simple_explanation: String,
    #[arg(long, default_value = "")]
    pub technical_explanation: String,
    #[arg(long, default_value = "")]
    pub analogy: String,
    #[arg(long)]
    pub code_example: Option<String>,
    /// Comma-separated tags
    #[arg(long, default_value = "")]
    pub tags: String,
}

impl AddArgs {
    /// Checks the fields the add form insists on and returns the slug to
    /// store, derived from the name when none was given.
    fn required_slug(&self) -> Result<String> {
        let slug = match &self.slug {
            Some(slug) => slug.trim().to_string(),
            None => slugify(&self.name),
        };

        let required = [
            self.name.as_str(),
            slug.as_str(),
            self.short_description.as_str(),
            self.simple_explanation.as_str(),
        ];
        if required.iter().any(|value| value.trim().is_empty()) {
            bail!("Please fill in all required fields");
        }
        Ok(slug)
    }
}

/// Fields accepted by `update`; omitted fields are left untouched.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Identifier of the term to update
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub slug: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub short_description: Option<String>,
    #[arg(long)]
    pub simple_explanation: Option<String>,
    #[arg(long)]
    pub technical_explanation: Option<String>,
    #[arg(long)]
    pub analogy: Option<String>,
    #[arg(long, conflicts_with = "clear_code_example")]
    pub code_example: Option<String>,
    /// Remove the code example
    #[arg(long)]
    pub clear_code_example: bool,
    /// Comma-separated tags (replaces the current list)
    #[arg(long)]
    pub tags: Option<String>,
}

impl UpdateArgs {
    fn into_patch(self) -> TermPatch {
        let code_example = if self.clear_code_example {
            Some(None)
        } else {
            self.code_example.map(Some)
        };

        TermPatch {
            name: self.name,
            slug: self.slug,
            category: self.category,
            short_description: self.short_description,
            simple_explanation: self.simple_explanation,
            technical_explanation: self.technical_explanation,
            analogy: self.analogy,
            code_example,
            tags: self.tags.as_deref().map(parse_tags),
            ..Default::default()
        }
    }
}

pub async fn list(app: &AppState, category: Option<String>) -> Result<()> {
    search(app, String::new(), category).await
}

pub async fn search(app: &AppState, text: String, category: Option<String>) -> Result<()> {
    let terms = app.term_store.terms().await?;
    let query = TermQuery::new(
        text,
        category
            .as_deref()
            .map(CategoryFilter::parse)
            .unwrap_or_default(),
    );

    let found = filter_terms(&terms, &query);
    if found.is_empty() {
        println!("No terms found. Try a different search term or category.");
        return Ok(());
    }

    for term in found {
        println!("{}", output::summary_line(term));
    }
    Ok(())
}

pub async fn show(app: &AppState, slug: &str) -> Result<()> {
    let Some(term) = app.term_store.find_by_slug(slug).await? else {
        bail!("Term '{}' not found", slug);
    };

    let terms = app.term_store.terms().await?;
    let related = related_terms(&terms, &term, DEFAULT_RELATED_LIMIT);
    print!("{}", output::detail(&term, &related));
    Ok(())
}

pub async fn add(app: &AppState, args: AddArgs) -> Result<()> {
    let Some(user) = app.session_store.current_user().await else {
        bail!("Sign in to add terms");
    };

    let slug = args.required_slug()?;
    if !KNOWN_CATEGORIES.contains(&args.category.as_str()) {
        tracing::warn!("Storing term under unlisted category '{}'", args.category);
    }

    let term = app
        .term_store
        .add_term(NewTerm {
            name: args.name,
            slug,
            category: args.category,
            short_description: args.short_description,
            simple_explanation: args.simple_explanation,
            technical_explanation: args.technical_explanation,
            analogy: args.analogy,
            code_example: args.code_example,
            tags: parse_tags(&args.tags),
            resources: Vec::new(),
            created_by: user.uid,
            created_at: None,
        })
        .await?;

    println!("Added '{}' as {} (id {})", term.name, term.slug, term.id);
    Ok(())
}

pub async fn update(app: &AppState, args: UpdateArgs) -> Result<()> {
    if app.session_store.current_user().await.is_none() {
        bail!("Sign in to edit terms");
    }

    let id = args.id.clone();
    let patch = args.into_patch();
    if patch.is_empty() {
        bail!("Nothing to update: pass at least one field");
    }

    let term = app.term_store.update_term(&id, patch).await?;
    println!("Updated '{}' ({})", term.name, term.slug);
    Ok(())
}

pub async fn delete(app: &AppState, id: &str) -> Result<()> {
    if app.session_store.current_user().await.is_none() {
        bail!("Sign in to delete terms");
    }

    app.term_store.delete_term(id).await?;
    println!("Deleted {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct AddCommand {
        #[command(flatten)]
        args: AddArgs,
    }

    fn parse_add(extra: &[&str]) -> std::result::Result<AddArgs, clap::Error> {
        let argv = ["add", "--name", "GraphQL"].iter().chain(extra);
        AddCommand::try_parse_from(argv).map(|command| command.args)
    }

    #[test]
    fn test_add_requires_descriptions() {
        assert!(parse_add(&["--simple-explanation", "Ask for what you need"]).is_err());
        assert!(parse_add(&["--short-description", "A query language"]).is_err());
    }

    #[test]
    fn test_add_rejects_blank_required_fields() {
        let args = parse_add(&[
            "--short-description",
            "A query language",
            "--simple-explanation",
            "  ",
        ])
        .unwrap();

        assert!(args.required_slug().is_err());
    }

    #[test]
    fn test_add_derives_slug_from_name() {
        let args = parse_add(&[
            "--short-description",
            "A query language",
            "--simple-explanation",
            "Ask for exactly the data you need",
        ])
        .unwrap();

        assert_eq!(args.required_slug().unwrap(), "graphql");
    }

    fn update_args(id: &str) -> UpdateArgs {
        UpdateArgs {
            id: id.to_string(),
            name: None,
            slug: None,
            category: None,
            short_description: None,
            simple_explanation: None,
            technical_explanation: None,
            analogy: None,
            code_example: None,
            clear_code_example: false,
            tags: None,
        }
    }

    #[test]
    fn test_empty_update_is_empty_patch() {
        assert!(update_args("1").into_patch().is_empty());
    }

    #[test]
    fn test_update_patch_fields() {
        let mut args = update_args("1");
        args.tags = Some("api, web".to_string());
        args.clear_code_example = true;

        let patch = args.into_patch();

        assert_eq!(patch.tags, Some(vec!["api".to_string(), "web".to_string()]));
        assert_eq!(patch.code_example, Some(None));
        assert!(patch.name.is_none());
    }
}
