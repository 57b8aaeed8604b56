mod app;
mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use app::AppState;
use commands::terms::{AddArgs, UpdateArgs};

/// Browse and curate a glossary of developer terms.
#[derive(Parser, Debug)]
#[command(name = "explaindev", version, about)]
struct Cli {
    /// Path to a config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the persisted session and terms
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List terms, optionally within one category
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Search term names and summaries
    Search {
        text: String,
        #[arg(long)]
        category: Option<String>,
    },
    /// Show a term with its related terms
    Show { slug: String },
    /// Add a term authored by the signed-in user
    Add(AddArgs),
    /// Update fields of a term
    Update(UpdateArgs),
    /// Delete a term by id
    Delete { id: String },
    /// Sign in with the demo credentials
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in
    SignUp {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
    },
    /// Clear the current session
    SignOut,
    /// Print the signed-in user
    Whoami,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("explaindev=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("explaindev=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("explaindev starting with args: {:?}", cli);

    let app = AppState::bootstrap(cli.config, cli.data_dir).await?;

    match cli.command {
        Commands::List { category } => commands::terms::list(&app, category).await,
        Commands::Search { text, category } => commands::terms::search(&app, text, category).await,
        Commands::Show { slug } => commands::terms::show(&app, &slug).await,
        Commands::Add(args) => commands::terms::add(&app, args).await,
        Commands::Update(args) => commands::terms::update(&app, args).await,
        Commands::Delete { id } => commands::terms::delete(&app, &id).await,
        Commands::SignIn { email, password } => {
            commands::session::sign_in(&app, &email, &password).await
        }
        Commands::SignUp {
            email,
            password,
            name,
        } => commands::session::sign_up(&app, &email, &password, &name).await,
        Commands::SignOut => commands::session::sign_out(&app).await,
        Commands::Whoami => commands::session::whoami(&app).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["explaindev", "list", "--category", "devops", "--debug"]);
        assert!(cli.debug);
        assert!(matches!(
            cli.command,
            Commands::List { category: Some(ref c) } if c == "devops"
        ));
    }
}
