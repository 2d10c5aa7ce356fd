//! CLI administration tool for alias-shortener.
//!
//! Creates and inspects alias mappings and checks the database directly,
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create an alias (prompts for the URL when omitted)
//! cargo run --bin admin -- url add https://example.com --alias golang
//!
//! # Show where an alias points
//! cargo run --bin admin -- url get golang
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `ALIAS_LENGTH`, `ALIAS_MAX_ATTEMPTS` (optional): generation policy

use alias_shortener::api::dto::url::SaveUrlRequest;
use alias_shortener::application::services::{AliasService, RedirectResolver};
use alias_shortener::config::{alias_policy_from_env, mask_connection_string};
use alias_shortener::domain::repositories::StoreProbe;
use alias_shortener::error::AppError;
use alias_shortener::infrastructure::persistence::PgUrlRepository;
use alias_shortener::utils::alias_generator::RandomAliasGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::sync::Arc;
use std::time::Duration;
use validator::Validate;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage alias mappings
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UrlAction {
    /// Map a URL to an alias
    Add {
        /// Target URL (prompted for when omitted)
        url: Option<String>,

        /// Requested alias (generated when omitted)
        #[arg(short, long)]
        alias: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the URL an alias points to
    Get { alias: String },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let repo = PgUrlRepository::connect(&database_url, 2, Duration::from_secs(10))
        .await
        .with_context(|| {
            format!(
                "Failed to connect to {}",
                mask_connection_string(&database_url)
            )
        })?;
    let repo = Arc::new(repo);

    match cli.command {
        Commands::Url { action } => handle_url_action(action, repo).await?,
        Commands::Stats => handle_stats(&repo).await?,
        Commands::Db { action } => handle_db_action(action, &repo).await?,
    }

    Ok(())
}

/// Dispatches mapping commands.
async fn handle_url_action(action: UrlAction, repo: Arc<PgUrlRepository>) -> Result<()> {
    match action {
        UrlAction::Add { url, alias, yes } => add_url(repo, url, alias, yes).await,
        UrlAction::Get { alias } => get_url(repo, alias).await,
    }
}

/// Creates a mapping with interactive prompts.
///
/// Input is checked with the same rules as `POST /api/v1/url` before the
/// store is touched.
async fn add_url(
    repo: Arc<PgUrlRepository>,
    url: Option<String>,
    alias: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Add URL".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("Target URL").interact_text()?,
    };

    let request = SaveUrlRequest { url, alias };
    if let Err(errors) = request.validate() {
        let err = AppError::from(errors);
        anyhow::bail!("{}", err.message());
    }

    println!("{}", "Mapping details:".bright_white().bold());
    println!("  URL:   {}", request.url.cyan());
    println!(
        "  Alias: {}",
        request
            .requested_alias()
            .unwrap_or("<generated>")
            .bright_yellow()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this mapping?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = AliasService::new(
        repo,
        Arc::new(RandomAliasGenerator::new()),
        alias_policy_from_env()?,
    );

    let created = service
        .create_short_link(&request.url, request.requested_alias())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add URL: {}", e))?;

    println!("{}", "✅ URL added".green().bold());
    println!();
    println!("  Alias:    {}", created.alias.bright_yellow().bold());
    println!("  Id:       {}", created.id.to_string().bright_black());
    println!("  Attempts: {}", created.attempts.to_string().bright_black());
    println!();

    Ok(())
}

/// Prints the URL mapped to `alias`, with the stored row when available.
async fn get_url(repo: Arc<PgUrlRepository>, alias: String) -> Result<()> {
    let resolver = RedirectResolver::new(repo.clone());

    let target = resolver
        .resolve(&alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve '{}': {}", alias, e))?;

    println!("  {} → {}", alias.cyan(), target.bright_white());

    if let Some(mapping) = repo
        .find_mapping(&alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load mapping: {}", e))?
    {
        println!("  Id:      {}", mapping.id.to_string().bright_black());
        println!(
            "  Created: {}",
            mapping
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    Ok(())
}

/// Displays system statistics.
async fn handle_stats(repo: &PgUrlRepository) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;

    println!(
        "  Mappings: {}",
        count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, repo: &PgUrlRepository) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            repo.ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version = repo
                .server_version()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to query version: {}", e))?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
