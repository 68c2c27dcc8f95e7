//! CLI administration tool for snaplink.
//!
//! Inspects the store without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show PostgreSQL version
//! cargo run --bin admin -- db info
//!
//! # Totals of urls and clicks
//! cargo run --bin admin -- stats
//!
//! # Details of one short code
//! cargo run --bin admin -- lookup Lc4KTFBE
//!
//! # Print the code a URL would receive (no database needed)
//! cargo run --bin admin -- derive https://example.com/a
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use snaplink::application::services::StatsService;
use snaplink::config::Config;
use snaplink::infrastructure::persistence::{PgClickRepository, PgUrlRepository, pool};
use snaplink::utils::short_code::derive_short_code;
use snaplink::utils::url_validator::validate_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing snaplink.
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
    /// Show totals of urls and clicks
    Stats,

    /// Show details and recent clicks of a short code
    Lookup {
        /// Short code to inspect
        code: String,
    },

    /// Print the short code a URL would receive
    Derive {
        /// URL to derive a code for
        url: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
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

    if let Commands::Derive { url } = &cli.command {
        return handle_derive(url);
    }

    let config = Config::from_env()?;
    config.validate()?;
    let pool = pool::connect(&config.database)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Lookup { code } => handle_lookup(&pool, &code).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Derive { .. } => {}
    }

    Ok(())
}

fn stats_service(pool: &PgPool) -> StatsService<PgUrlRepository, PgClickRepository> {
    let pool = Arc::new(pool.clone());
    StatsService::new(
        Arc::new(PgUrlRepository::new(pool.clone())),
        Arc::new(PgClickRepository::new(pool)),
    )
}

/// Prints the derived code and whether the URL would be accepted.
fn handle_derive(url: &str) -> Result<()> {
    println!("  Code: {}", derive_short_code(url).bright_yellow().bold());

    if let Err(e) = validate_url(url) {
        println!("  {}", format!("⚠️  Rejected by the API: {e}").yellow());
    }

    Ok(())
}

/// Displays totals of urls and clicks.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (urls, clicks) = stats_service(pool)
        .totals()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!("  Urls:   {}", urls.to_string().bright_green().bold());
    println!("  Clicks: {}", clicks.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Displays one short code with its latest clicks.
///
/// # Output Format
///
/// ```text
/// 🔗 Lc4KTFBE
///
///   URL:     https://example.com/a
///   Created: 2025-01-02 03:04
///   Clicks:  2
///
///   When                 Referrer                       User agent
///   ─────────────────────────────────────────────────────────────────────
///   2025-01-03 10:30     https://google.com             Mozilla/5.0
/// ```
async fn handle_lookup(pool: &PgPool, code: &str) -> Result<()> {
    let stats = stats_service(pool)
        .stats(code)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;

    println!("{}", format!("🔗 {}", stats.url.short_code).bright_blue().bold());
    println!();
    println!("  URL:     {}", stats.url.original_url.cyan());
    println!(
        "  Created: {}",
        stats
            .url
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!(
        "  Clicks:  {}",
        stats.total_clicks.to_string().bright_green().bold()
    );
    println!();

    if stats.recent_clicks.is_empty() {
        println!("{}", "  No clicks recorded".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<20} {:<30} {}",
        "When".bright_white().bold(),
        "Referrer".bright_white().bold(),
        "User agent".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for click in &stats.recent_clicks {
        println!(
            "  {:<20} {:<30} {}",
            click
                .clicked_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            click.referrer.as_deref().unwrap_or("-"),
            click.user_agent.as_deref().unwrap_or("-")
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
