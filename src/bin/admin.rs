//! CLI administration tool for hash-redirect.
//!
//! Inspects and appends to the Redis store without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Show the code a URL derives to (no store access)
//! cargo run --bin admin -- derive "https://example.com/a"
//!
//! # Register a URL
//! cargo run --bin admin -- shorten "https://example.com/a"
//!
//! # Resolve a code
//! cargo run --bin admin -- lookup 2dce7d0e
//!
//! # List every mapping
//! cargo run --bin admin -- list
//!
//! # Check the store connection
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `REDIS_URL` (or `REDIS_HOST` and friends) is required
//! for every command except `derive`; `APP_ENV` selects the origin printed in
//! short links.

use hash_redirect::application::services::LinkService;
use hash_redirect::config;
use hash_redirect::domain::entities::Registration;
use hash_redirect::infrastructure::store::RedisStore;
use hash_redirect::utils::code_generator::derive_code;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::process::ExitCode;
use std::sync::Arc;

/// CLI tool for managing hash-redirect.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the short code derived from a URL
    Derive {
        /// URL to derive a code for
        url: String,
    },

    /// Register a URL and print its short link
    Shorten {
        /// URL to shorten
        url: String,
    },

    /// Print the URL stored under a code
    Lookup {
        /// 8-character short code
        code: String,
    },

    /// List every stored mapping
    List,

    /// Check the store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Derive { url } => {
            println!("{}", derive_code(&url).as_str().bright_yellow().bold());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Shorten { url } => shorten(&connect().await?, &url).await,
        Commands::Lookup { code } => lookup(&connect().await?, &code).await,
        Commands::List => list(&connect().await?).await,
        Commands::Check => check(&connect().await?).await,
    }
}

/// Loads configuration, connects to Redis and wraps it in a [`LinkService`].
async fn connect() -> Result<LinkService> {
    let config = config::load_from_env()?;

    let redis_url = config
        .redis_url
        .as_deref()
        .context("REDIS_URL (or REDIS_HOST) must be set for store commands")?;

    let store = RedisStore::connect(redis_url, config.redis_key_prefix.clone())
        .await
        .context("Failed to connect to Redis store")?;

    Ok(LinkService::new(Arc::new(store), config.base_url()))
}

/// Registers a URL and reports what happened to its code.
async fn shorten(service: &LinkService, url: &str) -> Result<ExitCode> {
    let (mapping, registration) = service
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to register URL: {}", e))?;

    let short_url = service.short_url(&mapping.code);

    match registration {
        Registration::Created => {
            println!("{}", "✅ Registered".green().bold());
        }
        Registration::AlreadyPresent => {
            println!("{}", "ℹ️  Already registered".bright_blue());
        }
        Registration::Collision { existing_url } => {
            print_collision(&existing_url);
        }
        Registration::Raced => {
            let existing_url = service
                .lookup(&mapping.code)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to read back code: {}", e))?
                .unwrap_or_else(|| "<unknown>".to_string());
            print_collision(&existing_url);
        }
    }

    println!("  Code:      {}", mapping.code.as_str().cyan());
    println!("  Short URL: {}", short_url.bright_yellow());
    println!("  Original:  {}", mapping.original_url);

    Ok(ExitCode::SUCCESS)
}

fn print_collision(existing_url: &str) {
    println!(
        "{}",
        "⚠️  Code already taken by a different URL, first registration kept".yellow()
    );
    println!("  Existing:  {}", existing_url.bright_black());
}

/// Prints the URL for a code, exiting non-zero when it is unknown.
async fn lookup(service: &LinkService, code: &str) -> Result<ExitCode> {
    match service.resolve(code).await {
        Ok(url) => {
            println!("{}", url);
            Ok(ExitCode::SUCCESS)
        }
        Err(hash_redirect::AppError::NotFound { .. }) => {
            eprintln!("{} {}", "❌ Not found:".red(), code);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(anyhow::anyhow!("Lookup failed: {}", e)),
    }
}

/// Lists every mapping.
///
/// # Output Format
///
/// ```text
/// 📋 Short links
///
///   2dce7d0e  https://example.com/a
///   d7fe59d0  https://example.com/b
///
///   Total: 2
/// ```
async fn list(service: &LinkService) -> Result<ExitCode> {
    println!("{}", "📋 Short links".bright_blue().bold());
    println!();

    let mappings = service
        .enumerate()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list mappings: {}", e))?;

    if mappings.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(ExitCode::SUCCESS);
    }

    for mapping in &mappings {
        println!("  {}  {}", mapping.code.as_str().cyan(), mapping.original_url);
    }

    println!();
    println!(
        "  Total: {}",
        mappings.len().to_string().bright_white().bold()
    );

    Ok(ExitCode::SUCCESS)
}

/// Pings the store.
async fn check(service: &LinkService) -> Result<ExitCode> {
    if service.store_healthy().await {
        println!("{}", "✅ Store connection OK".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{}", "❌ Store unreachable".red().bold());
        Ok(ExitCode::FAILURE)
    }
}
