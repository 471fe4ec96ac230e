//! CLI administration tool for tinylink.
//!
//! Inspects the JSON data file without starting the server. All commands are
//! read-only: the running server keeps the authoritative copy in memory and
//! would overwrite any external edit on its next write.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- list
//!
//! # Show one link
//! cargo run --bin admin -- show Ab3dE9x
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check that the data file is well formed
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! - `DATA_FILE` (default: `data.json`): data file to read, overridden by `--file`
//! - `BASE_URL` (default: `http://localhost:5000`): origin used to print short URLs

use tinylink::config::{DEFAULT_DATA_FILE, DEFAULT_PORT};
use tinylink::domain::entities::Link;
use tinylink::infrastructure::persistence::read_links;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};

/// CLI tool for inspecting a tinylink data file.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Data file to read
    #[arg(short, long, env = "DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List all links
    List,

    /// Show a single link
    Show {
        /// Short code
        code: String,
    },

    /// Show statistics
    Stats,

    /// Check that the data file loads
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => list_links(&cli.file).await?,
        Commands::Show { code } => show_link(&cli.file, &code).await?,
        Commands::Stats => handle_stats(&cli.file).await?,
        Commands::Check => check_file(&cli.file).await?,
    }

    Ok(())
}

async fn load(path: &Path) -> Result<Vec<Link>> {
    read_links(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

fn base_url() -> String {
    std::env::var("BASE_URL")
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| format!("http://localhost:{}", DEFAULT_PORT))
}

/// Lists all links in creation order.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   Code     Clicks   Created            Original
///   ──────────────────────────────────────────────────────────────
///   Ab3dE9x  3        2024-01-15 10:30   https://example.com/a
/// ```
async fn list_links(path: &Path) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let links = load(path).await?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<8} {:<8} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<8} {:<8} {:<18} {}",
            link.code.cyan(),
            link.clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Shows a single link with its short URL.
async fn show_link(path: &Path, code: &str) -> Result<()> {
    let links = load(path).await?;

    let link = links
        .into_iter()
        .find(|l| l.code == code)
        .with_context(|| format!("Short code '{}' not found", code))?;

    println!("{}", "🔗 Link".bright_blue().bold());
    println!();
    println!("  Code:      {}", link.code.cyan());
    println!(
        "  Short URL: {}",
        format!("{}/s/{}", base_url(), link.code).bright_yellow()
    );
    println!("  Original:  {}", link.original);
    println!(
        "  Clicks:    {}",
        link.clicks.to_string().bright_green().bold()
    );
    println!(
        "  Created:   {}",
        link.created_at.to_rfc3339().bright_black()
    );
    println!();

    Ok(())
}

/// Displays link and click totals and the most visited link.
async fn handle_stats(path: &Path) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links = load(path).await?;
    let total_clicks: u64 = links.iter().map(|l| l.clicks).sum();

    println!(
        "  Links:  {}",
        links.len().to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        total_clicks.to_string().bright_green().bold()
    );

    // First link wins ties, matching list order.
    let top = links
        .iter()
        .fold(None::<&Link>, |best, l| match best {
            Some(b) if b.clicks >= l.clicks => Some(b),
            _ => Some(l),
        });

    if let Some(top) = top.filter(|l| l.clicks > 0) {
        println!(
            "  Top:    {} ({} clicks) {}",
            top.code.cyan(),
            top.clicks,
            top.original.bright_black()
        );
    }
    println!();

    Ok(())
}

/// Verifies that the data file parses and has unique codes.
async fn check_file(path: &Path) -> Result<()> {
    println!("{}", "🔍 Data file check".bright_blue().bold());
    println!();

    let links = load(path).await?;

    let mut seen = std::collections::HashSet::new();
    if let Some(dup) = links.iter().find(|l| !seen.insert(l.code.as_str())) {
        anyhow::bail!("Duplicate short code '{}' in {}", dup.code, path.display());
    }

    println!(
        "{}",
        format!("✅ {} is valid ({} links)", path.display(), links.len())
            .green()
            .bold()
    );
    println!();

    Ok(())
}
