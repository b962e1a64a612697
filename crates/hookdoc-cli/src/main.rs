//! Hookdoc CLI - browse and build React hook documentation

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use hookdoc_core::search::DESCRIPTION_PENALTY;
use hookdoc_core::{registry, search, Banner, HookEntry};
use tracing_subscriber::EnvFilter;

mod build;

/// Number of suggestions offered for an unknown hook name
const MAX_SUGGESTIONS: usize = 3;

#[derive(Parser)]
#[command(name = "hookdoc")]
#[command(version = hookdoc_core::VERSION)]
#[command(about = "Documentation for React hook APIs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every documented hook
    List {
        /// Print the full entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the documentation for one hook
    Show {
        /// Hook name, e.g. useState
        id: String,
    },

    /// Search hook names and descriptions
    Search {
        /// Search text
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Print the page banner markup
    Banner,

    /// Generate documentation files
    Build {
        /// Path to a hookdoc.toml (defaults to ./hookdoc.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory for generated documentation
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (html, markdown or json)
        #[arg(short, long)]
        format: Option<String>,

        /// Skip the per-hook pages (html only)
        #[arg(long)]
        no_detail_pages: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List { json }) => list_hooks(json)?,

        Some(Commands::Show { id }) => show_hook(&id)?,

        Some(Commands::Search { query, limit }) => search_hooks(&query, limit),

        Some(Commands::Banner) => print!("{}", Banner::render()),

        Some(Commands::Build {
            config,
            output,
            format,
            no_detail_pages,
        }) => {
            let options = build::BuildOptions {
                config,
                output,
                format,
                no_detail_pages,
            };
            let summary = build::build_site(&options)?;
            summary.print();
        }

        None => list_hooks(false)?,
    }

    Ok(())
}

/// Print hook names and summaries in presentation order
fn list_hooks(json: bool) -> Result<()> {
    print!("{}", render_list(json)?);
    Ok(())
}

/// Text of `hookdoc list`: aligned names and summaries, or the JSON export
fn render_list(json: bool) -> Result<String> {
    if json {
        let mut output = hookdoc_core::render::export_json(registry())?;
        output.push('\n');
        return Ok(output);
    }

    let width = registry().ids().map(str::len).max().unwrap_or(0);
    let mut output = String::new();
    for entry in registry() {
        output.push_str(&format!(
            "{:width$}  {}\n",
            entry.id,
            entry.summary(),
            width = width
        ));
    }
    Ok(output)
}

/// Print a single entry, suggesting close names on a miss
fn show_hook(id: &str) -> Result<()> {
    match registry().get(id) {
        Some(entry) => {
            print_entry(entry);
            Ok(())
        }
        None => {
            let suggestions = suggest(id);
            if suggestions.is_empty() {
                bail!("unknown hook '{}'", id);
            }
            bail!(
                "unknown hook '{}', did you mean: {}?",
                id,
                suggestions.join(", ")
            );
        }
    }
}

fn print_entry(entry: &HookEntry) {
    println!("{}", entry.id);
    println!("{}", "=".repeat(entry.id.len()));
    println!();
    println!("{}", entry.description);
    println!();
    println!("Example:");
    println!();
    for line in entry.example.lines() {
        println!("    {}", line);
    }
    println!();
    println!("Reference: {}", entry.reference_url);
}

/// Close hook names for an unknown id
fn suggest(id: &str) -> Vec<&'static str> {
    search(registry(), id)
        .into_iter()
        .filter(|hit| hit.score < DESCRIPTION_PENALTY)
        .take(MAX_SUGGESTIONS)
        .map(|hit| hit.entry.id)
        .collect()
}

fn search_hooks(query: &str, limit: usize) {
    let hits = search(registry(), query);
    if hits.is_empty() {
        println!("No hooks match '{}'", query.trim());
        return;
    }

    for hit in hits.into_iter().take(limit) {
        println!("{:24} {}", hit.entry.id, hit.entry.summary());
    }
}
