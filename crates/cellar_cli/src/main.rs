//! Cellar CLI
//!
//! Command-line catalog browser backed by the cellar record store.
//!
//! # Commands
//!
//! - `add` - Add a beer to the personal cellar
//! - `list` - Show one page of the personal cellar
//! - `browse` - Show one page of the public catalog

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Cellar command-line catalog browser.
#[derive(Parser)]
#[command(name = "cellar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the persisted cellar
    #[arg(global = true, short, long, default_value = "cellar_data")]
    data_dir: PathBuf,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a beer to the personal cellar
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Style to file the beer under
        #[arg(short, long)]
        genre: String,

        /// Long-form description
        #[arg(long)]
        description: String,

        /// Label image URL
        #[arg(long)]
        image_url: Option<String>,

        /// Ingredients as a JSON value
        #[arg(long)]
        ingredients: Option<String>,
    },

    /// Show one page of the personal cellar
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Records per page
        #[arg(long, default_value = "10")]
        page_size: usize,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show one page of the public catalog
    Browse {
        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Records per page
        #[arg(long, default_value = "10")]
        page_size: usize,

        /// Catalog endpoint
        #[arg(long, default_value = cellar_catalog::DEFAULT_CATALOG_URL)]
        api_url: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Add {
            name,
            genre,
            description,
            image_url,
            ingredients,
        } => {
            commands::add::run(
                &cli.data_dir,
                &name,
                &genre,
                &description,
                image_url.as_deref(),
                ingredients.as_deref(),
            )?;
        }
        Commands::List {
            page,
            page_size,
            format,
        } => {
            commands::list::run(&cli.data_dir, page, page_size, &format)?;
        }
        Commands::Browse {
            page,
            page_size,
            api_url,
            format,
        } => {
            commands::browse::run(&api_url, page, page_size, &format)?;
        }
    }

    Ok(())
}
