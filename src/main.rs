//! CLI entry point for postloom

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postloom")]
#[command(author = "Yukang Chen")]
#[command(version)]
#[command(about = "Inspect and scaffold the content of a markdown blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site information
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, page, tag, category)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Show a post (with its neighbours) or a page
    Show {
        /// Slug to look up
        slug: String,

        /// Look the slug up among pages instead of posts
        #[arg(short, long)]
        page: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new post or page
    New {
        /// Title of the new post
        title: String,

        /// Create a page instead of a post
        #[arg(short, long)]
        page: bool,

        /// Post date (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },

    /// Display version information
    Version,
}

fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postloom=debug,info"
    } else {
        "postloom=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    match cli.command {
        Commands::List { r#type } => {
            let blog = postloom::Blog::new(&base_dir)?;
            postloom::commands::list::run(&blog, &r#type)?;
        }

        Commands::Show { slug, page, json } => {
            let blog = postloom::Blog::new(&base_dir)?;
            postloom::commands::show::run(&blog, &slug, page, json)?;
        }

        Commands::New { title, page, date } => {
            let blog = postloom::Blog::new(&base_dir)?;
            let path = postloom::commands::new::create(&blog, &title, page, date)?;
            println!("Created: {:?}", path);
        }

        Commands::Version => {
            println!("postloom version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
