//! DocFlow CLI - Markdown converter for Wiki.js.
//!
//! Provides commands for:
//! - `convert`: Convert office documents to Markdown
//! - `publish`: Convert documents and publish them as wiki pages
//! - `export`: Export wiki pages into document formats
//! - `pages` / `dirs` / `check`: Inspect the connected wiki

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ConvertArgs, DirsArgs, ExportArgs, PagesArgs, PublishArgs};
use output::Output;

/// DocFlow - Markdown converter for Wiki.js.
#[derive(Parser)]
#[command(name = "docflow", version, about)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert documents to Markdown.
    Convert(ConvertArgs),
    /// Convert documents and publish them as wiki pages.
    Publish(PublishArgs),
    /// Export wiki pages into document formats.
    Export(ExportArgs),
    /// List the wiki's Markdown pages.
    Pages(PagesArgs),
    /// List the wiki's directories.
    Dirs(DirsArgs),
    /// Check the wiki connection.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Convert(args) => args.execute(),
        Commands::Publish(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Pages(args) => args.execute(),
        Commands::Dirs(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
