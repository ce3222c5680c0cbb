//! florin CLI - UK economic time-series downloader and inflation adjuster.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "florin")]
#[command(about = "UK economic time-series downloader and inflation adjuster", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch datasets and write their CSV series
    Run {
        /// Dataset identifiers to run (e.g., uk-cpi, london). Defaults to the
        /// whole catalog.
        #[arg(short, long)]
        dataset: Vec<String>,

        /// Directory the CSV files are written into
        #[arg(short, long, default_value = "records")]
        output_dir: PathBuf,

        /// Maximum concurrent dataset fetches
        #[arg(long, default_value = "4")]
        concurrency: usize,
    },

    /// List available datasets
    List {
        /// Search pattern
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show dataset details
    Info {
        /// Dataset identifier
        dataset: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Run {
            dataset,
            output_dir,
            concurrency,
        } => commands::run::run(&dataset, output_dir, concurrency, cli.quiet).await,
        Commands::List { search } => commands::list::list_datasets(search.as_deref()),
        Commands::Info { dataset } => commands::info::show_info(&dataset),
    }
}
