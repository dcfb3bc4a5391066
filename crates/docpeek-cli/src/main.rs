//! docpeek command line entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use docpeek_cli::commands;

#[derive(Parser)]
#[command(name = "docpeek", version, about = "Cursor-focused documentation previews")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the fragment for one cursor position and exit
    Preview {
        /// Declaration tree JSON produced by the external compiler
        #[arg(long)]
        tree: PathBuf,
        /// Source file the tree was compiled from
        #[arg(long)]
        source: PathBuf,
        /// 1-based cursor line (0 compiles without rendering)
        #[arg(long)]
        line: u32,
        /// Also show members whose signatures carry no documentation
        #[arg(long)]
        show_empty_signatures: bool,
    },
    /// Serve fragments for cursor/content events read from stdin
    Watch {
        /// Declaration tree JSON, re-read on every compile
        #[arg(long)]
        tree: PathBuf,
        /// Source file the tree was compiled from
        #[arg(long)]
        source: PathBuf,
        /// Also show members whose signatures carry no documentation
        #[arg(long)]
        show_empty_signatures: bool,
    },
}

/// Initialize tracing on stderr; stdout is reserved for fragments.
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Preview {
            tree,
            source,
            line,
            show_empty_signatures,
        } => commands::preview::run(&tree, &source, line, show_empty_signatures).await,
        Commands::Watch {
            tree,
            source,
            show_empty_signatures,
        } => commands::watch::run(&tree, &source, show_empty_signatures).await,
    }
}
