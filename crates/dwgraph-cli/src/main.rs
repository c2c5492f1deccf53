//! dwgraph CLI - Query directed weighted graphs stored as JSON.
//!
//! # Commands
//!
//! - `dwgraph info <file>` - Node/edge counts and connectivity
//! - `dwgraph path <file> <src> <dest>` - Shortest path and its length
//! - `dwgraph connected <file>` - Strong connectivity test
//! - `dwgraph components <file>` - Strongly connected components
//! - `dwgraph transpose <file> <out>` - Write the transposed graph
//! - `dwgraph routes <file>` - All-pairs shortest distances
//!
//! # Examples
//!
//! ```bash
//! # Shortest path from node 0 to node 8
//! dwgraph path data/A0.json 0 8
//!
//! # Components, cross-checked with Tarjan's algorithm
//! dwgraph components data/A0.json --tarjan
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;

use commands::{components, connected, info, path, routes, transpose};

/// dwgraph - directed weighted graph toolkit
#[derive(Parser)]
#[command(name = "dwgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show node/edge counts and connectivity
    Info {
        /// Graph file (JSON)
        file: PathBuf,
    },

    /// Find the shortest path between two nodes
    Path {
        /// Graph file (JSON)
        file: PathBuf,

        /// Source node key
        #[arg(allow_negative_numbers = true)]
        src: i32,

        /// Destination node key
        #[arg(allow_negative_numbers = true)]
        dest: i32,

        /// Stop searching once the destination is settled
        #[arg(long)]
        early_exit: bool,
    },

    /// Check whether every node can reach every other node
    Connected {
        /// Graph file (JSON)
        file: PathBuf,
    },

    /// List strongly connected components
    Components {
        /// Graph file (JSON)
        file: PathBuf,

        /// Use Tarjan's algorithm instead of reachability intersection
        #[arg(long)]
        tarjan: bool,
    },

    /// Write the transposed graph to a new file
    Transpose {
        /// Graph file (JSON)
        file: PathBuf,

        /// Output file
        output: PathBuf,

        /// Write compact single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the all-pairs shortest distance table
    Routes {
        /// Graph file (JSON)
        file: PathBuf,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Info { file } => info::execute(&file),

        Commands::Path {
            file,
            src,
            dest,
            early_exit,
        } => path::execute(&file, src, dest, early_exit),

        Commands::Connected { file } => connected::execute(&file),

        Commands::Components { file, tarjan } => components::execute(&file, tarjan),

        Commands::Transpose {
            file,
            output,
            compact,
        } => transpose::execute(&file, &output, compact),

        Commands::Routes { file } => routes::execute(&file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
