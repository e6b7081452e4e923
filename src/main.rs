// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "roomscan")]
#[command(about = "Room scanning capture session with JSON export")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full scan session (capture + export) against a file-source camera
    Scan {
        /// Image references to serve as captures (synthetic refs when omitted)
        #[arg(short, long)]
        image: Vec<String>,

        /// Camera facing to start with (front or back)
        #[arg(short, long, default_value = "back")]
        facing: String,

        /// Export directory (default: ~/Documents/roomscan)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export file name
        #[arg(long)]
        file_name: Option<String>,

        /// Record preset (full or preview)
        #[arg(short, long, default_value = "full")]
        preset: String,

        /// Bound the capture call in milliseconds (unbounded when omitted)
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Skip the share hand-off after writing the export
        #[arg(long)]
        no_share: bool,
    },

    /// Print a sample room record without running a session
    Record {
        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=roomscan=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            image,
            facing,
            output,
            file_name,
            preset,
            timeout_ms,
            no_share,
        } => cli::run_scan(cli::ScanArgs {
            images: image,
            facing,
            output,
            file_name,
            preset,
            timeout_ms,
            no_share,
        }),
        Commands::Record { pretty } => cli::print_sample_record(pretty),
    }
}
