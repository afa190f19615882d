//! CLI frontend for the Timberborn map generator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tmg",
    about = "Procedural map generator for Timberborn",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log pipeline progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a map and write it as a .timber archive
    Generate {
        /// Output archive path
        output: PathBuf,

        /// Width of the map in cells
        #[arg(long, default_value = "256")]
        width: usize,

        /// Height of the map in cells
        #[arg(long, default_value = "256")]
        height: usize,

        /// Seed used for generation (default: derived from time and pid)
        #[arg(short, long)]
        seed: Option<i64>,
    },

    /// Print the heightmap and water sources without writing a file
    Preview {
        /// Width of the map in cells
        #[arg(long, default_value = "32")]
        width: usize,

        /// Height of the map in cells
        #[arg(long, default_value = "32")]
        height: usize,

        /// Seed used for generation (default: derived from time and pid)
        #[arg(short, long)]
        seed: Option<i64>,
    },

    /// Summarize an existing map archive
    Inspect {
        /// Archive to read
        archive: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            output,
            width,
            height,
            seed,
        } => commands::generate::run(&output, width, height, seed),
        Commands::Preview {
            width,
            height,
            seed,
        } => commands::preview::run(width, height, seed),
        Commands::Inspect { archive } => commands::inspect::run(&archive),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, honouring `RUST_LOG` when set.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
