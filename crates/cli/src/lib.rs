mod list;
mod query;
mod schema;
mod stats;
mod view;

use clap::{Parser, Subcommand};
use codenav_api::{Direction, Position, Provenance, Step};
use codenav_core::config::LoggingConfig;
use codenav_core::{IndexedCodeGraphData, combine};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "codenav",
    version,
    about = "Inspect occurrence data the way the code viewer navigates it",
    long_about = "Loads code graph data (occurrence lists produced by precise, syntactic or \
                  search-based indexers) from JSON, builds the flattened occurrence index, \
                  and answers the same positional queries the code viewer issues."
)]
pub struct Cli {
    /// Only consider entries with this provenance (precise, syntactic, search-based)
    #[arg(long, global = true, value_name = "PROVENANCE")]
    pub provenance: Option<Provenance>,

    /// Also log to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize the index built for each entry
    Stats {
        /// JSON file with one code graph object or an array of them
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Find the occurrence under a position
    At {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Zero-based LINE:CHARACTER
        #[arg(value_name = "POSITION")]
        position: Position,
    },
    /// Jump from a position to the next or previous occurrence
    Next {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Zero-based LINE:CHARACTER
        #[arg(value_name = "POSITION")]
        from: Position,
        /// line or character
        #[arg(long, default_value = "line")]
        step: Step,
        /// next or previous
        #[arg(long, default_value = "next")]
        direction: Direction,
    },
    /// List the flattened occurrences
    List {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Only occurrences touching this zero-based line
        #[arg(long)]
        line: Option<u32>,
    },
    /// Print the JSON schema of the input format
    Schema,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = LoggingConfig::from_env().with_stderr(cli.verbose);
    let _guard = codenav_core::logging::init_logging("cli", &config);

    let provenance = cli.provenance;
    match cli.command {
        Commands::Stats { file } => stats::run(&file, provenance),
        Commands::At { file, position } => query::at(&file, provenance, position),
        Commands::Next {
            file,
            from,
            step,
            direction,
        } => query::next(&file, provenance, from, step, direction),
        Commands::List { file, line } => list::run(&file, provenance, line),
        Commands::Schema => schema::run(),
    }
}

/// Loads `file` as a single contribution and indexes every entry.
pub(crate) fn load_entries(
    file: &Path,
    provenance: Option<Provenance>,
) -> Result<Vec<IndexedCodeGraphData>, Box<dyn std::error::Error>> {
    let data = codenav_core::loader::load_code_graph(file)?;
    let entries: Vec<IndexedCodeGraphData> = combine(&[data])
        .into_iter()
        .filter(|entry| provenance.is_none_or(|p| entry.data.provenance == p))
        .collect();

    if entries.is_empty() {
        tracing::warn!("No matching code graph entries in {}", file.display());
    }
    Ok(entries)
}
