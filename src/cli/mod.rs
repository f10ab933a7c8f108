use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A travel journal backup and import tool
#[derive(Parser, Debug)]
#[clap(name = "wayfarer", about = "A travel journal backup and import tool")]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// The operation to perform
    #[clap(subcommand)]
    pub command: Command,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,
}

/// Subcommands of the wayfarer binary.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Packs the journal and its media into the backup slot
    Export,

    /// Restores the backup slot, materializing media and printing the
    /// reconstructed journal data as JSON
    Import {
        /// Write the reconstructed JSON here instead of stdout
        #[clap(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Parses a directive-formatted text file into journal data JSON
    Ingest {
        /// The text file to parse
        file: PathBuf,

        /// Write the resulting JSON here instead of stdout
        #[clap(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}
