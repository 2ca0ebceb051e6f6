//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "apiblock",
    about = "Rewrite API block markers in rendered documentation pages",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rewrite marker triples into widget markup
    Rewrite {
        /// Input file; stdin when omitted
        file: Option<PathBuf>,

        /// Write the result back to FILE instead of stdout
        #[arg(long, requires = "file")]
        in_place: bool,
    },
    /// List the blocks found in a document without rewriting it
    List {
        /// Input file; stdin when omitted
        file: Option<PathBuf>,

        /// Emit the block list as JSON
        #[arg(long)]
        json: bool,
    },
}
