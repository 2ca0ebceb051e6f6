//! apiblock CLI
//!
//! Command-line adapter around the API block rewriter: applies the same
//! text-to-text hook the documentation pipeline uses, as a file or stdin
//! filter.

mod cli;
mod error;

use std::fs;
use std::io::Read;
use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use apiblock_content::{find_blocks, rewrite};
use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Rewrite { file, in_place } => cmd_rewrite(file.as_deref(), in_place),
        Commands::List { file, json } => cmd_list(file.as_deref(), json),
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn cmd_rewrite(file: Option<&Path>, in_place: bool) -> Result<()> {
    let source = read_input(file)?;
    let rewritten = rewrite(&source);

    if in_place {
        // clap guarantees a file argument when --in-place is given
        let path = file.expect("--in-place requires a file");
        fs::write(path, rewritten)?;
        tracing::debug!(path = %path.display(), "rewrote file in place");
    } else {
        print!("{rewritten}");
    }
    Ok(())
}

fn cmd_list(file: Option<&Path>, json: bool) -> Result<()> {
    let source = read_input(file)?;
    let blocks = find_blocks(&source);

    if json {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
        return Ok(());
    }

    if blocks.is_empty() {
        println!("No API blocks found");
        return Ok(());
    }

    for block in &blocks {
        let method = block.attrs.method();
        let method = if method.is_empty() { "-" } else { &method };
        let path = block.attrs.path();
        let path = if path.is_empty() { "-" } else { path };
        let sections = if block.has_response() {
            "request+response"
        } else {
            "request"
        };
        println!(
            "{} {} bytes {}..{} {}",
            method.green().bold(),
            path.cyan(),
            block.span.start,
            block.span.end,
            sections
        );
    }
    Ok(())
}
