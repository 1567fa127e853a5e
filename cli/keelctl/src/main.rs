//! keelctl (keel-id) - CLI for keel identifiers
//!
//! Generates identifiers for fixtures, decodes identifiers found in logs into
//! database UUIDs, and encodes UUIDs back into identifiers.

use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    match cli.run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            // Print error in a user-friendly way
            error::print_error(&e);
            std::process::exit(1);
        }
    }
}
