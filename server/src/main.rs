// server/src/main.rs

// Entry point for the medtrack-cli binary. Argument parsing, logging and the
// menu loop all live in the cli module.

use anyhow::Result;
use medtrack_server::cli::start_cli;

fn main() -> Result<()> {
    start_cli()
}
