// server/src/cli/cli.rs

// CLI entry point for medtrack-cli: parse arguments, set up logging and
// configuration, then hand over to the interactive menu loop.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use medtrack_lib::{SeededSource, TrackingSystem, load_tracker_config};

use crate::cli::commands::CliArgs;
use crate::cli::display::{clear_terminal_screen, print_welcome_screen};
use crate::cli::interactive::run_session;
use crate::cli::prompts::RustylinePrompter;

pub fn init_logging(log_level: Option<&str>) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(filter) = log_level {
        builder.parse_filters(filter);
    }
    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
}

/// Builds the tracking system described by the arguments.
pub fn build_system(args: &CliArgs) -> Result<TrackingSystem> {
    let config = load_tracker_config(args.config.as_deref()).with_context(|| match &args.config {
        Some(path) => format!("Failed to load tracker config from {}", path.display()),
        None => "Failed to load default tracker config".to_string(),
    })?;
    let mut system = TrackingSystem::with_config(config)?;
    if let Some(seed) = args.seed {
        info!("Using seeded restock source ({})", seed);
        system = system.with_restock_source(SeededSource::new(seed));
    }
    Ok(system)
}

pub fn start_cli() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.log_level.as_deref());
    let mut system = build_system(&args)?;

    let mut stdout = io::stdout();
    if stdout.is_terminal() {
        clear_terminal_screen()?;
        print_welcome_screen(&mut stdout)?;
    }
    let mut prompter = RustylinePrompter::new()?;
    run_session(&mut system, &mut prompter, &mut stdout)
}
