// server/src/cli/mod.rs

// Declares the modules of the interactive shell and re-exports the entry
// points used by main.rs and the integration tests.

pub mod cli;
pub mod commands;
pub mod display;
pub mod handlers;
pub mod interactive;
pub mod prompts;

pub use cli::{build_system, init_logging, start_cli};
pub use commands::CliArgs;
pub use display::{clear_terminal_screen, print_welcome_screen};
pub use interactive::run_session;
pub use prompts::{Console, InputClosed, Prompter, RustylinePrompter, ScriptedPrompter};
