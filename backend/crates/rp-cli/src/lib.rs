//! rp-cli library
//!
//! Command parsing, console loop, table rendering and logger setup for the
//! `rp` moderation binary.

pub mod cli;
pub mod commands;
pub mod console;
pub mod error;
pub mod logger;
pub mod render;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use console::{ConsoleCommand, run_console};
pub use error::{CliError, Result as CliResult};
pub use render::{DecisionReport, render_notices, render_page};
