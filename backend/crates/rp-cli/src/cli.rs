use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "rp")]
#[command(about = "Registration portal moderation console")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides authority.base_url from config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
