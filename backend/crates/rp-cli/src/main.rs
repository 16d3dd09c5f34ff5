//! rp - registration portal moderation CLI
//!
//! # Examples
//!
//! ```bash
//! # Second page of users, youngest first
//! rp list --sort age --page 2 --pretty
//!
//! # Verify a user against a specific backend
//! rp --server http://127.0.0.1:4000 verify 42
//!
//! # Interactive console
//! rp console
//! ```

use rp_admin::ModerationDashboard;
use rp_cli::{Cli, CliResult, Commands, DecisionReport, logger, run_console};
use rp_client::AdminClient;
use rp_config::Config;
use rp_core::ViewParameters;

use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use log::info;
use serde::Serialize;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns `false` when a decision was refused or left unconfirmed.
async fn run(cli: Cli) -> CliResult<bool> {
    let mut config = Config::load()?;
    config.apply_server_override(cli.server.clone());
    config.validate()?;

    let colored = config.logging.colored && std::io::stderr().is_terminal();
    logger::initialize(config.logging.level, config.log_file_path()?, colored)?;
    config.log_summary();

    let client = AdminClient::new(
        &config.authority.base_url,
        Duration::from_secs(config.authority.timeout_secs),
    )?;
    info!("Using backend {}", client.base_url);

    let params = ViewParameters::new(config.view.page_size)?;
    let mut dashboard = ModerationDashboard::load(Arc::new(client), params)
        .await?
        .with_max_page_size(config.view.max_page_size);

    match cli.command {
        Commands::List {
            filter,
            sort,
            page,
            page_size,
        } => {
            if let Some(size) = page_size {
                dashboard.set_page_size(size)?;
            }
            dashboard.set_filter_text(filter);
            dashboard.set_sort_key(sort);
            dashboard.set_page_index(page.saturating_sub(1));

            print_json(dashboard.current_page(), cli.pretty)?;
            Ok(true)
        }
        Commands::Verify { id } => {
            let outcome = dashboard.verify(id)?;
            report(&mut dashboard, &outcome, id, cli.pretty).await
        }
        Commands::Reject { id } => {
            let outcome = dashboard.reject(id)?;
            report(&mut dashboard, &outcome, id, cli.pretty).await
        }
        Commands::Console => {
            let input = BufReader::new(tokio::io::stdin());
            let mut output = std::io::stdout();
            run_console(&mut dashboard, input, &mut output).await?;
            Ok(dashboard.divergences().is_empty().await)
        }
    }
}

async fn report(
    dashboard: &mut ModerationDashboard<AdminClient>,
    outcome: &rp_admin::ModerationOutcome,
    id: i64,
    pretty: bool,
) -> CliResult<bool> {
    dashboard.settle().await;

    let report = DecisionReport::new(
        outcome,
        dashboard.store().get(id).cloned(),
        dashboard.drain_notices(),
        dashboard.divergences().for_record(id).await,
    );
    print_json(&report, pretty)?;
    Ok(report.confirmed)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
