//! Line-oriented moderation console.
//!
//! Reads one command per line, applies it to the dashboard and prints any
//! notices followed by the refreshed page.

use crate::{CliError, CliResult, render_notices, render_page};

use rp_admin::ModerationDashboard;
use rp_core::{ColumnId, ModerationAuthority, SortKey};

use std::io::Write;

use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const PROMPT: &str = "rp> ";

const HELP: &str = "\
Commands:
  filter [text]      match text against every column (empty clears)
  sort <key>         none | age | gender | a-z | newest
  click <column>     cycle a column through ascending, descending, unsorted
  page <n>           jump to page n (from 1)
  first | prev | next | last
  size <n>           rows per page
  verify <id>        verify a completed profile
  reject <id>        reject a user
  show               reprint the current page
  divergences        decisions the backend did not confirm
  help               this text
  quit               wait for pending confirmations and exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Filter(String),
    Sort(SortKey),
    Click(ColumnId),
    /// One-based page number
    Page(usize),
    First,
    Previous,
    Next,
    Last,
    Size(usize),
    Verify(i64),
    Reject(i64),
    Show,
    Divergences,
    Help,
    Quit,
}

impl ConsoleCommand {
    /// Parse one input line. Blank lines yield `None`.
    #[track_caller]
    pub fn parse(line: &str) -> CliResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "filter" => Self::Filter(rest.to_string()),
            "sort" => Self::Sort(rest.parse()?),
            "click" => Self::Click(rest.parse()?),
            "page" => match parse_number::<usize>(word, rest)? {
                0 => return Err(CliError::usage("page numbers start at 1")),
                n => Self::Page(n),
            },
            "first" => Self::First,
            "prev" | "previous" => Self::Previous,
            "next" => Self::Next,
            "last" => Self::Last,
            "size" => Self::Size(parse_number(word, rest)?),
            "verify" => Self::Verify(parse_number(word, rest)?),
            "reject" => Self::Reject(parse_number(word, rest)?),
            "show" | "ls" => Self::Show,
            "divergences" => Self::Divergences,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => {
                return Err(CliError::usage(format!(
                    "Unknown command '{}'; type 'help'",
                    other
                )));
            }
        };

        Ok(Some(command))
    }
}

#[track_caller]
fn parse_number<T: std::str::FromStr>(word: &str, rest: &str) -> CliResult<T> {
    rest.parse()
        .map_err(|_| CliError::usage(format!("'{}' expects a number, got '{}'", word, rest)))
}

/// Drive `dashboard` from `input` until end of input or `quit`.
///
/// Pending confirmations are awaited before returning, and any that failed
/// are listed.
pub async fn run_console<A, R, W>(
    dashboard: &mut ModerationDashboard<A>,
    input: R,
    out: &mut W,
) -> CliResult<()>
where
    A: ModerationAuthority + 'static,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    write!(out, "{}", render_page(dashboard.current_page(), dashboard.params()))?;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        let command = match ConsoleCommand::parse(&line) {
            Ok(Some(ConsoleCommand::Quit)) => break,
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        debug!("Console command: {:?}", command);
        if let Err(e) = execute(dashboard, command, out).await {
            writeln!(out, "Error: {}", e)?;
        }
    }

    dashboard.settle().await;
    write_divergences(dashboard, out).await
}

async fn execute<A, W>(
    dashboard: &mut ModerationDashboard<A>,
    command: ConsoleCommand,
    out: &mut W,
) -> CliResult<()>
where
    A: ModerationAuthority + 'static,
    W: Write,
{
    let current = dashboard.current_page().page_index;

    match command {
        ConsoleCommand::Filter(text) => dashboard.set_filter_text(text),
        ConsoleCommand::Sort(key) => dashboard.set_sort_key(key),
        ConsoleCommand::Click(column) => dashboard.toggle_column_sort(column),
        ConsoleCommand::Page(number) => dashboard.set_page_index(number - 1),
        ConsoleCommand::First => dashboard.set_page_index(0),
        ConsoleCommand::Previous => dashboard.set_page_index(current.saturating_sub(1)),
        ConsoleCommand::Next => dashboard.set_page_index(current + 1),
        ConsoleCommand::Last => {
            let last = dashboard.current_page().page_count - 1;
            dashboard.set_page_index(last)
        }
        ConsoleCommand::Size(size) => dashboard.set_page_size(size)?,
        ConsoleCommand::Verify(id) => {
            dashboard.verify(id)?;
        }
        ConsoleCommand::Reject(id) => {
            dashboard.reject(id)?;
        }
        ConsoleCommand::Show => {}
        ConsoleCommand::Divergences => {
            if dashboard.divergences().is_empty().await {
                writeln!(out, "No unconfirmed decisions.")?;
                return Ok(());
            }
            return write_divergences(dashboard, out).await;
        }
        ConsoleCommand::Help => {
            writeln!(out, "{}", HELP)?;
            return Ok(());
        }
        ConsoleCommand::Quit => return Ok(()),
    }

    write!(out, "{}", render_notices(&dashboard.drain_notices()))?;
    write!(out, "{}", render_page(dashboard.current_page(), dashboard.params()))?;
    Ok(())
}

async fn write_divergences<A, W>(dashboard: &ModerationDashboard<A>, out: &mut W) -> CliResult<()>
where
    A: ModerationAuthority + 'static,
    W: Write,
{
    let entries = dashboard.divergences().entries().await;
    if entries.is_empty() {
        return Ok(());
    }

    writeln!(out, "Unconfirmed decisions:")?;
    for entry in entries {
        writeln!(
            out,
            "  #{} {} at {}: {}",
            entry.id,
            entry.action,
            entry.recorded_at.to_rfc3339(),
            entry.error
        )?;
    }
    Ok(())
}
