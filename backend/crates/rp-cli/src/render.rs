//! Plain-text rendering of a page for the interactive console.

use rp_admin::{Divergence, ModerationOutcome, Notice};
use rp_core::{COLUMNS, Page, SortDirection, UserRecord, ViewParameters};

use serde::Serialize;

const COLUMN_GAP: &str = "  ";

/// Render `page` as an aligned table followed by a page footer.
///
/// The header of the column currently sorted carries `^` (ascending) or
/// `v` (descending).
pub fn render_page(page: &Page, params: &ViewParameters) -> String {
    let headers: Vec<String> = COLUMNS
        .iter()
        .map(|column| match params.column_sort() {
            Some(sort) if sort.column == column.id => {
                let marker = match sort.direction {
                    SortDirection::Ascending => "^",
                    SortDirection::Descending => "v",
                };
                format!("{} {}", column.header, marker)
            }
            _ => column.header.to_string(),
        })
        .collect();

    let cells: Vec<Vec<String>> = page
        .rows
        .iter()
        .map(|row| COLUMNS.iter().map(|column| column.render(row)).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&format_row(&headers, &widths));
    out.push('\n');
    out.push_str(&format_row(
        &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(),
        &widths,
    ));
    out.push('\n');

    if cells.is_empty() {
        out.push_str("(no matching users)\n");
    }
    for row in &cells {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }

    out.push_str(&page_footer(page));
    out.push('\n');
    out
}

/// `Page 2 of 5 (43 users)`
pub fn page_footer(page: &Page) -> String {
    format!(
        "Page {} of {} ({} users)",
        page.page_index + 1,
        page.page_count,
        page.total_rows
    )
}

pub fn render_notices(notices: &[Notice]) -> String {
    notices
        .iter()
        .map(|notice| format!("{}\n", notice))
        .collect()
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}

/// JSON body printed after a one-shot `verify` or `reject`
#[derive(Debug, Serialize)]
pub struct DecisionReport {
    /// The local decision was applied and the backend acknowledged it
    pub confirmed: bool,
    pub record: Option<UserRecord>,
    pub notices: Vec<Notice>,
    pub divergences: Vec<Divergence>,
}

impl DecisionReport {
    pub fn new(
        outcome: &ModerationOutcome,
        record: Option<UserRecord>,
        notices: Vec<Notice>,
        divergences: Vec<Divergence>,
    ) -> Self {
        let applied = matches!(outcome, ModerationOutcome::Applied(_));
        Self {
            confirmed: applied && divergences.is_empty(),
            record,
            notices,
            divergences,
        }
    }
}
