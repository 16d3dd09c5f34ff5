//! View Projector: filter, sort, then paginate.
//!
//! Pure over `(records, params)`; the same inputs always produce the same
//! page in the same order.

use crate::columns::{COLUMNS, CellValue, column, locale_cmp};
use crate::{ColumnSort, Page, SortDirection, SortKey, UserRecord, ViewParameters};

use std::cmp::Ordering;

/// Project the current page of `records` under `params`.
///
/// The returned page index is clamped to the last page holding rows.
pub fn project(records: &[UserRecord], params: &ViewParameters) -> Page {
    let mut rows = filter(records, &params.filter_text);
    sort(&mut rows, params);
    paginate(&rows, params.page_index, params.page_size)
}

/// Keep records whose rendered columns contain `text`, ignoring case.
pub fn filter<'a>(records: &'a [UserRecord], text: &str) -> Vec<&'a UserRecord> {
    if text.is_empty() {
        return records.iter().collect();
    }

    let needle = text.to_lowercase();
    records
        .iter()
        .filter(|record| matches_filter(record, &needle))
        .collect()
}

fn matches_filter(record: &UserRecord, needle: &str) -> bool {
    COLUMNS
        .iter()
        .any(|column| column.render(record).to_lowercase().contains(needle))
}

/// Stable sort under the single effective ordering of `params`.
pub fn sort(rows: &mut [&UserRecord], params: &ViewParameters) {
    if let Some(column_sort) = params.column_sort() {
        rows.sort_by(|a, b| compare_column(a, b, column_sort));
        return;
    }

    match params.sort_key {
        SortKey::None => {}
        SortKey::Age => rows.sort_by(|a, b| compare_present(a.age, b.age, |x, y| x.cmp(&y))),
        SortKey::Gender => rows.sort_by(|a, b| {
            compare_present(a.gender.as_deref(), b.gender.as_deref(), locale_cmp)
        }),
        SortKey::Alphabetical => rows.sort_by(|a, b| {
            compare_present(a.username.as_deref(), b.username.as_deref(), locale_cmp)
        }),
        SortKey::Newest => rows.sort_by(|a, b| b.id.cmp(&a.id)),
    }
}

/// Empty cells stay at the bottom in both directions.
fn compare_column(a: &UserRecord, b: &UserRecord, column_sort: &ColumnSort) -> Ordering {
    let definition = column(column_sort.column);
    let (left, right) = (definition.value(a), definition.value(b));

    match (left.is_empty(), right.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => directed(&left, &right, column_sort.direction),
    }
}

fn directed(left: &CellValue, right: &CellValue, direction: SortDirection) -> Ordering {
    let ordering = left.natural_cmp(right);
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Ascending on present values; absent values sort last.
fn compare_present<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// `ceil(total / page_size)`, never less than 1.
pub fn page_count(total_rows: usize, page_size: usize) -> usize {
    total_rows.div_ceil(page_size.max(1)).max(1)
}

/// Clamp `page_index` into `[0, page_count - 1]`.
pub fn clamp_page_index(page_index: usize, total_rows: usize, page_size: usize) -> usize {
    page_index.min(page_count(total_rows, page_size) - 1)
}

/// Slice one page out of the sorted rows.
pub fn paginate(rows: &[&UserRecord], page_index: usize, page_size: usize) -> Page {
    let page_size = page_size.max(1);
    let total_rows = rows.len();
    let page_index = clamp_page_index(page_index, total_rows, page_size);
    let start = page_index * page_size;

    Page {
        rows: rows
            .iter()
            .skip(start)
            .take(page_size)
            .map(|&record| record.clone())
            .collect(),
        page_index,
        page_count: page_count(total_rows, page_size),
        total_rows,
    }
}
