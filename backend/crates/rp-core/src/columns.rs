//! Fixed column table for the moderation view.
//!
//! Every column is known at compile time: its id, its header, an accessor
//! yielding the sortable/searchable value, and a renderer yielding the
//! display string.

use crate::{ColumnId, UserRecord};

use std::cmp::Ordering;

/// Natural value of a cell, used for column sorting and filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Int(i64),
    Text(String),
    Empty,
}

impl CellValue {
    fn text(field: &Option<String>) -> Self {
        match field.as_deref() {
            Some(value) if !value.is_empty() => CellValue::Text(value.to_string()),
            _ => CellValue::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Order two non-empty cells: integers numerically, text locale-aware.
    pub fn natural_cmp(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => locale_cmp(a, b),
            (CellValue::Int(_), CellValue::Text(_)) => Ordering::Less,
            (CellValue::Text(_), CellValue::Int(_)) => Ordering::Greater,
            (CellValue::Empty, CellValue::Empty) => Ordering::Equal,
            (CellValue::Empty, _) => Ordering::Greater,
            (_, CellValue::Empty) => Ordering::Less,
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Int(value) => write!(f, "{}", value),
            CellValue::Text(value) => write!(f, "{}", value),
            CellValue::Empty => Ok(()),
        }
    }
}

/// Case-folded comparison with a raw tie-break.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub struct ColumnDef {
    pub id: ColumnId,
    pub header: &'static str,
    pub accessor: fn(&UserRecord) -> CellValue,
    pub renderer: fn(&UserRecord) -> String,
}

impl ColumnDef {
    pub fn value(&self, record: &UserRecord) -> CellValue {
        (self.accessor)(record)
    }

    pub fn render(&self, record: &UserRecord) -> String {
        (self.renderer)(record)
    }
}

impl std::fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .finish()
    }
}

pub static COLUMNS: [ColumnDef; 9] = [
    ColumnDef {
        id: ColumnId::Id,
        header: "ID",
        accessor: id_value,
        renderer: render_value::<0>,
    },
    ColumnDef {
        id: ColumnId::Username,
        header: "Name",
        accessor: username_value,
        renderer: render_value::<1>,
    },
    ColumnDef {
        id: ColumnId::Email,
        header: "Email",
        accessor: email_value,
        renderer: render_value::<2>,
    },
    ColumnDef {
        id: ColumnId::Dob,
        header: "DOB",
        accessor: dob_value,
        renderer: render_value::<3>,
    },
    ColumnDef {
        id: ColumnId::Age,
        header: "Age",
        accessor: age_value,
        renderer: render_value::<4>,
    },
    ColumnDef {
        id: ColumnId::Gender,
        header: "Gender",
        accessor: gender_value,
        renderer: render_value::<5>,
    },
    ColumnDef {
        id: ColumnId::Phone,
        header: "Phone",
        accessor: phone_value,
        renderer: render_value::<6>,
    },
    ColumnDef {
        id: ColumnId::City,
        header: "City",
        accessor: city_value,
        renderer: render_value::<7>,
    },
    ColumnDef {
        id: ColumnId::Status,
        header: "Status",
        accessor: status_value,
        renderer: render_status,
    },
];

/// Look up a column definition by id.
pub fn column(id: ColumnId) -> &'static ColumnDef {
    &COLUMNS[id.index()]
}

fn id_value(record: &UserRecord) -> CellValue {
    CellValue::Int(record.id)
}

fn username_value(record: &UserRecord) -> CellValue {
    CellValue::text(&record.username)
}

fn email_value(record: &UserRecord) -> CellValue {
    CellValue::text(&record.email)
}

fn dob_value(record: &UserRecord) -> CellValue {
    CellValue::text(&record.date_of_birth)
}

fn age_value(record: &UserRecord) -> CellValue {
    record
        .age
        .map(|age| CellValue::Int(i64::from(age)))
        .unwrap_or(CellValue::Empty)
}

fn gender_value(record: &UserRecord) -> CellValue {
    CellValue::text(&record.gender)
}

fn phone_value(record: &UserRecord) -> CellValue {
    CellValue::text(&record.phone)
}

fn city_value(record: &UserRecord) -> CellValue {
    CellValue::text(&record.city)
}

fn status_value(record: &UserRecord) -> CellValue {
    CellValue::Text(record.moderation_status.as_str().to_string())
}

fn render_value<const COLUMN: usize>(record: &UserRecord) -> String {
    COLUMNS[COLUMN].value(record).to_string()
}

fn render_status(record: &UserRecord) -> String {
    record.moderation_status.as_str().to_string()
}
