pub mod age;
pub mod authority;
pub mod columns;
pub mod error;
pub mod models;
pub mod projector;
pub mod store;

#[cfg(test)]
mod tests;

pub use age::{age_on, parse_date_of_birth};
pub use authority::ModerationAuthority;
pub use columns::{COLUMNS, CellValue, ColumnDef, column};
pub use error::{CoreError, Result};
pub use models::ack::Ack;
pub use models::column_id::ColumnId;
pub use models::column_sort::ColumnSort;
pub use models::moderation_status::ModerationStatus;
pub use models::page::Page;
pub use models::raw_user_record::RawUserRecord;
pub use models::sort_direction::SortDirection;
pub use models::sort_key::SortKey;
pub use models::transition::Transition;
pub use models::user_record::UserRecord;
pub use models::view_parameters::{DEFAULT_PAGE_SIZE, ViewParameters};
pub use projector::project;
pub use store::RecordStore;
