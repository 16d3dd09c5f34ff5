pub mod ack;
pub mod column_id;
pub mod column_sort;
pub mod moderation_status;
pub mod page;
pub mod raw_user_record;
pub mod sort_direction;
pub mod sort_key;
pub mod transition;
pub mod user_record;
pub mod view_parameters;
