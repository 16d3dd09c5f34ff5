mod moderation_status;
mod sort_key;
mod view_parameters;
