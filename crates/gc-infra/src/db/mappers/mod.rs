mod history_mapper;
mod origin_mapper;

pub use history_mapper::{key_to_row_id, row_id_to_key, HistoryRowMapper};
pub use origin_mapper::{origin_from_str, origin_to_str};
