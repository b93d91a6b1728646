mod history_row;
mod origin_row;

pub use history_row::{HistoryRow, NewHistoryRow};
pub use origin_row::{NewOriginRow, OriginRow};
