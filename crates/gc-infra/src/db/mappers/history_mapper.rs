use anyhow::{Context, Result};
use gc_core::{ClipKey, ClipboardItem};

use crate::db::models::HistoryRow;
use crate::db::ports::RowMapper;

pub struct HistoryRowMapper;

impl RowMapper<HistoryRow, ClipboardItem> for HistoryRowMapper {
    fn to_domain(&self, row: &HistoryRow) -> Result<ClipboardItem> {
        Ok(ClipboardItem::new(
            row_id_to_key(row.id)?,
            row.content.clone(),
            row.captured_at,
        ))
    }
}

/// SQLite rowids are positive, so every stored id maps onto a key.
pub fn row_id_to_key(id: i64) -> Result<ClipKey> {
    u64::try_from(id)
        .map(ClipKey)
        .with_context(|| format!("history row id {id} is negative"))
}

/// Keys above `i64::MAX` cannot exist in the table.
pub fn key_to_row_id(key: ClipKey) -> Option<i64> {
    i64::try_from(key.get()).ok()
}
