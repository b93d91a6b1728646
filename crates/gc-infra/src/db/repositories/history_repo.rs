use anyhow::Result;
use diesel::prelude::*;
use gc_core::ports::HistoryRepositoryPort;
use gc_core::{ClipKey, ClipboardItem};
use tracing::debug;

use crate::db::mappers::{key_to_row_id, row_id_to_key};
use crate::db::models::{HistoryRow, NewHistoryRow};
use crate::db::ports::{DbExecutor, RowMapper};
use crate::db::schema::t_clipboard_history as history;

pub struct DieselHistoryRepository<E, M> {
    executor: E,
    row_mapper: M,
}

impl<E, M> DieselHistoryRepository<E, M> {
    pub fn new(executor: E, row_mapper: M) -> Self {
        Self {
            executor,
            row_mapper,
        }
    }
}

#[async_trait::async_trait]
impl<E, M> HistoryRepositoryPort for DieselHistoryRepository<E, M>
where
    E: DbExecutor,
    M: RowMapper<HistoryRow, ClipboardItem>,
{
    async fn append(&self, content: &str, captured_at_ms: i64) -> Result<ClipboardItem> {
        self.executor.run(|conn| {
            let row = diesel::insert_into(history::table)
                .values(NewHistoryRow {
                    content,
                    captured_at: captured_at_ms,
                })
                .returning(HistoryRow::as_returning())
                .get_result::<HistoryRow>(conn)?;

            debug!(id = row.id, "Appended clipboard history row");
            self.row_mapper.to_domain(&row)
        })
    }

    async fn list_newest_first(&self) -> Result<Vec<ClipboardItem>> {
        self.executor.run(|conn| {
            let rows = history::table
                .order(history::id.desc())
                .select(HistoryRow::as_select())
                .load::<HistoryRow>(conn)?;

            rows.iter()
                .map(|row| self.row_mapper.to_domain(row))
                .collect()
        })
    }

    async fn latest(&self) -> Result<Option<ClipboardItem>> {
        self.executor.run(|conn| {
            let row = history::table
                .order(history::id.desc())
                .select(HistoryRow::as_select())
                .first::<HistoryRow>(conn)
                .optional()?;

            row.map(|row| self.row_mapper.to_domain(&row)).transpose()
        })
    }

    async fn get(&self, key: ClipKey) -> Result<Option<ClipboardItem>> {
        let Some(row_id) = key_to_row_id(key) else {
            return Ok(None);
        };

        self.executor.run(|conn| {
            let row = history::table
                .filter(history::id.eq(row_id))
                .select(HistoryRow::as_select())
                .first::<HistoryRow>(conn)
                .optional()?;

            row.map(|row| self.row_mapper.to_domain(&row)).transpose()
        })
    }

    async fn remove(&self, key: ClipKey) -> Result<bool> {
        let Some(row_id) = key_to_row_id(key) else {
            return Ok(false);
        };

        self.executor.run(|conn| {
            let deleted =
                diesel::delete(history::table.filter(history::id.eq(row_id))).execute(conn)?;
            Ok(deleted > 0)
        })
    }

    async fn promote(&self, key: ClipKey, captured_at_ms: i64) -> Result<Option<ClipboardItem>> {
        let Some(row_id) = key_to_row_id(key) else {
            return Ok(None);
        };

        self.executor.run(|conn| {
            let promoted = conn.transaction::<_, anyhow::Error, _>(|conn| {
                let Some(old) = history::table
                    .filter(history::id.eq(row_id))
                    .select(HistoryRow::as_select())
                    .first::<HistoryRow>(conn)
                    .optional()?
                else {
                    return Ok(None);
                };

                diesel::delete(history::table.filter(history::id.eq(row_id))).execute(conn)?;
                let row = diesel::insert_into(history::table)
                    .values(NewHistoryRow {
                        content: &old.content,
                        captured_at: captured_at_ms,
                    })
                    .returning(HistoryRow::as_returning())
                    .get_result::<HistoryRow>(conn)?;

                Ok(Some(row))
            })?;

            if let Some(row) = &promoted {
                debug!(old_id = row_id, new_id = row.id, "Promoted clipboard history row");
            }
            promoted
                .map(|row| self.row_mapper.to_domain(&row))
                .transpose()
        })
    }

    async fn trim_to(&self, max_items: usize) -> Result<Vec<ClipKey>> {
        let max_items = i64::try_from(max_items).unwrap_or(i64::MAX);

        self.executor.run(|conn| {
            let evicted = conn.transaction::<_, anyhow::Error, _>(|conn| {
                let total: i64 = history::table.count().get_result(conn)?;
                let excess = total - max_items;
                if excess <= 0 {
                    return Ok(Vec::new());
                }

                let ids: Vec<i64> = history::table
                    .select(history::id)
                    .order(history::id.asc())
                    .limit(excess)
                    .load(conn)?;

                diesel::delete(history::table.filter(history::id.eq_any(ids.clone())))
                    .execute(conn)?;

                Ok(ids)
            })?;

            if !evicted.is_empty() {
                debug!(count = evicted.len(), "Trimmed clipboard history");
            }

            evicted.into_iter().map(row_id_to_key).collect()
        })
    }

    async fn clear(&self) -> Result<usize> {
        self.executor
            .run(|conn| Ok(diesel::delete(history::table).execute(conn)?))
    }

    async fn count(&self) -> Result<usize> {
        self.executor.run(|conn| {
            let total: i64 = history::table.count().get_result(conn)?;
            Ok(usize::try_from(total)?)
        })
    }
}
