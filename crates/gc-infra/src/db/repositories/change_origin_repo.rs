use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use diesel::prelude::*;
use gc_core::ports::{ClipboardChangeOriginPort, ClockPort};
use gc_core::ClipboardChangeOrigin;
use tracing::{debug, warn};

use crate::db::mappers::{origin_from_str, origin_to_str};
use crate::db::models::{NewOriginRow, OriginRow};
use crate::db::ports::DbExecutor;
use crate::db::schema::t_clipboard_origin as origin_marks;

/// One-shot origin marker stored next to the history, so a restore run by
/// one process is recognised by the watcher running in another.
///
/// At most one marker is pending: setting a new one replaces the old one.
pub struct DieselClipboardChangeOrigin<E> {
    executor: E,
    clock: Arc<dyn ClockPort>,
}

impl<E> DieselClipboardChangeOrigin<E> {
    pub fn new(executor: E, clock: Arc<dyn ClockPort>) -> Self {
        Self { executor, clock }
    }
}

impl<E: DbExecutor> DieselClipboardChangeOrigin<E> {
    fn store(&self, content_hash: &str, origin: ClipboardChangeOrigin, ttl: Duration) -> Result<()> {
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        let expires_at_ms = self.clock.now_ms().saturating_add(ttl_ms);

        self.executor.run(|conn| {
            conn.transaction::<_, anyhow::Error, _>(|conn| {
                diesel::delete(origin_marks::table).execute(conn)?;
                diesel::insert_into(origin_marks::table)
                    .values(NewOriginRow {
                        content_hash,
                        origin: origin_to_str(origin),
                        expires_at_ms,
                    })
                    .execute(conn)?;
                Ok(())
            })
        })
    }

    fn take(&self, content_hash: &str) -> Result<Option<ClipboardChangeOrigin>> {
        let now_ms = self.clock.now_ms();

        self.executor.run(|conn| {
            conn.transaction::<_, anyhow::Error, _>(|conn| {
                diesel::delete(origin_marks::table.filter(origin_marks::expires_at_ms.lt(now_ms)))
                    .execute(conn)?;

                // A marker for different content stays pending until it expires.
                let row = origin_marks::table
                    .filter(origin_marks::content_hash.eq(content_hash))
                    .select(OriginRow::as_select())
                    .first::<OriginRow>(conn)
                    .optional()?;
                let Some(row) = row else {
                    return Ok(None);
                };

                diesel::delete(
                    origin_marks::table.filter(origin_marks::content_hash.eq(content_hash)),
                )
                .execute(conn)?;
                origin_from_str(&row.origin).map(Some)
            })
        })
    }
}

#[async_trait]
impl<E: DbExecutor> ClipboardChangeOriginPort for DieselClipboardChangeOrigin<E> {
    async fn set_next_origin(
        &self,
        content_hash: String,
        origin: ClipboardChangeOrigin,
        ttl: Duration,
    ) {
        match self.store(&content_hash, origin, ttl) {
            Ok(()) => debug!(content_hash = %content_hash, ?origin, "Stored clipboard origin marker"),
            Err(err) => warn!(error = %err, "Failed to store clipboard origin marker"),
        }
    }

    async fn consume_origin_or_default(
        &self,
        content_hash: &str,
        default_origin: ClipboardChangeOrigin,
    ) -> ClipboardChangeOrigin {
        match self.take(content_hash) {
            Ok(origin) => origin.unwrap_or(default_origin),
            Err(err) => {
                warn!(error = %err, "Failed to read clipboard origin marker");
                default_origin
            }
        }
    }
}
