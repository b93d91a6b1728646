use crate::db::schema::t_clipboard_origin;
use diesel::prelude::*;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = t_clipboard_origin)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OriginRow {
    pub content_hash: String,
    pub origin: String,
    pub expires_at_ms: i64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = t_clipboard_origin)]
pub struct NewOriginRow<'a> {
    pub content_hash: &'a str,
    pub origin: &'a str,
    pub expires_at_ms: i64,
}
