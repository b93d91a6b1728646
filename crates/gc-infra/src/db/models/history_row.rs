use crate::db::schema::t_clipboard_history;
use diesel::prelude::*;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = t_clipboard_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HistoryRow {
    pub id: i64,
    pub content: String,
    pub captured_at: i64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = t_clipboard_history)]
pub struct NewHistoryRow<'a> {
    pub content: &'a str,
    pub captured_at: i64,
}
