use crate::db::log::ensure_log_table;
use crate::errors::{AppError, AppResult};
use crate::db::queries::TABLE;
use rusqlite::{Connection, OptionalExtension};

/// Check if the `tracking` table exists.
pub fn tracking_table_exists(conn: &Connection) -> AppResult<bool> {
    let exists: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
            [TABLE],
            |row| row.get(0),
        )
        .optional()?;
    Ok(exists.is_some())
}

/// Create the `tracking` table (and the internal `log` table).
/// Running it on an already initialized database is a schema error.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    if tracking_table_exists(conn)? {
        return Err(AppError::Schema(format!("table '{}' already exists", TABLE)));
    }

    conn.execute_batch(&format!(
        r#"
        CREATE TABLE {TABLE} (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            slug        TEXT NOT NULL,
            issue       TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            closed_at   TEXT
        );

        CREATE INDEX idx_{TABLE}_closed_at ON {TABLE}(closed_at);
        "#
    ))?;

    ensure_log_table(conn)?;
    Ok(())
}
