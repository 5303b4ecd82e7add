//! Record lifecycle: start, close, toggle, delete, truncate.
//!
//! Every operation runs in one transaction on the given pool and writes an
//! audit line into the internal log table. Audit failures never abort the
//! operation.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{Filter, close_open, delete_all, delete_records, find_open, insert_record};
use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::NaiveDateTime;
use rusqlite::Connection;

fn audit(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

fn target_of(slug: Option<&str>, issue: Option<&str>) -> String {
    match (slug, issue) {
        (Some(s), Some(i)) => format!("{}#{}", s, i),
        (Some(s), None) => s.to_string(),
        (None, Some(i)) => format!("#{}", i),
        (None, None) => String::new(),
    }
}

/// Close every open record, then open a new one for `(slug, issue)`.
fn start_in(conn: &Connection, slug: &str, issue: &str, now: NaiveDateTime) -> AppResult<i64> {
    let closed = close_open(conn, now, Filter::default())?;
    let id = insert_record(conn, slug, issue, now)?;
    audit(
        conn,
        "start",
        &target_of(Some(slug), Some(issue)),
        &format!("Opened record {} (auto-closed {})", id, closed),
    );
    Ok(id)
}

fn close_in(conn: &Connection, filter: Filter, now: NaiveDateTime) -> AppResult<usize> {
    let closed = close_open(conn, now, filter)?;
    audit(
        conn,
        "close",
        &target_of(filter.slug, filter.issue),
        &format!("Closed {} open record(s)", closed),
    );
    Ok(closed)
}

pub struct TrackLogic;

impl TrackLogic {
    /// Returns the id of the newly opened record.
    pub fn start(pool: &mut DbPool, slug: &str, issue: &str, now: NaiveDateTime) -> AppResult<i64> {
        pool.transaction(|tx| start_in(tx, slug, issue, now))
    }

    /// Close the open records for `(slug, issue)`; unless both are given,
    /// every open record is closed. Returns how many were closed.
    pub fn close(
        pool: &mut DbPool,
        slug: Option<&str>,
        issue: Option<&str>,
        now: NaiveDateTime,
    ) -> AppResult<usize> {
        let filter = match (slug, issue) {
            (Some(slug), Some(issue)) => Filter::exact(slug, issue),
            _ => Filter::default(),
        };
        pool.transaction(|tx| close_in(tx, filter, now))
    }

    /// Flip `(slug, issue)`: `true` when it is now open, `false` when now closed.
    pub fn toggle(pool: &mut DbPool, slug: &str, issue: &str, now: NaiveDateTime) -> AppResult<bool> {
        pool.transaction(|tx| {
            if find_open(tx, slug, issue)?.is_some() {
                close_in(tx, Filter::exact(slug, issue), now)?;
                Ok(false)
            } else {
                start_in(tx, slug, issue, now)?;
                Ok(true)
            }
        })
    }

    pub fn delete(pool: &mut DbPool, slug: &str, issue: Option<&str>) -> AppResult<usize> {
        pool.transaction(|tx| {
            let n = delete_records(tx, slug, issue)?;
            audit(
                tx,
                "delete",
                &target_of(Some(slug), issue),
                &format!("Deleted {} record(s)", n),
            );
            Ok(n)
        })
    }

    pub fn truncate(pool: &mut DbPool) -> AppResult<usize> {
        pool.transaction(|tx| {
            let n = delete_all(tx)?;
            audit(tx, "truncate", "", &format!("Deleted {} record(s)", n));
            Ok(n)
        })
    }
}
