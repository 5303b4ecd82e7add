//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! One `DbPool` lives for the duration of a single command. Work runs through
//! [`DbPool::transaction`], which commits only when the closure succeeds; the
//! connection itself is closed when the pool is dropped.

use crate::errors::AppResult;
use rusqlite::{Connection, OpenFlags, Transaction};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (and create if missing) the database file. Used by `init`.
    pub fn create(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open an existing database file; a missing file is a storage error.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open_with_flags(
            Path::new(path),
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Run `func` inside a transaction. Commit on `Ok`, roll back on `Err`.
    pub fn transaction<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Transaction) -> AppResult<T>,
    {
        let tx = self.conn.transaction()?;
        let out = func(&tx)?;
        tx.commit()?;
        Ok(out)
    }
}
