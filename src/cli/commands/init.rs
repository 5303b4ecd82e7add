use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;

/// Handle the `init` command: create the database file if needed and the
/// tracking table. Fails if the table already exists.
pub fn handle(cfg: &Config) -> AppResult<()> {
    if let Some(parent) = Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut pool = DbPool::create(&cfg.database)?;

    pool.transaction(|tx| {
        init_db(tx)?;

        if let Err(e) = log::ttlog(
            tx,
            "init",
            "Database initialized",
            &format!("Database initialized at {}", &cfg.database),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
        Ok(())
    })?;

    success(format!("Database initialized at {}", &cfg.database));
    Ok(())
}
