use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::track::TrackLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Close { slug, issue } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;
        let closed = TrackLogic::close(&mut pool, slug.as_deref(), issue.as_deref(), time::now())?;

        if closed == 0 {
            info("Nothing to close.");
        } else {
            success(format!("Closed {} record(s)", closed));
        }
    }

    Ok(())
}
