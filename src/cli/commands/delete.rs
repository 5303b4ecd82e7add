use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::track::TrackLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Delete { slug, issue } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;
        let n = TrackLogic::delete(&mut pool, slug, issue.as_deref())?;
        success(format!("Deleted {} record(s)", n));
    }

    Ok(())
}
