use crate::config::Config;
use crate::core::track::TrackLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::open(&cfg.database)?;
    let n = TrackLogic::truncate(&mut pool)?;
    success(format!("Deleted all records ({})", n));
    Ok(())
}
