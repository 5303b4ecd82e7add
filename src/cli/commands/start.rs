use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::track::TrackLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { slug, issue } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;
        TrackLogic::start(&mut pool, slug, issue, time::now())?;
        success(format!("{}#{} started", slug, issue));
    }

    Ok(())
}
