use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::track::TrackLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Toggle { slug, issue } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;
        let now_open = TrackLogic::toggle(&mut pool, slug, issue, time::now())?;
        let state = if now_open { "open" } else { "closed" };
        success(format!("{}#{} is now {}", slug, issue, state));
    }

    Ok(())
}
