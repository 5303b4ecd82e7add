use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::StatsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Kind;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Count { kind } = cmd {
        let kind: Kind = kind.parse()?;
        let mut pool = DbPool::open(&cfg.database)?;
        println!("{}", StatsLogic::count(&mut pool, kind)?);
    }

    Ok(())
}
