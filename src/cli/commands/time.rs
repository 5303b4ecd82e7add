use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::StatsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Kind;
use crate::utils::time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Time { kind, slug, issue } = cmd {
        let kind: Kind = kind.parse()?;
        let mut pool = DbPool::open(&cfg.database)?;
        let elapsed = StatsLogic::time(
            &mut pool,
            kind,
            slug.as_deref(),
            issue.as_deref(),
            time::now(),
        )?;
        println!("{}", elapsed);
    }

    Ok(())
}
