use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::open(&cfg.database)?;
    for line in ReportLogic::lines(&mut pool)? {
        println!("{}", line);
    }
    Ok(())
}
