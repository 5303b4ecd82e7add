use crate::db::pool::DbPool;
use crate::db::queries::load_records;
use crate::errors::AppResult;

pub struct ReportLogic;

impl ReportLogic {
    /// One line per record, newest first.
    pub fn lines(pool: &mut DbPool) -> AppResult<Vec<String>> {
        let records = pool.transaction(|tx| load_records(tx))?;
        Ok(records.iter().map(|r| r.render()).collect())
    }
}
