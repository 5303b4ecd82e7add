//! Derived queries: counts per kind and elapsed time.

use crate::db::pool::DbPool;
use crate::db::queries::{Filter, count_by_kind, latest_by_kind};
use crate::errors::AppResult;
use crate::models::Kind;
use crate::utils::format_elapsed;
use chrono::NaiveDateTime;

pub struct StatsLogic;

impl StatsLogic {
    pub fn count(pool: &mut DbPool, kind: Kind) -> AppResult<i64> {
        pool.transaction(|tx| count_by_kind(tx, kind))
    }

    /// Seconds spent on the most recent matching record; 0 when none matches.
    pub fn elapsed_seconds(
        pool: &mut DbPool,
        kind: Kind,
        slug: Option<&str>,
        issue: Option<&str>,
        now: NaiveDateTime,
    ) -> AppResult<i64> {
        let record = pool.transaction(|tx| latest_by_kind(tx, kind, Filter::new(slug, issue)))?;
        Ok(record.map(|r| r.elapsed_seconds(now)).unwrap_or(0))
    }

    /// Same as [`StatsLogic::elapsed_seconds`], formatted as `Xh` / `Xm` / `Xs`.
    pub fn time(
        pool: &mut DbPool,
        kind: Kind,
        slug: Option<&str>,
        issue: Option<&str>,
        now: NaiveDateTime,
    ) -> AppResult<String> {
        let secs = Self::elapsed_seconds(pool, kind, slug, issue, now)?;
        Ok(format_elapsed(secs))
    }
}
