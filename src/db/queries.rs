use crate::errors::AppResult;
use crate::models::{Kind, Record};
use crate::utils::time::{from_db, to_db};
use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, params, params_from_iter};

pub const TABLE: &str = "tracking";

const COLUMNS: &str = "id, slug, issue, created_at, closed_at";

/// Optional `slug` / `issue` filter shared by close and time.
#[derive(Debug, Default, Clone, Copy)]
pub struct Filter<'a> {
    pub slug: Option<&'a str>,
    pub issue: Option<&'a str>,
}

impl<'a> Filter<'a> {
    /// Empty strings count as "not given".
    pub fn new(slug: Option<&'a str>, issue: Option<&'a str>) -> Self {
        Self {
            slug: slug.filter(|s| !s.is_empty()),
            issue: issue.filter(|s| !s.is_empty()),
        }
    }

    pub fn exact(slug: &'a str, issue: &'a str) -> Self {
        Self {
            slug: Some(slug),
            issue: Some(issue),
        }
    }

    /// Append `slug = ?` / `issue = ?` clauses and their values.
    fn apply(&self, clauses: &mut Vec<&'static str>, values: &mut Vec<String>) {
        if let Some(slug) = self.slug {
            clauses.push("slug = ?");
            values.push(slug.to_string());
        }
        if let Some(issue) = self.issue {
            clauses.push("issue = ?");
            values.push(issue.to_string());
        }
    }
}

fn timestamp_column(row: &Row, idx: usize) -> Result<Option<NaiveDateTime>> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|s| {
        from_db(&s).map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
    })
    .transpose()
}

pub fn map_row(row: &Row) -> Result<Record> {
    let created_at = timestamp_column(row, 3)?.ok_or(rusqlite::Error::InvalidColumnType(
        3,
        "created_at".to_string(),
        Type::Null,
    ))?;

    Ok(Record {
        id: row.get(0)?,
        slug: row.get(1)?,
        // issue may have been written as INTEGER by older databases
        issue: match row.get_ref(2)? {
            rusqlite::types::ValueRef::Integer(i) => i.to_string(),
            _ => row.get(2)?,
        },
        created_at,
        closed_at: timestamp_column(row, 4)?,
    })
}

/// Set `closed_at = now` on every open record matching `filter`.
/// Returns the number of records closed.
pub fn close_open(conn: &Connection, now: NaiveDateTime, filter: Filter) -> AppResult<usize> {
    let mut clauses = vec!["closed_at IS NULL"];
    let mut values = vec![to_db(now)];
    filter.apply(&mut clauses, &mut values);

    let sql = format!("UPDATE {TABLE} SET closed_at = ? WHERE {}", clauses.join(" AND "));
    let n = conn.execute(&sql, params_from_iter(values.iter()))?;
    Ok(n)
}

pub fn insert_record(conn: &Connection, slug: &str, issue: &str, now: NaiveDateTime) -> AppResult<i64> {
    conn.execute(
        &format!("INSERT INTO {TABLE} (slug, issue, created_at) VALUES (?1, ?2, ?3)"),
        params![slug, issue, to_db(now)],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Id of the open record for `(slug, issue)`, if any.
pub fn find_open(conn: &Connection, slug: &str, issue: &str) -> AppResult<Option<i64>> {
    let id = conn
        .query_row(
            &format!(
                "SELECT id FROM {TABLE}
                 WHERE closed_at IS NULL AND slug = ?1 AND issue = ?2
                 ORDER BY created_at DESC, id DESC
                 LIMIT 1"
            ),
            params![slug, issue],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}

pub fn delete_records(conn: &Connection, slug: &str, issue: Option<&str>) -> AppResult<usize> {
    // slug always filters; an empty issue means "every issue"
    let n = match issue.filter(|i| !i.is_empty()) {
        Some(issue) => conn.execute(
            &format!("DELETE FROM {TABLE} WHERE slug = ?1 AND issue = ?2"),
            params![slug, issue],
        )?,
        None => conn.execute(&format!("DELETE FROM {TABLE} WHERE slug = ?1"), [slug])?,
    };
    Ok(n)
}

pub fn delete_all(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute(&format!("DELETE FROM {TABLE}"), [])?;
    Ok(n)
}

/// Every record, newest first.
pub fn load_records(conn: &Connection) -> AppResult<Vec<Record>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM {TABLE} ORDER BY created_at DESC, id DESC"
    ))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_by_kind(conn: &Connection, kind: Kind) -> AppResult<i64> {
    let sql = format!("SELECT COUNT(id) FROM {TABLE} WHERE {}", kind.predicate());
    let n = conn.query_row(&sql, [], |row| row.get(0))?;
    Ok(n)
}

/// Most recent record of `kind` matching `filter`: the latest closed one for
/// `Kind::Closed`, the latest opened one for `Kind::Open`.
pub fn latest_by_kind(conn: &Connection, kind: Kind, filter: Filter) -> AppResult<Option<Record>> {
    let mut clauses = vec![kind.predicate()];
    let mut values = Vec::new();
    filter.apply(&mut clauses, &mut values);

    let order = match kind {
        Kind::Closed => "closed_at DESC, id DESC",
        Kind::Open => "created_at DESC, id DESC",
    };

    let sql = format!(
        "SELECT {COLUMNS} FROM {TABLE} WHERE {} ORDER BY {order} LIMIT 1",
        clauses.join(" AND ")
    );

    let record = conn
        .query_row(&sql, params_from_iter(values.iter()), map_row)
        .optional()?;
    Ok(record)
}
