use chrono::NaiveDateTime;

/// One tracked interval for a (slug, issue) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub slug: String,
    pub issue: String,
    pub created_at: NaiveDateTime,
    pub closed_at: Option<NaiveDateTime>,
}

impl Record {
    /// `slug#issue`
    pub fn key(&self) -> String {
        format!("{}#{}", self.slug, self.issue)
    }

    /// Whole seconds covered by this record. A closed interval is rounded to
    /// the nearest second; an open one is measured up to `now` and truncated.
    pub fn elapsed_seconds(&self, now: NaiveDateTime) -> i64 {
        match self.closed_at {
            Some(closed_at) => {
                let millis = (closed_at - self.created_at).num_milliseconds().max(0);
                (millis + 500) / 1000
            }
            None => (now - self.created_at).num_seconds().max(0),
        }
    }

    /// Report line: `slug#issue HH:MM-HH:MM`, or `HH:MM-not yet` while open.
    pub fn render(&self) -> String {
        let closed = self
            .closed_at
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "not yet".to_string());

        format!(
            "{} {}-{}",
            self.key(),
            self.created_at.format("%H:%M"),
            closed
        )
    }
}
