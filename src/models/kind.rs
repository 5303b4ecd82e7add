use std::str::FromStr;

use crate::errors::AppError;

/// Which side of the OPEN → CLOSED lifecycle a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Open,
    Closed,
}

impl Kind {
    /// SQL predicate selecting records of this kind.
    pub fn predicate(&self) -> &'static str {
        match self {
            Kind::Open => "closed_at IS NULL",
            Kind::Closed => "closed_at IS NOT NULL",
        }
    }
}

impl FromStr for Kind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Kind::Open),
            "closed" => Ok(Kind::Closed),
            other => Err(AppError::InvalidArgument(format!(
                "kind must be 'open' or 'closed', got '{}'",
                other
            ))),
        }
    }
}
