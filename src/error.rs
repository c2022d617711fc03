use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerRole {
    Pitcher,
    Batter,
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerRole::Pitcher => f.write_str("pitcher"),
            PlayerRole::Batter => f.write_str("batter"),
        }
    }
}

/// Every way a daily run can end without a result.
#[derive(Error, Debug)]
pub enum TunnelError {
    /// No games that day, or Statcast has not published them yet.
    #[error("no pitch data for {date}")]
    EmptySourceData { date: NaiveDate },

    #[error("none of the {total} pitches had a complete pairing with a previous pitch")]
    NoEligiblePitches { total: usize },

    #[error("could not resolve {role} id {id} to a player name")]
    UnresolvedIdentity { role: PlayerRole, id: i64 },

    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error("failed to read source data: {0}")]
    Source(#[from] std::io::Error),
}

impl TunnelError {
    /// Expected outcomes a scheduler should log and skip rather than alarm on.
    pub fn is_routine(&self) -> bool {
        matches!(
            self,
            TunnelError::EmptySourceData { .. } | TunnelError::NoEligiblePitches { .. }
        )
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TunnelError::EmptySourceData { .. } => "empty_source_data",
            TunnelError::NoEligiblePitches { .. } => "no_eligible_pitches",
            TunnelError::UnresolvedIdentity { .. } => "unresolved_identity",
            TunnelError::MalformedInput { .. } => "malformed_input",
            TunnelError::Source(_) => "source",
        }
    }
}

impl From<csv::Error> for TunnelError {
    fn from(err: csv::Error) -> Self {
        // csv already includes the record position in its message
        let reason = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => TunnelError::Source(io),
            _ => TunnelError::MalformedInput { reason },
        }
    }
}
