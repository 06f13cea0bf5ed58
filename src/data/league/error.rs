//! # Errors when querying a league
use thiserror::Error;

/// A query referred to a team that can't be looked up.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum QueryError {
    /// The argument can't be a team name at all, for example because it is empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// No team with this name is part of the league.
    #[error("unknown team: \"{0}\"")]
    UnknownTeam(String),
}
