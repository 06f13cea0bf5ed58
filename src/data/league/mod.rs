//! # League
//!
//! The records of a single division: per team the wins, losses and games left, and for every pair
//! of teams the number of games they still play against each other.
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use crate::io::error::InconsistencyError;

pub mod error;

pub use error::QueryError;

/// Record of a single team.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Team {
    /// Unique within a league, never empty.
    pub name: String,
    /// Games won so far.
    pub wins: u32,
    /// Games lost so far.
    pub losses: u32,
    /// Games still to be played, against any team in the league or outside of it.
    pub remaining: u32,
}

impl Team {
    /// Create a new team record.
    pub fn new(name: impl Into<String>, wins: u32, losses: u32, remaining: u32) -> Self {
        Self { name: name.into(), wins, losses, remaining }
    }

    /// The number of wins this team has when it wins all of its remaining games.
    #[must_use]
    pub fn max_wins(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.remaining)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.name, self.wins, self.losses, self.remaining)
    }
}

/// A division of teams, immutable after construction.
///
/// Teams keep the order in which they were given. That order is also the order in which they are
/// iterated and in which the members of certificates are listed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct League {
    teams: Vec<Team>,
    /// (name -> position in `teams`)
    index: HashMap<String, usize>,
    /// Symmetric, zero diagonal, indexed by team position.
    against: Vec<Vec<u32>>,
}

impl League {
    /// Create a new league.
    ///
    /// # Arguments
    ///
    /// * `teams`: Team records, in the order they should be reported in.
    /// * `against`: Square matrix of remaining games between teams, indexed like `teams`.
    ///
    /// # Errors
    ///
    /// When a name is empty or appears twice, or when the matrix is not square, has a nonzero
    /// diagonal entry or is not symmetric.
    pub fn new(teams: Vec<Team>, against: Vec<Vec<u32>>) -> Result<Self, InconsistencyError> {
        let mut index = HashMap::with_capacity(teams.len());
        for (i, team) in teams.iter().enumerate() {
            if team.name.is_empty() {
                return Err(InconsistencyError::new(format!("Team at position {} has an empty name", i)));
            }
            match index.entry(team.name.clone()) {
                Entry::Occupied(_) => return Err(InconsistencyError::new(format!(
                    "Team name \"{}\" appears more than once", team.name,
                ))),
                Entry::Vacant(entry) => {
                    entry.insert(i);
                },
            }
        }

        if against.len() != teams.len() || against.iter().any(|row| row.len() != teams.len()) {
            return Err(InconsistencyError::new(format!(
                "Matchup table should be {0} by {0} for {0} teams", teams.len(),
            )));
        }
        for i in 0..teams.len() {
            if against[i][i] != 0 {
                return Err(InconsistencyError::new(format!(
                    "Team \"{}\" can't have games left against itself", teams[i].name,
                )));
            }
            for j in 0..i {
                if against[i][j] != against[j][i] {
                    return Err(InconsistencyError::new(format!(
                        "Games left between \"{}\" and \"{}\" differ per direction ({} and {})",
                        teams[i].name, teams[j].name, against[i][j], against[j][i],
                    )));
                }
            }
        }

        Ok(Self { teams, index, against })
    }

    /// Number of teams in this division.
    pub fn nr_teams(&self) -> usize {
        self.teams.len()
    }

    /// All team names, in league order.
    pub fn teams(&self) -> impl ExactSizeIterator<Item = &str> + Clone + '_ {
        self.teams.iter().map(|team| team.name.as_str())
    }

    /// All team records, in league order.
    pub fn records(&self) -> &[Team] {
        &self.teams
    }

    /// Position of a team in the league order.
    ///
    /// # Errors
    ///
    /// When the name is empty or doesn't belong to any team.
    pub fn index_of(&self, name: &str) -> Result<usize, QueryError> {
        if name.is_empty() {
            return Err(QueryError::InvalidArgument("team name is empty"));
        }

        self.index.get(name).copied().ok_or_else(|| QueryError::UnknownTeam(name.to_string()))
    }

    /// The full record of a team.
    pub fn team(&self, name: &str) -> Result<&Team, QueryError> {
        self.index_of(name).map(|i| &self.teams[i])
    }

    /// Number of games won by a team.
    pub fn wins(&self, name: &str) -> Result<u32, QueryError> {
        self.team(name).map(|team| team.wins)
    }

    /// Number of games lost by a team.
    pub fn losses(&self, name: &str) -> Result<u32, QueryError> {
        self.team(name).map(|team| team.losses)
    }

    /// Number of games left for a team.
    pub fn remaining(&self, name: &str) -> Result<u32, QueryError> {
        self.team(name).map(|team| team.remaining)
    }

    /// Best final win count a team can still reach.
    pub fn max_wins(&self, name: &str) -> Result<u64, QueryError> {
        self.team(name).map(Team::max_wins)
    }

    /// Number of games left between two teams.
    ///
    /// Zero when both names are the same team.
    pub fn against(&self, first: &str, second: &str) -> Result<u32, QueryError> {
        let i = self.index_of(first)?;
        let j = self.index_of(second)?;

        Ok(self.against[i][j])
    }

    /// Team record by position.
    pub(crate) fn team_at(&self, i: usize) -> &Team {
        debug_assert!(i < self.nr_teams());

        &self.teams[i]
    }

    /// Games left between two teams, by position.
    pub(crate) fn against_at(&self, i: usize, j: usize) -> u32 {
        debug_assert!(i < self.nr_teams() && j < self.nr_teams());

        self.against[i][j]
    }
}
