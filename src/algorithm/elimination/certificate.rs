//! # Certificates of elimination
use std::fmt;
use std::slice::Iter;

use itertools::Itertools;

use crate::data::league::{League, QueryError};

/// A nonempty set of teams that together prove that another team can't finish first.
///
/// Members are listed in league order.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Certificate {
    teams: Vec<String>,
}

impl Certificate {
    pub(crate) fn new(league: &League, positions: &[usize]) -> Self {
        debug_assert!(!positions.is_empty());
        debug_assert!(positions.iter().tuple_windows().all(|(i, j)| i < j));

        Self {
            teams: positions.iter().map(|&i| league.team_at(i).name.clone()).collect(),
        }
    }

    /// Number of teams in the certificate.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Always false; a certificate has at least one member.
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Whether a team is part of the certificate.
    pub fn contains(&self, name: &str) -> bool {
        self.teams.iter().any(|team| team == name)
    }

    /// Names of the teams, in league order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.teams.iter().map(String::as_str)
    }

    /// Check that these teams indeed eliminate a team.
    ///
    /// Together, the teams `R` end up with at least their current wins plus all games they still
    /// play against each other. When that exceeds `|R|` times the maximum number of wins the team
    /// can reach, at least one of them must finish ahead of it.
    ///
    /// # Arguments
    ///
    /// * `league`: Division the certificate was computed for.
    /// * `team`: Name of the team that is claimed to be eliminated.
    ///
    /// # Errors
    ///
    /// When the team, or one of the members, is not part of the league.
    pub fn proves(&self, league: &League, team: &str) -> Result<bool, QueryError> {
        let ceiling = league.max_wins(team)?;
        let members = self.teams.iter()
            .map(|name| league.index_of(name))
            .collect::<Result<Vec<_>, _>>()?;

        let wins = members.iter()
            .map(|&i| u64::from(league.team_at(i).wins))
            .sum::<u64>();
        let games_among = members.iter()
            .tuple_combinations()
            .map(|(&i, &j)| u64::from(league.against_at(i, j)))
            .sum::<u64>();

        Ok(!members.is_empty() && wins + games_among > members.len() as u64 * ceiling)
    }
}

impl<'a> IntoIterator for &'a Certificate {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.teams.iter()
    }
}

impl fmt::Display for Certificate {
    /// Formatted like `{ Atlanta New_York }`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for team in &self.teams {
            write!(f, "{} ", team)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::elimination::certificate::Certificate;
    use crate::data::league::QueryError;
    use crate::io::division::parse;

    const TEAMS_5: &str = "5
New_York    75 59 28   0 3 8 7 3
Baltimore   71 63 28   3 0 2 7 7
Boston      69 66 27   8 2 0 0 3
Toronto     63 72 27   7 7 0 0 3
Detroit     49 86 27   3 7 3 3 0
";

    #[test]
    fn proves() {
        let league = parse(TEAMS_5).unwrap();

        // 278 wins plus 27 games among them is 305, more than 4 * 76
        let all = Certificate::new(&league, &[0, 1, 2, 3]);
        assert_eq!(all.proves(&league, "Detroit"), Ok(true));
        // 146 + 3 = 149 < 2 * 76
        let two = Certificate::new(&league, &[0, 1]);
        assert_eq!(two.proves(&league, "Detroit"), Ok(false));
        assert_eq!(all.proves(&league, "New_York"), Ok(false));
        assert_eq!(all.proves(&league, "Chicago"), Err(QueryError::UnknownTeam("Chicago".to_string())));
    }

    #[test]
    fn accessors() {
        let league = parse(TEAMS_5).unwrap();
        let certificate = Certificate::new(&league, &[1, 3]);

        assert_eq!(certificate.len(), 2);
        assert!(!certificate.is_empty());
        assert!(certificate.contains("Toronto"));
        assert!(!certificate.contains("Detroit"));
        assert_eq!(certificate.iter().collect::<Vec<_>>(), vec!["Baltimore", "Toronto"]);
        assert_eq!(certificate.to_string(), "{ Baltimore Toronto }");
    }
}
