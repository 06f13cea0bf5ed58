//! # Elimination
//!
//! Deciding for each team of a division whether it can still finish first, and if not, which teams
//! prove that.
//!
//! Two checks are done, cheapest first. A team is trivially eliminated when some other team has
//! already won more games than the team can reach. Otherwise, the remaining games between the
//! other teams are divided using a maximum flow computation; if they can't be divided such that no
//! team passes the target, the teams on the source side of the minimum cut form the certificate.
//!
//! That certificate is always valid, but not necessarily the smallest one possible.
use std::marker::PhantomData;
use std::sync::OnceLock;

use crate::algorithm::max_flow::{FordFulkerson, MaxFlowOracle};
use crate::data::league::{League, QueryError};

pub mod certificate;
mod reduction;
mod trivial;

pub use certificate::Certificate;

use reduction::Reduction;

/// Which check decided that a team is eliminated.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Method {
    /// A single team has more wins than the team can reach.
    Trivial,
    /// Read from a minimum cut.
    NonTrivial,
}

/// Final answer for a single team.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Status {
    /// The team can still finish first.
    NotEliminated,
    /// The team can't finish first.
    Eliminated {
        /// How this was found.
        method: Method,
        /// Teams that prove it.
        certificate: Certificate,
    },
}

impl Status {
    /// Whether the team can't finish first.
    pub fn is_eliminated(&self) -> bool {
        matches!(self, Status::Eliminated { .. })
    }

    /// Teams proving the elimination, if eliminated.
    pub fn certificate(&self) -> Option<&Certificate> {
        match self {
            Status::NotEliminated => None,
            Status::Eliminated { certificate, .. } => Some(certificate),
        }
    }

    /// Check that decided the elimination, if eliminated.
    pub fn method(&self) -> Option<Method> {
        match self {
            Status::NotEliminated => None,
            Status::Eliminated { method, .. } => Some(*method),
        }
    }
}

/// Answers elimination queries for a single league.
///
/// Every team's status is computed on the first query for it and kept for as long as the
/// certifier lives. The league is borrowed, and can't change in the meantime.
///
/// A `Certifier` can be shared between threads. When two threads query the same team for the
/// first time at once, one computes the status while the other waits for it.
#[derive(Debug)]
pub struct Certifier<'a, O = FordFulkerson> {
    league: &'a League,
    /// (team position -> status, once known)
    statuses: Vec<OnceLock<Status>>,
    oracle: PhantomData<fn() -> O>,
}

impl<'a> Certifier<'a> {
    /// Create a certifier using the default maximum flow algorithm.
    pub fn new(league: &'a League) -> Self {
        Self::with_oracle(league)
    }
}

impl<'a, O: MaxFlowOracle> Certifier<'a, O> {
    /// Create a certifier using a specific maximum flow algorithm.
    pub fn with_oracle(league: &'a League) -> Self {
        Self {
            league,
            statuses: (0..league.nr_teams()).map(|_| OnceLock::new()).collect(),
            oracle: PhantomData,
        }
    }

    /// The league this certifier answers for.
    pub fn league(&self) -> &'a League {
        self.league
    }

    /// Whether, and how, a team is eliminated.
    ///
    /// # Errors
    ///
    /// When the name is empty or not part of the league. Nothing is computed in that case.
    pub fn status(&self, team: &str) -> Result<&Status, QueryError> {
        let target = self.league.index_of(team)?;

        Ok(self.statuses[target].get_or_init(|| self.decide(target)))
    }

    /// Whether a team can't finish first anymore.
    pub fn is_eliminated(&self, team: &str) -> Result<bool, QueryError> {
        self.status(team).map(Status::is_eliminated)
    }

    /// Teams proving that a team is eliminated.
    ///
    /// # Return value
    ///
    /// `None` if the team is not eliminated.
    pub fn certificate_of_elimination(&self, team: &str) -> Result<Option<&Certificate>, QueryError> {
        self.status(team).map(Status::certificate)
    }

    /// All eliminated teams with their certificates, in league order.
    pub fn eliminated(&self) -> impl Iterator<Item = (&'a str, &Certificate)> + '_ {
        (0..self.league.nr_teams()).filter_map(move |target| {
            let status = self.statuses[target].get_or_init(|| self.decide(target));
            status.certificate().map(|certificate| (self.league.team_at(target).name.as_str(), certificate))
        })
    }

    fn decide(&self, target: usize) -> Status {
        let name = &self.league.team_at(target).name;

        let witnesses = trivial::witnesses(self.league, target);
        if !witnesses.is_empty() {
            tracing::debug!(team = %name, nr_witnesses = witnesses.len(), "trivially eliminated");
            return Status::Eliminated {
                method: Method::Trivial,
                certificate: Certificate::new(self.league, &witnesses),
            };
        }

        let reduction = Reduction::new(self.league, target);
        tracing::trace!(
            team = %name, nr_vertices = reduction.nr_vertices(), nr_arcs = reduction.network().nr_arcs(),
            nr_games = reduction.nr_games(), "reduction built",
        );
        let witnesses = reduction.solve::<O>();
        if witnesses.is_empty() {
            tracing::debug!(team = %name, "not eliminated");
            Status::NotEliminated
        } else {
            tracing::debug!(team = %name, nr_witnesses = witnesses.len(), "eliminated by a minimum cut");
            Status::Eliminated {
                method: Method::NonTrivial,
                certificate: Certificate::new(self.league, &witnesses),
            }
        }
    }
}
