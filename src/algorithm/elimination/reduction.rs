//! # Reduction to a maximum flow problem
//!
//! Whether the games left between the other teams can be divided such that none of them ends up
//! with more wins than the target team can reach, is a flow problem. Each game is a unit of flow
//! leaving the source, and is routed to the team winning it. A team can absorb no more wins than
//! the target's maximum minus its current wins; the sink collects those.
//!
//! Vertex layout, every group in a contiguous range:
//!
//! ```text
//! | teams other than the target | one game vertex per pair of them | source | sink |
//! ```
use cumsum::cumsum_array_owned;
use enum_map::{Enum, EnumMap, enum_map};
use itertools::Itertools;

use crate::algorithm::max_flow::MaxFlowOracle;
use crate::data::league::League;
use crate::data::network::FlowNetwork;

/// The vertex groups, in the order they are laid out.
#[derive(Enum, Debug, Clone, Copy, Eq, PartialEq)]
enum NodeGroup {
    Team,
    Game,
    Source,
    Sink,
}

/// Meaning of a vertex in the reduction network.
///
/// Teams are identified by their position in the league.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Node {
    /// A team other than the target.
    Team(usize),
    /// The games left between two teams other than the target, lowest position first.
    Game(usize, usize),
    /// Supplies one unit of flow per game left.
    Source,
    /// Collects the wins.
    Sink,
}

/// Flow network deciding non-trivial elimination of a single team.
///
/// Built once per check and consumed when solved.
#[derive(Debug, Clone)]
pub struct Reduction {
    network: FlowNetwork<u64>,
    /// (vertex -> meaning)
    nodes: Vec<Node>,
    /// (group -> first vertex index past the group)
    group_end: EnumMap<NodeGroup, usize>,
    /// Total games left between the other teams, the value of a flow saturating the source.
    nr_games: u64,
}

impl Reduction {
    /// Build the network for one team.
    ///
    /// # Arguments
    ///
    /// * `league`: Division containing the target.
    /// * `target`: Position of the team to build the network for.
    ///
    /// # Panics
    ///
    /// When another team already has more wins than the target can reach. Such a team eliminates
    /// the target trivially, which should have been checked before.
    pub fn new(league: &League, target: usize) -> Self {
        debug_assert!(target < league.nr_teams());

        let others = (0..league.nr_teams()).filter(|&i| i != target).collect::<Vec<_>>();
        let games = others.iter().copied().tuple_combinations::<(_, _)>().collect::<Vec<_>>();

        let cumulative = cumsum_array_owned([others.len(), games.len(), 1, 1]);
        let group_end = enum_map! {
            NodeGroup::Team   => cumulative[0],
            NodeGroup::Game   => cumulative[1],
            NodeGroup::Source => cumulative[2],
            NodeGroup::Sink   => cumulative[3],
        };

        let nodes = others.iter().map(|&i| Node::Team(i))
            .chain(games.iter().map(|&(i, j)| Node::Game(i, j)))
            .chain([Node::Source, Node::Sink])
            .collect::<Vec<_>>();
        debug_assert_eq!(nodes.len(), group_end[NodeGroup::Sink]);

        // (league position -> vertex index)
        let mut team_vertex = vec![None; league.nr_teams()];
        for (vertex, &i) in others.iter().enumerate() {
            team_vertex[i] = Some(vertex);
        }
        let vertex_of = |i: usize| team_vertex[i].unwrap_or_else(|| unreachable!("the target has no vertex"));

        let nr_games = games.iter()
            .map(|&(i, j)| u64::from(league.against_at(i, j)))
            .sum::<u64>();
        // Exceeds any flow value, so never part of a minimum cut
        let unbounded = nr_games + 1;
        let ceiling = league.team_at(target).max_wins();

        let source = group_end[NodeGroup::Source] - 1;
        let sink = group_end[NodeGroup::Sink] - 1;
        let mut network = FlowNetwork::new(nodes.len());
        for (k, &(i, j)) in games.iter().enumerate() {
            let game = group_end[NodeGroup::Team] + k;
            network.add_arc(source, game, u64::from(league.against_at(i, j)));
            network.add_arc(game, vertex_of(i), unbounded);
            network.add_arc(game, vertex_of(j), unbounded);
        }
        for &i in &others {
            let team = league.team_at(i);
            assert!(
                u64::from(team.wins) <= ceiling,
                "\"{}\" eliminates \"{}\" trivially, no flow network exists",
                team.name, league.team_at(target).name,
            );
            network.add_arc(vertex_of(i), sink, ceiling - u64::from(team.wins));
        }

        Self { network, nodes, group_end, nr_games }
    }

    /// Number of vertices in the network.
    pub fn nr_vertices(&self) -> usize {
        self.nodes.len()
    }

    /// Total games left between the other teams.
    pub fn nr_games(&self) -> u64 {
        self.nr_games
    }

    /// The network itself.
    pub fn network(&self) -> &FlowNetwork<u64> {
        &self.network
    }

    /// Vertex index of the source.
    pub fn source(&self) -> usize {
        self.group_end[NodeGroup::Source] - 1
    }

    /// Vertex index of the sink.
    pub fn sink(&self) -> usize {
        self.group_end[NodeGroup::Sink] - 1
    }

    /// Solve the flow problem and read the teams on the source side of the minimum cut.
    ///
    /// # Return value
    ///
    /// Positions of the teams that together eliminate the target, in league order. Empty when all
    /// games left can be divided without any team passing the target.
    pub fn solve<O: MaxFlowOracle>(self) -> Vec<usize> {
        let (source, sink) = (self.source(), self.sink());
        let cut = O::max_flow(self.network, source, sink);
        debug_assert!(cut.value() <= self.nr_games);

        let witnesses = (0..self.group_end[NodeGroup::Team])
            .filter(|&vertex| cut.in_cut(vertex))
            .map(|vertex| match self.nodes[vertex] {
                Node::Team(i) => i,
                other => unreachable!("vertex {} in the team range is {:?}", vertex, other),
            })
            .collect::<Vec<_>>();
        // A flow saturating the source leaves no team reachable
        debug_assert_eq!(witnesses.is_empty(), cut.value() == self.nr_games);
        tracing::trace!(flow = cut.value(), nr_games = self.nr_games, nr_witnesses = witnesses.len(), "cut read");

        witnesses
    }
}
