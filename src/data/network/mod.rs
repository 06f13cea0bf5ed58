//! # Flow networks
//!
//! Directed graphs with a capacity on each arc. They are stored as a `petgraph` graph, such that its
//! flow algorithms can run on them directly.
use std::fmt::Debug;
use std::ops::Sub;

use num_traits::CheckedAdd;
use petgraph::Direction;
use petgraph::algo::PositiveMeasure;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

/// Number type of capacities and flow values.
///
/// Flow computations are exact, so floating point numbers are not allowed.
pub trait Capacity: PositiveMeasure + Ord + Sub<Output = Self> + CheckedAdd + Debug {}
impl<T: PositiveMeasure + Ord + Sub<Output = T> + CheckedAdd + Debug> Capacity for T {}

/// Directed graph with arc capacities.
///
/// Vertices are identified by the indices `0..nr_vertices`, arcs by the order in which they were
/// added.
#[derive(Debug, Clone)]
pub struct FlowNetwork<C> {
    graph: DiGraph<(), C>,
}

impl<C: Capacity> FlowNetwork<C> {
    /// Create a network without arcs.
    ///
    /// # Arguments
    ///
    /// * `nr_vertices`: Vertices are identified by the indices `0..nr_vertices`.
    pub fn new(nr_vertices: usize) -> Self {
        let mut graph = DiGraph::with_capacity(nr_vertices, 0);
        for _ in 0..nr_vertices {
            graph.add_node(());
        }

        Self { graph }
    }

    /// Add an arc.
    ///
    /// # Return value
    ///
    /// Index of the arc, to be used with `arc`.
    pub fn add_arc(&mut self, from: usize, to: usize, capacity: C) -> usize {
        debug_assert!(from < self.nr_vertices() && to < self.nr_vertices());
        // No self-arcs
        debug_assert_ne!(from, to);
        debug_assert!(capacity >= C::zero());

        self.graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), capacity).index()
    }

    /// Number of vertices.
    pub fn nr_vertices(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of arcs.
    pub fn nr_arcs(&self) -> usize {
        self.graph.edge_count()
    }

    /// Tail, head and capacity of an arc.
    pub fn arc(&self, index: usize) -> (usize, usize, C) {
        let edge = &self.graph.raw_edges()[index];

        (edge.source().index(), edge.target().index(), edge.weight)
    }

    /// Indices of all arcs leaving or entering a vertex.
    pub fn arcs(&self, vertex: usize, direction: Direction) -> impl Iterator<Item = usize> + '_ {
        debug_assert!(vertex < self.nr_vertices());

        self.graph.edges_directed(NodeIndex::new(vertex), direction)
            .map(|edge| edge.id().index())
    }

    /// Total capacity of the arcs leaving a vertex.
    ///
    /// # Return value
    ///
    /// `None` if the total doesn't fit in the capacity type.
    pub fn capacity_leaving(&self, vertex: usize) -> Option<C> {
        self.arcs(vertex, Direction::Outgoing)
            .map(|index| self.arc(index).2)
            .try_fold(C::zero(), |total, capacity| total.checked_add(&capacity))
    }

    pub(crate) fn graph(&self) -> &DiGraph<(), C> {
        &self.graph
    }
}

#[cfg(test)]
mod test {
    use petgraph::Direction;

    use crate::data::network::FlowNetwork;

    #[test]
    fn arcs() {
        let mut network = FlowNetwork::<u32>::new(3);
        let a = network.add_arc(0, 1, 5);
        let b = network.add_arc(1, 2, 3);
        let c = network.add_arc(0, 2, 4);
        assert_eq!(network.nr_vertices(), 3);
        assert_eq!(network.nr_arcs(), 3);
        assert_eq!(network.arc(b), (1, 2, 3));

        let mut leaving = network.arcs(0, Direction::Outgoing).collect::<Vec<_>>();
        leaving.sort_unstable();
        assert_eq!(leaving, vec![a, c]);
        assert_eq!(network.arcs(1, Direction::Incoming).collect::<Vec<_>>(), vec![a]);

        assert_eq!(network.capacity_leaving(0), Some(9));
        assert_eq!(network.capacity_leaving(1), Some(3));
        assert_eq!(network.capacity_leaving(2), Some(0));
    }

    #[test]
    fn capacity_leaving_overflows() {
        let mut network = FlowNetwork::<u8>::new(3);
        network.add_arc(0, 1, 200);
        network.add_arc(0, 2, 200);

        assert_eq!(network.capacity_leaving(0), None);
    }
}
