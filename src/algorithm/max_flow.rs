//! # Maximum Flow Problem
//!
//! Computing a maximum flow between two vertices of a `FlowNetwork`, together with the minimum cut
//! that proves it is maximal.
use std::iter::once;

use fifo_set::FIFOSet;
use petgraph::Direction;
use petgraph::algo::ford_fulkerson;
use petgraph::graph::NodeIndex;

use crate::data::network::{Capacity, FlowNetwork};

/// An algorithm computing maximum flows.
///
/// Implementations should be exact: the returned value is the true maximum. The cut is derived
/// from the flow by `MinCut::from_flows`.
pub trait MaxFlowOracle {
    /// Compute a maximum flow.
    ///
    /// # Arguments
    ///
    /// * `network`: Network to send the flow through.
    /// * `s`: Source vertex.
    /// * `t`: Sink vertex, different from the source.
    ///
    /// # Return value
    ///
    /// The flow over each arc, with its value and the source side of a minimum cut.
    fn max_flow<C: Capacity>(network: FlowNetwork<C>, s: usize, t: usize) -> MinCut<C>;
}

/// Maximum flow and the minimum cut certifying it.
#[derive(Debug, Clone)]
pub struct MinCut<C> {
    network: FlowNetwork<C>,
    value: C,
    /// (arc -> flow over it)
    flows: Vec<C>,
    /// (vertex -> whether it is reachable from the source in the residual network)
    source_side: Vec<bool>,
}

impl<C: Capacity> MinCut<C> {
    /// Derive the minimum cut from a maximum flow.
    ///
    /// The source side consists of the vertices reachable from the source over arcs that have
    /// capacity left, or backwards over arcs that carry flow. This is the smallest source side
    /// among all minimum cuts.
    ///
    /// # Arguments
    ///
    /// * `network`: Network the flow was computed on.
    /// * `s`: Source vertex.
    /// * `value`: Value of the flow.
    /// * `flows`: Flow over each arc, indexed like the arcs of the network.
    pub fn from_flows(network: FlowNetwork<C>, s: usize, value: C, flows: Vec<C>) -> Self {
        debug_assert_eq!(flows.len(), network.nr_arcs());

        let mut source_side = vec![false; network.nr_vertices()];
        source_side[s] = true;

        let mut queue = once(s).collect::<FIFOSet<_>>();
        while let Some(vertex) = queue.pop() {
            // Arcs with capacity left, and arcs carrying flow that can be canceled
            let forward = network.arcs(vertex, Direction::Outgoing)
                .filter(|&index| flows[index] < network.arc(index).2)
                .map(|index| network.arc(index).1);
            let backward = network.arcs(vertex, Direction::Incoming)
                .filter(|&index| flows[index] > C::zero())
                .map(|index| network.arc(index).0);

            for next in forward.chain(backward) {
                if !source_side[next] {
                    source_side[next] = true;
                    queue.push(next);
                }
            }
        }

        Self { network, value, flows, source_side }
    }

    /// Value of the maximum flow, which equals the capacity of the cut.
    pub fn value(&self) -> C {
        self.value
    }

    /// Whether a vertex is on the source side of the cut.
    pub fn in_cut(&self, vertex: usize) -> bool {
        debug_assert!(vertex < self.source_side.len());

        self.source_side[vertex]
    }

    /// Flow over an arc.
    pub fn flow(&self, arc: usize) -> C {
        self.flows[arc]
    }

    /// The network the flow was computed on.
    pub fn network(&self) -> &FlowNetwork<C> {
        &self.network
    }
}

/// The Ford-Fulkerson method as provided by `petgraph`, augmenting along shortest paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FordFulkerson;

impl MaxFlowOracle for FordFulkerson {
    /// # Panics
    ///
    /// When the source and sink are the same vertex, or when the total capacity leaving the source
    /// doesn't fit in `C`.
    fn max_flow<C: Capacity>(network: FlowNetwork<C>, s: usize, t: usize) -> MinCut<C> {
        assert!(s < network.nr_vertices() && t < network.nr_vertices());
        assert_ne!(s, t, "the source can't also be the sink");
        // Bounds the flow value and every intermediate sum
        assert!(
            network.capacity_leaving(s).is_some(),
            "capacity leaving the source doesn't fit in {}", std::any::type_name::<C>(),
        );

        let (value, flows) = ford_fulkerson(network.graph(), NodeIndex::new(s), NodeIndex::new(t));
        tracing::trace!(nr_vertices = network.nr_vertices(), nr_arcs = network.nr_arcs(), ?value, "maximum flow found");

        MinCut::from_flows(network, s, value, flows)
    }
}
