use std::collections::{BTreeMap, BTreeSet};

use crate::edge::{Edge, NodeId};

/// Adjacency list over station ids.
///
/// Outgoing hops keep the order the edges were read in, which fixes the
/// order the router walks them.
#[derive(Debug, Default)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, Vec<(NodeId, f64)>>,
    stations: BTreeSet<NodeId>,
}

impl Graph {
    pub fn from_edges<'a, I: IntoIterator<Item = &'a Edge>>(edges: I) -> Self {
        let mut graph = Self::default();
        for edge in edges {
            graph
                .adjacency
                .entry(edge.from)
                .or_default()
                .push((edge.to, edge.distance));
            graph.stations.extend([edge.from, edge.to]);
        }
        graph
    }

    /// Hops leaving `node`; empty for stations that are only ever a destination.
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, f64)] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every station named by any edge, ascending.
    pub fn stations(&self) -> &BTreeSet<NodeId> {
        &self.stations
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
