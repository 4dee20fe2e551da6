use std::collections::HashSet;

use crate::edge::NodeId;
use crate::graph::Graph;

/// Best route found by [`longest`].
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub distance: f64,
    pub path: Vec<NodeId>,
    /// Number of simple paths enumerated on the way.
    pub explored: u64,
}

impl Default for Route {
    fn default() -> Self {
        Self {
            distance: f64::NEG_INFINITY,
            path: Vec::new(),
            explored: 0,
        }
    }
}

struct Frame {
    node: NodeId,
    next: usize,
    distance: f64,
}

/// Explicit DFS stack, so path depth is bounded by memory rather than by the
/// thread's stack.
#[derive(Default)]
struct SearchState {
    visited: HashSet<NodeId>,
    path: Vec<NodeId>,
    frames: Vec<Frame>,
    // length of the current path prefix that beat `best` but is not copied yet
    pending: Option<usize>,
}

impl SearchState {
    fn enter(&mut self, node: NodeId, distance: f64, best: &mut Route) {
        self.visited.insert(node);
        self.path.push(node);
        self.frames.push(Frame {
            node,
            next: 0,
            distance,
        });
        best.explored += 1;
        if distance > best.distance {
            best.distance = distance;
            self.pending = Some(self.path.len());
        }
    }

    fn leave(&mut self, best: &mut Route) {
        if self.pending == Some(self.path.len()) {
            best.path = self.path.clone();
            self.pending = None;
        }
        if let Some(frame) = self.frames.pop() {
            self.path.pop();
            self.visited.remove(&frame.node);
        }
    }
}

/// Walk every simple path starting at `start`, updating `best`.
fn walk(graph: &Graph, start: NodeId, state: &mut SearchState, best: &mut Route) {
    state.enter(start, 0.0, best);
    while let Some(frame) = state.frames.last_mut() {
        match graph.neighbors(frame.node).get(frame.next) {
            Some(&(next, weight)) => {
                frame.next += 1;
                let distance = frame.distance + weight;
                if !state.visited.contains(&next) {
                    state.enter(next, distance, best);
                }
            }
            None => state.leave(best),
        }
    }
}

/// Exhaustively search every simple path from every station and return the
/// heaviest one.
///
/// Stations are tried in ascending id order and hops in input order; on an
/// exact tie the path found first is kept. An empty graph yields an empty
/// path of distance 0.
pub fn longest(graph: &Graph) -> Route {
    let mut best = Route::default();
    let mut state = SearchState::default();
    for &start in graph.stations() {
        walk(graph, start, &mut state, &mut best);
    }
    if best.path.is_empty() {
        best.distance = 0.0;
    }
    best
}
