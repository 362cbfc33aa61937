// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Shortest paths over implicit graphs
//!
//! The seam finder doesn't care how the shortest path is found, only
//! that it gets one.  This module defines the contract between the two
//! (a graph that can enumerate a vertex's outgoing edges and estimate
//! its distance to a goal, and a solver that turns that into a path)
//! and supplies an A* solver so the crate works out of the box.
//!
//! The graph is never materialized: the solver asks for neighbors as
//! it expands vertices, and the graph builds the edge list on demand.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;
use tracing::{debug, trace};

/// A directed edge with a non-negative weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedEdge<V> {
    pub from: V,
    pub to: V,
    pub weight: f64,
}

impl<V> WeightedEdge<V> {
    pub fn new(from: V, to: V, weight: f64) -> Self {
        WeightedEdge { from, to, weight }
    }
}

/// A graph an A*-style solver can search.
pub trait AStarGraph {
    type Vertex: Clone + Eq + Hash;

    /// The outgoing edges of `v`.
    fn neighbors(&self, v: &Self::Vertex) -> Vec<WeightedEdge<Self::Vertex>>;

    /// A lower bound on the remaining distance from `v` to `goal`.  It
    /// must never overestimate, or the solver may return a path that
    /// isn't the shortest.
    fn estimated_distance_to_goal(&self, v: &Self::Vertex, goal: &Self::Vertex) -> f64;
}

/// Anything that can find the minimum-weight path between two vertices.
pub trait ShortestPathSolver {
    /// The vertices of a minimum-weight path from `source` to `target`,
    /// both included, or `None` if `target` is unreachable.  Ties
    /// between equal-weight paths may be broken any way the solver
    /// likes.
    fn solve<G: AStarGraph>(
        &self,
        graph: &G,
        source: G::Vertex,
        target: G::Vertex,
    ) -> Option<Vec<G::Vertex>>;
}

// The heap is a max-heap, so the ordering is reversed to pop the
// cheapest candidate first.  Priorities are never NaN; total_cmp just
// keeps Ord honest about it.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    priority: f64,
    slot: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Per-vertex bookkeeping.  Vertices are interned into `slots` on first
// sight so the heap can carry a plain index.
struct Record<V> {
    vertex: V,
    distance: f64,
    parent: Option<usize>,
    settled: bool,
}

/// Plain A* with a binary heap and lazy deletion: a vertex may sit in
/// the heap several times, and stale entries are skipped when popped.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStarSolver;

impl AStarSolver {
    pub fn new() -> Self {
        AStarSolver
    }

    /// As `solve`, but also reports how many vertices were settled
    /// before the target was reached.
    pub fn solve_counted<G: AStarGraph>(
        &self,
        graph: &G,
        source: G::Vertex,
        target: G::Vertex,
    ) -> Option<(Vec<G::Vertex>, usize)> {
        let mut slots: Vec<Record<G::Vertex>> = Vec::new();
        let mut index: HashMap<G::Vertex, usize> = HashMap::new();
        let mut heap = BinaryHeap::new();
        let mut settled = 0;

        index.insert(source.clone(), 0);
        slots.push(Record {
            vertex: source.clone(),
            distance: 0.0,
            parent: None,
            settled: false,
        });
        heap.push(Candidate {
            priority: graph.estimated_distance_to_goal(&source, &target),
            slot: 0,
        });

        while let Some(Candidate { slot, .. }) = heap.pop() {
            if slots[slot].settled {
                continue;
            }
            slots[slot].settled = true;
            settled += 1;

            if slots[slot].vertex == target {
                let path = unwind(&slots, slot);
                debug!(settled, length = path.len(), "reached target");
                return Some((path, settled));
            }

            let distance = slots[slot].distance;
            for edge in graph.neighbors(&slots[slot].vertex) {
                let next_distance = distance + edge.weight;
                let next = match index.entry(edge.to.clone()) {
                    Entry::Occupied(o) => {
                        let next = *o.get();
                        if slots[next].settled || next_distance >= slots[next].distance {
                            continue;
                        }
                        slots[next].distance = next_distance;
                        slots[next].parent = Some(slot);
                        next
                    }
                    Entry::Vacant(v) => {
                        let next = slots.len();
                        v.insert(next);
                        slots.push(Record {
                            vertex: edge.to.clone(),
                            distance: next_distance,
                            parent: Some(slot),
                            settled: false,
                        });
                        next
                    }
                };
                trace!(slot = next, distance = next_distance, "relaxed");
                heap.push(Candidate {
                    priority: next_distance + graph.estimated_distance_to_goal(&edge.to, &target),
                    slot: next,
                });
            }
        }
        debug!(settled, "target unreachable");
        None
    }
}

fn unwind<V: Clone>(slots: &[Record<V>], last: usize) -> Vec<V> {
    let mut path = Vec::new();
    let mut cursor = Some(last);
    while let Some(slot) = cursor {
        path.push(slots[slot].vertex.clone());
        cursor = slots[slot].parent;
    }
    path.reverse();
    path
}

impl ShortestPathSolver for AStarSolver {
    fn solve<G: AStarGraph>(
        &self,
        graph: &G,
        source: G::Vertex,
        target: G::Vertex,
    ) -> Option<Vec<G::Vertex>> {
        self.solve_counted(graph, source, target).map(|(path, _)| path)
    }
}
