// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The image as a graph
//!
//! A seam is a path through the pixel grid that advances exactly one
//! step along its axis at each pixel and drifts at most one step
//! across it.  Every such path is a path in the following graph:
//!
//! * a virtual source with an edge to every pixel of the first row
//!   (vertical) or column (horizontal);
//! * from every other pixel, edges to the up-to-three pixels it may
//!   step to next: straight ahead, and the two diagonals that stay in
//!   bounds;
//! * from every pixel of the last row (or column), a single edge to a
//!   virtual sink.
//!
//! An edge weighs the energy of the pixel it leads into, and edges into
//! the sink weigh nothing, so the weight of a source-to-sink path is
//! the total energy of its seam.  The minimum-energy seam is then one
//! shortest-path query instead of one per starting pixel.

use crate::astar::{AStarGraph, WeightedEdge};
use crate::energy::calculate_energy;
use crate::orientation::Orientation;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive};

/// A vertex of the seam graph.  The sentinels are their own variants;
/// they have no coordinates and can never be mistaken for a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertex {
    Source,
    Sink,
    Pixel(u32, u32),
}

/// The implicit graph over one image, for one orientation.
#[derive(Debug)]
pub struct SeamGraph {
    energy: TwoDimensionalMap<f64>,
    orientation: Orientation,
}

impl SeamGraph {
    /// Evaluate the energy of every pixel up front; the solver will ask
    /// for most of them, several times over.
    pub fn new<I, P, S>(image: &I, orientation: Orientation) -> Self
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        SeamGraph::from_energy(calculate_energy(image), orientation)
    }

    /// Build the graph from a precomputed energy map.
    pub fn from_energy(energy: TwoDimensionalMap<f64>, orientation: Orientation) -> Self {
        SeamGraph {
            energy,
            orientation,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn along_len(&self) -> u32 {
        self.orientation.along_len(self.energy.width, self.energy.height)
    }

    fn cross_len(&self) -> u32 {
        self.orientation.cross_len(self.energy.width, self.energy.height)
    }

    // An edge to the pixel at (along, cross), weighted by its energy.
    fn edge_to(&self, from: Vertex, along: u32, cross: u32) -> WeightedEdge<Vertex> {
        let (x, y) = self.orientation.to_xy(along, cross);
        WeightedEdge::new(from, Vertex::Pixel(x, y), self.energy[(x, y)])
    }
}

impl AStarGraph for SeamGraph {
    type Vertex = Vertex;

    fn neighbors(&self, v: &Vertex) -> Vec<WeightedEdge<Vertex>> {
        match *v {
            Vertex::Source => (0..self.cross_len())
                .map(|cross| self.edge_to(Vertex::Source, 0, cross))
                .collect(),
            Vertex::Sink => Vec::new(),
            Vertex::Pixel(x, y) => {
                let (along, cross) = self.orientation.from_xy(x, y);
                if along + 1 >= self.along_len() {
                    return vec![WeightedEdge::new(*v, Vertex::Sink, 0.0)];
                }
                let next = along + 1;
                let mut edges = Vec::with_capacity(3);
                edges.push(self.edge_to(*v, next, cross));
                if cross > 0 {
                    edges.push(self.edge_to(*v, next, cross - 1));
                }
                if cross + 1 < self.cross_len() {
                    edges.push(self.edge_to(*v, next, cross + 1));
                }
                edges
            }
        }
    }

    // Zero is always admissible.  It makes A* behave as Dijkstra; a
    // tighter bound would only change how much of the grid is explored.
    fn estimated_distance_to_goal(&self, _v: &Vertex, _goal: &Vertex) -> f64 {
        0.0
    }
}
