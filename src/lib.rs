// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing.  Seams are found as shortest paths
//! through an energy-weighted graph over the pixel grid, then removed
//! or duplicated.

mod ternary;

pub mod astar;
pub mod energy;
pub mod errors;
pub mod mutator;
pub mod orientation;
pub mod pixelpairs;
pub mod seamcarver;
pub mod seamfinder;
pub mod seamgraph;
pub mod twodmap;

pub use astar::{AStarGraph, AStarSolver, ShortestPathSolver, WeightedEdge};
pub use energy::{calculate_energy, energy_at, energy_to_image};
pub use errors::{Result, SeamError};
pub use orientation::Orientation;
pub use seamcarver::Carver;
pub use seamfinder::{find_seam, find_seam_with, path_to_seam, SeamFinder};
pub use seamgraph::{SeamGraph, Vertex};
pub use twodmap::TwoDimensionalMap;
