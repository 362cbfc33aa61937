// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam orientation
//!
//! Every seam operation comes in two flavors that differ only in which
//! axis the seam walks along and which axis it drifts across.  Rather
//! than writing each algorithm twice, the algorithms are written once
//! in terms of (along, cross) coordinates, and the orientation maps
//! those back to (x, y).

use std::fmt;

/// Which way a seam runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Top to bottom: one entry per row, each entry an x coordinate.
    Vertical,
    /// Left to right: one entry per column, each entry a y coordinate.
    Horizontal,
}

impl Orientation {
    /// The other one.
    pub fn turn(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }

    /// Length of the axis the seam advances along; this is also the
    /// length of a seam.
    pub fn along_len(self, width: u32, height: u32) -> u32 {
        match self {
            Orientation::Vertical => height,
            Orientation::Horizontal => width,
        }
    }

    /// Length of the axis a seam entry indexes into.
    pub fn cross_len(self, width: u32, height: u32) -> u32 {
        match self {
            Orientation::Vertical => width,
            Orientation::Horizontal => height,
        }
    }

    /// (along, cross) -> (x, y)
    pub fn to_xy(self, along: u32, cross: u32) -> (u32, u32) {
        match self {
            Orientation::Vertical => (cross, along),
            Orientation::Horizontal => (along, cross),
        }
    }

    /// (x, y) -> (along, cross)
    pub fn from_xy(self, x: u32, y: u32) -> (u32, u32) {
        match self {
            Orientation::Vertical => (y, x),
            Orientation::Horizontal => (x, y),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::Horizontal => write!(f, "horizontal"),
        }
    }
}
