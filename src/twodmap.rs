// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field, row-major, one cell per
/// pixel.  The seam graph uses it to hold the energy of every pixel so
/// that edge weights are looked up rather than recomputed each time
/// the solver expands a vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A map of the given dimensions with every cell at `P::default()`.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Build a map by evaluating `f` at every (x, y), in row order.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        TwoDimensionalMap {
            width,
            height,
            cells,
        }
    }

    /// The raw cells, row-major.
    pub fn as_slice(&self) -> &[P] {
        &self.cells
    }

    // All of the index math lives here and nowhere else.  Same layout
    // as image::ImageBuffer.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_row_major() {
        let map = TwoDimensionalMap::from_fn(3, 2, |x, y| x + 10 * y);
        assert_eq!(map.as_slice(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(map[(2, 1)], 12);
    }

    #[test]
    fn index_mut_writes_one_cell() {
        let mut map: TwoDimensionalMap<f64> = TwoDimensionalMap::new(2, 2);
        map[(1, 0)] = 4.5;
        assert_eq!(map.as_slice(), &[0.0, 4.5, 0.0, 0.0]);
    }
}
