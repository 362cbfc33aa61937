// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! From shortest path to seam
//!
//! Build the seam graph, ask the solver for the cheapest path from the
//! virtual source to the virtual sink, drop the sentinels, and keep the
//! cross-axis coordinate of every pixel left.  Because every edge
//! advances the along-axis by exactly one, the solver's path is already
//! in seam order.

use crate::astar::{AStarSolver, ShortestPathSolver};
use crate::errors::{Result, SeamError};
use crate::orientation::Orientation;
use crate::seamgraph::{SeamGraph, Vertex};
use image::{GenericImageView, Pixel, Primitive};
use tracing::debug;

/// Anything holding an image it can be asked for seams of.
pub trait SeamFinder {
    /// One y coordinate per column, left to right.
    fn find_horizontal_seam(&self) -> Result<Vec<u32>>;

    /// One x coordinate per row, top to bottom.
    fn find_vertical_seam(&self) -> Result<Vec<u32>>;
}

/// Turn a solver path into a seam.  A path longer than two vertices
/// loses its first and last (the source and the sink); whatever is
/// left is projected onto the cross axis.
pub fn path_to_seam(path: &[Vertex], orientation: Orientation) -> Vec<u32> {
    let interior = if path.len() > 2 {
        &path[1..path.len() - 1]
    } else {
        path
    };
    interior
        .iter()
        .filter_map(|v| match *v {
            Vertex::Pixel(x, y) => Some(orientation.from_xy(x, y).1),
            Vertex::Source | Vertex::Sink => None,
        })
        .collect()
}

/// Find the minimum-energy seam of `image` with the default solver.
pub fn find_seam<I, P, S>(image: &I, orientation: Orientation) -> Result<Vec<u32>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    find_seam_with(image, orientation, &AStarSolver::new())
}

/// Find the minimum-energy seam of `image` with the given solver.
///
/// Images only one pixel across the cross axis have exactly one seam,
/// all zeros, and never reach the solver.
pub fn find_seam_with<I, P, S, V>(image: &I, orientation: Orientation, solver: &V) -> Result<Vec<u32>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
    V: ShortestPathSolver,
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(SeamError::NullInput);
    }
    if width == 1 && height == 1 {
        return Ok(vec![0]);
    }
    if orientation.cross_len(width, height) == 1 {
        return Ok(vec![0; orientation.along_len(width, height) as usize]);
    }

    let graph = SeamGraph::new(image, orientation);
    let path = solver
        .solve(&graph, Vertex::Source, Vertex::Sink)
        .ok_or(SeamError::NoPath)?;
    let seam = path_to_seam(&path, orientation);
    debug!(%orientation, width, height, length = seam.len(), "found seam");
    Ok(seam)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cq;
    use image::{ImageBuffer, Rgb, RgbImage};

    fn rgb(v: u8) -> Rgb<u8> {
        *Rgb::from_slice(&[v, v, v])
    }

    #[test]
    fn sentinels_are_stripped() {
        let path = [Vertex::Source, Vertex::Pixel(2, 0), Vertex::Pixel(1, 1), Vertex::Sink];
        assert_eq!(path_to_seam(&path, Orientation::Vertical), vec![2, 1]);
        assert_eq!(path_to_seam(&path, Orientation::Horizontal), vec![0, 1]);
    }

    #[test]
    fn short_paths_keep_only_pixels() {
        assert!(path_to_seam(&[Vertex::Source, Vertex::Sink], Orientation::Vertical).is_empty());
    }

    #[test]
    fn one_by_one_seam_is_zero_both_ways() {
        let image: RgbImage = ImageBuffer::from_fn(1, 1, |_, _| rgb(9));
        assert_eq!(find_seam(&image, Orientation::Vertical), Ok(vec![0]));
        assert_eq!(find_seam(&image, Orientation::Horizontal), Ok(vec![0]));
    }

    #[test]
    fn one_wide_images_have_all_zero_vertical_seams() {
        let image: RgbImage = ImageBuffer::from_fn(1, 4, |_, y| rgb(y as u8 * 40));
        assert_eq!(find_seam(&image, Orientation::Vertical), Ok(vec![0, 0, 0, 0]));
    }

    #[test]
    fn one_tall_images_have_all_zero_horizontal_seams() {
        let image: RgbImage = ImageBuffer::from_fn(5, 1, |x, _| rgb(x as u8 * 40));
        assert_eq!(find_seam(&image, Orientation::Horizontal), Ok(vec![0; 5]));
    }

    #[test]
    fn one_tall_image_vertical_seam_picks_a_single_pixel() {
        let image: RgbImage = ImageBuffer::from_fn(3, 1, |x, _| rgb(cq!(x == 1, 0, 255)));
        // Energies are 255*sqrt(3), 0, 255*sqrt(3).
        assert_eq!(find_seam(&image, Orientation::Vertical), Ok(vec![1]));
    }

    #[test]
    fn dark_center_draws_the_seam() {
        let image: RgbImage =
            ImageBuffer::from_fn(3, 3, |x, y| rgb(cq!(x == 1 && y == 1, 0, 255)));
        let seam = find_seam(&image, Orientation::Vertical).unwrap();
        assert_eq!(seam.len(), 3);
        assert_eq!(seam[1], 1);
        assert!(seam[0] != 1 && seam[2] != 1);

        let seam = find_seam(&image, Orientation::Horizontal).unwrap();
        assert_eq!(seam[1], 1);
    }

    #[test]
    fn follows_a_diagonal_valley() {
        // Bright everywhere except a dark diagonal band from (0,0) to (3,3);
        // the cheapest vertical seam must ride it.
        let image: RgbImage = ImageBuffer::from_fn(6, 4, |x, y| rgb(cq!(x == y, 0, 255)));
        let seam = find_seam(&image, Orientation::Vertical).unwrap();
        assert_eq!(seam.len(), 4);
        assert!(seam.windows(2).all(|w| (w[0] as i64 - w[1] as i64).abs() <= 1));
    }

    #[test]
    fn empty_images_are_rejected() {
        let image: RgbImage = ImageBuffer::new(0, 0);
        assert_eq!(find_seam(&image, Orientation::Vertical), Err(SeamError::NullInput));
    }
}
