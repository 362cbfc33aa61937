// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - the facade
//!
//! `Carver` owns the working image and strings the pieces together:
//! energy, seam graph, solver and path extraction to find a seam, the
//! mutator to apply one.  The image is never modified in place; every
//! change swaps in a freshly built buffer, and everything handed in or
//! out is a copy.

use crate::astar::{AStarSolver, ShortestPathSolver};
use crate::energy::energy_at;
use crate::errors::{Result, SeamError};
use crate::mutator::{duplicate_seam, remove_seam};
use crate::orientation::Orientation;
use crate::seamfinder::{find_seam_with, SeamFinder};
use image::{GenericImageView, ImageBuffer, Pixel, Rgb, RgbImage};
use std::cmp::min;
use tracing::{debug, info};

/// Holds the image being carved, and the solver used to find seams in it.
#[derive(Debug, Clone)]
pub struct Carver<V: ShortestPathSolver = AStarSolver> {
    picture: RgbImage,
    solver: V,
}

// Copy any 8-bit view into a buffer we own.
fn owned_copy<I, P>(image: &I) -> Result<RgbImage>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(SeamError::NullInput);
    }
    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        image.get_pixel(x, y).to_rgb()
    }))
}

impl Carver<AStarSolver> {
    /// Creates a new Carver holding a copy of `picture`.  An image with
    /// no pixels is refused.
    pub fn new<I, P>(picture: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8> + 'static,
    {
        Carver::with_solver(picture, AStarSolver::new())
    }
}

impl<V: ShortestPathSolver> Carver<V> {
    /// As `new`, with a caller-supplied shortest-path solver.
    pub fn with_solver<I, P>(picture: &I, solver: V) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8> + 'static,
    {
        Ok(Carver {
            picture: owned_copy(picture)?,
            solver,
        })
    }

    /// A copy of the current image.
    pub fn picture(&self) -> RgbImage {
        self.picture.clone()
    }

    /// Replace the current image wholesale.
    pub fn set_picture(&mut self, picture: RgbImage) -> Result<()> {
        if picture.width() == 0 || picture.height() == 0 {
            return Err(SeamError::NullInput);
        }
        self.picture = picture;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.picture.width()
    }

    pub fn height(&self) -> u32 {
        self.picture.height()
    }

    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height()
    }

    /// The color at (x, y), if that's a pixel of the current image.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        if self.in_bounds(x, y) {
            Some(*self.picture.get_pixel(x, y))
        } else {
            None
        }
    }

    /// The dual-gradient energy at (x, y), if that's a pixel of the
    /// current image.
    pub fn energy(&self, x: u32, y: u32) -> Option<f64> {
        energy_at(&self.picture, x, y)
    }

    pub fn find_seam(&self, orientation: Orientation) -> Result<Vec<u32>> {
        find_seam_with(&self.picture, orientation, &self.solver)
    }

    /// Take `seam` out of the current image.
    pub fn remove_seam(&mut self, seam: &[u32], orientation: Orientation) -> Result<()> {
        self.picture = remove_seam(&self.picture, seam, orientation)?;
        Ok(())
    }

    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.remove_seam(seam, Orientation::Vertical)
    }

    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.remove_seam(seam, Orientation::Horizontal)
    }

    /// Return `source` with `seam` doubled, and take the same seam out of
    /// the current image.  The removal marks the seam as used, so asking
    /// the carver for the next seam won't hand back the same pixels.
    ///
    /// The seam is checked against `source` for the duplication and
    /// against the current image for the removal; if either check fails
    /// nothing changes.
    pub fn duplicate_seam(
        &mut self,
        seam: &[u32],
        source: &RgbImage,
        orientation: Orientation,
    ) -> Result<RgbImage> {
        let duplicated = duplicate_seam(source, seam, orientation)?;
        self.picture = remove_seam(&self.picture, seam, orientation)?;
        Ok(duplicated)
    }

    pub fn duplicate_vertical_seam(&mut self, seam: &[u32], source: &RgbImage) -> Result<RgbImage> {
        self.duplicate_seam(seam, source, Orientation::Vertical)
    }

    pub fn duplicate_horizontal_seam(&mut self, seam: &[u32], source: &RgbImage) -> Result<RgbImage> {
        self.duplicate_seam(seam, source, Orientation::Horizontal)
    }

    // One seam, found and removed.
    fn carve_once(&mut self, orientation: Orientation) -> Result<()> {
        let seam = self.find_seam(orientation)?;
        self.remove_seam(&seam, orientation)
    }

    // The entire energy map and seam graph are rebuilt for every seam.
    // Only the pixels either side of the last seam actually changed, so
    // a cached energy map patched along the seam would do.

    /// Shrink the image to the given size one seam at a time, alternating
    /// between columns and rows while both are too big.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        check_target(Orientation::Vertical, width, new_width)?;
        check_target(Orientation::Horizontal, height, new_height)?;
        if width < new_width {
            return Err(SeamError::InvalidDimension {
                orientation: Orientation::Vertical,
                size: width,
            });
        }
        if height < new_height {
            return Err(SeamError::InvalidDimension {
                orientation: Orientation::Horizontal,
                size: height,
            });
        }

        let original = self.picture.clone();
        let result = self.carve_down(new_width, new_height);
        if result.is_err() {
            self.picture = original;
        }
        result
    }

    fn carve_down(&mut self, new_width: u32, new_height: u32) -> Result<()> {
        let mut direction = Orientation::Vertical;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.turn();
            info!(width = self.width(), height = self.height(), "carved both");
        }
        while self.width() > new_width {
            self.carve_once(Orientation::Vertical)?;
            info!(width = self.width(), height = self.height(), "carved width");
        }
        while self.height() > new_height {
            self.carve_once(Orientation::Horizontal)?;
            info!(width = self.width(), height = self.height(), "carved height");
        }
        Ok(())
    }

    /// Grow the image to the given size by duplicating seams.
    ///
    /// Seams are found in the working image, and each one is removed
    /// from it as it is duplicated into the output, so the same seam is
    /// never chosen twice.  Their indices are applied to the output
    /// unchanged: only the first seam per axis is the minimum-energy
    /// seam of the image being grown, and later ones land wherever
    /// their indices fall in the wider output.  Growth along an axis is
    /// limited to one less than the current size on that axis.
    pub fn enlarge(&mut self, new_width: u32, new_height: u32) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if new_width < width {
            return Err(SeamError::InvalidDimension {
                orientation: Orientation::Vertical,
                size: width,
            });
        }
        if new_height < height {
            return Err(SeamError::InvalidDimension {
                orientation: Orientation::Horizontal,
                size: height,
            });
        }

        let original = self.picture.clone();
        let result = self
            .grow(Orientation::Vertical, new_width - width)
            .and_then(|_| self.grow(Orientation::Horizontal, new_height - height));
        if result.is_err() {
            self.picture = original;
        }
        result
    }

    fn grow(&mut self, orientation: Orientation, count: u32) -> Result<()> {
        let size = orientation.cross_len(self.width(), self.height());
        if count >= size {
            return Err(SeamError::InvalidDimension { orientation, size });
        }
        let mut output = self.picture.clone();
        for _ in 0..count {
            let seam = self.find_seam(orientation)?;
            output = self.duplicate_seam(&seam, &output, orientation)?;
            debug!(%orientation, width = output.width(), height = output.height(), "grew");
        }
        info!(%orientation, seams = count, "enlarged");
        self.picture = output;
        Ok(())
    }

    /// Carve or enlarge each axis as needed to reach the given size.
    pub fn resize(&mut self, new_width: u32, new_height: u32) -> Result<()> {
        check_target(Orientation::Vertical, self.width(), new_width)?;
        check_target(Orientation::Horizontal, self.height(), new_height)?;
        let original = self.picture.clone();
        let result = self
            .carve(min(new_width, self.width()), min(new_height, self.height()))
            .and_then(|_| self.enlarge(new_width, new_height));
        if result.is_err() {
            self.picture = original;
        }
        result
    }
}

// Nothing can be carved down to nothing.
fn check_target(orientation: Orientation, size: u32, target: u32) -> Result<()> {
    if target == 0 {
        return Err(SeamError::InvalidDimension { orientation, size });
    }
    Ok(())
}

impl<V: ShortestPathSolver> SeamFinder for Carver<V> {
    fn find_horizontal_seam(&self) -> Result<Vec<u32>> {
        self.find_seam(Orientation::Horizontal)
    }

    fn find_vertical_seam(&self) -> Result<Vec<u32>> {
        self.find_seam(Orientation::Vertical)
    }
}
