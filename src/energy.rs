// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! This is the dual-gradient energy function: for each axis, take the
//! two pixels one step away on either side, sum the squared
//! differences of their color channels, add the two axis totals, and
//! take the square root.  Edges and texture score high; flat regions
//! score zero.
//!
//! Neighbor sampling wraps around at the borders, treating the image as
//! a torus.  That's a property of the sampling only; nothing about the
//! pixel storage wraps.

use crate::cq;
use crate::pixelpairs::squared_gradient;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, GrayImage, Luma, Pixel, Primitive};
use itertools::iproduct;

/// The energy of the pixel at (x, y), or `None` if the coordinate
/// falls outside the image.
pub fn energy_at<I, P, S>(image: &I, x: u32, y: u32) -> Option<f64>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    if x >= width || y >= height {
        return None;
    }
    Some(energy_unchecked(image, x, y))
}

// (x, y) must be in bounds, which also means the image isn't empty.
fn energy_unchecked<I, P, S>(image: &I, x: u32, y: u32) -> f64
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let (mw, mh) = (width - 1, height - 1);

    let (left, right, up, down) = (
        image.get_pixel(cq!(x == 0, mw, x - 1), y),
        image.get_pixel(cq!(x >= mw, 0, x + 1), y),
        image.get_pixel(x, cq!(y == 0, mh, y - 1)),
        image.get_pixel(x, cq!(y >= mh, 0, y + 1)),
    );
    (squared_gradient(&left, &right) + squared_gradient(&up, &down)).sqrt()
}

/// Compute the energy of every pixel in an image.
pub fn calculate_energy<I, P, S>(image: &I) -> TwoDimensionalMap<f64>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut emap = TwoDimensionalMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = energy_unchecked(image, x, y);
    }
    emap
}

/// Render an energy map as a grayscale image, scaled so the most
/// energetic pixel is white.  A map with no energy anywhere renders
/// black.
pub fn energy_to_image(energy: &TwoDimensionalMap<f64>) -> GrayImage {
    let factor = energy
        .as_slice()
        .iter()
        .cloned()
        .fold(0.0_f64, f64::max);
    GrayImage::from_fn(energy.width, energy.height, |x, y| {
        let scaled = cq!(factor > 0.0, energy[(x, y)] / factor * 255.0, 0.0);
        *Luma::from_slice(&[scaled.round().max(0.0).min(255.0) as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, RgbImage};

    fn rgb(r: u8, g: u8, b: u8) -> Rgb<u8> {
        *Rgb::from_slice(&[r, g, b])
    }

    // The 3x4 example from the Princeton seam-carving assignment.
    fn princeton_3x4() -> RgbImage {
        let rows = [
            [(255, 101, 51), (255, 101, 153), (255, 101, 255)],
            [(255, 153, 51), (255, 153, 153), (255, 153, 255)],
            [(255, 203, 51), (255, 204, 153), (255, 205, 255)],
            [(255, 255, 51), (255, 255, 153), (255, 255, 255)],
        ];
        ImageBuffer::from_fn(3, 4, |x, y| {
            let (r, g, b) = rows[y as usize][x as usize];
            rgb(r, g, b)
        })
    }

    #[test]
    fn uniform_image_has_no_energy() {
        let image: RgbImage = ImageBuffer::from_fn(4, 3, |_, _| rgb(40, 80, 120));
        let energy = calculate_energy(&image);
        assert!(energy.as_slice().iter().all(|e| *e == 0.0));
    }

    #[test]
    fn interior_pixel_energy() {
        let image = princeton_3x4();
        // (1, 2): left (255,203,51) right (255,205,255); up (255,153,153) down (255,255,153)
        let dx = 2.0_f64 * 2.0 + 204.0 * 204.0;
        let dy = 102.0_f64 * 102.0;
        assert!((energy_at(&image, 1, 2).unwrap() - (dx + dy).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn border_pixels_wrap_around() {
        let image = princeton_3x4();
        // (0, 0): left wraps to (2, 0), up wraps to (0, 3).
        let expected = 20808.0_f64.sqrt();
        assert!((energy_at(&image, 0, 0).unwrap() - expected).abs() < 1e-9);
        // (2, 3): right wraps to (0, 3), down wraps to (2, 0).
        assert!((energy_at(&image, 2, 3).unwrap() - 21220.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn single_column_only_sees_vertical_gradient() {
        let image: RgbImage = ImageBuffer::from_fn(1, 3, |_, y| rgb(0, 0, (y * 10) as u8));
        // Left and right neighbors of a one-pixel row are the pixel itself.
        assert_eq!(energy_at(&image, 0, 1), Some(20.0));
    }

    #[test]
    fn outside_the_image_has_no_energy() {
        let image = princeton_3x4();
        assert_eq!(energy_at(&image, 3, 0), None);
        assert_eq!(energy_at(&image, 0, 4), None);
        let empty: RgbImage = ImageBuffer::new(0, 3);
        assert_eq!(energy_at(&empty, 0, 0), None);
        let flat: RgbImage = ImageBuffer::new(3, 0);
        assert_eq!(energy_at(&flat, 0, 0), None);
    }

    #[test]
    fn energy_image_is_normalized() {
        let image: RgbImage =
            ImageBuffer::from_fn(3, 3, |x, y| cq!(x == 1 && y == 1, rgb(0, 0, 0), rgb(255, 255, 255)));
        let gray = energy_to_image(&calculate_energy(&image));
        assert_eq!(gray.get_pixel(1, 1).channels()[0], 0);
        assert_eq!(gray.get_pixel(1, 0).channels()[0], 255);
        assert_eq!(gray.get_pixel(0, 0).channels()[0], 0);
    }
}
