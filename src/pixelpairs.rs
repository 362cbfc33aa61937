// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the gradient across a pixel pair
//!
//! Given the two pixels on either side of a target pixel, the squared
//! gradient between them is the sum of the squared differences of
//! their red, green and blue channels:
//!
//! ```text
//! |Δ|² = (Δr)² + (Δg)² + (Δb)²
//! ```

use image::{Pixel, Primitive};
use itertools::Itertools;
use num_traits::ToPrimitive;

/// (Pixel, Pixel) -> squared gradient
///
/// Non-RGB pixels are converted to RGB first, so a grayscale image
/// contributes the same difference on all three channels.
#[inline]
pub fn squared_gradient<P, S>(p1: &P, p2: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (c1, c2) = (p1.to_rgb(), p2.to_rgb());
    c1.channels()
        .iter()
        .zip_eq(c2.channels().iter())
        .map(|(a, b)| {
            let d = a.to_f64().unwrap_or_default() - b.to_f64().unwrap_or_default();
            d * d
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    #[test]
    fn identical_pixels_have_no_gradient() {
        let p = *Rgb::from_slice(&[12u8, 200, 7]);
        assert_eq!(squared_gradient(&p, &p), 0.0);
    }

    #[test]
    fn channels_are_summed() {
        let a = *Rgb::from_slice(&[0u8, 0, 0]);
        let b = *Rgb::from_slice(&[1u8, 2, 3]);
        assert_eq!(squared_gradient(&a, &b), 14.0);
    }

    #[test]
    fn gray_counts_three_times() {
        let a = *Luma::from_slice(&[10u8]);
        let b = *Luma::from_slice(&[14u8]);
        assert_eq!(squared_gradient(&a, &b), 48.0);
    }
}
