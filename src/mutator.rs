// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam removal and duplication
//!
//! Each operation validates the seam completely, then builds a brand
//! new image.  The source is only ever read, so nothing a caller holds
//! is changed, and a rejected seam leaves no trace.

use crate::errors::{Result, SeamError};
use crate::orientation::Orientation;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use itertools::Itertools;

/// Check a seam against an image of the given dimensions.
///
/// Only the pairs starting at `0..len - 2` are checked for continuity;
/// the last pair of the seam is accepted whatever its step.  Every
/// entry is checked for bounds.
pub fn validate_seam(seam: &[u32], orientation: Orientation, width: u32, height: u32) -> Result<()> {
    if seam.is_empty() {
        return Err(SeamError::NullInput);
    }
    let expected = orientation.along_len(width, height) as usize;
    if seam.len() != expected {
        return Err(SeamError::LengthMismatch {
            expected,
            actual: seam.len(),
        });
    }
    if let Some(index) = seam
        .iter()
        .tuple_windows()
        .take(seam.len().saturating_sub(2))
        .position(|(a, b)| a.abs_diff(*b) > 1)
    {
        return Err(SeamError::DiscontinuousSeam { index });
    }
    let limit = orientation.cross_len(width, height);
    if let Some((index, &value)) = seam.iter().enumerate().find(|(_, v)| **v >= limit) {
        return Err(SeamError::OutOfBounds {
            index,
            value,
            limit,
        });
    }
    Ok(())
}

// Removal also needs something left over on the cross axis.
fn validate_removal(seam: &[u32], orientation: Orientation, width: u32, height: u32) -> Result<()> {
    if seam.is_empty() {
        return Err(SeamError::NullInput);
    }
    let size = orientation.cross_len(width, height);
    if size < 2 {
        return Err(SeamError::InvalidDimension { orientation, size });
    }
    validate_seam(seam, orientation, width, height)
}

/// Remove a seam in either orientation.  Along each row (or column),
/// pixels before the seam stay put and pixels after it close the gap.
pub fn remove_seam<I, P, S>(
    image: &I,
    seam: &[u32],
    orientation: Orientation,
) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    validate_removal(seam, orientation, width, height)?;

    let (new_width, new_height) = match orientation {
        Orientation::Vertical => (width - 1, height),
        Orientation::Horizontal => (width, height - 1),
    };
    let mut imgbuf = ImageBuffer::new(new_width, new_height);
    for (along, &cut) in seam.iter().enumerate() {
        let along = along as u32;
        for cross in 0..orientation.cross_len(width, height) {
            if cross == cut {
                continue;
            }
            let (sx, sy) = orientation.to_xy(along, cross);
            let target = if cross < cut { cross } else { cross - 1 };
            let (tx, ty) = orientation.to_xy(along, target);
            imgbuf.put_pixel(tx, ty, image.get_pixel(sx, sy));
        }
    }
    Ok(imgbuf)
}

/// Duplicate a seam in either orientation.  Along each row (or
/// column), the seam pixel appears twice, once where it was and once
/// just after, and everything past it moves over by one.
pub fn duplicate_seam<I, P, S>(
    image: &I,
    seam: &[u32],
    orientation: Orientation,
) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    validate_seam(seam, orientation, width, height)?;

    let (new_width, new_height) = match orientation {
        Orientation::Vertical => (width + 1, height),
        Orientation::Horizontal => (width, height + 1),
    };
    let mut imgbuf = ImageBuffer::new(new_width, new_height);
    for (along, &copy) in seam.iter().enumerate() {
        let along = along as u32;
        for cross in 0..orientation.cross_len(width, height) {
            let (sx, sy) = orientation.to_xy(along, cross);
            let pixel = image.get_pixel(sx, sy);
            let target = if cross <= copy { cross } else { cross + 1 };
            let (tx, ty) = orientation.to_xy(along, target);
            imgbuf.put_pixel(tx, ty, pixel);
            if cross == copy {
                let (dx, dy) = orientation.to_xy(along, cross + 1);
                imgbuf.put_pixel(dx, dy, pixel);
            }
        }
    }
    Ok(imgbuf)
}

/// A copy of `image` one pixel narrower, with `seam` taken out of each row.
pub fn remove_vertical_seam<I, P, S>(image: &I, seam: &[u32]) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    remove_seam(image, seam, Orientation::Vertical)
}

/// A copy of `image` one pixel shorter, with `seam` taken out of each column.
pub fn remove_horizontal_seam<I, P, S>(image: &I, seam: &[u32]) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    remove_seam(image, seam, Orientation::Horizontal)
}

pub fn duplicate_vertical_seam<I, P, S>(image: &I, seam: &[u32]) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    duplicate_seam(image, seam, Orientation::Vertical)
}

pub fn duplicate_horizontal_seam<I, P, S>(image: &I, seam: &[u32]) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    duplicate_seam(image, seam, Orientation::Horizontal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    // Each pixel's value encodes its own coordinate: 10 * y + x.
    fn numbered(width: u32, height: u32) -> GrayImage {
        ImageBuffer::from_fn(width, height, |x, y| *Luma::from_slice(&[(10 * y + x) as u8]))
    }

    fn rows(image: &GrayImage) -> Vec<Vec<u8>> {
        let (width, height) = image.dimensions();
        (0..height)
            .map(|y| (0..width).map(|x| image.get_pixel(x, y).channels()[0]).collect())
            .collect()
    }

    #[test]
    fn removes_one_pixel_per_row() {
        let out = remove_vertical_seam(&numbered(4, 3), &[1, 2, 3]).unwrap();
        assert_eq!(out.dimensions(), (3, 3));
        assert_eq!(rows(&out), vec![vec![0, 2, 3], vec![10, 11, 13], vec![20, 21, 22]]);
    }

    #[test]
    fn removes_one_pixel_per_column() {
        let out = remove_horizontal_seam(&numbered(3, 3), &[0, 1, 2]).unwrap();
        assert_eq!(out.dimensions(), (3, 2));
        assert_eq!(rows(&out), vec![vec![10, 1, 2], vec![20, 21, 12]]);
    }

    #[test]
    fn duplicates_one_pixel_per_row() {
        let out = duplicate_vertical_seam(&numbered(3, 2), &[0, 2]).unwrap();
        assert_eq!(out.dimensions(), (4, 2));
        assert_eq!(rows(&out), vec![vec![0, 0, 1, 2], vec![10, 11, 12, 12]]);
    }

    #[test]
    fn duplicates_one_pixel_per_column() {
        let out = duplicate_horizontal_seam(&numbered(2, 2), &[1, 0]).unwrap();
        assert_eq!(out.dimensions(), (2, 3));
        assert_eq!(rows(&out), vec![vec![0, 1], vec![10, 1], vec![10, 11]]);
    }

    #[test]
    fn duplication_leaves_the_source_alone() {
        let source = numbered(3, 2);
        let before = source.clone();
        duplicate_vertical_seam(&source, &[1, 1]).unwrap();
        assert_eq!(source.dimensions(), before.dimensions());
        assert_eq!(source.as_raw(), before.as_raw());
    }

    #[test]
    fn empty_seam_is_null_input() {
        assert_eq!(
            remove_vertical_seam(&numbered(3, 3), &[]).unwrap_err(),
            SeamError::NullInput
        );
        assert_eq!(
            duplicate_horizontal_seam(&numbered(3, 3), &[]).unwrap_err(),
            SeamError::NullInput
        );
    }

    #[test]
    fn nothing_to_remove_from_a_single_column() {
        assert_eq!(
            remove_vertical_seam(&numbered(1, 3), &[0, 0, 0]).unwrap_err(),
            SeamError::InvalidDimension {
                orientation: Orientation::Vertical,
                size: 1
            }
        );
        assert_eq!(
            remove_horizontal_seam(&numbered(3, 1), &[0, 0, 0]).unwrap_err(),
            SeamError::InvalidDimension {
                orientation: Orientation::Horizontal,
                size: 1
            }
        );
    }

    #[test]
    fn single_row_can_lose_a_vertical_seam() {
        let out = remove_vertical_seam(&numbered(3, 1), &[1]).unwrap();
        assert_eq!(rows(&out), vec![vec![0, 2]]);
    }

    #[test]
    fn single_column_can_be_duplicated() {
        let out = duplicate_vertical_seam(&numbered(1, 2), &[0, 0]).unwrap();
        assert_eq!(rows(&out), vec![vec![0, 0], vec![10, 10]]);
    }

    #[test]
    fn length_must_match() {
        assert_eq!(
            remove_vertical_seam(&numbered(3, 3), &[0, 0]).unwrap_err(),
            SeamError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        );
        assert_eq!(
            duplicate_horizontal_seam(&numbered(4, 3), &[0, 0, 0]).unwrap_err(),
            SeamError::LengthMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn jumps_are_rejected() {
        assert_eq!(
            remove_vertical_seam(&numbered(4, 4), &[0, 2, 2, 2]).unwrap_err(),
            SeamError::DiscontinuousSeam { index: 0 }
        );
        assert_eq!(
            remove_vertical_seam(&numbered(4, 4), &[0, 1, 3, 3]).unwrap_err(),
            SeamError::DiscontinuousSeam { index: 1 }
        );
    }

    #[test]
    fn last_pair_is_not_checked_for_continuity() {
        let out = remove_vertical_seam(&numbered(4, 3), &[0, 0, 3]).unwrap();
        assert_eq!(rows(&out), vec![vec![1, 2, 3], vec![11, 12, 13], vec![20, 21, 22]]);
        assert!(validate_seam(&[0, 3], Orientation::Vertical, 4, 2).is_ok());
    }

    #[test]
    fn entries_must_be_in_bounds() {
        assert_eq!(
            remove_vertical_seam(&numbered(3, 2), &[2, 3]).unwrap_err(),
            SeamError::OutOfBounds {
                index: 1,
                value: 3,
                limit: 3
            }
        );
        assert_eq!(
            duplicate_horizontal_seam(&numbered(2, 2), &[2, 2]).unwrap_err(),
            SeamError::OutOfBounds {
                index: 0,
                value: 2,
                limit: 2
            }
        );
    }
}
