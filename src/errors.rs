// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam errors
//!
//! Every failure here is detected before any new image buffer is
//! allocated, so an error always means "nothing changed."

use crate::orientation::Orientation;
use failure::Fail;

#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum SeamError {
    /// An empty image or an empty seam.
    #[fail(display = "no image or seam was supplied")]
    NullInput,

    /// The image is too small along the cross axis for the requested
    /// operation, or a requested size is unreachable.
    #[fail(display = "cannot carve a {} seam from an image of size {} on that axis", orientation, size)]
    InvalidDimension { orientation: Orientation, size: u32 },

    #[fail(display = "seam length {} does not match image dimension {}", actual, expected)]
    LengthMismatch { expected: usize, actual: usize },

    /// Entries `index` and `index + 1` are more than one pixel apart.
    #[fail(display = "seam jumps by more than one pixel after entry {}", index)]
    DiscontinuousSeam { index: usize },

    #[fail(display = "seam entry {} has value {}, outside 0..{}", index, value, limit)]
    OutOfBounds { index: usize, value: u32, limit: u32 },

    #[fail(display = "the solver found no path from source to sink")]
    NoPath,
}

pub type Result<T> = std::result::Result<T, SeamError>;
