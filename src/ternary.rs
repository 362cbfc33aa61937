// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Inline conditional.  The wrap-around rules for neighbor sampling
/// and the in-bounds rules for diagonal edges are both small truth
/// tables, and they read better as one line each than as the
/// four-line `if` blocks `cargo fmt` would produce.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
