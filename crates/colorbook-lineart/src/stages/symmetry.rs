// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Symmetry folding: replace one half of the canvas with a reflection of the
// other half. Canvas size never changes.
//
// Odd dimensions keep the centre column (or row) and reflect around it, so the
// kept half is `ceil(dim / 2)` wide and `out[i] == in[min(i, dim - 1 - i)]`.

use crate::raster::Plane;

/// Reflect the left half onto the right half.
pub fn mirror_left_to_right(plane: &mut Plane) {
    let (width, height) = plane.dimensions();
    let half = width / 2;
    for y in 0..height {
        for x in 0..half {
            let value = plane.get(x, y);
            plane.set(width - 1 - x, y, value);
        }
    }
}

/// Reflect the top half onto the bottom half.
pub fn mirror_top_to_bottom(plane: &mut Plane) {
    let (width, height) = plane.dimensions();
    let half = height / 2;
    for y in 0..half {
        let target = height - 1 - y;
        for x in 0..width {
            let value = plane.get(x, y);
            plane.set(x, target, value);
        }
    }
}
