// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-pixel tone transforms: histogram stretch, affine contrast, threshold,
// and inversion.

use crate::raster::Plane;

/// Linearly rescale so the darkest pixel becomes 0 and the lightest 255.
///
/// A flat plane (every pixel equal) has no range to stretch and is returned
/// unchanged.
pub fn normalize(plane: &mut Plane) {
    let Some((lo, hi)) = plane.min_max() else {
        return;
    };
    if lo == hi {
        return;
    }
    let range = u32::from(hi - lo);
    plane.map_in_place(|v| {
        let shifted = u32::from(v - lo) * 255;
        ((shifted + range / 2) / range) as u8
    });
}

/// `out = clamp(round(a * in + b), 0, 255)`.
pub fn linear(plane: &mut Plane, a: f32, b: f32) {
    plane.map_in_place(|v| (a * f32::from(v) + b).round().clamp(0.0, 255.0) as u8);
}

/// Values `>= cutoff` become 255, everything else 0.
pub fn threshold(plane: &mut Plane, cutoff: u8) {
    plane.map_in_place(|v| if v >= cutoff { 255 } else { 0 });
}

/// `out = 255 - in`.
pub fn invert(plane: &mut Plane) {
    plane.map_in_place(|v| 255 - v);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(values: &[u8]) -> Plane {
        Plane::from_raw(values.len() as u32, 1, values.to_vec()).expect("plane")
    }

    #[test]
    fn normalize_stretches_to_full_range() {
        let mut p = plane(&[50, 100, 150]);
        normalize(&mut p);
        assert_eq!(p.as_slice(), &[0, 128, 255]);
    }

    #[test]
    fn normalize_leaves_flat_plane_alone() {
        let mut p = plane(&[128, 128, 128]);
        normalize(&mut p);
        assert_eq!(p.as_slice(), &[128, 128, 128]);
    }

    #[test]
    fn linear_clamps_both_ends() {
        let mut p = plane(&[0, 100, 128, 255]);
        linear(&mut p, 1.5, -64.0);
        assert_eq!(p.as_slice(), &[0, 86, 128, 255]);
    }

    #[test]
    fn threshold_is_inclusive_at_cutoff() {
        let mut p = plane(&[0, 127, 128, 255]);
        threshold(&mut p, 128);
        assert_eq!(p.as_slice(), &[0, 0, 255, 255]);
    }

    #[test]
    fn invert_flips_values() {
        let mut p = plane(&[0, 1, 254, 255]);
        invert(&mut p);
        assert_eq!(p.as_slice(), &[255, 254, 1, 0]);
    }
}
