// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Background flattening: composite over pure white and drop alpha.

use crate::raster::Raster;

/// Composite the luma plane over white using the alpha plane, then discard
/// alpha. An opaque raster is returned as-is.
///
/// `out = (l * a + 255 * (255 - a)) / 255`, rounded.
pub fn flatten_on_white(raster: Raster) -> Raster {
    let Raster { mut luma, alpha } = raster;
    let Some(alpha) = alpha else {
        return Raster::opaque(luma);
    };

    let (width, height) = luma.dimensions();
    for y in 0..height {
        for x in 0..width {
            let l = u32::from(luma.get(x, y));
            let a = u32::from(alpha.get(x, y));
            let composited = (l * a + 255 * (255 - a) + 127) / 255;
            luma.set(x, y, composited as u8);
        }
    }

    Raster::opaque(luma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Plane;

    #[test]
    fn transparent_pixels_become_white() {
        let luma = Plane::from_raw(3, 1, vec![0, 0, 0]).expect("luma");
        let alpha = Plane::from_raw(3, 1, vec![0, 255, 128]).expect("alpha");
        let out = flatten_on_white(Raster {
            luma,
            alpha: Some(alpha),
        });
        assert!(out.alpha.is_none());
        assert_eq!(out.luma.get(0, 0), 255);
        assert_eq!(out.luma.get(1, 0), 0);
        assert_eq!(out.luma.get(2, 0), 127);
    }

    #[test]
    fn opaque_raster_is_unchanged() {
        let luma = Plane::from_raw(2, 1, vec![0, 255]).expect("luma");
        let out = flatten_on_white(Raster::opaque(luma.clone()));
        assert_eq!(out.luma, luma);
    }
}
