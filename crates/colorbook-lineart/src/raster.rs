// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Flat 8-bit pixel planes and the two-plane raster the pipeline works on.

use image::{GrayAlphaImage, GrayImage, LumaA};

/// A single 8-bit channel stored as one contiguous row-major buffer.
///
/// Pixel `(x, y)` lives at `y * stride + x`. Rows are never padded, so
/// `stride == width`, but every index computation goes through `stride` so
/// window code reads the same as it would over a padded buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl Plane {
    /// A plane of `width` x `height` filled with `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            width,
            height,
            stride: width as usize,
            data: vec![value; width as usize * height as usize],
        }
    }

    /// Wrap an existing buffer. Returns `None` when the length does not match
    /// the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            stride: width as usize,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride + x as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Sample with edge replication: out-of-range coordinates are clamped to
    /// the nearest border pixel.
    #[inline]
    pub fn get_clamped(&self, x: i64, y: i64) -> u8 {
        let cx = x.clamp(0, i64::from(self.width) - 1) as u32;
        let cy = y.clamp(0, i64::from(self.height) - 1) as u32;
        self.get(cx, cy)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Apply `f` to every pixel in place.
    pub fn map_in_place(&mut self, mut f: impl FnMut(u8) -> u8) {
        for value in &mut self.data {
            *value = f(*value);
        }
    }

    /// Darkest and lightest value, or `None` for an empty plane.
    pub fn min_max(&self) -> Option<(u8, u8)> {
        let mut iter = self.data.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Copy into an `image` crate buffer for interop with `imageproc`.
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| image::Luma([self.get(x, y)]))
    }

    /// Take ownership of an `image` crate buffer.
    pub fn from_gray_image(image: GrayImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            stride: width as usize,
            data: image.into_raw(),
        }
    }
}

/// The working image: a luminance plane plus an optional alpha plane.
///
/// Tone and edge stages only touch `luma`; alpha rides along untouched until
/// background flattening folds it into white, and symmetry mirrors both planes
/// so they stay aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub luma: Plane,
    pub alpha: Option<Plane>,
}

impl Raster {
    /// An opaque raster.
    pub fn opaque(luma: Plane) -> Self {
        Self { luma, alpha: None }
    }

    pub fn width(&self) -> u32 {
        self.luma.width()
    }

    pub fn height(&self) -> u32 {
        self.luma.height()
    }

    /// Split an interleaved gray+alpha buffer into two planes.
    pub fn from_gray_alpha(image: &GrayAlphaImage) -> Self {
        let (width, height) = image.dimensions();
        let mut luma = Plane::filled(width, height, 0);
        let mut alpha = Plane::filled(width, height, 0);
        for (x, y, pixel) in image.enumerate_pixels() {
            let LumaA([l, a]) = *pixel;
            luma.set(x, y, l);
            alpha.set(x, y, a);
        }
        Self {
            luma,
            alpha: Some(alpha),
        }
    }

    /// Interleave the planes back into a gray+alpha buffer. Missing alpha is
    /// written as fully opaque.
    pub fn to_gray_alpha(&self) -> GrayAlphaImage {
        GrayAlphaImage::from_fn(self.width(), self.height(), |x, y| {
            let a = self.alpha.as_ref().map_or(u8::MAX, |alpha| alpha.get(x, y));
            LumaA([self.luma.get(x, y), a])
        })
    }
}
