// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Line-art processor — decode, tone, edge, smoothing, background, and symmetry
// operations chained over one in-memory raster. Decoding and PNG encoding go
// through the `image` crate; smoothing through `imageproc`.

use colorbook_core::error::{ColorbookError, Result};
use image::{DynamicImage, ImageFormat};
use tracing::{debug, info, instrument};

use crate::raster::{Plane, Raster};
use crate::stages::convolve::{self, Kernel3x3};
use crate::stages::{THRESHOLD, background, symmetry, tone};

/// Gain of the contrast stretch applied before edge detection.
pub const CONTRAST_GAIN: f32 = 1.5;

/// Line-art operations over a single raster.
///
/// Each method consumes `self` and returns the transformed processor, so the
/// pipeline reads as a chain:
///
/// ```ignore
/// let png = LineArtProcessor::from_bytes(&bytes)?
///     .grayscale_normalize()
///     .contrast_stretch(1.5, -64.0)
///     .detect_edges(2.5)
///     .binarize_invert()
///     .smooth_rebinarize(0.5)
///     .to_png_bytes()?;
/// ```
pub struct LineArtProcessor {
    raster: Raster,
}

impl LineArtProcessor {
    // -- Construction ---------------------------------------------------------

    /// Decode an encoded image (PNG, JPEG, WebP, ...) into luma + alpha planes.
    ///
    /// Luminance uses the `image` crate's Rec. 709 weighting. Images with an
    /// alpha channel keep it as a separate plane.
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data)
            .map_err(|err| ColorbookError::Decode(format!("failed to decode image: {err}")))?;
        debug!(
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            "Image decoded from bytes"
        );
        Self::from_dynamic(img)
    }

    /// Wrap an already-decoded `DynamicImage`. Zero-sized images are rejected.
    pub fn from_dynamic(img: DynamicImage) -> Result<Self> {
        if img.width() == 0 || img.height() == 0 {
            return Err(ColorbookError::Decode(format!(
                "image has no pixels ({}x{})",
                img.width(),
                img.height()
            )));
        }
        let raster = if img.color().has_alpha() {
            Raster::from_gray_alpha(&img.to_luma_alpha8())
        } else {
            Raster::opaque(Plane::from_gray_image(img.to_luma8()))
        };
        Ok(Self { raster })
    }

    /// Wrap an existing raster.
    pub fn from_raster(raster: Raster) -> Self {
        Self { raster }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    pub fn as_raster(&self) -> &Raster {
        &self.raster
    }

    pub fn into_raster(self) -> Raster {
        self.raster
    }

    // -- Transformations (consume self, return new Self) -----------------------

    /// Stretch luminance to the full 0..=255 range.
    pub fn grayscale_normalize(mut self) -> Self {
        tone::normalize(&mut self.raster.luma);
        self
    }

    /// `out = clamp(gain * in + offset)`.
    pub fn contrast_stretch(mut self, gain: f32, offset: f32) -> Self {
        debug!(gain, offset, "Contrast stretch");
        tone::linear(&mut self.raster.luma, gain, offset);
        self
    }

    /// Laplacian edge response divided by `scale`. Bright output marks edges.
    pub fn detect_edges(mut self, scale: f32) -> Self {
        debug!(scale, "Laplacian edge detection");
        self.raster.luma = convolve::convolve3x3(&self.raster.luma, &Kernel3x3::laplacian(scale));
        self
    }

    /// Threshold at 128, then invert so edges become black ink on white.
    pub fn binarize_invert(mut self) -> Self {
        tone::threshold(&mut self.raster.luma, THRESHOLD);
        tone::invert(&mut self.raster.luma);
        self
    }

    /// Blur away single-pixel speckle, then threshold again so no gray fringe
    /// survives. The order matters: thresholding is not idempotent after a
    /// blur.
    pub fn smooth_rebinarize(mut self, sigma: f32) -> Self {
        debug!(sigma, "Smoothing and re-binarizing");
        let mut blurred = convolve::gaussian_blur(&self.raster.luma, sigma);
        tone::threshold(&mut blurred, THRESHOLD);
        self.raster.luma = blurred;
        self
    }

    /// Composite over white and drop alpha.
    pub fn flatten_background(self) -> Self {
        Self {
            raster: background::flatten_on_white(self.raster),
        }
    }

    /// Reflect the left half onto the right half (luma and alpha).
    pub fn mirror_horizontal(mut self) -> Self {
        symmetry::mirror_left_to_right(&mut self.raster.luma);
        if let Some(alpha) = self.raster.alpha.as_mut() {
            symmetry::mirror_left_to_right(alpha);
        }
        self
    }

    /// Reflect the top half onto the bottom half (luma and alpha).
    pub fn mirror_vertical(mut self) -> Self {
        symmetry::mirror_top_to_bottom(&mut self.raster.luma);
        if let Some(alpha) = self.raster.alpha.as_mut() {
            symmetry::mirror_top_to_bottom(alpha);
        }
        self
    }

    // -- Output ---------------------------------------------------------------

    /// Encode as PNG: 8-bit gray when opaque, gray+alpha otherwise.
    #[instrument(skip(self), fields(width = self.width(), height = self.height()))]
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let image = match self.raster.alpha {
            None => DynamicImage::ImageLuma8(self.raster.luma.to_gray_image()),
            Some(_) => DynamicImage::ImageLumaA8(self.raster.to_gray_alpha()),
        };
        let bytes = encode_to_format(&image, ImageFormat::Png)?;
        info!(bytes = bytes.len(), "Encoded PNG");
        Ok(bytes)
    }
}

/// Encode a `DynamicImage` into the specified format, returning the raw bytes.
fn encode_to_format(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    image
        .write_to(&mut cursor, format)
        .map_err(|err| ColorbookError::Encode(format!("image encoding failed: {err}")))?;
    Ok(buffer)
}
