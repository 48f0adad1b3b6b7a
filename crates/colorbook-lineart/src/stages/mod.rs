// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pure plane transforms used by the line-art pipeline.

pub mod background;
pub mod convolve;
pub mod symmetry;
pub mod tone;

/// Cutoff used by every binarization step: values at or above it become white.
pub const THRESHOLD: u8 = 128;

/// Standard deviation of the speckle-removal blur, in pixels.
pub const SMOOTHING_SIGMA: f32 = 0.5;
