// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Window transforms: 3×3 integer convolution and Gaussian smoothing.

use imageproc::filter::gaussian_blur_f32;

use crate::raster::Plane;

/// Discrete Laplacian: centre 8, all eight neighbours -1.
pub const LAPLACIAN_WEIGHTS: [i32; 9] = [-1, -1, -1, -1, 8, -1, -1, -1, -1];

/// A 3×3 kernel with integer weights and an output divisor.
///
/// Weights are row-major starting at the top-left neighbour. The raw weighted
/// sum is divided by `scale`, rounded, and clamped to 0..=255, so negative
/// responses (a dark pixel next to bright ones) saturate to 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel3x3 {
    pub weights: [i32; 9],
    pub scale: f32,
}

impl Kernel3x3 {
    /// The edge-detection kernel with the given divisor.
    pub fn laplacian(scale: f32) -> Self {
        Self {
            weights: LAPLACIAN_WEIGHTS,
            scale,
        }
    }

    pub fn weight_sum(&self) -> i32 {
        self.weights.iter().sum()
    }
}

/// Convolve `plane` with `kernel`.
///
/// Borders use edge replication: the missing neighbours of a border pixel are
/// copies of the nearest in-range pixel. With a zero-sum kernel this keeps a
/// uniform region at zero response right up to the canvas edge.
pub fn convolve3x3(plane: &Plane, kernel: &Kernel3x3) -> Plane {
    let (width, height) = plane.dimensions();
    let mut out = Plane::filled(width, height, 0);

    for y in 0..height {
        for x in 0..width {
            let mut sum = 0i32;
            for (k, weight) in kernel.weights.iter().enumerate() {
                if *weight == 0 {
                    continue;
                }
                let dx = (k % 3) as i64 - 1;
                let dy = (k / 3) as i64 - 1;
                let sample = plane.get_clamped(i64::from(x) + dx, i64::from(y) + dy);
                sum += weight * i32::from(sample);
            }
            let value = (sum as f32 / kernel.scale).round().clamp(0.0, 255.0) as u8;
            out.set(x, y, value);
        }
    }

    out
}

/// Gaussian blur with standard deviation `sigma` (edge-clamped).
pub fn gaussian_blur(plane: &Plane, sigma: f32) -> Plane {
    let blurred = gaussian_blur_f32(&plane.to_gray_image(), sigma);
    Plane::from_gray_image(blurred)
}
