// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// colorbook-lineart — Turns a generated photo into printable line art.
//
// Provides the raster plane types, the individual pixel and window transforms
// (tone, 3×3 convolution, blur, background flattening, symmetry folding), a
// chaining processor over them, and the fixed-order pipeline that runs them
// according to a `ProcessingConfig`.

pub mod pipeline;
pub mod processor;
pub mod raster;
pub mod stages;

// Re-export the primary entry points so callers can use `colorbook_lineart::process`.
pub use pipeline::{ProcessedImage, STAGES, Stage, process, process_settings};
pub use processor::LineArtProcessor;
pub use raster::{Plane, Raster};
