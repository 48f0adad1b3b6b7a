// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The line-art pipeline: a fixed, ordered table of stages, each gated by a
// predicate over the config, run between decode and PNG encode.

use colorbook_core::error::Result;
use colorbook_core::settings::{LineArtSettings, ProcessingConfig, Symmetry};
use tracing::{debug, info, instrument};

use crate::processor::{CONTRAST_GAIN, LineArtProcessor};
use crate::stages::SMOOTHING_SIGMA;

/// One named step of the pipeline.
pub struct Stage {
    pub name: &'static str,
    /// Whether the stage runs for a given config.
    pub enabled: fn(&ProcessingConfig) -> bool,
    pub apply: fn(LineArtProcessor, &ProcessingConfig) -> LineArtProcessor,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage").field("name", &self.name).finish()
    }
}

/// All pixel stages in execution order.
pub const STAGES: &[Stage] = &[
    Stage {
        name: "grayscale_normalize",
        enabled: always,
        apply: grayscale_normalize,
    },
    Stage {
        name: "contrast_stretch",
        enabled: always,
        apply: contrast_stretch,
    },
    Stage {
        name: "edge_detect",
        enabled: always,
        apply: edge_detect,
    },
    Stage {
        name: "binarize_invert",
        enabled: always,
        apply: binarize_invert,
    },
    Stage {
        name: "smooth_rebinarize",
        enabled: always,
        apply: smooth_rebinarize,
    },
    Stage {
        name: "flatten_background",
        enabled: wants_flat_background,
        apply: flatten_background,
    },
    Stage {
        name: "mirror",
        enabled: wants_symmetry,
        apply: mirror,
    },
];

/// A finished coloring page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedImage {
    /// Lossless PNG encoding of the page.
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Convert encoded source bytes into a PNG coloring page.
///
/// Decoding failures (including zero-sized images) yield
/// `ColorbookError::Decode`; encoder failures `ColorbookError::Encode`. All
/// stages in between are infallible. The call is a pure function of its
/// inputs: the same bytes and config always produce the same PNG.
#[instrument(skip(source), fields(source_len = source.len()))]
pub fn process(source: &[u8], config: &ProcessingConfig) -> Result<ProcessedImage> {
    let mut processor = LineArtProcessor::from_bytes(source)?;
    info!(
        width = processor.width(),
        height = processor.height(),
        "Processing line art"
    );

    for stage in STAGES {
        if (stage.enabled)(config) {
            debug!(stage = stage.name, "Running stage");
            processor = (stage.apply)(processor, config);
        } else {
            debug!(stage = stage.name, "Skipping stage");
        }
    }

    let png = processor.to_png_bytes()?;
    Ok(ProcessedImage {
        png,
        width: processor.width(),
        height: processor.height(),
    })
}

/// Validate raw client settings, then run [`process`].
///
/// An unknown symmetry literal fails with `ColorbookError::InvalidConfig`
/// before the source is even decoded.
pub fn process_settings(source: &[u8], settings: &LineArtSettings) -> Result<ProcessedImage> {
    let config = ProcessingConfig::try_from(settings)?;
    process(source, &config)
}

// -- Stage predicates ---------------------------------------------------------

fn always(_: &ProcessingConfig) -> bool {
    true
}

fn wants_flat_background(config: &ProcessingConfig) -> bool {
    config.remove_background()
}

fn wants_symmetry(config: &ProcessingConfig) -> bool {
    config.symmetry() != Symmetry::None
}

// -- Stage bodies -------------------------------------------------------------

fn grayscale_normalize(p: LineArtProcessor, _: &ProcessingConfig) -> LineArtProcessor {
    p.grayscale_normalize()
}

fn contrast_stretch(p: LineArtProcessor, config: &ProcessingConfig) -> LineArtProcessor {
    p.contrast_stretch(CONTRAST_GAIN, config.contrast_offset())
}

fn edge_detect(p: LineArtProcessor, config: &ProcessingConfig) -> LineArtProcessor {
    p.detect_edges(config.edge_scale())
}

fn binarize_invert(p: LineArtProcessor, _: &ProcessingConfig) -> LineArtProcessor {
    p.binarize_invert()
}

fn smooth_rebinarize(p: LineArtProcessor, _: &ProcessingConfig) -> LineArtProcessor {
    p.smooth_rebinarize(SMOOTHING_SIGMA)
}

fn flatten_background(p: LineArtProcessor, _: &ProcessingConfig) -> LineArtProcessor {
    p.flatten_background()
}

// Horizontal runs first so `Both` folds the already left/right symmetric canvas.
fn mirror(p: LineArtProcessor, config: &ProcessingConfig) -> LineArtProcessor {
    let symmetry = config.symmetry();
    let p = if symmetry.mirrors_horizontally() {
        p.mirror_horizontal()
    } else {
        p
    };
    if symmetry.mirrors_vertically() {
        p.mirror_vertical()
    } else {
        p
    }
}
