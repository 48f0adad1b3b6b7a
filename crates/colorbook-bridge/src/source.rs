// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Local image sources.

use std::path::PathBuf;

use colorbook_core::error::{ColorbookError, Result};
use colorbook_core::types::GenerationRequest;
use tracing::{info, instrument};

use crate::traits::ImageSource;

/// Serves the bytes of a fixed file for every request.
///
/// Stands in for a generation provider when the source image already exists
/// on disk. Read failures are reported as `UpstreamUnavailable`, the same way
/// a remote provider failure would be.
#[derive(Debug, Clone)]
pub struct FileImageSource {
    path: PathBuf,
}

impl FileImageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSource for FileImageSource {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn generate(&self, request: &GenerationRequest) -> Result<Vec<u8>> {
        let bytes = std::fs::read(&self.path).map_err(|err| {
            ColorbookError::UpstreamUnavailable(format!(
                "could not read {}: {err}",
                self.path.display()
            ))
        })?;
        info!(prompt = %request.prompt, bytes = bytes.len(), "Source image loaded");
        Ok(bytes)
    }
}

/// A source that always fails; used when no provider is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableSource;

impl ImageSource for UnavailableSource {
    fn generate(&self, _request: &GenerationRequest) -> Result<Vec<u8>> {
        Err(ColorbookError::UpstreamUnavailable(
            "no image generation provider is configured".into(),
        ))
    }
}
