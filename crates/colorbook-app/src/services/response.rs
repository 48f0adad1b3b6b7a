// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// JSON envelope returned to clients of the processing call.
//
// Success carries the page as a `data:image/png;base64,...` URI; failure
// carries the error kind and message. The core itself only deals in bytes and
// typed errors; this encoding is purely a transport concern.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use colorbook_core::error::{ColorbookError, ErrorKind};
use colorbook_lineart::ProcessedImage;
use serde::{Deserialize, Serialize};

const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PipelineResponse {
    pub fn success(image: &ProcessedImage) -> Self {
        Self {
            success: true,
            processed_image: Some(to_data_uri(&image.png)),
            error_kind: None,
            message: None,
        }
    }

    pub fn failure(err: &ColorbookError) -> Self {
        Self {
            success: false,
            processed_image: None,
            error_kind: Some(err.kind()),
            message: Some(err.to_string()),
        }
    }

    pub fn from_result(result: &Result<ProcessedImage, ColorbookError>) -> Self {
        match result {
            Ok(image) => Self::success(image),
            Err(err) => Self::failure(err),
        }
    }
}

/// Encode PNG bytes as a data URI.
pub fn to_data_uri(png: &[u8]) -> String {
    format!("{PNG_DATA_URI_PREFIX}{}", STANDARD.encode(png))
}
