// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Colorbook.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error type for all Colorbook operations.
#[derive(Debug, Error)]
pub enum ColorbookError {
    // -- Pipeline errors --
    #[error("image decoding failed: {0}")]
    Decode(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("image encoding failed: {0}")]
    Encode(String),

    // -- Collaborators --
    #[error("image source unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("gallery storage error: {0}")]
    Storage(String),

    // -- Local I/O --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Wire-level classification of a [`ColorbookError`].
///
/// Serialised verbatim into the `errorKind` field of failure responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    DecodeError,
    InvalidConfig,
    UpstreamUnavailable,
    EncodeError,
    StorageError,
    IoError,
}

impl ColorbookError {
    /// The taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Decode(_) => ErrorKind::DecodeError,
            Self::InvalidConfig(_) => ErrorKind::InvalidConfig,
            Self::Encode(_) => ErrorKind::EncodeError,
            Self::UpstreamUnavailable(_) => ErrorKind::UpstreamUnavailable,
            Self::Storage(_) => ErrorKind::StorageError,
            Self::Io(_) => ErrorKind::IoError,
            // A malformed config or record is a caller input problem.
            Self::Serialization(_) => ErrorKind::InvalidConfig,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ColorbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(
            ColorbookError::Decode("bad header".into()).kind(),
            ErrorKind::DecodeError
        );
        assert_eq!(
            ColorbookError::InvalidConfig("Diagonal".into()).kind(),
            ErrorKind::InvalidConfig
        );
        assert_eq!(
            ColorbookError::UpstreamUnavailable("quota".into()).kind(),
            ErrorKind::UpstreamUnavailable
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(ColorbookError::from(io).kind(), ErrorKind::IoError);
    }

    #[test]
    fn error_kind_serialises_as_literal() {
        let json = serde_json::to_string(&ErrorKind::DecodeError).expect("serialise");
        assert_eq!(json, "\"DecodeError\"");
    }
}
