// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Colorbook galleries and generation requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::settings::LineArtSettings;

/// Unique identifier for a stored gallery record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque owner identity supplied by the identity provider.
///
/// Colorbook never authenticates; it only attributes output to this id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the image source is asked to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Free-form subject typed by the user.
    pub prompt: String,
    /// Optional style hint picked from the suggestion list.
    pub style: Option<String>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            style: None,
        }
    }
}

/// A processed page ready to be stored.
#[derive(Debug, Clone)]
pub struct NewImageRecord {
    pub owner: OwnerId,
    pub prompt: String,
    /// Encoded PNG bytes of the finished page.
    pub image_png: Vec<u8>,
    /// SHA-256 hex digest of `image_png`.
    pub image_hash: String,
    /// Settings the page was produced with.
    pub settings: LineArtSettings,
}

/// A stored gallery entry (metadata only; bytes are fetched separately).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: RecordId,
    pub owner: OwnerId,
    pub prompt: String,
    pub image_hash: String,
    pub settings: LineArtSettings,
    pub is_favorite: bool,
    /// Normalised (trimmed, lower-case), unique, sorted.
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Selection criteria for listing a gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryFilter {
    pub owner: OwnerId,
    pub favorites_only: bool,
    /// Only records carrying this tag (normalised before comparison).
    pub tag: Option<String>,
}

impl GalleryFilter {
    /// Everything belonging to `owner`.
    pub fn owner(owner: OwnerId) -> Self {
        Self {
            owner,
            favorites_only: false,
            tag: None,
        }
    }

    pub fn favorites(mut self) -> Self {
        self.favorites_only = true;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Normalise a user-entered tag: trim and lower-case.
///
/// Returns `None` for tags that are empty after trimming.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
