// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Trait definitions for the services around the line-art pipeline.

use colorbook_core::error::Result;
use colorbook_core::types::{
    GalleryFilter, GenerationRequest, ImageRecord, NewImageRecord, OwnerId, RecordId,
};

/// Produces raw source image bytes for a prompt.
///
/// Provider failures (quota, rejected prompt, timeout) must surface as
/// `ColorbookError::UpstreamUnavailable`; callers treat them as opaque and
/// Colorbook never retries them itself.
pub trait ImageSource: Send + Sync {
    fn generate(&self, request: &GenerationRequest) -> Result<Vec<u8>>;
}

/// Keeps finished pages per owner.
pub trait GalleryStore: Send + Sync {
    /// Store a new page and return its id.
    fn save(&self, record: NewImageRecord) -> Result<RecordId>;

    /// Metadata for one record, or `None` if it does not exist.
    fn get(&self, id: RecordId) -> Result<Option<ImageRecord>>;

    /// PNG bytes of one record, or `None` if it does not exist.
    fn image_bytes(&self, id: RecordId) -> Result<Option<Vec<u8>>>;

    /// Records matching `filter`, newest first.
    fn list(&self, filter: &GalleryFilter) -> Result<Vec<ImageRecord>>;

    fn set_favorite(&self, id: RecordId, favorite: bool) -> Result<()>;

    /// Attach a tag. Tags are normalised; empty tags are rejected.
    fn add_tag(&self, id: RecordId, tag: &str) -> Result<()>;

    fn remove_tag(&self, id: RecordId, tag: &str) -> Result<()>;
}

/// Supplies the owner that new pages are attributed to.
///
/// No authentication happens here; the provider only reports who is signed in.
pub trait IdentityProvider: Send + Sync {
    fn current_owner(&self) -> Option<OwnerId>;
}
