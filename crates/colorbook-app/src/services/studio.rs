// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Generation service — asks the image source for a picture, turns it into a
// coloring page, and files the page in the owner's gallery.
//
// Every step is fail-fast: nothing is retried here, and a page is only stored
// once the whole pipeline has succeeded.

use std::sync::Arc;

use colorbook_bridge::traits::{GalleryStore, IdentityProvider, ImageSource};
use colorbook_core::error::{ColorbookError, Result};
use colorbook_core::settings::{LineArtSettings, ProcessingConfig};
use colorbook_core::types::{GenerationRequest, ImageRecord, NewImageRecord};
use colorbook_lineart::ProcessedImage;
use tracing::{info, instrument};

use super::integrity::hash_bytes;

/// A page that was generated, processed, and stored.
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    pub record: ImageRecord,
    pub image: ProcessedImage,
}

/// Composes the image source, the line-art pipeline, and the gallery.
pub struct Studio {
    source: Box<dyn ImageSource>,
    gallery: Arc<dyn GalleryStore>,
    identity: Box<dyn IdentityProvider>,
}

impl Studio {
    pub fn new(
        source: Box<dyn ImageSource>,
        gallery: Arc<dyn GalleryStore>,
        identity: Box<dyn IdentityProvider>,
    ) -> Self {
        Self {
            source,
            gallery,
            identity,
        }
    }

    /// Generate, process, and store one coloring page.
    ///
    /// Input is validated before the source is contacted: a blank prompt, an
    /// unknown symmetry literal, or a missing owner all fail with
    /// `InvalidConfig` without spending a generation.
    #[instrument(skip(self, settings), fields(prompt = %request.prompt))]
    pub fn generate(
        &self,
        request: &GenerationRequest,
        settings: &LineArtSettings,
    ) -> Result<GeneratedPage> {
        let prompt = request.prompt.trim();
        if prompt.is_empty() {
            return Err(ColorbookError::InvalidConfig("prompt must not be empty".into()));
        }
        let config = ProcessingConfig::try_from(settings)?;
        let owner = self
            .identity
            .current_owner()
            .ok_or_else(|| ColorbookError::InvalidConfig("no signed-in owner".into()))?;

        let source = self.source.generate(request)?;
        let image = colorbook_lineart::process(&source, &config)?;

        let id = self.gallery.save(NewImageRecord {
            owner,
            prompt: prompt.to_owned(),
            image_png: image.png.clone(),
            image_hash: hash_bytes(&image.png),
            settings: LineArtSettings::from(&config),
        })?;
        let record = self
            .gallery
            .get(id)?
            .ok_or_else(|| ColorbookError::Storage(format!("record {id} missing after save")))?;

        info!(%id, width = image.width, height = image.height, "Coloring page stored");
        Ok(GeneratedPage { record, image })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorbook_bridge::{FileImageSource, MemoryGallery, StaticIdentity, UnavailableSource};
    use colorbook_core::error::ErrorKind;
    use colorbook_core::types::{GalleryFilter, OwnerId};
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

    fn write_source(dir: &std::path::Path) -> std::path::PathBuf {
        let img = RgbImage::from_fn(24, 24, |x, y| {
            if (8..16).contains(&x) && (8..16).contains(&y) {
                Rgb([20, 20, 20])
            } else {
                Rgb([230, 230, 230])
            }
        });
        let path = dir.join("source.png");
        DynamicImage::ImageRgb8(img)
            .save_with_format(&path, ImageFormat::Png)
            .expect("write fixture");
        path
    }

    fn studio_with(
        source: Box<dyn ImageSource>,
        identity: StaticIdentity,
    ) -> (Studio, Arc<MemoryGallery>) {
        let gallery = Arc::new(MemoryGallery::new());
        let studio = Studio::new(source, gallery.clone(), Box::new(identity));
        (studio, gallery)
    }

    #[test]
    fn generate_stores_processed_page() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (studio, gallery) = studio_with(
            Box::new(FileImageSource::new(write_source(dir.path()))),
            StaticIdentity::signed_in(OwnerId::new("alice")),
        );

        let mut settings = LineArtSettings::default();
        settings.line_thickness = 42;
        let page = studio
            .generate(&GenerationRequest::new("  a square  "), &settings)
            .expect("generate");

        assert_eq!(page.record.prompt, "a square");
        assert_eq!(page.record.owner, OwnerId::new("alice"));
        assert_eq!(page.record.image_hash, hash_bytes(&page.image.png));
        // Stored parameters are the ones actually applied.
        assert_eq!(page.record.settings.line_thickness, 5);
        assert_eq!((page.image.width, page.image.height), (24, 24));

        let stored = gallery.image_bytes(page.record.id).expect("bytes").expect("found");
        assert_eq!(stored, page.image.png);
        let listed = gallery
            .list(&GalleryFilter::owner(OwnerId::new("alice")))
            .expect("list");
        assert_eq!(listed.len(), 1);
    }

    #[test]
    fn blank_prompt_is_rejected_before_source() {
        let (studio, gallery) = studio_with(
            Box::new(UnavailableSource),
            StaticIdentity::signed_in(OwnerId::new("alice")),
        );
        let err = studio
            .generate(&GenerationRequest::new("   "), &LineArtSettings::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        assert!(gallery.is_empty());
    }

    #[test]
    fn invalid_symmetry_is_rejected_before_source() {
        let (studio, _) = studio_with(
            Box::new(UnavailableSource),
            StaticIdentity::signed_in(OwnerId::new("alice")),
        );
        let mut settings = LineArtSettings::default();
        settings.symmetry = "Diagonal".into();
        let err = studio
            .generate(&GenerationRequest::new("a cat"), &settings)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn anonymous_caller_is_rejected() {
        let (studio, _) = studio_with(Box::new(UnavailableSource), StaticIdentity::anonymous());
        let err = studio
            .generate(&GenerationRequest::new("a cat"), &LineArtSettings::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn upstream_failure_is_propagated_and_nothing_stored() {
        let (studio, gallery) = studio_with(
            Box::new(UnavailableSource),
            StaticIdentity::signed_in(OwnerId::new("alice")),
        );
        let err = studio
            .generate(&GenerationRequest::new("a cat"), &LineArtSettings::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);
        assert!(gallery.is_empty());
    }

    #[test]
    fn undecodable_source_is_decode_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("junk.bin");
        std::fs::write(&path, b"not a picture").expect("write");
        let (studio, gallery) = studio_with(
            Box::new(FileImageSource::new(path)),
            StaticIdentity::signed_in(OwnerId::new("alice")),
        );
        let err = studio
            .generate(&GenerationRequest::new("a cat"), &LineArtSettings::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecodeError);
        assert!(gallery.is_empty());
    }
}
