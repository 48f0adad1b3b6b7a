// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory gallery store.
//
// Keeps records and their PNG bytes in a `HashMap` behind a `Mutex`. The lock
// is only held for map operations, never while images are processed, so
// concurrent pipeline runs do not contend on it.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use colorbook_core::error::{ColorbookError, Result};
use colorbook_core::types::{
    GalleryFilter, ImageRecord, NewImageRecord, RecordId, normalize_tag,
};
use tracing::{debug, info, instrument};

use crate::traits::GalleryStore;

struct Entry {
    record: ImageRecord,
    image: Vec<u8>,
    /// Insertion order, breaks ties between equal timestamps.
    seq: u64,
}

#[derive(Default)]
struct Inner {
    entries: HashMap<RecordId, Entry>,
    next_seq: u64,
}

/// Gallery kept entirely in process memory.
#[derive(Default)]
pub struct MemoryGallery {
    inner: Mutex<Inner>,
}

impl MemoryGallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records across all owners.
    pub fn len(&self) -> usize {
        self.lock().map(|inner| inner.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| ColorbookError::Storage("gallery lock poisoned".into()))
    }

    fn with_entry<T>(&self, id: RecordId, f: impl FnOnce(&mut Entry) -> Result<T>) -> Result<T> {
        let mut inner = self.lock()?;
        let entry = inner
            .entries
            .get_mut(&id)
            .ok_or_else(|| ColorbookError::Storage(format!("no gallery record {id}")))?;
        f(entry)
    }
}

impl GalleryStore for MemoryGallery {
    #[instrument(skip_all, fields(owner = %record.owner))]
    fn save(&self, record: NewImageRecord) -> Result<RecordId> {
        let id = RecordId::new();
        let mut inner = self.lock()?;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.entries.insert(
            id,
            Entry {
                record: ImageRecord {
                    id,
                    owner: record.owner,
                    prompt: record.prompt,
                    image_hash: record.image_hash,
                    settings: record.settings,
                    is_favorite: false,
                    tags: Vec::new(),
                    created_at: Utc::now(),
                },
                image: record.image_png,
                seq,
            },
        );
        info!(%id, "Gallery record saved");
        Ok(id)
    }

    fn get(&self, id: RecordId) -> Result<Option<ImageRecord>> {
        Ok(self.lock()?.entries.get(&id).map(|e| e.record.clone()))
    }

    fn image_bytes(&self, id: RecordId) -> Result<Option<Vec<u8>>> {
        Ok(self.lock()?.entries.get(&id).map(|e| e.image.clone()))
    }

    fn list(&self, filter: &GalleryFilter) -> Result<Vec<ImageRecord>> {
        let tag = filter.tag.as_deref().and_then(normalize_tag);
        let inner = self.lock()?;

        let mut matches: Vec<&Entry> = inner
            .entries
            .values()
            .filter(|e| e.record.owner == filter.owner)
            .filter(|e| !filter.favorites_only || e.record.is_favorite)
            .filter(|e| tag.as_ref().is_none_or(|t| e.record.tags.contains(t)))
            .collect();
        matches.sort_by(|a, b| {
            b.record
                .created_at
                .cmp(&a.record.created_at)
                .then(b.seq.cmp(&a.seq))
        });

        debug!(owner = %filter.owner, count = matches.len(), "Gallery listed");
        Ok(matches.into_iter().map(|e| e.record.clone()).collect())
    }

    fn set_favorite(&self, id: RecordId, favorite: bool) -> Result<()> {
        self.with_entry(id, |entry| {
            entry.record.is_favorite = favorite;
            Ok(())
        })
    }

    fn add_tag(&self, id: RecordId, tag: &str) -> Result<()> {
        let tag = normalize_tag(tag)
            .ok_or_else(|| ColorbookError::InvalidConfig("tag must not be empty".into()))?;
        self.with_entry(id, |entry| {
            let tags = &mut entry.record.tags;
            if let Err(pos) = tags.binary_search(&tag) {
                tags.insert(pos, tag);
            }
            Ok(())
        })
    }

    fn remove_tag(&self, id: RecordId, tag: &str) -> Result<()> {
        let Some(tag) = normalize_tag(tag) else {
            return Ok(());
        };
        self.with_entry(id, |entry| {
            entry.record.tags.retain(|t| *t != tag);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorbook_core::error::ErrorKind;
    use colorbook_core::settings::LineArtSettings;
    use colorbook_core::types::OwnerId;

    fn page(owner: &str, prompt: &str) -> NewImageRecord {
        NewImageRecord {
            owner: OwnerId::new(owner),
            prompt: prompt.into(),
            image_png: vec![1, 2, 3],
            image_hash: "abc123".into(),
            settings: LineArtSettings::default(),
        }
    }

    #[test]
    fn save_and_get() {
        let gallery = MemoryGallery::new();
        let id = gallery.save(page("alice", "a castle")).expect("save");

        let record = gallery.get(id).expect("get").expect("found");
        assert_eq!(record.prompt, "a castle");
        assert!(!record.is_favorite);
        assert_eq!(gallery.image_bytes(id).expect("bytes"), Some(vec![1, 2, 3]));
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn list_is_per_owner_and_newest_first() {
        let gallery = MemoryGallery::new();
        let first = gallery.save(page("alice", "one")).expect("save");
        gallery.save(page("bob", "other")).expect("save");
        let second = gallery.save(page("alice", "two")).expect("save");

        let listed = gallery
            .list(&GalleryFilter::owner(OwnerId::new("alice")))
            .expect("list");
        let ids: Vec<_> = listed.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[test]
    fn favorites_filter() {
        let gallery = MemoryGallery::new();
        let fav = gallery.save(page("alice", "fav")).expect("save");
        gallery.save(page("alice", "plain")).expect("save");
        gallery.set_favorite(fav, true).expect("favorite");

        let listed = gallery
            .list(&GalleryFilter::owner(OwnerId::new("alice")).favorites())
            .expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, fav);
    }

    #[test]
    fn tags_are_normalised_and_unique() {
        let gallery = MemoryGallery::new();
        let id = gallery.save(page("alice", "dragon")).expect("save");
        gallery.add_tag(id, " Fantasy ").expect("tag");
        gallery.add_tag(id, "fantasy").expect("tag again");
        gallery.add_tag(id, "animals").expect("tag");

        let record = gallery.get(id).expect("get").expect("found");
        assert_eq!(record.tags, vec!["animals", "fantasy"]);

        let tagged = gallery
            .list(&GalleryFilter::owner(OwnerId::new("alice")).with_tag("FANTASY"))
            .expect("list");
        assert_eq!(tagged.len(), 1);

        gallery.remove_tag(id, "Fantasy").expect("untag");
        let record = gallery.get(id).expect("get").expect("found");
        assert_eq!(record.tags, vec!["animals"]);
    }

    #[test]
    fn empty_tag_is_rejected() {
        let gallery = MemoryGallery::new();
        let id = gallery.save(page("alice", "x")).expect("save");
        let err = gallery.add_tag(id, "   ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn unknown_record_is_storage_error() {
        let gallery = MemoryGallery::new();
        let err = gallery.set_favorite(RecordId::new(), true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StorageError);
        assert!(gallery.get(RecordId::new()).expect("get").is_none());
    }
}
