use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use pickr_core::Photo;

/// Photos seen in any loaded feed page, keyed by id.
///
/// One instance is shared (`Arc`) by the repository, which writes it, and the
/// detail aggregator, which only reads. Entries are replaced whole, last write
/// wins, and nothing is evicted until [`DetailCache::clear`].
#[derive(Debug, Default)]
pub struct DetailCache {
    photos_by_id: RwLock<HashMap<String, Photo>>,
}

impl DetailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, photo: Photo) {
        self.photos_by_id
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(photo.id().to_owned(), photo);
    }

    pub fn get(&self, photo_id: &str) -> Option<Photo> {
        self.photos_by_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(photo_id)
            .cloned()
    }

    pub fn clear(&self) {
        self.photos_by_id
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.photos_by_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
