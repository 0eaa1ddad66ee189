use std::collections::HashSet;

use crate::{FeedState, PaginationRequest, Photo, DEFAULT_PER_PAGE};

/// How many screens ahead of the end of the loaded set a prefetch fires.
pub const PREFETCH_PAGE_FACTOR: f64 = 1.5;

/// Prefetch rule for a scroll report.
///
/// `visible` holds the grid indices on screen. With `items_per_page = visible.len()`
/// and `last = max(visible) + 1` (0 when nothing is visible), the next page is
/// wanted once `last >= accumulated - 1.5 * items_per_page`.
pub fn should_prefetch(visible: &[usize], accumulated: usize) -> bool {
    let items_per_page = visible.len() as f64;
    let last_visible = visible.iter().max().map_or(0, |index| index + 1) as f64;
    last_visible >= accumulated as f64 - PREFETCH_PAGE_FACTOR * items_per_page
}

/// Accumulated feed: photos unique by id in arrival order, the pagination
/// cursor, and the state last published to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedModel {
    photos: Vec<Photo>,
    seen_ids: HashSet<String>,
    cursor: Option<PaginationRequest>,
    state: FeedState,
    per_page: u32,
    dirty: bool,
}

impl Default for FeedModel {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl FeedModel {
    /// Empty feed in `Loading` whose first-page requests use `per_page`.
    pub fn new(per_page: u32) -> Self {
        Self {
            photos: Vec::new(),
            seen_ids: HashSet::new(),
            cursor: None,
            state: FeedState::Loading,
            per_page: per_page.max(1),
            dirty: false,
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn cursor(&self) -> Option<&PaginationRequest> {
        self.cursor.as_ref()
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Returns whether the state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_state(&mut self, state: FeedState) {
        self.state = state;
        self.dirty = true;
    }

    pub(crate) fn set_ready(&mut self, is_loading_more: bool) {
        self.set_state(FeedState::Ready {
            photos: self.photos.clone(),
            is_loading_more,
        });
    }

    pub(crate) fn set_cursor(&mut self, cursor: Option<PaginationRequest>) {
        self.cursor = cursor;
    }

    /// Drops every photo and the cursor.
    pub(crate) fn clear(&mut self) {
        self.photos.clear();
        self.seen_ids.clear();
        self.cursor = None;
    }

    /// Appends photos whose id is new; returns how many were added.
    pub(crate) fn merge(&mut self, photos: Vec<Photo>) -> usize {
        let before = self.photos.len();
        for photo in photos {
            if self.seen_ids.insert(photo.id().to_owned()) {
                self.photos.push(photo);
            }
        }
        self.photos.len() - before
    }
}
