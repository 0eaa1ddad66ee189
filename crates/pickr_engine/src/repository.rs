use std::sync::Arc;

use pickr_core::{FeedPage, PaginationRequest, Photo, PhotosEnvelope};
use pickr_logging::{pickr_debug, pickr_trace};

use crate::{ApiError, DetailCache, PhotoApi, RetryPolicy};

/// Turns pagination requests into mapped feed pages.
///
/// Every remote call goes through the retry policy. Each mapped photo is
/// written to the shared [`DetailCache`] before the page is returned.
pub struct FeedRepository {
    api: Arc<dyn PhotoApi>,
    cache: Arc<DetailCache>,
    retry: RetryPolicy,
}

impl FeedRepository {
    pub fn new(api: Arc<dyn PhotoApi>, cache: Arc<DetailCache>, retry: RetryPolicy) -> Self {
        Self { api, cache, retry }
    }

    pub async fn retrieve(&self, request: &PaginationRequest) -> Result<FeedPage, ApiError> {
        let envelope = self
            .retry
            .run(ApiError::is_retryable, || self.fetch(request))
            .await?;

        let page = map_envelope(envelope, request);
        for photo in &page.photos {
            self.cache.add(photo.clone());
        }
        pickr_trace!("Cached {} photos, cache size {}", page.photos.len(), self.cache.len());
        Ok(page)
    }

    async fn fetch(&self, request: &PaginationRequest) -> Result<PhotosEnvelope, ApiError> {
        pickr_debug!("Fetching {:?}", request);
        let (page, per_page) = (request.page(), request.per_page());
        match request {
            PaginationRequest::Recent { .. } => self.api.recent_photos(page, per_page).await,
            PaginationRequest::Search { query, .. } => {
                self.api.search_photos(query, page, per_page).await
            }
        }
    }
}

/// Maps a listing reply; the cursor is present only while the reported page
/// is below the reported page count.
fn map_envelope(envelope: PhotosEnvelope, request: &PaginationRequest) -> FeedPage {
    let listing = envelope.photos;
    let next_request = if listing.pages > listing.page {
        Some(request.next_page())
    } else {
        None
    };

    FeedPage {
        photos: listing.photo.into_iter().map(Photo::from).collect(),
        next_request,
    }
}
