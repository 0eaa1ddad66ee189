use crate::{PaginationRequest, Photo};

/// User-facing message for a failed fresh load. Never carries error details.
pub const FEED_ERROR_MESSAGE: &str = "Error retrieving photos, please try again later.";

/// One mapped page of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPage {
    pub photos: Vec<Photo>,
    /// Request for the following page, `None` once the listing is exhausted.
    pub next_request: Option<PaginationRequest>,
}

/// What the photo grid renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedState {
    #[default]
    Loading,
    Ready {
        /// Accumulated photos, unique by id, in arrival order.
        photos: Vec<Photo>,
        is_loading_more: bool,
    },
    Error {
        message: String,
    },
}

impl FeedState {
    /// Photos visible in this state; empty unless `Ready`.
    pub fn photos(&self) -> &[Photo] {
        match self {
            FeedState::Ready { photos, .. } => photos,
            FeedState::Loading | FeedState::Error { .. } => &[],
        }
    }

    pub fn is_loading_more(&self) -> bool {
        match self {
            FeedState::Ready {
                is_loading_more, ..
            } => *is_loading_more,
            FeedState::Loading | FeedState::Error { .. } => false,
        }
    }
}
