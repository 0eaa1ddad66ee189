//! Pickr engine: remote access, retry, caching, and the async feed and detail paths.
mod api;
mod cache;
mod controller;
mod details;
mod error;
mod repository;
mod retry;

pub use api::{ClientSettings, PhotoApi, ReqwestPhotoApi};
pub use cache::DetailCache;
pub use controller::FeedController;
pub use details::DetailAggregator;
pub use error::ApiError;
pub use repository::FeedRepository;
pub use retry::{RetryPolicy, DEFAULT_INITIAL_DELAY_MS, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_DELAY_MS};
