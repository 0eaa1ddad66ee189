//! Pickr core: pure feed state machine and domain types.
mod effect;
mod model;
mod msg;
mod photo;
mod record;
mod request;
mod state;
mod update;

pub use effect::Effect;
pub use model::{should_prefetch, FeedModel, PREFETCH_PAGE_FACTOR};
pub use msg::Msg;
pub use photo::{image_url, Photo, PhotoDetails};
pub use record::{
    ApiContent, ExifTag, PhotoDates, PhotoExif, PhotoExifEnvelope, PhotoInfo, PhotoInfoEnvelope,
    PhotoOwner, PhotoRecord, PhotoTag, PhotoTags, PhotosEnvelope, PhotosPage,
};
pub use request::{PaginationRequest, DEFAULT_PER_PAGE, FIRST_PAGE};
pub use state::{FeedPage, FeedState, FEED_ERROR_MESSAGE};
pub use update::update;
