use std::future;
use std::sync::Arc;

use futures_util::stream::{self, BoxStream, StreamExt};
use pickr_core::{Photo, PhotoDetails};
use pickr_logging::{pickr_debug, pickr_warn};

use crate::{DetailCache, PhotoApi};

/// Builds the detail view of a cached photo in two steps.
///
/// Reads the [`DetailCache`] but never writes it.
#[derive(Clone)]
pub struct DetailAggregator {
    api: Arc<dyn PhotoApi>,
    cache: Arc<DetailCache>,
}

impl DetailAggregator {
    pub fn new(api: Arc<dyn PhotoApi>, cache: Arc<DetailCache>) -> Self {
        Self { api, cache }
    }

    /// Detail stream for `photo_id`.
    ///
    /// Nothing happens until the stream is polled, and each call starts over.
    /// A cache miss yields a single `None`. A hit yields the photo with both
    /// detail fields empty, then, once exif and info have both settled, the
    /// photo with whatever each fetch returned. A failed fetch leaves its field
    /// `None` without affecting the other.
    pub fn observe(&self, photo_id: &str) -> BoxStream<'static, Option<PhotoDetails>> {
        let api = self.api.clone();
        let cache = self.cache.clone();
        let photo_id = photo_id.to_owned();

        stream::once(async move { cache.get(&photo_id) })
            .flat_map(move |cached| match cached {
                None => {
                    pickr_debug!("No cached photo for detail lookup");
                    stream::once(future::ready(None)).boxed()
                }
                Some(photo) => {
                    let partial = PhotoDetails::partial(photo.clone());
                    stream::once(future::ready(Some(partial)))
                        .chain(stream::once(fetch_details(api.clone(), photo)).map(Some))
                        .boxed()
                }
            })
            .boxed()
    }
}

async fn fetch_details(api: Arc<dyn PhotoApi>, photo: Photo) -> PhotoDetails {
    let photo_id = photo.id();
    let secret = photo.record().secret.as_str();

    let (exif, info) = futures_util::join!(
        api.photo_exif(photo_id, secret),
        api.photo_info(photo_id, secret)
    );

    let exif = exif
        .map_err(|err| pickr_warn!("Error retrieving exif for {}: {}", photo_id, err))
        .ok();
    let info = info
        .map_err(|err| pickr_warn!("Error retrieving info for {}: {}", photo_id, err))
        .ok();

    PhotoDetails { photo, exif, info }
}
