#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, Once};
use std::time::Duration;

use pickr_core::{
    ApiContent, ExifTag, PhotoDates, PhotoExif, PhotoInfo, PhotoOwner, PhotoRecord, PhotoTags,
    PhotosEnvelope, PhotosPage,
};
use pickr_engine::{ApiError, PhotoApi};
use tokio::sync::Notify;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(pickr_logging::initialize_for_tests);
}

pub fn record(id: &str) -> PhotoRecord {
    PhotoRecord {
        id: id.to_string(),
        owner: "42@N07".to_string(),
        secret: format!("sec{id}"),
        server: "65535".to_string(),
        farm: 66,
        title: format!("Photo {id}"),
    }
}

pub fn envelope(page: u32, pages: u32, ids: &[String]) -> PhotosEnvelope {
    PhotosEnvelope {
        photos: PhotosPage {
            page,
            pages,
            per_page: ids.len() as u32,
            total: u64::from(pages) * ids.len() as u64,
            photo: ids.iter().map(|id| record(id)).collect(),
        },
        stat: "ok".to_string(),
    }
}

pub fn ids(range: std::ops::Range<usize>) -> Vec<String> {
    range.map(|i| format!("p{i}")).collect()
}

pub fn exif() -> PhotoExif {
    PhotoExif {
        camera: "Ricoh GR III".to_string(),
        exif: vec![ExifTag {
            tag: "ISO".to_string(),
            label: "ISO Speed".to_string(),
            raw: ApiContent {
                content: "200".to_string(),
            },
            clean: None,
        }],
    }
}

pub fn info() -> PhotoInfo {
    let content = |s: &str| ApiContent {
        content: s.to_string(),
    };
    PhotoInfo {
        owner: PhotoOwner {
            username: "walker".to_string(),
            real_name: "W. Alker".to_string(),
            location: Some("Oslo".to_string()),
        },
        title: content("Fjord"),
        description: content(""),
        dates: PhotoDates {
            posted: "1700000000".to_string(),
            taken: "2023-11-14 09:00:00".to_string(),
        },
        views: "7".to_string(),
        comments: content("0"),
        tags: PhotoTags { tag: Vec::new() },
    }
}

/// One recorded listing call: `query` is `None` for the recent listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingCall {
    pub query: Option<String>,
    pub page: u32,
    pub per_page: u32,
}

type Scripted<T> = Mutex<VecDeque<Result<T, ApiError>>>;

/// Scripted [`PhotoApi`]: listing replies are queued per `(query, page)`.
pub struct FakePhotoApi {
    listings: Mutex<HashMap<(Option<String>, u32), VecDeque<Result<PhotosEnvelope, ApiError>>>>,
    listing_calls: Mutex<Vec<ListingCall>>,
    hold_listings: AtomicBool,
    release: Notify,
    exif: Scripted<PhotoExif>,
    info: Scripted<PhotoInfo>,
    detail_calls: Mutex<Vec<(String, String)>>,
    exif_delay: Duration,
    info_delay: Duration,
}

impl Default for FakePhotoApi {
    fn default() -> Self {
        Self {
            listings: Mutex::new(HashMap::new()),
            listing_calls: Mutex::new(Vec::new()),
            hold_listings: AtomicBool::new(false),
            release: Notify::new(),
            exif: Mutex::new(VecDeque::new()),
            info: Mutex::new(VecDeque::new()),
            detail_calls: Mutex::new(Vec::new()),
            exif_delay: Duration::ZERO,
            info_delay: Duration::ZERO,
        }
    }
}

impl FakePhotoApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_detail_delays(mut self, exif: Duration, info: Duration) -> Self {
        self.exif_delay = exif;
        self.info_delay = info;
        self
    }

    pub fn script_recent(&self, page: u32, reply: Result<PhotosEnvelope, ApiError>) {
        self.script(None, page, reply);
    }

    pub fn script_search(&self, query: &str, page: u32, reply: Result<PhotosEnvelope, ApiError>) {
        self.script(Some(query.to_string()), page, reply);
    }

    fn script(&self, query: Option<String>, page: u32, reply: Result<PhotosEnvelope, ApiError>) {
        self.listings
            .lock()
            .unwrap()
            .entry((query, page))
            .or_default()
            .push_back(reply);
    }

    pub fn script_exif(&self, reply: Result<PhotoExif, ApiError>) {
        self.exif.lock().unwrap().push_back(reply);
    }

    pub fn script_info(&self, reply: Result<PhotoInfo, ApiError>) {
        self.info.lock().unwrap().push_back(reply);
    }

    /// Makes listing calls wait until [`FakePhotoApi::release_one`].
    pub fn hold_listings(&self) {
        self.hold_listings.store(true, Ordering::SeqCst);
    }

    pub fn release_one(&self) {
        self.release.notify_one();
    }

    pub fn listing_calls(&self) -> Vec<ListingCall> {
        self.listing_calls.lock().unwrap().clone()
    }

    pub fn detail_calls(&self) -> Vec<(String, String)> {
        self.detail_calls.lock().unwrap().clone()
    }

    async fn listing(
        &self,
        query: Option<&str>,
        page: u32,
        per_page: u32,
    ) -> Result<PhotosEnvelope, ApiError> {
        self.listing_calls.lock().unwrap().push(ListingCall {
            query: query.map(str::to_string),
            page,
            per_page,
        });
        if self.hold_listings.load(Ordering::SeqCst) {
            self.release.notified().await;
        }
        self.listings
            .lock()
            .unwrap()
            .get_mut(&(query.map(str::to_string), page))
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(ApiError::Client(format!("unscripted page {page}"))))
    }
}

#[async_trait::async_trait]
impl PhotoApi for FakePhotoApi {
    async fn recent_photos(&self, page: u32, per_page: u32) -> Result<PhotosEnvelope, ApiError> {
        self.listing(None, page, per_page).await
    }

    async fn search_photos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<PhotosEnvelope, ApiError> {
        self.listing(Some(query), page, per_page).await
    }

    async fn photo_exif(&self, photo_id: &str, secret: &str) -> Result<PhotoExif, ApiError> {
        self.detail_calls
            .lock()
            .unwrap()
            .push((photo_id.to_string(), secret.to_string()));
        tokio::time::sleep(self.exif_delay).await;
        let reply = self.exif.lock().unwrap().pop_front();
        reply.unwrap_or_else(|| Err(ApiError::Client("unscripted exif".into())))
    }

    async fn photo_info(&self, photo_id: &str, secret: &str) -> Result<PhotoInfo, ApiError> {
        self.detail_calls
            .lock()
            .unwrap()
            .push((photo_id.to_string(), secret.to_string()));
        tokio::time::sleep(self.info_delay).await;
        let reply = self.info.lock().unwrap().pop_front();
        reply.unwrap_or_else(|| Err(ApiError::Client("unscripted info".into())))
    }
}
