use crate::{PhotoExif, PhotoInfo, PhotoRecord};

/// Static image URL for a listed photo.
///
/// Format: `https://live.staticflickr.com/{server}/{id}_{secret}.jpg`.
pub fn image_url(record: &PhotoRecord) -> String {
    format!(
        "https://live.staticflickr.com/{}/{}_{}.jpg",
        record.server, record.id, record.secret
    )
}

/// A photo as the feed shows it.
///
/// Fields are private so `image_url` always matches `record`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    id: String,
    image_url: String,
    title: String,
    record: PhotoRecord,
}

impl Photo {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The listing record this photo was mapped from. Detail lookups need its `secret`.
    pub fn record(&self) -> &PhotoRecord {
        &self.record
    }
}

impl From<PhotoRecord> for Photo {
    fn from(record: PhotoRecord) -> Self {
        Self {
            id: record.id.clone(),
            image_url: image_url(&record),
            title: record.title.clone(),
            record,
        }
    }
}

/// A photo plus whichever detail payloads have arrived so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoDetails {
    pub photo: Photo,
    pub exif: Option<PhotoExif>,
    pub info: Option<PhotoInfo>,
}

impl PhotoDetails {
    /// Base photo only; both detail fields still pending.
    pub fn partial(photo: Photo) -> Self {
        Self {
            photo,
            exif: None,
            info: None,
        }
    }
}
