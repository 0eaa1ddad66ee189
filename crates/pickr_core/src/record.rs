//! Raw records as the photo service returns them, after JSON decoding.
//!
//! Field names follow the service; renames map its spellings onto Rust ones.

use serde::{Deserialize, Serialize};

/// Reply envelope of the recent and search listing operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotosEnvelope {
    pub photos: PhotosPage,
    pub stat: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotosPage {
    pub page: u32,
    /// Total number of pages the listing currently has.
    pub pages: u32,
    #[serde(rename = "perpage")]
    pub per_page: u32,
    pub total: u64,
    pub photo: Vec<PhotoRecord>,
}

/// One listed photo. Everything needed to build its image URL lives here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: String,
    pub owner: String,
    pub secret: String,
    pub server: String,
    pub farm: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiContent {
    #[serde(rename = "_content")]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoExifEnvelope {
    pub photo: PhotoExif,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoExif {
    pub camera: String,
    pub exif: Vec<ExifTag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExifTag {
    pub tag: String,
    pub label: String,
    pub raw: ApiContent,
    #[serde(default)]
    pub clean: Option<ApiContent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoInfoEnvelope {
    pub photo: PhotoInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoInfo {
    pub owner: PhotoOwner,
    pub title: ApiContent,
    pub description: ApiContent,
    pub dates: PhotoDates,
    pub views: String,
    pub comments: ApiContent,
    pub tags: PhotoTags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoOwner {
    pub username: String,
    #[serde(rename = "realname")]
    pub real_name: String,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoDates {
    pub posted: String,
    pub taken: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoTags {
    pub tag: Vec<PhotoTag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoTag {
    pub id: String,
    pub author: String,
    #[serde(rename = "authorname")]
    pub author_name: String,
    pub raw: String,
    #[serde(rename = "_content")]
    pub content: String,
}
