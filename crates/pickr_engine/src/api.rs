use std::time::Duration;

use pickr_core::{PhotoExif, PhotoExifEnvelope, PhotoInfo, PhotoInfoEnvelope, PhotosEnvelope};
use pickr_logging::pickr_trace;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::ApiError;

const METHOD_RECENT: &str = "flickr.photos.getRecent";
const METHOD_SEARCH: &str = "flickr.photos.search";
const METHOD_EXIF: &str = "flickr.photos.getExif";
const METHOD_INFO: &str = "flickr.photos.getInfo";

/// Remote photo service. Implementations own transport concerns such as
/// timeouts and authentication.
#[async_trait::async_trait]
pub trait PhotoApi: Send + Sync {
    async fn recent_photos(&self, page: u32, per_page: u32) -> Result<PhotosEnvelope, ApiError>;

    async fn search_photos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<PhotosEnvelope, ApiError>;

    async fn photo_exif(&self, photo_id: &str, secret: &str) -> Result<PhotoExif, ApiError>;

    async fn photo_info(&self, photo_id: &str, secret: &str) -> Result<PhotoInfo, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Service root; the REST endpoint is `{base_url}rest/`.
    pub base_url: String,
    pub api_key: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "https://www.flickr.com/services/".to_string(),
            api_key: String::new(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Reply body the service sends instead of the payload when a call is rejected.
#[derive(Debug, Deserialize)]
struct FailureReply {
    stat: String,
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
}

/// [`PhotoApi`] over HTTPS with JSON replies.
#[derive(Debug, Clone)]
pub struct ReqwestPhotoApi {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl ReqwestPhotoApi {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let base = Url::parse(&settings.base_url)
            .map_err(|err| ApiError::Client(format!("invalid base url: {err}")))?;
        let endpoint = base
            .join("rest/")
            .map_err(|err| ApiError::Client(format!("invalid base url: {err}")))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            api_key: settings.api_key,
        })
    }

    /// Full request URL for `method` with the standard and given parameters.
    fn method_url(&self, method: &str, params: &[(&str, String)]) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("method", method)
                .append_pair("api_key", &self.api_key)
                .append_pair("format", "json")
                .append_pair("nojsoncallback", "1");
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }
        url
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.method_url(method, params);
        pickr_trace!("GET {} {:?}", method, params);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        decode_reply(&body)
    }
}

#[async_trait::async_trait]
impl PhotoApi for ReqwestPhotoApi {
    async fn recent_photos(&self, page: u32, per_page: u32) -> Result<PhotosEnvelope, ApiError> {
        self.call(
            METHOD_RECENT,
            &[("page", page.to_string()), ("per_page", per_page.to_string())],
        )
        .await
    }

    async fn search_photos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<PhotosEnvelope, ApiError> {
        self.call(
            METHOD_SEARCH,
            &[
                ("text", query.to_string()),
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
            ],
        )
        .await
    }

    async fn photo_exif(&self, photo_id: &str, secret: &str) -> Result<PhotoExif, ApiError> {
        let envelope: PhotoExifEnvelope = self
            .call(
                METHOD_EXIF,
                &[("photo_id", photo_id.to_string()), ("secret", secret.to_string())],
            )
            .await?;
        Ok(envelope.photo)
    }

    async fn photo_info(&self, photo_id: &str, secret: &str) -> Result<PhotoInfo, ApiError> {
        let envelope: PhotoInfoEnvelope = self
            .call(
                METHOD_INFO,
                &[("photo_id", photo_id.to_string()), ("secret", secret.to_string())],
            )
            .await?;
        Ok(envelope.photo)
    }
}

/// Decodes a 200 reply, recognizing the service's `stat: "fail"` body first.
fn decode_reply<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    if let Ok(failure) = serde_json::from_slice::<FailureReply>(body) {
        if failure.stat == "fail" {
            return Err(ApiError::Client(format!(
                "service rejected call (code {}): {}",
                failure.code.unwrap_or_default(),
                failure.message.unwrap_or_default()
            )));
        }
    }
    serde_json::from_slice(body).map_err(|err| ApiError::Client(format!("invalid reply: {err}")))
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_decode() || err.is_builder() {
        return ApiError::Client(err.to_string());
    }
    ApiError::Transport(err.to_string())
}
