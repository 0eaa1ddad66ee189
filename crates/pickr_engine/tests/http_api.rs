use std::time::Duration;

use pickr_engine::{ApiError, ClientSettings, PhotoApi, ReqwestPhotoApi};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING: &str = r#"{
    "photos": {
        "page": 2, "pages": 4, "perpage": 2, "total": 8,
        "photo": [
            {"id": "11", "owner": "a@N01", "secret": "x1", "server": "31", "farm": 1, "title": "eleven"},
            {"id": "12", "owner": "a@N01", "secret": "x2", "server": "31", "farm": 1, "title": "twelve"}
        ]
    },
    "stat": "ok"
}"#;

fn api(server: &MockServer) -> ReqwestPhotoApi {
    ReqwestPhotoApi::new(ClientSettings {
        base_url: format!("{}/services/", server.uri()),
        api_key: "test-key".to_string(),
        ..ClientSettings::default()
    })
    .expect("client")
}

#[tokio::test]
async fn recent_photos_sends_method_and_paging() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/rest/"))
        .and(query_param("method", "flickr.photos.getRecent"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("format", "json"))
        .and(query_param("nojsoncallback", "1"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(LISTING, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = api(&server).recent_photos(2, 2).await.expect("listing");
    assert_eq!(envelope.photos.pages, 4);
    assert_eq!(envelope.photos.photo[1].id, "12");
}

#[tokio::test]
async fn search_sends_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/rest/"))
        .and(query_param("method", "flickr.photos.search"))
        .and(query_param("text", "sea stacks"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(LISTING, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = api(&server)
        .search_photos("sea stacks", 1, 30)
        .await
        .expect("search");
    assert_eq!(envelope.photos.photo.len(), 2);
}

#[tokio::test]
async fn exif_and_info_unwrap_photo_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("method", "flickr.photos.getExif"))
        .and(query_param("photo_id", "11"))
        .and(query_param("secret", "x1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"photo": {"camera": "Leica Q2", "exif": []}, "stat": "ok"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("method", "flickr.photos.getInfo"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"photo": {
                "owner": {"username": "u", "realname": "", "location": null},
                "title": {"_content": "t"}, "description": {"_content": ""},
                "dates": {"posted": "1", "taken": "2020-01-01 00:00:00"},
                "views": "3", "comments": {"_content": "0"}, "tags": {"tag": []}
            }, "stat": "ok"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let api = api(&server);
    let exif = api.photo_exif("11", "x1").await.expect("exif");
    assert_eq!(exif.camera, "Leica Q2");
    let info = api.photo_info("11", "x1").await.expect("info");
    assert_eq!(info.owner.username, "u");
    assert_eq!(info.owner.location, None);
}

#[tokio::test]
async fn http_status_maps_to_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = api(&server).recent_photos(1, 30).await.unwrap_err();
    assert_eq!(err, ApiError::Server { status: 503 });
    assert!(err.is_retryable());
}

#[tokio::test]
async fn service_failure_body_maps_to_client_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"stat": "fail", "code": 100, "message": "Invalid API Key (Key has invalid format)"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let err = api(&server).recent_photos(1, 30).await.unwrap_err();
    assert!(matches!(err, ApiError::Client(ref message) if message.contains("Invalid API Key")));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn slow_reply_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw(LISTING, "application/json"),
        )
        .mount(&server)
        .await;

    let api = ReqwestPhotoApi::new(ClientSettings {
        base_url: format!("{}/services/", server.uri()),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    })
    .expect("client");

    let err = api.recent_photos(1, 30).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
