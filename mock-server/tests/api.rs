use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, FeedEntry, FeedPage};
use tower::ServiceExt;
use uuid::Uuid;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_feed() -> Request<String> {
    Request::builder().uri("/feed").body(String::new()).unwrap()
}

fn entry(id: u128, image: &str) -> FeedEntry {
    FeedEntry {
        id: Uuid::from_u128(id),
        description: None,
        location: None,
        image: image.to_string(),
    }
}

// --- list ---

#[tokio::test]
async fn list_empty_feed() {
    let resp = app().oneshot(get_feed()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let raw = body_bytes(resp).await;
    assert_eq!(&raw[..], br#"{"items":[]}"#);
}

#[tokio::test]
async fn list_seeded_feed_keeps_order() {
    let seeded = vec![entry(2, "http://b.com"), entry(1, "http://a.com")];
    let resp = app_with(seeded.clone()).oneshot(get_feed()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: FeedPage = body_json(resp).await;
    assert_eq!(page.items, seeded);
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let resp = app()
        .oneshot(Request::builder().uri("/missing").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- create ---

#[tokio::test]
async fn create_entry_returns_201_with_generated_id() {
    let resp = app()
        .oneshot(json_request("POST", "/feed", r#"{"image":"http://a-url.com"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: FeedEntry = body_json(resp).await;
    assert!(!created.id.is_nil());
    assert_eq!(created.image, "http://a-url.com");
    assert!(created.description.is_none());
}

#[tokio::test]
async fn create_entry_keeps_explicit_id() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/feed",
            r#"{"id":"00000000-0000-0000-0000-000000000007","description":"d","location":"l","image":"http://a-url.com"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: FeedEntry = body_json(resp).await;
    assert_eq!(created.id, Uuid::from_u128(7));
    assert_eq!(created.description.as_deref(), Some("d"));
    assert_eq!(created.location.as_deref(), Some("l"));
}

#[tokio::test]
async fn create_entry_without_image_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/feed", r#"{"description":"no image"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- lifecycle ---

#[tokio::test]
async fn create_list_clear_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create two
    for image in ["http://first.com", "http://second.com"] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request("POST", "/feed", &format!(r#"{{"image":"{image}"}}"#)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // list — insertion order
    let resp = ServiceExt::ready(&mut app).await.unwrap().call(get_feed()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: FeedPage = body_json(resp).await;
    let images: Vec<&str> = page.items.iter().map(|e| e.image.as_str()).collect();
    assert_eq!(images, vec!["http://first.com", "http://second.com"]);

    // clear
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri("/feed")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    // list after clear — empty
    let resp = ServiceExt::ready(&mut app).await.unwrap().call(get_feed()).await.unwrap();
    let page: FeedPage = body_json(resp).await;
    assert!(page.items.is_empty());
}
