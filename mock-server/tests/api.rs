use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Echo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn post_request(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(body.to_string())
        .unwrap()
}

// --- canned replies ---

#[tokio::test]
async fn a_returns_200_with_body_a() {
    let resp = app().oneshot(post_request("/a", "payload")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, "A");
}

#[tokio::test]
async fn b_returns_404_with_body_b() {
    let resp = app().oneshot(post_request("/b", "")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_bytes(resp).await, "B");
}

#[tokio::test]
async fn get_is_not_allowed() {
    let resp = app()
        .oneshot(Request::builder().uri("/a").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_route_is_404_with_empty_body() {
    let resp = app().oneshot(post_request("/nope", "")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn redirect_returns_302_to_a() {
    let resp = app().oneshot(post_request("/redirect", "payload")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers()["location"], "/a");
}

// --- echo ---

#[tokio::test]
async fn echo_reflects_body_and_duplicate_headers() {
    let req = Request::builder()
        .method("POST")
        .uri("/echo")
        .header("x-order", "1")
        .header("x-other", "z")
        .header("x-order", "2")
        .body("hello".to_string())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.body, "hello");
    assert_eq!(echo.values("x-order"), vec!["1", "2"]);
    assert_eq!(echo.values("x-other"), vec!["z"]);
}

#[tokio::test]
async fn echo_accepts_empty_body() {
    let resp = app().oneshot(post_request("/echo", "")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert!(echo.body.is_empty());
}

// --- arbitrary status ---

#[tokio::test]
async fn status_route_replies_with_requested_code() {
    let resp = app().oneshot(post_request("/status/503", "")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_bytes(resp).await, "status 503");
}

#[tokio::test]
async fn status_route_rejects_non_numeric_code() {
    let resp = app().oneshot(post_request("/status/abc", "")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
