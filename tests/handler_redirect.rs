mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use url_shortener::api::handlers::redirect_handler;

#[tokio::test]
async fn test_redirect_success() {
    let state = common::create_test_state();
    let short_url = state
        .shortener
        .shorten("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .unwrap();
    let code = common::code_of(&short_url);

    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get(&format!("/{code}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header("location"),
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
    );
}

#[tokio::test]
async fn test_redirect_not_found() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/abc1234").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Short code not found: abc1234");
    assert_eq!(json["error"]["details"]["code"], "abc1234");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let state = common::create_test_state();
    let short_url = state.shortener.shorten("https://example.com").unwrap();
    let code = common::code_of(&short_url);

    let flipped: String = code
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect();

    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    if flipped != code {
        server.get(&format!("/{flipped}")).await.assert_status_not_found();
    }
    server
        .get(&format!("/{code}"))
        .await
        .assert_status(StatusCode::FOUND);
}
