mod common;

use serde_json::json;

#[tokio::test]
async fn test_full_url_from_short_url() {
    let (server, _repo) = common::create_test_server();
    let short_url = common::shorten(&server, "https://www.example.com").await;

    let response = server.get("/full").add_query_param("url", &short_url).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "url": "https://www.example.com" }));
}

#[tokio::test]
async fn test_full_url_from_bare_code() {
    let (server, _repo) = common::create_test_server();
    let short_url = common::shorten(&server, "https://www.example.com").await;
    let code = short_url.rsplit('/').next().unwrap();

    let response = server.get("/full").add_query_param("url", code).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "url": "https://www.example.com" }));
}

#[tokio::test]
async fn test_full_url_ignores_origin_of_short_url() {
    let (server, _repo) = common::create_test_server();
    let short_url = common::shorten(&server, "https://www.example.com").await;
    let code = short_url.rsplit('/').next().unwrap();

    let response = server
        .get("/full")
        .add_query_param("url", format!("https://elsewhere.test/x/{code}"))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_full_url_unknown_token() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .get("/full")
        .add_query_param("url", "nonexistent-token")
        .await;

    response.assert_status_not_found();
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_full_url_not_a_url() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/full").add_query_param("url", "not a url").await;

    response.assert_status_not_found();
}
