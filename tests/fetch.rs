// Integration tests for the page fetcher, against a local mock server.
//
// get_html is blocking, so each call runs on the blocking pool to keep it
// off the async test runtime.

use hh_parser::{get_html, ScrapeError};
use wiremock::matchers::{headers, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn fetch(url: String) -> Result<String, ScrapeError> {
    tokio::task::spawn_blocking(move || get_html(&url))
        .await
        .expect("fetch task panicked")
}

#[tokio::test]
async fn success_returns_body_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vacancy/123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let body = fetch(format!("{}/vacancy/123", server.uri())).await.unwrap();
    assert_eq!(body, "<html>ok</html>");
}

#[tokio::test]
async fn browser_headers_are_sent() {
    let server = MockServer::start().await;
    // Only a request carrying the browser header set matches; anything else
    // falls through to the server's default 404.
    Mock::given(method("GET"))
        .and(path("/resume/abc"))
        // wiremock's header matchers split received values on commas, so
        // comma-containing values must be given as their split parts.
        .and(headers(
            "Accept-Language",
            vec!["ru-RU", "ru;q=0.9", "en-US;q=0.8", "en;q=0.7"],
        ))
        .and(headers(
            "Accept",
            vec![
                "text/html",
                "application/xhtml+xml",
                "application/xml;q=0.9",
                "*/*;q=0.8",
            ],
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("matched"))
        .mount(&server)
        .await;

    let body = fetch(format!("{}/resume/abc", server.uri())).await.unwrap();
    assert_eq!(body, "matched");
}

#[tokio::test]
async fn not_found_maps_to_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vacancy/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = fetch(format!("{}/vacancy/gone", server.uri()))
        .await
        .unwrap_err();
    match err {
        ScrapeError::Http { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("expected HTTP error, got {other}"),
    }
}

#[tokio::test]
async fn server_error_maps_to_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vacancy/boom"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = fetch(format!("{}/vacancy/boom", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, ScrapeError::Http { status, .. } if status.as_u16() == 503));
}

#[tokio::test]
async fn unreachable_host_maps_to_network_error() {
    // .invalid is guaranteed never to resolve (RFC 2606).
    let err = fetch("http://does-not-exist.invalid/vacancy/1".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, ScrapeError::Network { .. }));
}
