mod common;

use cinedex::catalog::{CatalogGateway, GatewayError, TmdbClient};
use cinedex::config::{ApiConfig, SecureString};
use common::mock_catalog::{MockCatalog, MockResponse};

const POPULAR_PAGE: &str = r#"{
    "page": 1,
    "results": [
        {"id": 550, "title": "Fight Club", "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
         "overview": "A ticking-time-bomb insomniac...", "release_date": "1999-10-15",
         "vote_average": 8.4, "vote_count": 30000, "popularity": 61.4, "genre_ids": [18]},
        {"id": 13, "title": "Forrest Gump", "poster_path": null, "release_date": "",
         "vote_average": 8.5}
    ],
    "total_pages": 500,
    "total_results": 10000
}"#;

fn client_for(server: &MockCatalog) -> TmdbClient {
    let config = ApiConfig {
        base_url: server.base_url(),
        timeout_seconds: 5,
        ..ApiConfig::default()
    };
    TmdbClient::with_key(&config, SecureString::new("test-key".to_string())).unwrap()
}

#[tokio::test]
async fn popular_sends_page_and_api_key() {
    let server = MockCatalog::start().await;
    server.enqueue(MockResponse::json(POPULAR_PAGE)).await;
    let client = client_for(&server);

    let response = client.get_popular(3).await.unwrap();

    assert_eq!(response.total_pages, 500);
    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[0].title, "Fight Club");
    assert_eq!(response.results[1].poster_path, None);
    assert_eq!(response.results[1].vote_count, 0);

    let requests = server.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/movie/popular");
    assert_eq!(requests[0].param("api_key"), Some("test-key"));
    assert_eq!(requests[0].param("page"), Some("3"));
}

#[tokio::test]
async fn search_sends_trimmed_query() {
    let server = MockCatalog::start().await;
    server.enqueue(MockResponse::json(POPULAR_PAGE)).await;
    let client = client_for(&server);

    client.search("  fight club ", 1).await.unwrap();

    let requests = server.captured_requests().await;
    assert_eq!(requests[0].path, "/search/movie");
    assert_eq!(requests[0].param("query"), Some("fight club"));
    assert_eq!(requests[0].param("page"), Some("1"));
    assert_eq!(requests[0].param("api_key"), Some("test-key"));
}

#[tokio::test]
async fn blank_search_never_hits_the_network() {
    let server = MockCatalog::start().await;
    let client = client_for(&server);

    let response = client.search("   ", 1).await.unwrap();

    assert_eq!(response.page, 1);
    assert!(response.results.is_empty());
    assert_eq!(response.total_pages, 0);
    assert_eq!(response.total_results, 0);
    assert!(server.captured_requests().await.is_empty());
}

#[tokio::test]
async fn detail_and_credits_paths() {
    let server = MockCatalog::start().await;
    server
        .enqueue(MockResponse::json(
            r#"{"id": 550, "title": "Fight Club", "genres": [{"id": 18, "name": "Drama"}],
                "runtime": 139, "status": "Released", "tagline": "Mischief. Mayhem. Soap.",
                "budget": 63000000, "revenue": 100853753}"#,
        ))
        .await;
    server
        .enqueue(MockResponse::json(
            r#"{"id": 550, "cast": [
                {"id": 819, "name": "Edward Norton", "character": "The Narrator", "order": 0},
                {"id": 287, "name": "Brad Pitt", "character": "Tyler Durden", "order": 1,
                 "profile_path": "/cckcYc2v0yh1tc9QjRelptcOBko.jpg"}
            ]}"#,
        ))
        .await;
    let client = client_for(&server);

    let detail = client.get_detail(550).await.unwrap();
    let credits = client.get_credits(550).await.unwrap();

    assert_eq!(detail.movie.id, 550);
    assert_eq!(detail.runtime, Some(139));
    assert_eq!(detail.genres[0].name, "Drama");
    assert_eq!(credits.cast.len(), 2);
    assert_eq!(credits.cast[1].name, "Brad Pitt");

    let paths: Vec<String> = server
        .captured_requests()
        .await
        .into_iter()
        .map(|request| request.path)
        .collect();
    assert_eq!(paths, vec!["/movie/550", "/movie/550/credits"]);
}

#[tokio::test]
async fn status_codes_map_to_user_messages() {
    let cases = [
        (401, "Invalid API key. Please check your configuration."),
        (404, "Resource not found."),
        (429, "Too many requests. Please try again later."),
        (500, "Server error. Please try again later."),
        (502, "Server error. Please try again later."),
        (503, "Server error. Please try again later."),
        (418, "An error occurred. Please try again."),
        (504, "An error occurred. Please try again."),
    ];

    let server = MockCatalog::start().await;
    let client = client_for(&server);
    for (status, message) in cases {
        server.enqueue(MockResponse::error(status, "nope")).await;
        let err = client.get_popular(1).await.unwrap_err();
        assert_eq!(err.to_string(), message, "status {}", status);
    }
}

#[tokio::test]
async fn undecodable_body_is_unexpected() {
    let server = MockCatalog::start().await;
    server.enqueue(MockResponse::json("<html>oops</html>")).await;
    let client = client_for(&server);

    let err = client.get_popular(1).await.unwrap_err();
    assert_eq!(err, GatewayError::Unexpected);
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ApiConfig {
        base_url: format!("http://{}", addr),
        timeout_seconds: 2,
        ..ApiConfig::default()
    };
    let client = TmdbClient::with_key(&config, SecureString::new("k".to_string())).unwrap();

    let err = client.get_detail(1).await.unwrap_err();
    assert_eq!(err, GatewayError::Network);
    assert_eq!(
        err.to_string(),
        "Network error. Please check your internet connection."
    );
}
