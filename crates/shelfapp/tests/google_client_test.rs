use serde_json::json;
use shelfapp::search::{
    BookSource, Connectivity, ConnectivityMonitor, GoogleBooksClient, SearchFailure,
    SearchRequest, StaticConnectivity,
};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request(query: &str) -> SearchRequest {
    SearchRequest {
        query: query.to_string(),
        max_results: 20,
    }
}

fn client(base: String, connectivity: Arc<dyn Connectivity>) -> GoogleBooksClient {
    GoogleBooksClient::new(base, Duration::from_secs(5), connectivity).unwrap()
}

#[tokio::test]
async fn test_search_normalizes_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books/v1/volumes"))
        .and(query_param("q", "rust subject:Computers"))
        .and(query_param("maxResults", "20"))
        .and(query_param("printType", "books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalItems": 3,
            "items": [
                {
                    "id": "abc123",
                    "volumeInfo": {
                        "title": "Rust in Action",
                        "authors": ["Tim McNamara"],
                        "imageLinks": { "thumbnail": "http://img/1" }
                    },
                    "accessInfo": { "pdf": { "downloadLink": "http://pdf/1" } }
                },
                { "volumeInfo": { "title": "No id" } },
                { "id": "def456" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(
        format!("{}/books/v1/volumes", server.uri()),
        Arc::new(StaticConnectivity::online()),
    );
    let books = client.search(&request("rust subject:Computers")).await.unwrap();

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].id, "abc123");
    assert_eq!(books[0].title, "Rust in Action");
    assert_eq!(books[0].download_url.as_deref(), Some("http://pdf/1"));
    assert_eq!(books[1].title, "No Title");
    assert_eq!(books[1].authors, vec!["Unknown Author"]);
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client(server.uri(), Arc::new(StaticConnectivity::online()));
    let failure = client.search(&request("rust")).await.unwrap_err();

    assert_eq!(failure, SearchFailure::HttpStatus(500));
    assert!(failure.user_message().contains("500"));
}

#[tokio::test]
async fn test_empty_response_is_no_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "totalItems": 0 })))
        .mount(&server)
        .await;

    let client = client(server.uri(), Arc::new(StaticConnectivity::online()));
    assert_eq!(
        client.search(&request("zzzz")).await.unwrap_err(),
        SearchFailure::NoResults
    );
}

#[tokio::test]
async fn test_invalid_body_is_request_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let client = client(server.uri(), Arc::new(StaticConnectivity::online()));
    let failure = client.search(&request("rust")).await.unwrap_err();
    assert!(matches!(failure, SearchFailure::Request(_)));
    assert!(failure.user_message().starts_with("Failed to load books: "));
}

#[tokio::test]
async fn test_offline_signal_takes_precedence() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client(server.uri(), Arc::new(StaticConnectivity::offline()));
    assert_eq!(
        client.search(&request("rust")).await.unwrap_err(),
        SearchFailure::Offline
    );
}

#[tokio::test]
async fn test_connection_refused_marks_offline() {
    let monitor = Arc::new(ConnectivityMonitor::new(true));
    let client = client("http://127.0.0.1:1/volumes".to_string(), monitor.clone());

    let failure = client.search(&request("rust")).await.unwrap_err();
    assert_eq!(failure, SearchFailure::Offline);
    assert!(!monitor.is_online());
}

#[tokio::test]
async fn test_response_marks_online_again() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "id": "x" }]
        })))
        .mount(&server)
        .await;

    let monitor = Arc::new(ConnectivityMonitor::new(false));
    let client = client(server.uri(), monitor.clone());
    assert!(client.search(&request("rust")).await.is_ok());
    assert!(monitor.is_online());
}
