use super::{BookSource, Connectivity, SearchFailure, SearchOutcome, SearchRequest};
use crate::error::{Result, ShelfError};
use crate::model::BookRecord;
use crate::normalize::normalize;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Client for the Google Books `volumes` endpoint.
#[derive(Clone)]
pub struct GoogleBooksClient {
    http: reqwest::Client,
    base_url: String,
    connectivity: Arc<dyn Connectivity>,
}

impl GoogleBooksClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        connectivity: Arc<dyn Connectivity>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ShelfError::Api(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            connectivity,
        })
    }

    /// Offline takes precedence over whatever actually went wrong.
    fn fail(&self, failure: SearchFailure) -> SearchFailure {
        if self.connectivity.is_online() {
            failure
        } else {
            SearchFailure::Offline
        }
    }
}

#[async_trait]
impl BookSource for GoogleBooksClient {
    async fn search(&self, request: &SearchRequest) -> SearchOutcome {
        debug!(query = %request.query, "searching");
        let max_results = request.max_results.to_string();
        let sent = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", request.query.as_str()),
                ("maxResults", max_results.as_str()),
                ("printType", "books"),
            ])
            .send()
            .await;

        let response = match sent {
            Ok(response) => response,
            Err(e) => {
                if e.is_connect() || e.is_timeout() {
                    self.connectivity.report(false);
                }
                return Err(self.fail(SearchFailure::Request(e.to_string())));
            }
        };
        self.connectivity.report(true);

        let status = response.status();
        if !status.is_success() {
            return Err(self.fail(SearchFailure::HttpStatus(status.as_u16())));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| self.fail(SearchFailure::Request(e.to_string())))?;

        let books: Vec<BookRecord> = body
            .get("items")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(normalize).collect::<Vec<_>>())
            .unwrap_or_default()
            .into_iter()
            .filter(|book| {
                if book.id.is_empty() {
                    debug!(title = %book.title, "dropping result without id");
                }
                !book.id.is_empty()
            })
            .collect();

        if books.is_empty() {
            return Err(SearchFailure::NoResults);
        }
        debug!(count = books.len(), "search returned");
        Ok(books)
    }
}
