//! zbMATH Open API client.
//!
//! Provides an async HTTP client with:
//! - Connection pooling via reqwest
//! - Minimum inter-request spacing (500 ms between calls through one client)
//! - Per-call timeout (10 s)
//! - An error-collapsing public boundary: `search_author` and
//!   `search_documents_by_author` never fail, they return an empty list on
//!   any upstream problem. The `try_` variants expose the typed
//!   [`ClientError`] for callers (and tests) that need to distinguish a
//!   failed call from a genuinely empty result set.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Client;
use tokio::sync::Mutex;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{AuthorRecord, DocumentRecord, SearchResponse};

/// Client for the zbMATH REST API.
#[derive(Clone)]
pub struct ZbmathClient {
    /// HTTP client with pooling and timeouts.
    client: Client,

    /// API base URL.
    base_url: String,

    /// Minimum spacing between consecutive calls.
    rate_limit_delay: Duration,

    /// Instant of the last outbound call. Shared between clones, so calls
    /// through the same logical client are serialized; independently
    /// constructed clients pace independently.
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl ZbmathClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            api::USER_AGENT.parse().expect("valid user-agent header"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            rate_limit_delay: config.rate_limit_delay,
            last_request: Arc::new(Mutex::new(None)),
        })
    }

    /// Search for authors by name or code. Failures collapse to an empty
    /// list and are logged, never propagated.
    pub async fn search_author(&self, query: &str, page: u32) -> Vec<AuthorRecord> {
        match self.try_search_author(query, page).await {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(query, error = %err, "author search failed");
                Vec::new()
            }
        }
    }

    /// Search for documents by author name. Failures collapse to an empty
    /// list and are logged, never propagated.
    pub async fn search_documents_by_author(
        &self,
        author_name: &str,
        page: u32,
        limit: u32,
    ) -> Vec<DocumentRecord> {
        match self.try_search_documents_by_author(author_name, page, limit).await {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(author_name, error = %err, "document search failed");
                Vec::new()
            }
        }
    }

    /// Typed variant of [`Self::search_author`].
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-2xx status, or a response
    /// that does not match the search envelope.
    pub async fn try_search_author(
        &self,
        query: &str,
        page: u32,
    ) -> ClientResult<Vec<AuthorRecord>> {
        let url = format!("{}/author/_search", self.base_url);
        let params = [
            ("search_string".to_string(), query.to_string()),
            ("page".to_string(), page.to_string()),
            ("results_per_page".to_string(), api::AUTHOR_RESULTS_PER_PAGE.to_string()),
        ];

        let response: SearchResponse<AuthorRecord> = self.get(&url, &params).await?;
        Ok(response.into_docs())
    }

    /// Typed variant of [`Self::search_documents_by_author`]. The page size
    /// is bounded at 100 regardless of `limit`.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-2xx status, or a response
    /// that does not match the search envelope.
    pub async fn try_search_documents_by_author(
        &self,
        author_name: &str,
        page: u32,
        limit: u32,
    ) -> ClientResult<Vec<DocumentRecord>> {
        let url = format!("{}/document/_search", self.base_url);
        let params = [
            ("search_string".to_string(), format!("au:\"{author_name}\"")),
            ("page".to_string(), page.to_string()),
            (
                "results_per_page".to_string(),
                limit.min(api::DOCUMENT_PAGE_SIZE).to_string(),
            ),
        ];

        let response: SearchResponse<DocumentRecord> = self.get(&url, &params).await?;
        Ok(response.into_docs())
    }

    /// Block until the minimum inter-request spacing has elapsed, then stamp
    /// the current instant. Holding the lock across the sleep serializes
    /// concurrent callers through the same client.
    async fn pace(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.rate_limit_delay {
                tokio::time::sleep(self.rate_limit_delay - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }

    /// Make a paced GET request.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.pace().await;

        let response = self.client.get(url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::unexpected_status(status.as_u16(), message));
        }

        let value: serde_json::Value = response.json().await?;
        serde_json::from_value(value).map_err(ClientError::from)
    }
}

impl std::fmt::Debug for ZbmathClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZbmathClient").field("base_url", &self.base_url).finish()
    }
}
