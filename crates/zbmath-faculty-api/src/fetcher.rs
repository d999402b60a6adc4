//! Profile fetch orchestration.
//!
//! Resolve the identifier, gather the author's documents, aggregate; on any
//! degraded path hand the identifier to the fallback provider instead. A
//! fetch never fails: upstream failures are collapsed inside the client, an
//! unresolved author falls back to canned or error-shaped data, so every
//! path ends in a structurally valid [`AuthorProfile`].

use async_trait::async_trait;

use crate::client::ZbmathClient;
use crate::config::api;
use crate::fallback::FallbackProvider;
use crate::metrics;
use crate::models::{AuthorProfile, DocumentRecord};
use crate::resolver::AuthorResolver;

/// Anything that can produce a profile for an identifier.
///
/// The cache and the HTTP layer depend on this seam rather than on the
/// concrete fetcher, so tests can substitute a mock source and count
/// fetches.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Produce a profile. Must not fail: degraded paths return fallback or
    /// error-shaped profiles instead.
    async fn fetch(&self, identifier: &str) -> AuthorProfile;
}

/// Live fetcher against the zbMATH API.
pub struct ProfileFetcher {
    client: ZbmathClient,
    resolver: AuthorResolver,
    fallback: FallbackProvider,
}

impl ProfileFetcher {
    #[must_use]
    pub fn new(client: ZbmathClient) -> Self {
        let resolver = AuthorResolver::new(client.clone());
        Self { client, resolver, fallback: FallbackProvider::new() }
    }

    /// Fetch up to [`api::DOCUMENT_FETCH_LIMIT`] documents for an author,
    /// paging at the client's page-size bound. A short page means the
    /// upstream result set is exhausted.
    async fn gather_documents(&self, author_name: &str) -> Vec<DocumentRecord> {
        let mut documents: Vec<DocumentRecord> = Vec::new();
        let mut page = 0;

        while (documents.len() as u32) < api::DOCUMENT_FETCH_LIMIT {
            let remaining = api::DOCUMENT_FETCH_LIMIT - documents.len() as u32;
            let batch = self.client.search_documents_by_author(author_name, page, remaining).await;
            let requested = remaining.min(api::DOCUMENT_PAGE_SIZE);
            let short_page = (batch.len() as u32) < requested;

            documents.extend(batch);
            if short_page {
                break;
            }
            page += 1;
        }
        documents
    }
}

#[async_trait]
impl ProfileSource for ProfileFetcher {
    async fn fetch(&self, identifier: &str) -> AuthorProfile {
        let Some(author) = self.resolver.resolve(identifier).await else {
            tracing::info!(identifier, "author not resolved, using fallback data");
            return self.fallback.get(identifier);
        };

        let documents = self.gather_documents(&author.name).await;
        tracing::debug!(
            identifier,
            author = %author.name,
            documents = documents.len(),
            "aggregating profile"
        );

        metrics::build_profile(&author.code, &author.name, &documents)
    }
}
