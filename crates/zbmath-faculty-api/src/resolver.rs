//! Author identity resolution against the zbMATH author search.

use crate::client::ZbmathClient;

/// An author identity confirmed by the upstream search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAuthor {
    /// Stable author code used as the profile key.
    pub code: String,

    /// Display name used for document searches.
    pub name: String,
}

/// Resolves a caller-supplied identifier to a concrete author record.
#[derive(Debug, Clone)]
pub struct AuthorResolver {
    client: ZbmathClient,
}

impl AuthorResolver {
    #[must_use]
    pub fn new(client: ZbmathClient) -> Self {
        Self { client }
    }

    /// Look up `identifier` and take the first hit. Returns `None` when the
    /// search yields nothing, which includes every upstream failure mode
    /// (the client collapses those to empty result sets).
    ///
    /// Missing fields on the hit fall back to the requested identifier.
    pub async fn resolve(&self, identifier: &str) -> Option<ResolvedAuthor> {
        let results = self.client.search_author(identifier, 0).await;
        results.into_iter().next().map(|record| ResolvedAuthor {
            code: record.author_code.unwrap_or_else(|| identifier.to_string()),
            name: record.author_name.unwrap_or_else(|| identifier.to_string()),
        })
    }
}
