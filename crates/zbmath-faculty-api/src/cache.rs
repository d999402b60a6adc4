//! In-memory per-key profile cache with TTL expiry.
//!
//! Entries are replaced lazily on access; there is no background sweeper.
//! Concurrent misses for the same key may both fetch and both write (last
//! write wins): fetch results are idempotent and structurally
//! interchangeable, so this is an accepted inefficiency rather than a
//! correctness hazard.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tokio::sync::RwLock;

use crate::fetcher::ProfileSource;
use crate::models::AuthorProfile;

/// One cached profile with its fetch timestamps.
struct CacheEntry {
    profile: AuthorProfile,

    /// Monotonic instant used for TTL arithmetic.
    fetched: Instant,

    /// Wall-clock epoch seconds reported by the status endpoint.
    fetched_at: f64,
}

impl CacheEntry {
    fn new(profile: AuthorProfile) -> Self {
        Self { profile, fetched: Instant::now(), fetched_at: epoch_seconds() }
    }
}

/// Keyed TTL cache in front of a [`ProfileSource`].
pub struct ProfileCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
    source: Arc<dyn ProfileSource>,
}

/// Point-in-time view of one cache entry.
#[derive(Debug, Clone, Serialize)]
pub struct EntryStatus {
    pub cached_at: f64,
    pub age_seconds: f64,
    pub expired: bool,
    pub publications_count: usize,
}

/// Snapshot of the whole cache.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    pub cache_size: usize,
    pub cache_expiry_seconds: u64,
    pub entries: HashMap<String, EntryStatus>,
}

impl ProfileCache {
    #[must_use]
    pub fn new(source: Arc<dyn ProfileSource>, ttl: Duration) -> Self {
        Self { entries: RwLock::new(HashMap::new()), ttl, source }
    }

    /// Serve `identifier` from the cache when the entry is younger than the
    /// TTL; otherwise fetch, store, and return. `use_cache = false` skips
    /// the freshness check entirely but still rewarms the entry, so
    /// subsequent cached reads stay hot.
    pub async fn get_or_fetch(&self, identifier: &str, use_cache: bool) -> AuthorProfile {
        if use_cache {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(identifier) {
                if entry.fetched.elapsed() < self.ttl {
                    tracing::debug!(identifier, "cache hit");
                    return entry.profile.clone();
                }
            }
            // Read lock dropped here; concurrent misses may race, last
            // write wins.
        }

        tracing::info!(identifier, "fetching fresh profile");
        let profile = self.source.fetch(identifier).await;
        self.entries
            .write()
            .await
            .insert(identifier.to_string(), CacheEntry::new(profile.clone()));
        profile
    }

    /// Drop every entry in one critical section.
    pub async fn invalidate_all(&self) {
        self.entries.write().await.clear();
        tracing::info!("cache cleared");
    }

    /// Number of live (possibly expired) entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Configured TTL.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Per-key snapshot for the status endpoint. An entry is reported
    /// expired once its age reaches the TTL, even though it is only
    /// replaced on the next access.
    pub async fn status(&self) -> CacheStatus {
        let entries = self.entries.read().await;
        let statuses = entries
            .iter()
            .map(|(identifier, entry)| {
                let age = entry.fetched.elapsed();
                (
                    identifier.clone(),
                    EntryStatus {
                        cached_at: entry.fetched_at,
                        age_seconds: age.as_secs_f64(),
                        expired: age >= self.ttl,
                        publications_count: entry.profile.publications.len(),
                    },
                )
            })
            .collect();

        CacheStatus {
            cache_size: entries.len(),
            cache_expiry_seconds: self.ttl.as_secs(),
            entries: statuses,
        }
    }
}

impl std::fmt::Debug for ProfileCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileCache").field("ttl", &self.ttl).finish()
    }
}

/// Wall-clock epoch seconds, also used for response timestamps.
pub(crate) fn epoch_seconds() -> f64 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs_f64()
}
