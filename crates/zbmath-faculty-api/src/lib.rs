//! Faculty bibliometrics backend for the zbMATH Open API.
//!
//! Fetches, normalizes, and caches bibliometric profiles (publication
//! counts, citation-impact proxies, co-author lists) for a configurable set
//! of scholars and serves them over a small read-mostly JSON API.
//!
//! # Architecture
//!
//! Request → [`cache::ProfileCache`] (per-key TTL) → [`fetcher::ProfileFetcher`]
//! → [`resolver::AuthorResolver`] over the rate-limited [`client::ZbmathClient`]
//! → [`metrics`] aggregation, degrading to [`fallback`] data when the
//! upstream search is unreachable or returns nothing.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use zbmath_faculty_api::cache::ProfileCache;
//! use zbmath_faculty_api::config::Config;
//! use zbmath_faculty_api::fetcher::ProfileFetcher;
//! use zbmath_faculty_api::client::ZbmathClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let client = ZbmathClient::new(&config)?;
//!     let fetcher = ProfileFetcher::new(client);
//!     let cache = ProfileCache::new(Arc::new(fetcher), config.cache_ttl);
//!
//!     let profile = cache.get_or_fetch("tao.terence", true).await;
//!     println!("{} has {} publications", profile.name, profile.num_publications);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod fetcher;
pub mod metrics;
pub mod models;
pub mod resolver;
pub mod server;

pub use cache::ProfileCache;
pub use client::ZbmathClient;
pub use config::Config;
pub use error::{ClientError, ClientResult};
pub use fetcher::{ProfileFetcher, ProfileSource};
pub use models::AuthorProfile;
