//! Configuration for the faculty dashboard backend.

use std::time::Duration;

use anyhow::Context;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the zbMATH Open REST API.
    pub const BASE_URL: &str = "https://zbmath.org/api";

    /// User-Agent sent with every outbound request.
    pub const USER_AGENT: &str = "Faculty-Dashboard/1.0";

    /// Per-call request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Minimum spacing between consecutive outbound calls (2 req/s).
    pub const RATE_LIMIT_DELAY: Duration = Duration::from_millis(500);

    /// Page size for author searches.
    pub const AUTHOR_RESULTS_PER_PAGE: u32 = 10;

    /// Upper bound on a single document-search page.
    pub const DOCUMENT_PAGE_SIZE: u32 = 100;

    /// Total documents fetched per profile.
    pub const DOCUMENT_FETCH_LIMIT: u32 = 200;

    /// Cache TTL (1 hour).
    pub const CACHE_TTL: Duration = Duration::from_secs(3600);

    /// Cap on the publication summary list embedded in a profile.
    pub const PUBLICATION_LIST_CAP: usize = 50;

    /// Cap on the co-author name list embedded in a profile.
    pub const CO_AUTHOR_LIST_CAP: usize = 20;
}

/// Roster served by `/api/faculty` when the caller does not name authors.
pub const DEFAULT_FACULTY: &[&str] =
    &["tao.terence", "alon.noga", "wiles.andrew", "perelman.grigori", "yau.shing-tung"];

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the zbMATH API (overridable for mock servers).
    pub base_url: String,

    /// Per-call request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Minimum spacing between consecutive outbound calls.
    pub rate_limit_delay: Duration,

    /// Profile cache TTL.
    pub cache_ttl: Duration,

    /// Default author roster.
    pub faculty: Vec<String>,
}

impl Config {
    /// Create a configuration with production defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: api::BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            rate_limit_delay: api::RATE_LIMIT_DELAY,
            cache_ttl: api::CACHE_TTL,
            faculty: DEFAULT_FACULTY.iter().map(ToString::to_string).collect(),
        }
    }

    /// Create a test configuration pointed at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            rate_limit_delay: Duration::ZERO, // No pacing in tests
            cache_ttl: api::CACHE_TTL,
            faculty: vec!["tao.terence".to_string()],
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Recognized: `ZBMATH_BASE_URL`, `FACULTY_AUTHORS` (comma-separated),
    /// `CACHE_TTL_SECONDS`.
    ///
    /// # Errors
    ///
    /// Returns error if `CACHE_TTL_SECONDS` is set but not an integer.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var("ZBMATH_BASE_URL") {
            config.base_url = url;
        }

        if let Ok(roster) = std::env::var("FACULTY_AUTHORS") {
            let authors: Vec<String> = roster
                .split(',')
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect();
            if !authors.is_empty() {
                config.faculty = authors;
            }
        }

        if let Ok(ttl) = std::env::var("CACHE_TTL_SECONDS") {
            let seconds: u64 =
                ttl.parse().context("CACHE_TTL_SECONDS must be a whole number of seconds")?;
            config.cache_ttl = Duration::from_secs(seconds);
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
