//! The aggregated bibliometric profile served by the API.

use serde::{Deserialize, Serialize};

/// Citation-impact proxies for one scholar.
///
/// Computed from the publication count alone (the zbMATH search results
/// carry no citation data), not the canonical citation-based definitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorMetrics {
    pub h_index: u32,
    pub g_index: u32,
}

/// One bar of a per-year histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub count: u32,
}

/// A single publication in the profile's bounded summary list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicationSummary {
    #[serde(default)]
    pub publication_id: Option<i64>,

    pub title: String,

    #[serde(default)]
    pub year: Option<i32>,

    #[serde(default)]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#abstract: Option<String>,

    /// Placeholder; per-document citation counts are not available upstream.
    #[serde(default)]
    pub citations: u32,
}

/// Aggregated bibliometric record for one scholar.
///
/// Degraded results share this shape: an error profile has zeroed counts,
/// empty lists, and a non-empty `error`, so consumers never special-case it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorProfile {
    /// Stable identifier (the resolved author code, or the requested
    /// identifier on degraded results).
    pub id: String,

    /// Display name.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zbmath_author_id: Option<String>,

    /// Count of publication records the aggregates were derived from.
    pub num_publications: u32,

    pub num_reviews: u32,

    /// Size of the full co-author set (not the capped list below).
    pub num_co_authors: u32,

    pub num_joint_publications: u32,

    pub metrics: AuthorMetrics,

    /// Bounded publication summary list (first 50 documents as received).
    pub publications: Vec<PublicationSummary>,

    /// Per-year publication histogram, ascending by year.
    pub publications_by_year: Vec<YearCount>,

    /// Per-year citation histogram, same year domain. Synthesized from the
    /// publication histogram; see the `metrics` module.
    pub citations_by_year: Vec<YearCount>,

    /// Up to 20 co-author names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co_authors: Option<Vec<String>>,

    /// Present only on degraded results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthorProfile {
    /// Zero-valued degraded profile carrying an error message. Structurally
    /// a valid profile: all counts zero, empty lists, `error` set.
    #[must_use]
    pub fn error(identifier: &str, message: impl Into<String>) -> Self {
        Self {
            id: identifier.to_string(),
            name: identifier.to_string(),
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// True when this profile is a degraded placeholder rather than live or
    /// canned data.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}
