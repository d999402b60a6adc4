//! Raw document records and the search response envelope.

use serde::{Deserialize, Deserializer};

/// A raw document (publication) hit as returned by `document/_search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentRecord {
    /// Numeric zbMATH document identifier.
    #[serde(default)]
    pub zbmath_id: Option<i64>,

    /// Document title.
    #[serde(default)]
    pub title: Option<String>,

    /// Publication year. The API is inconsistent about the JSON type, so
    /// both integers and numeric strings are accepted; anything else is
    /// treated as absent.
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i32>,

    /// Journal or series the document appeared in.
    #[serde(default)]
    pub source: Option<String>,

    /// Author display names.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Abstract text.
    #[serde(default)]
    pub r#abstract: Option<String>,
}

fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Int(i64),
        Str(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<RawYear>::deserialize(deserializer)? {
        Some(RawYear::Int(value)) => i32::try_from(value).ok(),
        Some(RawYear::Str(value)) => value.trim().parse().ok(),
        _ => None,
    })
}

/// Envelope returned by the zbMATH search endpoints.
///
/// Hits arrive either as `{"result": {"docs": [...]}}` or as a bare
/// `{"result": [...]}` list; a missing `result` means zero hits.
#[derive(Debug, Deserialize)]
pub struct SearchResponse<T> {
    #[serde(default)]
    pub result: ResultEnvelope<T>,
}

/// The two shapes the `result` member can take.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ResultEnvelope<T> {
    /// Paged shape with a `docs` list.
    Paged {
        #[serde(default)]
        docs: Vec<T>,
    },
    /// Bare list shape.
    Bare(Vec<T>),
}

impl<T> Default for ResultEnvelope<T> {
    fn default() -> Self {
        Self::Paged { docs: Vec::new() }
    }
}

impl<T> SearchResponse<T> {
    /// Flatten the envelope into the list of hits.
    #[must_use]
    pub fn into_docs(self) -> Vec<T> {
        match self.result {
            ResultEnvelope::Paged { docs } | ResultEnvelope::Bare(docs) => docs,
        }
    }
}
