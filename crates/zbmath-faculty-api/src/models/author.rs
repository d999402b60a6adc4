//! Raw author record from the zbMATH author search endpoint.

use serde::Deserialize;

/// A raw author hit as returned by `author/_search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorRecord {
    /// Stable author code (e.g. `tao.terence`).
    #[serde(default)]
    pub author_code: Option<String>,

    /// Display name.
    #[serde(default)]
    pub author_name: Option<String>,
}
