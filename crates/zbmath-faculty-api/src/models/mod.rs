//! Data models: raw zbMATH wire records and the aggregated profile entity.
//!
//! Wire records use `#[serde(default)]` throughout so missing or null fields
//! become defaults instead of propagating untyped data into the aggregator.

mod author;
mod document;
mod profile;

pub use author::AuthorRecord;
pub use document::{DocumentRecord, ResultEnvelope, SearchResponse};
pub use profile::{AuthorMetrics, AuthorProfile, PublicationSummary, YearCount};
