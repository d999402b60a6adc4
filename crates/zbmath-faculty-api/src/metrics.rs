//! Profile aggregation over raw document records.
//!
//! Pure functions, no I/O. Two deliberate approximations carried over from
//! the dashboard's data contract:
//!
//! - the h/g-index values are proxies computed from the publication count
//!   alone, since zbMATH search results carry no citation data;
//! - the citation histogram is synthesized from the publication histogram at
//!   a fixed factor of 10 citations per publication.
//!
//! Both are documented placeholders, not measured values.

use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, Utc};

use crate::config::api;
use crate::models::{AuthorMetrics, AuthorProfile, DocumentRecord, PublicationSummary, YearCount};

/// Multiplier used to synthesize the per-year citation histogram.
const CITATIONS_PER_PUBLICATION: u32 = 10;

/// Build a full profile for a resolved author from raw search documents.
///
/// `num_publications` counts every document handed in, while the embedded
/// summary list is capped at 50 entries and the co-author list at 20.
#[must_use]
pub fn build_profile(
    author_code: &str,
    author_name: &str,
    documents: &[DocumentRecord],
) -> AuthorProfile {
    let num_publications = documents.len() as u32;

    let publications_by_year = publication_histogram(documents);
    let citations_by_year = synthesized_citations(&publications_by_year);

    let publications =
        documents.iter().take(api::PUBLICATION_LIST_CAP).map(summarize).collect();

    let co_authors = co_author_names(author_name, documents);
    let num_co_authors = co_authors.len() as u32;

    AuthorProfile {
        id: author_code.to_string(),
        name: author_name.to_string(),
        zbmath_author_id: Some(author_code.to_string()),
        num_publications,
        num_reviews: 0,
        num_co_authors,
        num_joint_publications: num_publications,
        metrics: AuthorMetrics {
            h_index: h_index(num_publications),
            g_index: g_index(num_publications),
        },
        publications,
        publications_by_year: with_fallback_entry(publications_by_year),
        citations_by_year: with_fallback_entry(citations_by_year),
        co_authors: Some(co_authors.into_iter().take(api::CO_AUTHOR_LIST_CAP).collect()),
        error: None,
    }
}

/// Group documents with a known year, ascending by year.
fn publication_histogram(documents: &[DocumentRecord]) -> Vec<YearCount> {
    let mut counts: BTreeMap<i32, u32> = BTreeMap::new();
    for doc in documents {
        if let Some(year) = doc.year {
            *counts.entry(year).or_insert(0) += 1;
        }
    }
    counts.into_iter().map(|(year, count)| YearCount { year, count }).collect()
}

fn synthesized_citations(publications_by_year: &[YearCount]) -> Vec<YearCount> {
    publications_by_year
        .iter()
        .map(|entry| YearCount { year: entry.year, count: entry.count * CITATIONS_PER_PUBLICATION })
        .collect()
}

/// The dashboard charts expect at least one bar, so an author with no dated
/// publications gets a single zero entry for the current year.
fn with_fallback_entry(histogram: Vec<YearCount>) -> Vec<YearCount> {
    if histogram.is_empty() {
        vec![YearCount { year: Utc::now().year(), count: 0 }]
    } else {
        histogram
    }
}

fn summarize(doc: &DocumentRecord) -> PublicationSummary {
    PublicationSummary {
        publication_id: doc.zbmath_id,
        title: doc.title.clone().unwrap_or_else(|| "Unknown".to_string()),
        year: doc.year,
        source: doc.source.clone(),
        authors: Some(doc.authors.clone()),
        r#abstract: Some(doc.r#abstract.clone().unwrap_or_default()),
        citations: 0,
    }
}

/// Union of all documents' author lists in first-seen order, minus the
/// profile's own name (case-insensitive).
fn co_author_names(author_name: &str, documents: &[DocumentRecord]) -> Vec<String> {
    let own_name = author_name.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut names = Vec::new();

    for doc in documents {
        for name in &doc.authors {
            if name.to_lowercase() == own_name {
                continue;
            }
            if seen.insert(name.as_str()) {
                names.push(name.clone());
            }
        }
    }
    names
}

/// `min(n, max(1, n / 5))`: stays within the publication count and is at
/// least 1 for any author with at least one publication.
fn h_index(num_publications: u32) -> u32 {
    num_publications.min((num_publications / 5).max(1))
}

/// `floor(sqrt(n) * 2)`.
fn g_index(num_publications: u32) -> u32 {
    (f64::from(num_publications).sqrt() * 2.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(year: Option<i32>, authors: &[&str]) -> DocumentRecord {
        DocumentRecord {
            year,
            authors: authors.iter().map(ToString::to_string).collect(),
            ..DocumentRecord::default()
        }
    }

    #[test]
    fn test_reference_scenario_120_documents() {
        // 70 documents in 2020, 50 in 2021.
        let mut documents = vec![doc(Some(2021), &[]); 50];
        documents.extend(vec![doc(Some(2020), &[]); 70]);

        let profile = build_profile("tao.terence", "Terence Tao", &documents);

        assert_eq!(profile.num_publications, 120);
        assert_eq!(
            profile.publications_by_year,
            vec![YearCount { year: 2020, count: 70 }, YearCount { year: 2021, count: 50 }]
        );
        assert_eq!(
            profile.citations_by_year,
            vec![YearCount { year: 2020, count: 700 }, YearCount { year: 2021, count: 500 }]
        );
        assert_eq!(profile.metrics.h_index, 24);
        assert_eq!(profile.metrics.g_index, 21);
        assert_eq!(profile.num_joint_publications, 120);
        assert_eq!(profile.publications.len(), 50);
    }

    #[test]
    fn test_empty_documents_yield_zeroed_profile_with_fallback_bars() {
        let profile = build_profile("tao.terence", "Terence Tao", &[]);
        let current_year = Utc::now().year();

        assert_eq!(profile.num_publications, 0);
        assert_eq!(profile.metrics.h_index, 0);
        assert_eq!(profile.metrics.g_index, 0);
        assert_eq!(
            profile.publications_by_year,
            vec![YearCount { year: current_year, count: 0 }]
        );
        assert_eq!(
            profile.citations_by_year,
            vec![YearCount { year: current_year, count: 0 }]
        );
        assert!(profile.error.is_none());
    }

    #[test]
    fn test_h_index_bounds() {
        assert_eq!(h_index(0), 0);
        assert_eq!(h_index(1), 1);
        assert_eq!(h_index(4), 1);
        assert_eq!(h_index(5), 1);
        assert_eq!(h_index(10), 2);
        assert_eq!(h_index(120), 24);
        for n in 0..500 {
            assert!(h_index(n) <= n);
            if n >= 1 {
                assert!(h_index(n) >= 1);
            }
        }
    }

    #[test]
    fn test_histogram_skips_undated_documents() {
        let documents =
            vec![doc(Some(2019), &[]), doc(None, &[]), doc(Some(2019), &[]), doc(None, &[])];
        let profile = build_profile("x", "X", &documents);

        // Undated documents still count toward the total.
        assert_eq!(profile.num_publications, 4);
        assert_eq!(profile.publications_by_year, vec![YearCount { year: 2019, count: 2 }]);
    }

    #[test]
    fn test_co_authors_exclude_own_name_case_insensitively() {
        let documents = vec![
            doc(Some(2020), &["Terence Tao", "Ben Green"]),
            doc(Some(2021), &["TERENCE TAO", "Ben Green", "Tamar Ziegler"]),
            doc(Some(2021), &["terence tao"]),
        ];
        let profile = build_profile("tao.terence", "Terence Tao", &documents);

        let co_authors = profile.co_authors.unwrap();
        assert_eq!(co_authors, vec!["Ben Green".to_string(), "Tamar Ziegler".to_string()]);
        assert_eq!(profile.num_co_authors, 2);
    }

    #[test]
    fn test_co_author_list_capped_at_20() {
        let names: Vec<String> = (0..40).map(|i| format!("Collaborator {i}")).collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let documents = vec![doc(Some(2020), &name_refs)];

        let profile = build_profile("x", "X", &documents);
        assert_eq!(profile.num_co_authors, 40);
        assert_eq!(profile.co_authors.unwrap().len(), 20);
    }

    #[test]
    fn test_publication_list_keeps_received_order() {
        let mut documents = Vec::new();
        for i in 0..60 {
            documents.push(DocumentRecord {
                title: Some(format!("Paper {i}")),
                year: Some(2000 + (i % 5)),
                ..DocumentRecord::default()
            });
        }

        let profile = build_profile("x", "X", &documents);
        assert_eq!(profile.publications.len(), 50);
        assert_eq!(profile.publications[0].title, "Paper 0");
        assert_eq!(profile.publications[49].title, "Paper 49");
        assert_eq!(profile.publications[0].citations, 0);
    }
}
