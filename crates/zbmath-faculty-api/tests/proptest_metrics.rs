//! Property tests for the aggregation invariants.

use proptest::prelude::*;

use zbmath_faculty_api::metrics::build_profile;
use zbmath_faculty_api::models::DocumentRecord;

fn arb_documents() -> impl Strategy<Value = Vec<DocumentRecord>> {
    prop::collection::vec(
        (prop::option::of(1900..2030i32), prop::collection::vec("[A-Za-z][a-z ]{0,11}", 0..4)),
        0..40,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(year, authors)| DocumentRecord { year, authors, ..DocumentRecord::default() })
            .collect()
    })
}

proptest! {
    #[test]
    fn histograms_sorted_deduped_and_never_empty(documents in arb_documents()) {
        let profile = build_profile("some.code", "Own Name", &documents);

        let years: Vec<i32> = profile.publications_by_year.iter().map(|e| e.year).collect();
        prop_assert!(!years.is_empty());
        prop_assert!(years.windows(2).all(|pair| pair[0] < pair[1]));

        // The citation histogram covers exactly the same year domain.
        let citation_years: Vec<i32> =
            profile.citations_by_year.iter().map(|e| e.year).collect();
        prop_assert_eq!(years, citation_years);
    }

    #[test]
    fn h_index_stays_within_bounds(documents in arb_documents()) {
        let profile = build_profile("some.code", "Own Name", &documents);
        let n = profile.num_publications;

        prop_assert!(profile.metrics.h_index <= n);
        if n >= 1 {
            prop_assert!(profile.metrics.h_index >= 1);
        }
    }

    #[test]
    fn co_authors_never_contain_own_name(
        documents in arb_documents(),
        own_name in "[A-Za-z][a-z ]{0,11}",
    ) {
        let profile = build_profile("some.code", &own_name, &documents);

        for name in profile.co_authors.unwrap() {
            prop_assert_ne!(name.to_lowercase(), own_name.to_lowercase());
        }
    }

    #[test]
    fn publication_list_capped_and_counts_consistent(documents in arb_documents()) {
        let profile = build_profile("some.code", "Own Name", &documents);

        prop_assert!(profile.publications.len() <= 50);
        prop_assert_eq!(profile.num_publications as usize, documents.len());
        prop_assert_eq!(profile.num_joint_publications, profile.num_publications);

        let dated: u32 = if documents.iter().any(|d| d.year.is_some()) {
            profile.publications_by_year.iter().map(|e| e.count).sum()
        } else {
            0
        };
        prop_assert_eq!(dated, documents.iter().filter(|d| d.year.is_some()).count() as u32);
    }
}
