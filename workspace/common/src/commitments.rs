//! Commitment view-model derivations.
//!
//! The pages hold the latest fetched snapshot and recompute these values
//! synchronously on every render; nothing here caches or mutates.

use tracing::debug;

use crate::{Commitment, InvestorSummary};

/// Returns the commitments matching `asset_class`, preserving input order.
/// `None` selects the whole collection.
pub fn filter_by_asset_class(
    commitments: &[Commitment],
    asset_class: Option<&str>,
) -> Vec<Commitment> {
    let filtered: Vec<Commitment> = match asset_class {
        None => commitments.to_vec(),
        Some(class) => commitments
            .iter()
            .filter(|c| c.asset_class == class)
            .cloned()
            .collect(),
    };

    debug!(
        "Filtered {} of {} commitments for asset class {:?}",
        filtered.len(),
        commitments.len(),
        asset_class
    );

    filtered
}

/// Arithmetic sum of `amount` over the given commitments. Empty input
/// yields 0.
pub fn total_amount(commitments: &[Commitment]) -> f64 {
    commitments.iter().map(|c| c.amount).sum()
}

/// Distinct asset classes in first-seen order, each exactly once. The
/// filter dropdown prepends its own "All" entry.
pub fn asset_class_options(commitments: &[Commitment]) -> Vec<String> {
    let mut options = Vec::new();
    for commitment in commitments {
        if !options.contains(&commitment.asset_class) {
            options.push(commitment.asset_class.clone());
        }
    }
    options
}

/// Splits the summary collection into parallel (name, total) vectors for
/// the bar chart, keeping the response order.
pub fn totals_series(investors: &[InvestorSummary]) -> (Vec<String>, Vec<f64>) {
    let names = investors.iter().map(|i| i.name.clone()).collect();
    let totals = investors.iter().map(|i| i.total_commitments_gbp).collect();
    (names, totals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commitment(id: i32, asset_class: &str, amount: f64) -> Commitment {
        Commitment {
            id,
            asset_class: asset_class.to_string(),
            currency: "GBP".to_string(),
            amount,
        }
    }

    #[test]
    fn test_filter_returns_exactly_the_matching_subset() {
        let commitments = vec![
            commitment(1, "Equity", 5e6),
            commitment(2, "Debt", 3e6),
            commitment(3, "Equity", 2e6),
        ];

        let filtered = filter_by_asset_class(&commitments, Some("Equity"));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|c| c.asset_class == "Equity"));
        assert_eq!(filtered[0].id, 1);
        assert_eq!(filtered[1].id, 3);
    }

    #[test]
    fn test_filter_all_is_identity() {
        let commitments = vec![commitment(1, "Equity", 5e6), commitment(2, "Debt", 3e6)];
        let filtered = filter_by_asset_class(&commitments, None);
        assert_eq!(filtered, commitments);
    }

    #[test]
    fn test_filter_unknown_class_yields_empty_subset_and_zero_total() {
        let commitments = vec![commitment(1, "Equity", 5e6)];
        let filtered = filter_by_asset_class(&commitments, Some("Infrastructure"));
        assert!(filtered.is_empty());
        assert_eq!(total_amount(&filtered), 0.0);
    }

    #[test]
    fn test_total_is_the_sum_over_the_filtered_subset() {
        let commitments = vec![
            commitment(1, "Equity", 5e6),
            commitment(2, "Debt", 3e6),
            commitment(3, "Equity", 2e6),
        ];

        assert_eq!(total_amount(&commitments), 10e6);

        let equity = filter_by_asset_class(&commitments, Some("Equity"));
        assert_eq!(total_amount(&equity), 7e6);
    }

    #[test]
    fn test_options_are_distinct_in_first_seen_order() {
        let commitments = vec![
            commitment(1, "Equity", 1e6),
            commitment(2, "Debt", 1e6),
            commitment(3, "Equity", 1e6),
            commitment(4, "Real Estate", 1e6),
        ];

        assert_eq!(
            asset_class_options(&commitments),
            vec!["Equity", "Debt", "Real Estate"]
        );
    }

    #[test]
    fn test_options_of_empty_collection_are_empty() {
        assert!(asset_class_options(&[]).is_empty());
    }

    #[test]
    fn test_totals_series_preserves_response_order() {
        let investors = vec![
            InvestorSummary {
                id: 2,
                name: "Beta Capital".to_string(),
                investor_type: "bank".to_string(),
                country: "Germany".to_string(),
                date_added: chrono::NaiveDate::from_ymd_opt(2023, 3, 9).unwrap(),
                total_commitments_gbp: 4.5e8,
            },
            InvestorSummary {
                id: 1,
                name: "Acme".to_string(),
                investor_type: "fund manager".to_string(),
                country: "United Kingdom".to_string(),
                date_added: chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                total_commitments_gbp: 1.2e9,
            },
        ];

        let (names, totals) = totals_series(&investors);
        assert_eq!(names, vec!["Beta Capital", "Acme"]);
        assert_eq!(totals, vec![4.5e8, 1.2e9]);
    }
}
