//! Transport-layer types and view-model logic shared across the frontend.
//! The structs mirror the investors API's JSON payloads so the frontend can
//! deserialize responses without duplicating shapes; the derivation and
//! formatting functions are what the pages recompute on every render.

mod commitments;
mod money;

pub use commitments::{asset_class_options, filter_by_asset_class, total_amount, totals_series};
pub use money::{format_gbp_auto, format_gbp_millions};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Error body the API returns with non-2xx statuses, e.g. a 404 for an
/// unknown investor id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub detail: String,
}

// ===================== Commitments =====================

/// A pledged capital amount by an investor to an asset class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Commitment {
    pub id: i32,
    pub asset_class: String,
    /// Denomination as reported by the API. Amounts are displayed as GBP
    /// regardless of this field.
    pub currency: String,
    pub amount: f64,
}

// ===================== Investors =====================

/// One element of `GET /investors_with_totals`: an investor with its
/// commitment total precomputed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvestorSummary {
    pub id: i32,
    pub name: String,
    pub investor_type: String,
    pub country: String,
    pub date_added: NaiveDate,
    pub total_commitments_gbp: f64,
}

/// Response of `GET /investors/{id}`: one investor with its full commitment
/// list. The summary and detail shapes are distinct server-provided
/// representations; neither carries the other's aggregate fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvestorDetail {
    pub id: i32,
    pub name: String,
    pub investor_type: String,
    pub country: String,
    pub date_added: NaiveDate,
    pub last_updated: NaiveDate,
    pub commitments: Vec<Commitment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_payload_decodes_and_formats() {
        let payload = r#"[{
            "id": 1,
            "name": "Acme",
            "investor_type": "fund manager",
            "country": "United Kingdom",
            "date_added": "2024-01-15",
            "total_commitments_gbp": 1.2e9
        }]"#;

        let investors: Vec<InvestorSummary> = serde_json::from_str(payload).unwrap();
        assert_eq!(investors.len(), 1);

        let acme = &investors[0];
        assert_eq!(acme.name, "Acme");
        assert_eq!(acme.date_added, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(format_gbp_auto(acme.total_commitments_gbp), "£1.2B");

        let (names, totals) = totals_series(&investors);
        assert_eq!(names, vec!["Acme"]);
        assert_eq!(totals, vec![1.2e9]);
    }

    #[test]
    fn test_detail_payload_supports_asset_class_selection() {
        let payload = r#"{
            "id": 7,
            "name": "Northbrook Pension",
            "investor_type": "pension fund",
            "country": "United Kingdom",
            "date_added": "2023-06-01",
            "last_updated": "2024-02-20",
            "commitments": [
                {"id": 1, "asset_class": "Equity", "currency": "GBP", "amount": 5000000.0},
                {"id": 2, "asset_class": "Debt", "currency": "USD", "amount": 3000000.0}
            ]
        }"#;

        let investor: InvestorDetail = serde_json::from_str(payload).unwrap();
        assert_eq!(investor.last_updated, NaiveDate::from_ymd_opt(2024, 2, 20).unwrap());
        assert_eq!(
            asset_class_options(&investor.commitments),
            vec!["Equity", "Debt"]
        );

        let filtered = filter_by_asset_class(&investor.commitments, Some("Equity"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
        assert_eq!(format_gbp_millions(total_amount(&filtered)), "£5.0M");
    }

    #[test]
    fn test_api_error_decodes_detail_field() {
        let body = r#"{"detail": "Investor not found"}"#;
        let err: ApiError = serde_json::from_str(body).unwrap();
        assert_eq!(err.detail, "Investor not found");
    }
}
