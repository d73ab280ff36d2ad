use common::{InvestorDetail, InvestorSummary};

use crate::api_client;

/// Get all investors with their precomputed commitment totals
pub async fn get_investors_with_totals() -> Result<Vec<InvestorSummary>, String> {
    log::trace!("Fetching investors with totals");
    let result = api_client::get::<Vec<InvestorSummary>>("/investors_with_totals").await;
    match &result {
        Ok(investors) => log::info!("Fetched {} investors", investors.len()),
        Err(e) => log::error!("Failed to fetch investors: {}", e),
    }
    result
}

/// Get a specific investor by ID, including its nested commitments
pub async fn get_investor(investor_id: i32) -> Result<InvestorDetail, String> {
    log::trace!("Fetching investor with ID: {}", investor_id);
    let result = api_client::get::<InvestorDetail>(&format!("/investors/{}", investor_id)).await;
    match &result {
        Ok(investor) => log::info!(
            "Fetched investor: {} ({} commitments)",
            investor.name,
            investor.commitments.len()
        ),
        Err(e) => log::error!("Failed to fetch investor {}: {}", investor_id, e),
    }
    result
}
