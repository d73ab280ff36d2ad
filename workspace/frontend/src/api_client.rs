pub mod investor;

use gloo_net::http::Request;
use serde::Deserialize;

use crate::settings;
use common::ApiError;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Common GET request handler.
///
/// The investors API returns bare JSON bodies on success and a
/// `{"detail": ...}` object on failure.
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
        let error_body: Result<ApiError, _> = response.json().await;
        return Err(match error_body {
            Ok(err) => {
                log::error!("GET {} - API error: {}", endpoint, err.detail);
                format!("Error: {}", err.detail)
            }
            Err(_) => {
                let error_msg = format!("HTTP error: {}", response.status());
                log::error!("GET {} - {}", endpoint, error_msg);
                error_msg
            }
        });
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data: T = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}
