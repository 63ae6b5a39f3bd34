//! Client for the market backend's REST endpoints.

use crate::trading_days::TradingDays;
use crate::ApiError;
use dioxus_logger::tracing::debug;

const TRADING_DAYS_PATH: &str = "/api/market/trading_days";

fn trading_days_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), TRADING_DAYS_PATH)
}

/// Retrieves the list of trading days from the backend.
///
/// The endpoint answers with a JSON array of `YYYY-MM-DD` strings.
pub async fn trading_days(base_url: &str) -> Result<TradingDays, ApiError> {
    let url = trading_days_url(base_url);
    debug!("fetching trading days from {url}");

    let client = reqwest::Client::new();
    let days = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<String>>()
        .await?;

    debug!("received {} trading days", days.len());
    Ok(TradingDays::new(days))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        assert_eq!(
            trading_days_url("http://127.0.0.1:5000/"),
            "http://127.0.0.1:5000/api/market/trading_days"
        );
        assert_eq!(trading_days_url(""), "/api/market/trading_days");
    }
}
