use crate::ui_store::use_ui_store;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};

/// Loads the trading-day calendar from the backend once per session.
///
/// On failure the set stays empty and the date picker falls back to
/// disabling weekends.
pub fn use_trading_days(api_base_url: String) {
    let mut store = use_ui_store();

    use_future(move || {
        let api_base_url = api_base_url.clone();
        async move {
            match api::trading_days(&api_base_url).await {
                Ok(days) => {
                    info!("loaded {} trading days", days.len());
                    store.set_trading_days(days);
                }
                Err(e) => warn!("failed to load trading days: {e:#}"),
            }
        }
    });
}
