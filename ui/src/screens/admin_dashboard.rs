use crate::components::pico::{Card, Grid};
use crate::ui_store::use_ui_store;
use dioxus::prelude::*;

/// Admin landing page: a read-out of the shared UI state.
#[component]
pub fn AdminDashboard() -> Element {
    let store = use_ui_store();
    let selected = store.selected_date();
    let trading_days = store.trading_day_count();
    let theme = store.theme();
    let refresh = if store.auto_refresh() {
        format!("every {} ms", store.refresh_interval())
    } else {
        "off".to_string()
    };

    rsx! {
        Grid {
            Card {
                h4 { "Selected date" }
                p { "{selected}" }
            }
            Card {
                h4 { "Trading days loaded" }
                if trading_days == 0 {
                    p { "none (weekends disabled)" }
                } else {
                    p { "{trading_days}" }
                }
            }
            Card {
                h4 { "Auto refresh" }
                p { "{refresh}" }
            }
            Card {
                h4 { "Theme" }
                p { "{theme.label()}" }
            }
        }
    }
}
