//=============================================================================
// File: src/screens/dashboard.rs
//=============================================================================
use crate::components::date_picker::DatePicker;
use crate::components::empty_state::EmptyState;
use crate::components::pico::{Card, Grid};
use crate::components::refresh_controls::RefreshControls;
use crate::ui_store::use_ui_store;
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    let store = use_ui_store();
    let selected = store.selected_date();
    let tick = store.refresh_tick();

    rsx! {
        Grid {
            Card {
                h3 { "Trading date" }
                DatePicker {}
                p {
                    style: "margin-top: 1rem;",
                    "Selected: "
                    strong { "{selected}" }
                }
            }
            Card {
                h3 { "Refresh" }
                RefreshControls {}
                small { "Refreshed {tick} times this session." }
            }
        }
        EmptyState {
            title: "Market overview for {selected}",
            description: "Auction rankings and sentiment panels render here.",
        }
    }
}
