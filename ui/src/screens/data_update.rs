use crate::components::date_picker::DatePicker;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Card;
use crate::ui_store::use_ui_store;
use dioxus::prelude::*;

/// The admin data-update page mounted at `/admin/import`.
#[component]
pub fn DataUpdate() -> Element {
    let store = use_ui_store();
    let selected = store.selected_date();

    rsx! {
        Card {
            h3 { "Data update" }
            p { "Pick the trading day to update." }
            DatePicker { style: "max-width: 24rem;" }
        }
        EmptyState {
            title: "Nothing imported for {selected}",
            description: "Upload and sync jobs for the selected day are listed here.",
        }
    }
}
