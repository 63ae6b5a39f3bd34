// ui/src/components/theme_chooser.rs
#![allow(non_snake_case)]

use crate::ui_store::use_ui_store;
use api::theme::Theme;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use strum::IntoEnumIterator;

/// A drop-down bound to the store's theme. Changing it persists the choice.
#[component]
pub fn ThemeChooser() -> Element {
    let mut store = use_ui_store();
    let current = store.theme();

    rsx! {
        select {
            "aria-label": "Theme",
            style: "margin-bottom: 0; width: auto;",
            onchange: move |evt| match evt.value().parse::<Theme>() {
                Ok(theme) => store.set_theme(theme),
                Err(_) => warn!("unknown theme option {:?}", evt.value()),
            },
            for theme in Theme::iter() {
                option {
                    key: "{theme.code()}",
                    value: "{theme.code()}",
                    selected: theme == current,
                    "{theme.label()}"
                }
            }
        }
    }
}
