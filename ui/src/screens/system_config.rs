use crate::components::pico::Card;
use crate::components::refresh_controls::RefreshControls;
use crate::components::theme_chooser::ThemeChooser;
use api::prefs::user_prefs::UserPrefs;
use dioxus::prelude::*;

#[component]
pub fn SystemConfig() -> Element {
    let prefs = use_context::<UserPrefs>();

    rsx! {
        Card {
            h3 { "Display" }
            label {
                "Theme"
                ThemeChooser {}
            }
        }
        Card {
            h3 { "Refresh" }
            RefreshControls {}
        }
        Card {
            h3 { "Backend" }
            p {
                "API base URL: "
                code { "{prefs.api_base_url()}" }
            }
        }
    }
}
