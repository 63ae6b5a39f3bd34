// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod calendar;
pub mod compat;
mod components;
pub mod hooks;
mod layouts;
pub mod routes;
mod screens;
pub mod storage;
pub mod ui_state;
pub mod ui_store;

use api::prefs::user_prefs::UserPrefs;
use hooks::{use_auto_refresh, use_trading_days};
use routes::Route;
use ui_state::UiState;
use ui_store::UiStore;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    /* --- EYE-CARE PALETTE (light and dark come from Pico) --- */
    [data-theme="eye-care"] {
        color-scheme: light;
        --pico-background-color: #f4ecd8;
        --pico-color: #3e3a2f;
        --pico-muted-color: #7a7260;
        --pico-card-background-color: #faf4e4;
        --pico-card-border-color: #e2d6b8;
        --pico-muted-border-color: #e2d6b8;
        --pico-primary: #5f7d3a;
        --pico-primary-background: #5f7d3a;
        --pico-primary-hover: #4e6a2e;
        --pico-form-element-background-color: #fbf6ea;
    }

    .app-root {
        min-height: 100vh;
        background-color: var(--pico-background-color);
        color: var(--pico-color);
    }

    /* --- ADMIN LAYOUT --- */
    .admin-body { display: flex; gap: 2rem; }
    .admin-body aside { flex: 0 0 12rem; }
    .admin-body .content { flex: 1; min-width: 0; }
    .admin-body aside a.active-tab {
        color: var(--pico-primary);
        font-weight: bold;
        border-left: 4px solid var(--pico-primary);
        padding-left: calc(0.5rem - 4px);
    }

    /* --- DATE PICKER --- */
    .date-picker-grid th, .date-picker-grid td { text-align: center; padding: 0.25rem; }
    .date-picker-grid a.day {
        display: inline-block;
        width: 2.25rem;
        line-height: 2.25rem;
        border-radius: 50%;
        text-decoration: none;
    }
    .date-picker-grid a.day.selected {
        background-color: var(--pico-primary-background);
        color: var(--pico-primary-inverse, #fff);
    }
    .date-picker-grid a.day.disabled {
        color: var(--pico-muted-color);
        opacity: 0.4;
        cursor: not-allowed;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "{PICO_CSS}",
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

/// Builds the session state once, provides it, and starts the background
/// hooks before handing over to the router.
#[component]
fn AppBody() -> Element {
    let user_prefs = use_hook(UserPrefs::from_env);
    use_context_provider(|| user_prefs.clone());

    let state = use_signal(|| {
        UiState::new(
            calendar::local_today(),
            user_prefs.refresh(),
            storage::platform_storage(),
        )
    });
    let refresh_tick = use_signal(|| 0u64);
    let store = use_context_provider(|| UiStore::new(state, refresh_tick));

    use_hook(|| dioxus_logger::tracing::info!("starting with {:?}", &*state.peek()));

    use_trading_days(user_prefs.api_base_url().to_string());
    use_auto_refresh();

    rsx! {
        div {
            class: "app-root",
            "data-theme": "{store.theme()}",
            Router::<Route> {}
        }
    }
}
