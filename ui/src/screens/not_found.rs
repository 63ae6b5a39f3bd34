use crate::components::empty_state::EmptyState;
use crate::components::pico::Container;
use crate::routes::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        Container {
            EmptyState {
                title: "Page not found",
                description: "Nothing lives at {path}.",
                primary_action: rsx! {
                    Link { to: Route::Dashboard {}, "Back to the dashboard" }
                },
            }
        }
    }
}
