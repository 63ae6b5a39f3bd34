use crate::components::pico::Container;
use crate::components::theme_chooser::ThemeChooser;
use crate::routes::Route;
use dioxus::prelude::*;

/// Header with the app title, theme chooser and a link into the admin area.
#[component]
pub fn FrontLayout() -> Element {
    rsx! {
        Container {
            header {
                nav {
                    ul {
                        li {
                            Link {
                                to: Route::Dashboard {},
                                strong { "Market Dashboard" }
                            }
                        }
                    }
                    ul {
                        li { ThemeChooser {} }
                        li {
                            Link { to: Route::AdminDashboard {}, "Admin" }
                        }
                    }
                }
            }
            div {
                class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
