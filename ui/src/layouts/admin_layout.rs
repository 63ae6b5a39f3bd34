use crate::components::pico::Container;
use crate::components::theme_chooser::ThemeChooser;
use crate::routes::{Route, ADMIN_CHILDREN};
use dioxus::prelude::*;

/// Side navigation over the admin pages, with the current page's title in the
/// header.
#[component]
pub fn AdminLayout() -> Element {
    let current = use_route::<Route>();
    let heading = current.nav_label();
    let entries = ADMIN_CHILDREN.map(|route| {
        let class = if route == current { "active-tab" } else { "" };
        (route, class)
    });

    rsx! {
        Container {
            header {
                nav {
                    ul {
                        li {
                            Link { to: Route::Dashboard {}, "← Dashboard" }
                        }
                        li { strong { "{heading}" } }
                    }
                    ul {
                        li { ThemeChooser {} }
                    }
                }
            }
            div {
                class: "admin-body",
                aside {
                    nav {
                        ul {
                            for (route, class) in entries {
                                li {
                                    key: "{route.name()}",
                                    Link {
                                        class: "{class}",
                                        to: route.clone(),
                                        "{route.nav_label()}"
                                    }
                                }
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
}
