//! The route table: a public dashboard and an admin area, each with its own
//! layout.

use crate::layouts::{AdminLayout, FrontLayout};
use crate::screens::{AdminDashboard, DataUpdate, Dashboard, NotFound, SystemConfig};
use dioxus::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(FrontLayout)]
        #[route("/")]
        Dashboard {},
    #[end_layout]

    #[nest("/admin")]
        #[layout(AdminLayout)]
            #[route("/dashboard")]
            AdminDashboard {},
            #[route("/import", DataUpdate)]
            AdminImport {},
            #[route("/system-config")]
            SystemConfig {},
        #[end_layout]
    #[end_nest]
    #[redirect("/admin", || Route::AdminDashboard {})]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Children of the admin layout, in navigation order.
pub const ADMIN_CHILDREN: [Route; 3] = [
    Route::AdminDashboard {},
    Route::AdminImport {},
    Route::SystemConfig {},
];

impl Route {
    /// The route's stable name.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Dashboard {} => "Dashboard",
            Route::AdminDashboard {} => "AdminDashboard",
            Route::AdminImport {} => "AdminImport",
            Route::SystemConfig {} => "SystemConfig",
            Route::NotFound { .. } => "NotFound",
        }
    }

    /// Display title, where the page has one.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Route::AdminDashboard {} => Some("控制台"),
            Route::AdminImport {} => Some("数据导入"),
            _ => None,
        }
    }

    /// Label for navigation menus; falls back to the route name.
    pub fn nav_label(&self) -> &'static str {
        self.title().unwrap_or(match self {
            Route::SystemConfig {} => "系统配置",
            _ => self.name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn paths_render_as_expected() {
        assert_eq!(Route::Dashboard {}.to_string(), "/");
        assert_eq!(Route::AdminDashboard {}.to_string(), "/admin/dashboard");
        assert_eq!(Route::AdminImport {}.to_string(), "/admin/import");
        assert_eq!(Route::SystemConfig {}.to_string(), "/admin/system-config");
    }

    #[test]
    fn paths_parse_to_routes() {
        for route in ADMIN_CHILDREN.iter().chain([&Route::Dashboard {}]) {
            let parsed: Route = route.to_string().parse().unwrap();
            assert_eq!(&parsed, route);
        }
    }

    #[test]
    fn unknown_paths_fall_through() {
        let parsed: Route = "/nope/here".parse().unwrap();
        assert!(matches!(parsed, Route::NotFound { .. }));
        assert_eq!(parsed.name(), "NotFound");
    }

    #[test]
    fn admin_children_have_unique_paths_and_names() {
        let paths: HashSet<String> = ADMIN_CHILDREN.iter().map(|r| r.to_string()).collect();
        let names: HashSet<&str> = ADMIN_CHILDREN.iter().map(|r| r.name()).collect();
        assert_eq!(paths.len(), ADMIN_CHILDREN.len());
        assert_eq!(names.len(), ADMIN_CHILDREN.len());
    }

    #[test]
    fn titles() {
        assert_eq!(Route::AdminDashboard {}.title(), Some("控制台"));
        assert_eq!(Route::AdminImport {}.title(), Some("数据导入"));
        assert_eq!(Route::SystemConfig {}.title(), None);
        assert_eq!(Route::Dashboard {}.title(), None);
    }
}
