// This file makes the page modules available to the route table.

mod admin_dashboard;
mod dashboard;
mod data_update;
mod not_found;
mod system_config;

pub use admin_dashboard::AdminDashboard;
pub use dashboard::Dashboard;
pub use data_update::DataUpdate;
pub use not_found::NotFound;
pub use system_config::SystemConfig;
