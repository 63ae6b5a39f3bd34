mod admin_layout;
mod front_layout;

pub use admin_layout::AdminLayout;
pub use front_layout::FrontLayout;
