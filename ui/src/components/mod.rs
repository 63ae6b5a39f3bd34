//! Shared building blocks for the pages: Pico.css wrappers, the trading-day
//! date picker and the preference controls.
pub mod date_picker;
pub mod empty_state;
pub mod pico;
pub mod refresh_controls;
pub mod theme_chooser;
