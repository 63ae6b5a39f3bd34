//! This crate contains the renderer-independent types shared by the dashboard
//! front-end, plus the client for the market backend.

pub mod market;
pub mod prefs;
pub mod theme;
pub mod trading_days;

pub type ApiError = anyhow::Error;

pub use market::trading_days;
