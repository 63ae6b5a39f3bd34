pub mod use_auto_refresh;
pub mod use_trading_days;

pub use use_auto_refresh::use_auto_refresh;
pub use use_trading_days::use_trading_days;
