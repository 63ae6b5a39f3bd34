use super::env_var;
use super::parse_flag;
use serde::Deserialize;
use serde::Serialize;
use std::num::NonZeroU32;
use std::time::Duration;

/// Default refresh period in milliseconds.
pub const DEFAULT_REFRESH_INTERVAL_MS: NonZeroU32 = match NonZeroU32::new(5000) {
    Some(v) => v,
    None => unreachable!(),
};

/// How often, if at all, dashboard data refreshes itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RefreshPreference {
    pub auto_refresh: bool,
    pub interval_ms: NonZeroU32,
}

impl RefreshPreference {
    /// Creates a RefreshPreference from environment variables, falling back to
    /// auto refresh every five seconds.
    ///
    /// # Environment Variables
    /// - `AUTO_REFRESH`: "true"/"1" enables, anything else disables.
    /// - `REFRESH_INTERVAL_MS`: a positive integer. Zero or garbage is ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(env_var)
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let auto_refresh = lookup("AUTO_REFRESH")
            .map(|val| parse_flag(&val))
            .unwrap_or(true);

        let interval_ms = lookup("REFRESH_INTERVAL_MS")
            .and_then(|val| val.trim().parse::<NonZeroU32>().ok())
            .unwrap_or(DEFAULT_REFRESH_INTERVAL_MS);

        Self {
            auto_refresh,
            interval_ms,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.get().into())
    }
}

impl Default for RefreshPreference {
    fn default() -> Self {
        Self {
            auto_refresh: true,
            interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
        }
    }
}
