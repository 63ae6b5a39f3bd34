use super::env_var;
use super::refresh_preference::RefreshPreference;
use serde::Deserialize;
use serde::Serialize;

/// Backend address used when `API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Represents all startup prefs of the dashboard.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    refresh: RefreshPreference,
    api_base_url: String,
}

impl UserPrefs {
    /// Builds the prefs from environment variables with in-code defaults.
    /// See [`RefreshPreference::from_env`] for the refresh variables.
    pub fn from_env() -> Self {
        Self::from_lookup(env_var)
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base_url = lookup("API_BASE_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self {
            refresh: RefreshPreference::from_lookup(&lookup),
            api_base_url,
        }
    }

    pub fn refresh(&self) -> &RefreshPreference {
        &self.refresh
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}
