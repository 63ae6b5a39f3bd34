pub mod refresh_preference;
pub mod user_prefs;

/// Reads a configuration variable.
///
/// Native targets read the process environment at runtime. The browser has no
/// environment, so wasm builds bake the values in at compile time.
pub(crate) fn env_var(key: &str) -> Option<String> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var(key).ok()
    }

    #[cfg(target_arch = "wasm32")]
    {
        let value = match key {
            "API_BASE_URL" => option_env!("API_BASE_URL"),
            "AUTO_REFRESH" => option_env!("AUTO_REFRESH"),
            "REFRESH_INTERVAL_MS" => option_env!("REFRESH_INTERVAL_MS"),
            _ => None,
        };
        value.map(str::to_owned)
    }
}

/// Interprets "true"/"1" (case-insensitive) as true, anything else as false.
pub(crate) fn parse_flag(val: &str) -> bool {
    val.eq_ignore_ascii_case("true") || val == "1"
}
