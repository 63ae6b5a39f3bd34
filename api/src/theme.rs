//! Defines the visual themes supported by the application.

use serde::Deserialize;
use serde::Serialize;

/// Local storage key under which the selected theme is persisted.
pub const THEME_STORAGE_KEY: &str = "app-theme";

/// A visual display mode.
///
/// The string form (`light`, `dark`, `eye-care`) is what gets persisted and
/// what ends up in the root element's `data-theme` attribute. Parsing is
/// case-sensitive: anything else is not a theme.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::Display,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    EyeCare,
}

impl Theme {
    /// Returns the persisted string form, e.g. `"eye-care"`.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the label shown in the theme chooser.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::EyeCare => "Eye care",
        }
    }

    /// Parses a persisted value, ignoring anything that is not a known theme.
    pub fn from_persisted(value: Option<&str>) -> Option<Self> {
        value.and_then(|v| v.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn codes_match_persisted_values() {
        let codes: Vec<_> = Theme::iter().map(|t| t.code()).collect();
        assert_eq!(codes, ["light", "dark", "eye-care"]);
        assert_eq!(Theme::EyeCare.to_string(), "eye-care");
    }

    #[test]
    fn parses_only_exact_values() {
        assert_eq!("eye-care".parse::<Theme>().ok(), Some(Theme::EyeCare));
        assert!("Dark".parse::<Theme>().is_err());
        assert!("eye_care".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn from_persisted_ignores_garbage() {
        assert_eq!(Theme::from_persisted(Some("dark")), Some(Theme::Dark));
        assert_eq!(Theme::from_persisted(Some("solarized")), None);
        assert_eq!(Theme::from_persisted(None), None);
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Theme::EyeCare).unwrap();
        assert_eq!(json, "\"eye-care\"");
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Theme::EyeCare);
    }
}
