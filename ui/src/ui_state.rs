//! The dashboard's shared UI state and its setters.

use crate::calendar;
use crate::storage::KeyValueStore;
use api::prefs::refresh_preference::RefreshPreference;
use api::theme::Theme;
use api::theme::THEME_STORAGE_KEY;
use api::trading_days::TradingDays;
use chrono::NaiveDate;
use dioxus_logger::tracing::{debug, warn};
use std::fmt;
use std::num::NonZeroU32;
use std::time::Duration;

/// Everything the pages share: selected date, refresh settings, trading days
/// and theme.
///
/// Setters replace their field wholesale. Only the theme is persisted.
pub struct UiState {
    selected_date: NaiveDate,
    auto_refresh: bool,
    refresh_interval: NonZeroU32,
    trading_days: TradingDays,
    theme: Theme,
    storage: Box<dyn KeyValueStore>,
}

impl UiState {
    /// Creates the state for a new session, restoring the persisted theme if
    /// it names a known theme.
    pub fn new(today: NaiveDate, refresh: &RefreshPreference, storage: Box<dyn KeyValueStore>) -> Self {
        let persisted = storage.get(THEME_STORAGE_KEY);
        let theme = match Theme::from_persisted(persisted.as_deref()) {
            Some(theme) => theme,
            None => {
                if let Some(value) = &persisted {
                    warn!("ignoring unsupported persisted theme {value:?}");
                }
                Theme::default()
            }
        };

        Self {
            selected_date: today,
            auto_refresh: refresh.auto_refresh,
            refresh_interval: refresh.interval_ms,
            trading_days: TradingDays::default(),
            theme,
            storage,
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    pub fn refresh_interval(&self) -> NonZeroU32 {
        self.refresh_interval
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_millis(self.refresh_interval.get().into())
    }

    pub fn trading_days(&self) -> &TradingDays {
        &self.trading_days
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    pub fn set_selected_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    pub fn set_auto_refresh(&mut self, enabled: bool) {
        self.auto_refresh = enabled;
    }

    pub fn set_refresh_interval(&mut self, interval_ms: NonZeroU32) {
        self.refresh_interval = interval_ms;
    }

    pub fn set_trading_days(&mut self, days: TradingDays) {
        self.trading_days = days;
    }

    /// Switches theme and persists it under `app-theme`.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.persist_theme(theme.code());
    }

    /// Persists `name` verbatim, switching the active theme only if `name`
    /// is a known theme. An unknown value will be dropped on next restore.
    pub fn set_theme_name(&mut self, name: &str) {
        match name.parse::<Theme>() {
            Ok(theme) => self.theme = theme,
            Err(_) => warn!("unsupported theme {name:?}; stored but not applied"),
        }
        self.persist_theme(name);
    }

    fn persist_theme(&mut self, value: &str) {
        if let Err(e) = self.storage.set(THEME_STORAGE_KEY, value) {
            warn!("could not persist theme: {e}");
        }
    }

    /// Whether the date picker should refuse `date`, as of the local date.
    pub fn disabled_date(&self, date: NaiveDate) -> bool {
        self.disabled_date_on(date, calendar::local_today())
    }

    pub fn disabled_date_on(&self, date: NaiveDate, today: NaiveDate) -> bool {
        calendar::is_date_disabled(date, today, &self.trading_days)
    }

    /// Moves the selection to the latest trading day on or before `today`
    /// when the current selection is not selectable. Returns whether it moved.
    pub fn snap_selected_date(&mut self, today: NaiveDate) -> bool {
        if !self.disabled_date_on(self.selected_date, today) {
            return false;
        }
        match self.trading_days.latest_on_or_before(today) {
            Some(date) => {
                debug!("selected date {} is not selectable, using {date}", self.selected_date);
                self.selected_date = date;
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for UiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiState")
            .field("selected_date", &self.selected_date)
            .field("auto_refresh", &self.auto_refresh)
            .field("refresh_interval", &self.refresh_interval)
            .field("trading_days", &self.trading_days.len())
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}
