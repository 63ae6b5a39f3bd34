//! The reactive handle through which components reach the shared UI state.

use crate::calendar;
use crate::ui_state::UiState;
use api::theme::Theme;
use api::trading_days::TradingDays;
use chrono::NaiveDate;
use dioxus::prelude::*;
use std::num::NonZeroU32;
use std::time::Duration;

/// A reactive state provided as a Dioxus context.
///
/// Getters subscribe the calling component; setters write through the
/// signal so every reader re-renders. It is `Copy`, so each component takes
/// its own handle with [`use_ui_store`].
#[derive(Clone, Copy, PartialEq)]
pub struct UiStore {
    state: Signal<UiState>,
    /// Incremented on every auto-refresh tick. Pages that refresh read it.
    refresh_tick: Signal<u64>,
}

impl UiStore {
    pub fn new(state: Signal<UiState>, refresh_tick: Signal<u64>) -> Self {
        Self {
            state,
            refresh_tick,
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.state.read().selected_date()
    }

    pub fn auto_refresh(&self) -> bool {
        self.state.read().auto_refresh()
    }

    pub fn refresh_interval(&self) -> NonZeroU32 {
        self.state.read().refresh_interval()
    }

    pub fn trading_day_count(&self) -> usize {
        self.state.read().trading_days().len()
    }

    pub fn theme(&self) -> Theme {
        self.state.read().theme()
    }

    pub fn disabled_date(&self, date: NaiveDate) -> bool {
        self.state.read().disabled_date(date)
    }

    pub fn refresh_tick(&self) -> u64 {
        *self.refresh_tick.read()
    }

    /// Reads the refresh settings without subscribing, for use inside tasks.
    pub fn peek_refresh(&self) -> (bool, Duration) {
        let state = self.state.peek();
        (state.auto_refresh(), state.refresh_period())
    }

    pub fn set_selected_date(&mut self, date: NaiveDate) {
        self.state.write().set_selected_date(date);
    }

    pub fn set_auto_refresh(&mut self, enabled: bool) {
        self.state.write().set_auto_refresh(enabled);
    }

    pub fn set_refresh_interval(&mut self, interval_ms: NonZeroU32) {
        self.state.write().set_refresh_interval(interval_ms);
    }

    /// Replaces the trading days, then moves the selection onto a trading
    /// day if it no longer is one.
    pub fn set_trading_days(&mut self, days: TradingDays) {
        let mut state = self.state.write();
        state.set_trading_days(days);
        state.snap_selected_date(calendar::local_today());
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.state.write().set_theme(theme);
    }

    pub fn bump_refresh_tick(&mut self) {
        *self.refresh_tick.write() += 1;
    }
}

pub fn use_ui_store() -> UiStore {
    use_context::<UiStore>()
}


#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::test_support::use_test_store;
    use super::*;
    use crate::storage::KeyValueStore;
    use dioxus::dioxus_core::VirtualDom;
    use api::theme::THEME_STORAGE_KEY;
    use api::trading_days::date_key;
    use chrono::Days;
    use std::cell::RefCell;

    #[derive(Debug, Default, Clone)]
    struct Seen {
        selected: Option<NaiveDate>,
        trading_days: usize,
        theme: Option<Theme>,
        persisted_theme: Option<String>,
    }

    thread_local! {
        static SEEN: RefCell<Seen> = RefCell::new(Seen::default());
    }

    fn days_ago(n: u64) -> NaiveDate {
        calendar::local_today() - Days::new(n)
    }

    fn TradingDaysHarness() -> Element {
        let mut store = use_test_store(false);
        use_hook(|| {
            store.set_trading_days(TradingDays::new([date_key(days_ago(3))]));
            store.set_trading_days(TradingDays::new([date_key(days_ago(5))]));
        });
        SEEN.with_borrow_mut(|seen| {
            seen.selected = Some(store.selected_date());
            seen.trading_days = store.trading_day_count();
        });
        rsx! {}
    }

    fn ThemeHarness() -> Element {
        let mut store = use_test_store(false);
        use_hook(|| store.set_theme(Theme::EyeCare));
        SEEN.with_borrow_mut(|seen| {
            seen.theme = Some(store.theme());
            seen.persisted_theme = store.state.peek().storage().get(THEME_STORAGE_KEY);
        });
        rsx! {}
    }

    #[test]
    fn set_trading_days_replaces_set_and_moves_selection() {
        let mut dom = VirtualDom::new(TradingDaysHarness);
        dom.rebuild_in_place();

        let seen = SEEN.with_borrow(Seen::clone);
        // today is in neither set, so the selection lands on the only entry
        assert_eq!(seen.selected, Some(days_ago(5)));
        assert_eq!(seen.trading_days, 1);
    }

    #[test]
    fn set_theme_applies_and_persists() {
        let mut dom = VirtualDom::new(ThemeHarness);
        dom.rebuild_in_place();

        let seen = SEEN.with_borrow(Seen::clone);
        assert_eq!(seen.theme, Some(Theme::EyeCare));
        assert_eq!(seen.persisted_theme.as_deref(), Some("eye-care"));
    }
}
