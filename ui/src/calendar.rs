//! Calendar arithmetic for the date picker.

use api::trading_days::TradingDays;
use chrono::Datelike;
use chrono::Local;
use chrono::Months;
use chrono::NaiveDate;
use chrono::Weekday;

/// Today's date in the browser's (or host's) local time zone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Decides whether the date picker should refuse `date`.
///
/// Future dates are always disabled. When trading days are known only those
/// are selectable; otherwise weekends are disabled.
pub fn is_date_disabled(date: NaiveDate, today: NaiveDate, trading_days: &TradingDays) -> bool {
    if date > today {
        return true;
    }

    if !trading_days.is_empty() {
        return !trading_days.contains(date);
    }

    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Moves to the first day of the month `delta` months away.
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let first = first_of_month(date);
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    };
    shifted.unwrap_or(first)
}

/// Lays out the month containing `date` as Monday-first weeks.
///
/// Cells outside the month are `None`.
pub fn month_grid(date: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let first = first_of_month(date);
    let lead = first.weekday().num_days_from_monday() as usize;

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = lead;
    let mut day = Some(first);

    while let Some(d) = day.filter(|d| d.month() == first.month()) {
        week[slot] = Some(d);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
        day = d.succ_opt();
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2024-06-10 is a Monday
    const TODAY: (i32, u32, u32) = (2024, 6, 10);

    fn today() -> NaiveDate {
        ymd(TODAY.0, TODAY.1, TODAY.2)
    }

    #[test]
    fn future_dates_always_disabled() {
        let everything = TradingDays::new(["2024-06-11", "2024-06-12", "2025-01-02"]);
        for days in [TradingDays::default(), everything] {
            for date in [ymd(2024, 6, 11), ymd(2024, 6, 12), ymd(2025, 1, 2)] {
                assert!(is_date_disabled(date, today(), &days), "{date}");
            }
        }
    }

    #[test]
    fn today_is_not_future() {
        assert!(!is_date_disabled(today(), today(), &TradingDays::default()));
    }

    #[test]
    fn trading_days_whitelist_past_dates() {
        let days = TradingDays::new(["2024-06-07", "2024-06-10", "2024-06-11"]);
        assert!(!is_date_disabled(ymd(2024, 6, 7), today(), &days));
        assert!(!is_date_disabled(ymd(2024, 6, 10), today(), &days));
        // weekday but not a trading day
        assert!(is_date_disabled(ymd(2024, 6, 6), today(), &days));
        // weekend, not in the set; weekend rule plays no part
        assert!(is_date_disabled(ymd(2024, 6, 8), today(), &days));
    }

    #[test]
    fn trading_day_on_weekend_is_enabled() {
        let days = TradingDays::new(["2024-06-08"]);
        assert!(!is_date_disabled(ymd(2024, 6, 8), today(), &days));
    }

    #[test]
    fn weekend_fallback_without_trading_days() {
        let empty = TradingDays::default();
        // Mon 2024-06-03 .. Sun 2024-06-09
        let disabled: Vec<bool> = (3..=9)
            .map(|d| is_date_disabled(ymd(2024, 6, d), today(), &empty))
            .collect();
        assert_eq!(disabled, [false, false, false, false, false, true, true]);
    }

    #[test]
    fn worked_example() {
        let days = TradingDays::new(["2024-06-10", "2024-06-11"]);
        assert!(!is_date_disabled(ymd(2024, 6, 10), today(), &days));
        assert!(is_date_disabled(ymd(2024, 6, 11), today(), &days));
        assert!(is_date_disabled(ymd(2024, 6, 12), today(), &days));
        assert!(is_date_disabled(ymd(2024, 6, 8), today(), &days));
    }

    #[test]
    fn shift_month_crosses_years() {
        assert_eq!(shift_month(ymd(2024, 12, 31), 1), ymd(2025, 1, 1));
        assert_eq!(shift_month(ymd(2024, 1, 15), -1), ymd(2023, 12, 1));
        assert_eq!(shift_month(ymd(2024, 3, 31), 0), ymd(2024, 3, 1));
    }

    #[test]
    fn month_grid_starts_on_monday() {
        // June 2024 starts on a Saturday and ends on a Sunday
        let grid = month_grid(ymd(2024, 6, 10));
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0][..5], [None; 5]);
        assert_eq!(grid[0][5], Some(ymd(2024, 6, 1)));
        assert_eq!(grid[4][6], Some(ymd(2024, 6, 30)));

        // July 2024 starts on a Monday, leaving a partial last week
        let grid = month_grid(ymd(2024, 7, 1));
        assert_eq!(grid[0][0], Some(ymd(2024, 7, 1)));
        assert_eq!(grid.last().unwrap()[2], Some(ymd(2024, 7, 31)));
        assert_eq!(grid.last().unwrap()[3], None);
        let days = grid.iter().flatten().flatten().count();
        assert_eq!(days, 31);
    }
}
