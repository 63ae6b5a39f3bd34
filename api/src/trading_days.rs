//! The set of dates on which date-picker selection is permitted.

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeSet;

/// Format used for trading-day keys, both on the wire and in the set.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a date as its `YYYY-MM-DD` trading-day key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Trading days as supplied by the backend.
///
/// Entries are kept verbatim; membership is an exact string match against
/// [`date_key`], so malformed entries simply never match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradingDays(BTreeSet<String>);

impl TradingDays {
    pub fn new<I, S>(days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(days.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date_key(date))
    }

    /// Returns `date` if it is a trading day, otherwise the closest earlier one.
    pub fn latest_on_or_before(&self, date: NaiveDate) -> Option<NaiveDate> {
        self.0
            .range(..=date_key(date))
            .rev()
            .find_map(|s| {
                NaiveDate::parse_from_str(s, DATE_FORMAT)
                    .ok()
                    .filter(|d| date_key(*d) == *s)
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TradingDays {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
