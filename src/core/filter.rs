use crate::models::{CategoryTable, Event, Sport};
use chrono::{DateTime, Days, NaiveDate, TimeZone};
use log::debug;
use std::collections::BTreeMap;

/// Live per-category enablement, sourced from the toggles.
///
/// Sports without an entry count as enabled: a missing toggle must never hide
/// events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    flags: BTreeMap<Sport, bool>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// One flag per configured category, set to its default.
    pub fn from_categories(categories: &CategoryTable) -> Self {
        categories
            .iter()
            .map(|(sport, info)| (sport, info.default_enabled))
            .collect()
    }

    pub fn is_enabled(&self, sport: Sport) -> bool {
        self.flags.get(&sport).copied().unwrap_or(true)
    }

    /// Explicit state only; `None` when no toggle exists for `sport`.
    pub fn get(&self, sport: Sport) -> Option<bool> {
        self.flags.get(&sport).copied()
    }

    pub fn set(&mut self, sport: Sport, enabled: bool) {
        self.flags.insert(sport, enabled);
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&mut self, sport: Sport) -> bool {
        let next = !self.is_enabled(sport);
        self.flags.insert(sport, next);
        next
    }

    pub fn remove(&mut self, sport: Sport) -> Option<bool> {
        self.flags.remove(&sport)
    }

    pub fn set_all(&mut self, enabled: bool) {
        for sport in Sport::ALL {
            self.flags.insert(sport, enabled);
        }
    }
}

impl FromIterator<(Sport, bool)> for FilterState {
    fn from_iter<I: IntoIterator<Item = (Sport, bool)>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().collect(),
        }
    }
}

/// Truncate a wall-clock instant to the calendar date in its own timezone.
pub fn as_of_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

/// Upcoming (date-granular) and enabled.
pub fn is_visible(event: &Event, as_of: NaiveDate, filters: &FilterState) -> bool {
    event.date >= as_of && filters.is_enabled(event.category())
}

/// Last date of a window of `days` days after `as_of`, both ends inclusive.
/// `None` means no upper bound (also when the addition overflows).
pub fn horizon_end(as_of: NaiveDate, days: Option<u32>) -> Option<NaiveDate> {
    days.and_then(|n| as_of.checked_add_days(Days::new(u64::from(n))))
}

pub fn within_horizon(event: &Event, end: Option<NaiveDate>) -> bool {
    end.is_none_or(|end| event.date <= end)
}

/// Stable filter: the visible events, in source order.
pub fn evaluate<'a>(events: &'a [Event], as_of: NaiveDate, filters: &FilterState) -> Vec<&'a Event> {
    let visible: Vec<&Event> = events
        .iter()
        .filter(|e| is_visible(e, as_of, filters))
        .collect();

    debug!(
        "evaluate: {} of {} events visible as of {}",
        visible.len(),
        events.len(),
        as_of
    );

    visible
}

/// [`evaluate`] limited to the `days` window after `as_of`.
pub fn evaluate_within<'a>(
    events: &'a [Event],
    as_of: NaiveDate,
    days: Option<u32>,
    filters: &FilterState,
) -> Vec<&'a Event> {
    let end = horizon_end(as_of, days);
    let mut visible = evaluate(events, as_of, filters);
    visible.retain(|e| within_horizon(e, end));
    visible
}
