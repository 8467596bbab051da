//! Owned state of a running schedule view: events, category config, the live
//! filter state and the container they are drawn into.

use crate::core::filter::{FilterState, as_of_date, evaluate_within};
use crate::core::render::{Container, render};
use crate::errors::AppResult;
use crate::models::{CategoryTable, Event, Sport};
use chrono::{Local, NaiveDate};
use log::debug;

/// Source of "today". Read on every pass, never cached.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        as_of_date(&Local::now())
    }
}

/// Clock pinned to one date (`--as-of`, tests).
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// A change notification coming from the toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleChange {
    Set(Sport, bool),
    Flip(Sport),
    All(bool),
    /// Back to the configured defaults.
    Reset,
}

pub struct Session<C: Container> {
    events: Vec<Event>,
    categories: CategoryTable,
    filters: FilterState,
    days: Option<u32>,
    clock: Box<dyn Clock>,
    container: C,
}

impl<C: Container> Session<C> {
    /// Toggles start at the configured defaults. Nothing is drawn until
    /// [`Session::start`].
    pub fn new(
        events: Vec<Event>,
        categories: CategoryTable,
        clock: Box<dyn Clock>,
        container: C,
    ) -> Self {
        let filters = FilterState::from_categories(&categories);
        Self {
            events,
            categories,
            filters,
            days: None,
            clock,
            container,
        }
    }

    /// Replace the default-initialized filter state, e.g. with CLI overrides.
    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    /// Only show events up to `days` days after the clock's date.
    pub fn with_days(mut self, days: Option<u32>) -> Self {
        self.days = days;
        self
    }

    /// Initial evaluate → render pass.
    pub fn start(&mut self) -> AppResult<()> {
        self.refresh()
    }

    /// Evaluate against the clock's current date and redraw.
    pub fn refresh(&mut self) -> AppResult<()> {
        let visible = evaluate_within(&self.events, self.clock.today(), self.days, &self.filters);
        render(&mut self.container, &visible, &self.categories)
    }

    /// Apply a toggle change, then evaluate → render again.
    pub fn on_change(&mut self, change: ToggleChange) -> AppResult<()> {
        match change {
            ToggleChange::Set(sport, enabled) => self.filters.set(sport, enabled),
            ToggleChange::Flip(sport) => {
                self.filters.toggle(sport);
            }
            ToggleChange::All(enabled) => self.filters.set_all(enabled),
            ToggleChange::Reset => self.filters = FilterState::from_categories(&self.categories),
        }
        debug!("toggle change: {:?}", change);
        self.refresh()
    }

    /// Visible events as of the clock's current date.
    pub fn visible(&self) -> Vec<&Event> {
        evaluate_within(&self.events, self.clock.today(), self.days, &self.filters)
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn into_container(self) -> C {
        self.container
    }
}
