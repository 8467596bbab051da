//! View-model construction and the display boundary.
//!
//! Rendering never patches: each call builds a complete [`View`] and hands it
//! to [`Container::replace`], which discards whatever was shown before.

use crate::errors::AppResult;
use crate::models::{CategoryTable, Event};
use crate::utils::date::long_date_sv;
use log::debug;
use serde::Serialize;

/// Empty-state message shown when nothing is visible.
pub const NO_EVENTS: &str = "Inga kommande tävlingar";

/// Display fragment for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: u32,
    /// Sport tag as supplied by the data source, unknown tags included.
    pub tag: String,
    pub icon: String,
    pub sport: String,
    pub channel: String,
    pub title: String,
    pub competition: String,
    pub date: String,
    pub date_label: String,
    pub time: String,
}

impl Card {
    pub fn from_event(event: &Event, categories: &CategoryTable) -> Self {
        let info = categories.lookup(&event.sport);
        Self {
            id: event.id,
            tag: event.sport.clone(),
            icon: info.icon.to_string(),
            sport: info.name.to_string(),
            channel: event.channel.clone(),
            title: event.title.clone(),
            competition: event.competition.clone(),
            date: event.date_str(),
            date_label: long_date_sv(event.date),
            time: event.time.to_string(),
        }
    }

    pub fn sport_label(&self) -> String {
        format!("{} {}", self.icon, self.sport)
    }
}

/// Full content of the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Empty(&'static str),
    Cards(Vec<Card>),
}

impl View {
    pub fn cards(&self) -> &[Card] {
        match self {
            View::Cards(cards) => cards,
            View::Empty(_) => &[],
        }
    }
}

/// A display surface that accepts a full replacement of its content.
pub trait Container {
    fn replace(&mut self, view: &View) -> AppResult<()>;
}

pub fn build_view(events: &[&Event], categories: &CategoryTable) -> View {
    if events.is_empty() {
        return View::Empty(NO_EVENTS);
    }
    View::Cards(
        events
            .iter()
            .map(|e| Card::from_event(e, categories))
            .collect(),
    )
}

/// Build the view for `events` and replace the container content with it.
pub fn render<C: Container + ?Sized>(
    container: &mut C,
    events: &[&Event],
    categories: &CategoryTable,
) -> AppResult<()> {
    let view = build_view(events, categories);
    debug!("render: {} card(s)", view.cards().len());
    container.replace(&view)
}
