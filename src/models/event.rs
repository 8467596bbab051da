use super::sport::Sport;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel used by the data source when the start time is not yet announced.
pub const UNANNOUNCED: &str = "TBA";

/// Start time of a broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTime {
    At(NaiveTime),
    Unannounced,
}

impl EventTime {
    pub fn parse(id: u32, s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s == UNANNOUNCED {
            return Ok(EventTime::Unannounced);
        }
        let invalid = || AppError::InvalidTime {
            id,
            value: s.to_string(),
        };
        // zero-padded HH:MM only, so the time shows exactly as supplied
        if s.len() != 5 || s.as_bytes()[2] != b':' {
            return Err(invalid());
        }
        NaiveTime::parse_from_str(s, "%H:%M")
            .map(EventTime::At)
            .map_err(|_| invalid())
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventTime::At(t) => write!(f, "{}", t.format("%H:%M")),
            EventTime::Unannounced => f.write_str(UNANNOUNCED),
        }
    }
}

/// Record shape of the event data file (⇔ one entry of the JSON array).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: u32,
    pub sport: String,
    pub title: String,
    #[serde(default)]
    pub competition: String,
    #[serde(default)]
    pub channel: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub description: String,
}

/// A validated broadcast event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: u32,
    pub sport: String, // raw tag, kept as supplied
    pub title: String,
    pub competition: String,
    pub channel: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: EventTime,
}

impl Event {
    pub fn category(&self) -> Sport {
        Sport::categorize(&self.sport)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl TryFrom<EventRecord> for Event {
    type Error = AppError;

    fn try_from(r: EventRecord) -> AppResult<Self> {
        let date = parse_date(&r.date).ok_or_else(|| AppError::InvalidDate {
            id: r.id,
            value: r.date.clone(),
        })?;
        let time = EventTime::parse(r.id, &r.time)?;

        Ok(Event {
            id: r.id,
            sport: r.sport,
            title: r.title,
            competition: r.competition,
            channel: r.channel,
            description: r.description,
            date,
            time,
        })
    }
}
