//! Event data source: the bundled schedule or a JSON file maintained out-of-band.
//! Every record is validated up front; a single bad record rejects the whole load.

use crate::errors::{AppError, AppResult};
use crate::models::{Event, EventRecord};
use log::debug;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUNDLED: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/events.json"));

/// Parse and validate a JSON array of event records.
pub fn parse_events(json: &str) -> AppResult<Vec<Event>> {
    let records: Vec<EventRecord> = serde_json::from_str(json)?;
    validate(records)
}

/// Convert raw records, rejecting malformed dates/times and duplicate ids.
pub fn validate(records: Vec<EventRecord>) -> AppResult<Vec<Event>> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut events = Vec::with_capacity(records.len());

    for record in records {
        if !seen.insert(record.id) {
            return Err(AppError::DuplicateId(record.id));
        }
        events.push(Event::try_from(record)?);
    }

    Ok(events)
}

/// Schedule compiled into the binary.
pub fn bundled() -> AppResult<Vec<Event>> {
    let events = parse_events(BUNDLED)?;
    debug!("loaded {} bundled events", events.len());
    Ok(events)
}

pub fn from_file(path: &Path) -> AppResult<Vec<Event>> {
    let content = fs::read_to_string(path)?;
    let events = parse_events(&content)?;
    debug!("loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Load from `path` when given, otherwise fall back to the bundled schedule.
pub fn load(path: Option<&Path>) -> AppResult<Vec<Event>> {
    match path {
        Some(p) => from_file(p),
        None => bundled(),
    }
}
