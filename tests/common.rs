#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;
use wintertv::models::{Event, EventTime};

pub fn wtv() -> Command {
    cargo_bin_cmd!("wintertv")
}

/// Binary isolated from the user's configuration: points `--config` at a
/// file that does not exist, so defaults apply.
pub fn wtv_isolated(name: &str) -> Command {
    let cfg = temp_path(&format!("{name}_missing_cfg"), "conf");
    let mut cmd = wtv();
    cmd.args(["--config", &cfg, "--no-color"]);
    cmd
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_wintertv.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write an events JSON file and return its path.
pub fn write_events(name: &str, json: &str) -> String {
    let path = temp_path(name, "json");
    fs::write(&path, json).expect("write events fixture");
    path
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn event(id: u32, sport: &str, d: &str) -> Event {
    Event {
        id,
        sport: sport.to_string(),
        title: format!("Event {id}"),
        competition: "Världscup".to_string(),
        channel: "SVT1".to_string(),
        description: String::new(),
        date: date(d),
        time: EventTime::Unannounced,
    }
}

/// The two events used throughout the examples: a curling event on
/// 2025-11-22 and a far-future biathlon event.
pub const TWO_EVENTS: &str = r#"[
  {"id": 1, "sport": "curling", "title": "Curling-EM", "competition": "Herrar",
   "channel": "SVT2", "date": "2025-11-22", "time": "14:00", "description": ""},
  {"id": 2, "sport": "biathlon", "title": "Skidskytte i Östersund", "competition": "Sprint",
   "channel": "TV4", "date": "2099-01-01", "time": "TBA", "description": ""}
]"#;
