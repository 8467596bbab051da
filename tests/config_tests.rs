use std::fs;
use std::path::Path;
use wintertv::config::Config;
use wintertv::models::Sport;

mod common;
use common::temp_path;

#[test]
fn test_empty_config_uses_defaults() {
    let cfg = Config::parse("").unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.default_sports, vec!["cross-country", "biathlon"]);
    assert!(cfg.events_path().is_none());
}

#[test]
fn test_partial_config_fills_missing_fields() {
    let cfg = Config::parse("default_sports: [curling, alpine]\ncolor: false\n").unwrap();

    assert!(!cfg.color);
    assert_eq!(cfg.card_width, 60);

    let categories = cfg.categories();
    assert!(categories.get(Sport::Curling).default_enabled);
    assert!(categories.get(Sport::Alpine).default_enabled);
    assert!(!categories.get(Sport::Biathlon).default_enabled);
    assert!(!categories.get(Sport::Other).default_enabled);
}

#[test]
fn test_unknown_default_sport_ignored() {
    let cfg = Config::parse("default_sports: [curling, bobsleigh]\n").unwrap();
    let enabled: Vec<Sport> = cfg
        .categories()
        .iter()
        .filter(|(_, info)| info.default_enabled)
        .map(|(s, _)| s)
        .collect();

    assert_eq!(enabled, vec![Sport::Curling]);
}

#[test]
fn test_zero_card_width_rejected() {
    assert!(Config::parse("card_width: 0\n").is_err());
}

#[test]
fn test_invalid_yaml_rejected() {
    assert!(Config::parse("default_sports: {not: [a list").is_err());
}

#[test]
fn test_init_writes_once_unless_forced() {
    let path = temp_path("config_init", "conf");
    let path = Path::new(&path);

    assert!(Config::init_at(path, false).unwrap());
    let written = Config::load_from(path).unwrap();
    assert_eq!(written, Config::default());

    fs::write(path, "color: false\n").unwrap();
    assert!(!Config::init_at(path, false).unwrap());
    assert!(!Config::load_from(path).unwrap().color);

    assert!(Config::init_at(path, true).unwrap());
    assert!(Config::load_from(path).unwrap().color);
}

#[test]
fn test_missing_file_loads_defaults() {
    let path = temp_path("config_missing", "conf");
    assert_eq!(Config::load_from(Path::new(&path)).unwrap(), Config::default());
}
