use std::io::Cursor;
use wintertv::cli::shell::{ShellCommand, parse_line, run, status_table};
use wintertv::core::{FixedClock, Session, ToggleChange};
use wintertv::errors::AppError;
use wintertv::models::{CategoryTable, Sport};
use wintertv::ui::BufferContainer;

mod common;
use common::{date, event};

#[test]
fn test_parse_commands() {
    assert_eq!(
        parse_line("on curling").unwrap(),
        ShellCommand::Change(ToggleChange::Set(Sport::Curling, true))
    );
    assert_eq!(
        parse_line("off Ice_Hockey").unwrap(),
        ShellCommand::Change(ToggleChange::Set(Sport::IceHockey, false))
    );
    assert_eq!(
        parse_line("toggle ski-jumping").unwrap(),
        ShellCommand::Change(ToggleChange::Flip(Sport::SkiJumping))
    );
    assert_eq!(
        parse_line("biathlon").unwrap(),
        ShellCommand::Change(ToggleChange::Flip(Sport::Biathlon))
    );
    assert_eq!(parse_line("none").unwrap(), ShellCommand::Change(ToggleChange::All(false)));
    assert_eq!(parse_line("reset").unwrap(), ShellCommand::Change(ToggleChange::Reset));
    assert_eq!(parse_line("   ").unwrap(), ShellCommand::Empty);
    assert_eq!(parse_line("quit").unwrap(), ShellCommand::Quit);
}

#[test]
fn test_parse_rejects_unknown_sport() {
    assert!(parse_line("on bobsleigh").is_err());
    assert!(matches!(parse_line("dance"), Err(AppError::UnknownSport(s)) if s == "dance"));
}

#[test]
fn test_parse_reports_missing_sport() {
    match parse_line("off") {
        Err(AppError::MissingSport(verb)) => assert_eq!(verb, "off"),
        other => panic!("expected MissingSport, got {other:?}"),
    }
    assert!(matches!(parse_line("toggle"), Err(AppError::MissingSport(_))));
}

#[test]
fn test_run_applies_changes_until_quit() {
    let mut session = Session::new(
        vec![event(1, "curling", "2026-01-05"), event(2, "biathlon", "2026-01-06")],
        CategoryTable::default(),
        Box::new(FixedClock(date("2026-01-01"))),
        BufferContainer::new(),
    );
    session.start().unwrap();

    let input = Cursor::new("on curling\nbogus\noff biathlon\nquit\non biathlon\n");
    run(&mut session, input, false).unwrap();

    let ids: Vec<u32> = session
        .container()
        .view()
        .unwrap()
        .cards()
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![1]);
    // start + two changes; the line after "quit" is never read
    assert_eq!(session.container().renders(), 3);
}

#[test]
fn test_status_lists_every_sport() {
    let session = Session::new(
        Vec::new(),
        CategoryTable::default(),
        Box::new(FixedClock(date("2026-01-01"))),
        BufferContainer::new(),
    );

    let table = status_table(&session);
    for sport in Sport::ALL {
        assert!(table.contains(sport.tag()));
    }
    assert!(table.contains("on"));
    assert!(table.contains("off"));
}
