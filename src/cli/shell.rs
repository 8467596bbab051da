//! Line-based toggle shell behind `browse`.
//!
//! Each line is one change notification; every change re-runs
//! evaluate → render through the session.

use crate::cli::commands::parse_sport;
use crate::core::{Container, Session, ToggleChange};
use crate::errors::{AppError, AppResult};
use crate::models::Sport;
use crate::ui::messages::warning;
use crate::utils::formatting::on_off;
use crate::utils::table::{Column, Table};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  on <sport>      show a sport
  off <sport>     hide a sport
  toggle <sport>  flip a sport
  all | none      show or hide every sport
  reset           back to the configured defaults
  status          show the current toggles
  help            this text
  quit            leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Change(ToggleChange),
    Status,
    Help,
    Quit,
    Empty,
}

pub fn parse_line(line: &str) -> AppResult<ShellCommand> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(ShellCommand::Empty);
    };
    let arg = parts.next();

    let needs_sport = |arg: Option<&str>| -> AppResult<Sport> {
        arg.map(parse_sport)
            .unwrap_or_else(|| Err(AppError::MissingSport(verb.to_string())))
    };

    let cmd = match verb.to_lowercase().as_str() {
        "on" | "show" => ShellCommand::Change(ToggleChange::Set(needs_sport(arg)?, true)),
        "off" | "hide" => ShellCommand::Change(ToggleChange::Set(needs_sport(arg)?, false)),
        "toggle" | "t" => ShellCommand::Change(ToggleChange::Flip(needs_sport(arg)?)),
        "all" => ShellCommand::Change(ToggleChange::All(true)),
        "none" => ShellCommand::Change(ToggleChange::All(false)),
        "reset" => ShellCommand::Change(ToggleChange::Reset),
        "status" | "s" => ShellCommand::Status,
        "help" | "h" | "?" => ShellCommand::Help,
        "quit" | "q" | "exit" => ShellCommand::Quit,
        // bare sport name: toggle it
        other => match Sport::from_input(other) {
            Some(sport) => ShellCommand::Change(ToggleChange::Flip(sport)),
            None => return Err(AppError::UnknownSport(other.to_string())),
        },
    };

    Ok(cmd)
}

/// Toggle listing: tag, label, on/off.
pub fn status_table<C: Container>(session: &Session<C>) -> String {
    let mut table = Table::new(vec![
        Column::new("SPORT", 16),
        Column::new("NAME", 18),
        Column::new("SHOWN", 5),
    ]);
    for (sport, info) in session.categories().iter() {
        table.add_row(vec![
            sport.tag().to_string(),
            info.label(),
            on_off(session.filters().is_enabled(sport)).to_string(),
        ]);
    }
    table.render()
}

pub fn run<R: BufRead, C: Container>(
    session: &mut Session<C>,
    input: R,
    interactive: bool,
) -> AppResult<()> {
    if interactive {
        println!("Type 'help' for commands.");
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_line(&line) {
            Ok(ShellCommand::Change(change)) => session.on_change(change)?,
            Ok(ShellCommand::Status) => print!("{}", status_table(session)),
            Ok(ShellCommand::Help) => println!("{HELP}"),
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Empty) => {}
            Err(e) => warning(e),
        }
    }

    Ok(())
}
