pub mod browse;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod sports;

use crate::cli::parser::{Cli, FilterArgs};
use crate::config::Config;
use crate::core::{Clock, Container, FilterState, FixedClock, Session, SystemClock};
use crate::errors::{AppError, AppResult};
use crate::models::{Event, Sport};
use crate::source;
use crate::utils::date;
use std::path::PathBuf;

/// `--events` wins over the configured file; neither means the bundled schedule.
pub(crate) fn load_events(cli: &Cli, cfg: &Config) -> AppResult<Vec<Event>> {
    let path = cli.events.as_ref().map(PathBuf::from).or_else(|| cfg.events_path());
    source::load(path.as_deref())
}

pub(crate) fn parse_sport(input: &str) -> AppResult<Sport> {
    Sport::from_input(input).ok_or_else(|| AppError::UnknownSport(input.to_string()))
}

pub(crate) fn clock_for(as_of: Option<&str>) -> AppResult<Box<dyn Clock>> {
    match as_of {
        Some(s) => {
            let d = date::parse_date(s).ok_or_else(|| AppError::InvalidAsOf(s.to_string()))?;
            Ok(Box::new(FixedClock(d)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

/// Configured defaults with `--all`, then `--show`, then `--hide` applied on top.
pub(crate) fn apply_overrides(mut filters: FilterState, args: &FilterArgs) -> AppResult<FilterState> {
    if args.all {
        filters.set_all(true);
    }
    for s in &args.show {
        filters.set(parse_sport(s)?, true);
    }
    for s in &args.hide {
        filters.set(parse_sport(s)?, false);
    }
    Ok(filters)
}

/// Wire events, configuration, clock and toggles into a session drawing into
/// `container`. Nothing is rendered yet.
pub(crate) fn build_session<C: Container>(
    cli: &Cli,
    cfg: &Config,
    args: &FilterArgs,
    container: C,
) -> AppResult<Session<C>> {
    let events = load_events(cli, cfg)?;
    let categories = cfg.categories();
    let clock = clock_for(args.as_of.as_deref())?;
    let filters = apply_overrides(FilterState::from_categories(&categories), args)?;

    Ok(Session::new(events, categories, clock, container)
        .with_filters(filters)
        .with_days(args.days))
}

pub(crate) fn use_color(cli: &Cli, cfg: &Config) -> bool {
    cfg.color && !cli.no_color
}
