use super::{clock_for, load_events};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::filter::evaluate_within;
use crate::core::FilterState;
use crate::errors::AppResult;
use crate::models::{CategoryTable, Event, Sport};
use crate::utils::formatting::on_off;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

/// Upcoming events per category, counted regardless of toggles. `days`
/// limits the count to the window ending `days` days after `as_of`.
pub fn upcoming_counts(events: &[Event], as_of: NaiveDate, days: Option<u32>) -> Vec<(Sport, usize)> {
    let upcoming = evaluate_within(events, as_of, days, &FilterState::new());
    Sport::ALL
        .into_iter()
        .map(|sport| {
            let n = upcoming.iter().filter(|e| e.category() == sport).count();
            (sport, n)
        })
        .collect()
}

pub fn render_table(categories: &CategoryTable, counts: &[(Sport, usize)]) -> String {
    let mut table = Table::new(vec![
        Column::new("SPORT", 16),
        Column::new("NAME", 18),
        Column::new("DEFAULT", 7),
        Column::new("UPCOMING", 8),
    ]);

    for (sport, count) in counts {
        let info = categories.get(*sport);
        table.add_row(vec![
            sport.tag().to_string(),
            info.label(),
            on_off(info.default_enabled).to_string(),
            count.to_string(),
        ]);
    }

    let total: usize = counts.iter().map(|(_, n)| n).sum();
    table.add_row(vec![
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        total.to_string(),
    ]);

    table.render()
}

/// Handle the `sports` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Sports { as_of, days } = &cli.command {
        let events = load_events(cli, cfg)?;
        let today = clock_for(as_of.as_deref())?.today();
        let counts = upcoming_counts(&events, today, *days);

        print!("{}", render_table(&cfg.categories(), &counts));
    }
    Ok(())
}
