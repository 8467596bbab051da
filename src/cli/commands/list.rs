use super::{build_session, use_color};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::TerminalContainer;
use std::io;

/// Handle the `list` command: one evaluate → render pass on stdout.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filters } = &cli.command {
        let container = TerminalContainer::new(io::stdout(), use_color(cli, cfg), cfg.card_width);
        let mut session = build_session(cli, cfg, filters, container)?;
        session.start()?;
    }
    Ok(())
}
