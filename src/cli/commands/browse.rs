use super::{build_session, use_color};
use crate::cli::parser::{Cli, Commands};
use crate::cli::shell;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::TerminalContainer;
use std::io::{self, IsTerminal};

/// Handle the `browse` command: interactive toggles read from stdin.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Browse { filters } = &cli.command {
        let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
        let container = TerminalContainer::new(io::stdout(), use_color(cli, cfg), cfg.card_width)
            .clearing(interactive);

        let mut session = build_session(cli, cfg, filters, container)?;
        session.start()?;
        shell::run(&mut session, io::stdin().lock(), interactive)?;
    }
    Ok(())
}
