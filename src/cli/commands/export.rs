use super::build_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::ui::BufferContainer;
use std::path::Path;

/// Handle the `export` command: render into memory, then write the cards out.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
        filters,
    } = &cli.command
    {
        let mut session = build_session(cli, cfg, filters, BufferContainer::new())?;
        session.start()?;

        let view = session
            .into_container()
            .into_view()
            .ok_or_else(|| AppError::Export("nothing was rendered".to_string()))?;

        ExportLogic::export(&view, *format, Path::new(file), *force)?;
    }
    Ok(())
}
