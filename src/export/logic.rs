// src/export/logic.rs

use crate::core::render::View;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::cards_to_rows;
use crate::ui::messages::warning;
use std::io;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the cards of `view` to `file`.
    ///
    /// An empty view still produces a file (an empty JSON array, an empty
    /// CSV) so scripted consumers always find one.
    pub fn export(view: &View, format: ExportFormat, file: &Path, force: bool) -> AppResult<()> {
        ensure_writable(file, force, io::stdin().lock())?;

        let rows = cards_to_rows(view.cards());
        if rows.is_empty() {
            warning("No upcoming events for the selected sports.");
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, file),
            ExportFormat::Json => export_json(&rows, file),
        }
    }
}
