// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, prompt, warning};
use std::io::BufRead;
use std::path::Path;

/// Check whether the output file may be created or overwritten.
///
/// - file missing → Ok
/// - file present and `force` → Ok, `answers` is not read
/// - file present without `force` → one line is read from `answers`;
///   anything but y/yes (or end of input) cancels
pub fn ensure_writable<R: BufRead>(path: &Path, force: bool, mut answers: R) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    prompt("Overwrite? [y/N]: ");

    let mut answer = String::new();
    answers.read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "existing file not overwritten (use --force)".to_string(),
        ))
    }
}
