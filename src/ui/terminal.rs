//! Terminal container: draws cards as boxes on any `Write` sink.

use crate::core::render::{Card, Container, View};
use crate::errors::AppResult;
use crate::utils::colors::{BOLD, CYAN, GREY, YELLOW, color_for_time, paint};
use crate::utils::formatting::display_width;
use std::io::Write;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
/// Room for the longest Swedish date label ("torsdag 30 september 2026")
/// next to a time, inside the borders.
const MIN_WIDTH: usize = 36;

pub struct TerminalContainer<W: Write> {
    out: W,
    color: bool,
    width: usize,
    clear: bool,
}

impl<W: Write> TerminalContainer<W> {
    pub fn new(out: W, color: bool, width: usize) -> Self {
        Self {
            out,
            color,
            width: width.max(MIN_WIDTH),
            clear: false,
        }
    }

    /// Clear the screen before each redraw (interactive mode on a TTY).
    pub fn clearing(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn inner_width(&self) -> usize {
        self.width - 4
    }

    /// `│ left ... right │`, padded on the plain text, colored afterwards.
    /// Callers keep `left + right` within the inner width.
    fn row(&self, left: &str, left_color: &str, right: &str, right_color: &str) -> String {
        let inner = self.inner_width();
        let used = display_width(left) + display_width(right);
        let gap = inner.saturating_sub(used);

        format!(
            "│ {}{}{} │",
            paint(left, left_color, self.color),
            " ".repeat(gap),
            paint(right, right_color, self.color)
        )
    }

    /// Left and right on one row when they fit, otherwise the left text
    /// wrapped on its own rows followed by the right text right-aligned.
    fn split_rows(&self, left: &str, left_color: &str, right: &str, right_color: &str) -> Vec<String> {
        let inner = self.inner_width();
        let gap = if left.is_empty() || right.is_empty() { 0 } else { 1 };
        if display_width(left) + gap + display_width(right) <= inner {
            return vec![self.row(left, left_color, right, right_color)];
        }

        let mut rows = self.wrapped_rows(left, left_color);
        for part in textwrap::wrap(right, inner) {
            rows.push(self.row("", "", &part, right_color));
        }
        rows
    }

    fn wrapped_rows(&self, text: &str, color: &str) -> Vec<String> {
        textwrap::wrap(text, self.inner_width())
            .iter()
            .map(|part| self.row(part, color, "", ""))
            .collect()
    }

    fn card_lines(&self, card: &Card) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push(format!("┌{}┐", "─".repeat(self.width - 2)));
        lines.extend(self.split_rows(&card.sport_label(), CYAN, &card.channel, YELLOW));
        lines.extend(self.wrapped_rows(&card.title, BOLD));
        if !card.competition.is_empty() {
            lines.extend(self.wrapped_rows(&card.competition, GREY));
        }
        lines.extend(self.split_rows(&card.date_label, "", &card.time, color_for_time(&card.time)));
        lines.push(format!("└{}┘", "─".repeat(self.width - 2)));
        lines
    }
}

impl<W: Write> Container for TerminalContainer<W> {
    fn replace(&mut self, view: &View) -> AppResult<()> {
        let mut buf = String::new();
        if self.clear {
            buf.push_str(CLEAR_SCREEN);
        }

        match view {
            View::Empty(placeholder) => {
                buf.push_str(&paint(placeholder, GREY, self.color));
                buf.push('\n');
            }
            View::Cards(cards) => {
                for card in cards {
                    for line in self.card_lines(card) {
                        buf.push_str(&line);
                        buf.push('\n');
                    }
                }
            }
        }

        self.out.write_all(buf.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
