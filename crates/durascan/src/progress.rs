//! Textual progress bars.
//!
//! Every bar is a single line that starts with a carriage return, so drawing
//! it repeatedly overwrites the previous frame in place:
//!
//! ```text
//! \rAnalyzing Weight |██████████░░░░░░░░░░░░░░░| 40.0%
//! \rStatus: AI server up...      |####################------------------------------| 40.0%
//! ```

use std::io::{self, Write};
use std::iter;

/// A single tick of a progress animation.
#[derive(Debug, Clone, Copy)]
pub struct ProgressState<'a> {
    /// Steps completed so far.
    pub current: u64,
    /// Total steps. Must be positive.
    pub total: u64,
    /// Text shown to the left of the bar.
    pub label: &'a str,
}

impl<'a> ProgressState<'a> {
    pub fn new(current: u64, total: u64, label: &'a str) -> Self {
        debug_assert!(total > 0, "progress total must be positive");
        debug_assert!(current <= total, "progress current {current} exceeds total {total}");
        Self {
            current,
            total,
            label,
        }
    }

    /// Completion percentage, formatted to one decimal place.
    pub fn percent(&self) -> String {
        format!("{:.1}", (self.current as f64 / self.total as f64) * 100.0)
    }

    /// Number of filled cells for a bar of `bar_length` cells (rounded down).
    pub fn filled_length(&self, bar_length: usize) -> usize {
        (bar_length as u64 * self.current / self.total) as usize
    }
}

/// Visual configuration for a progress bar.
///
/// The rendering algorithm is shared; only the widths, fill characters and
/// label prefix differ between variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    /// Number of cells between the `|` delimiters.
    pub bar_length: usize,
    /// Minimum width of the label field. Longer labels are kept whole.
    pub label_width: usize,
    pub filled: char,
    pub empty: char,
    /// Text printed before the label.
    pub prefix: &'static str,
}

impl BarStyle {
    /// Small bar used for per-task updates.
    pub const INLINE: BarStyle = BarStyle {
        bar_length: 25,
        label_width: 15,
        filled: '\u{2588}', // █
        empty: '\u{2591}',  // ░
        prefix: "",
    };

    /// Wide bar used for the startup sequence.
    pub const STARTUP: BarStyle = BarStyle {
        bar_length: 50,
        label_width: 20,
        filled: '#',
        empty: '-',
        prefix: "Status: ",
    };

    /// Renders one frame: `\r{prefix}{label:<width} |{bar}| {percent}%`.
    pub fn render(&self, current: u64, total: u64, label: &str) -> String {
        self.render_state(&ProgressState::new(current, total, label))
    }

    /// Renders a frame from an existing [`ProgressState`].
    pub fn render_state(&self, state: &ProgressState<'_>) -> String {
        format!(
            "\r{}{:<width$} |{}| {}%",
            self.prefix,
            state.label,
            self.bar(state),
            state.percent(),
            width = self.label_width
        )
    }

    /// Writes one frame without a trailing newline and flushes immediately.
    pub fn draw<W: Write>(
        &self,
        out: &mut W,
        current: u64,
        total: u64,
        label: &str,
    ) -> io::Result<()> {
        out.write_all(self.render(current, total, label).as_bytes())?;
        out.flush()
    }

    fn bar(&self, state: &ProgressState<'_>) -> String {
        let filled = state.filled_length(self.bar_length).min(self.bar_length);
        let empty = self.bar_length - filled;
        iter::repeat(self.filled)
            .take(filled)
            .chain(iter::repeat(self.empty).take(empty))
            .collect()
    }
}

/// Step-keyed status messages for the startup sequence.
///
/// The active message at a step is the one with the largest threshold not
/// exceeding that step. Entries must be sorted by threshold.
#[derive(Debug, Clone, Copy)]
pub struct StatusSchedule {
    entries: &'static [(u64, &'static str)],
}

impl StatusSchedule {
    pub const STARTUP: StatusSchedule = StatusSchedule {
        entries: &[
            (0, "Starting up..."),
            (20, "Server on..."),
            (40, "AI server up..."),
            (60, "AI activated..."),
            (80, "AI online..."),
        ],
    };

    pub const fn new(entries: &'static [(u64, &'static str)]) -> Self {
        Self { entries }
    }

    /// Message active at `step`.
    ///
    /// Steps before the first threshold fall back to the first message.
    pub fn message_at(&self, step: u64) -> &'static str {
        self.entries
            .iter()
            .rev()
            .find(|(threshold, _)| *threshold <= step)
            .or_else(|| self.entries.first())
            .map(|(_, message)| *message)
            .unwrap_or("")
    }

    /// True when `step` is exactly one of the thresholds.
    pub fn changes_at(&self, step: u64) -> bool {
        self.entries.iter().any(|(threshold, _)| *threshold == step)
    }
}
