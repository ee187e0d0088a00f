use crate::core::{LogEntry, LogLevel, Severity, StatusIndicator, TaskResult};
use crate::ui::Frontend;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Characters shown of a long report value before truncation
const VALUE_PREVIEW_LIMIT: usize = 200;
/// Lines shown of a list-shaped report value before eliding the rest
const LIST_PREVIEW_LIMIT: usize = 5;

/// Terminal implementation of the display surface.
///
/// The activity log arrives as the full ordered buffer on every append;
/// since exactly one entry is new per call, the console prints just that
/// newest line, which keeps the printed stream identical to the buffer
/// order without re-printing history.
#[derive(Debug, Default)]
pub struct ConsoleFrontend {
    /// Spinner shown while a task runs
    spinner: Option<ProgressBar>,
}

impl ConsoleFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints a line above the spinner when one is running
    fn emit(&self, line: String) {
        match &self.spinner {
            Some(spinner) => spinner.println(line),
            None => println!("{}", line),
        }
    }

    fn colored_level(level: LogLevel) -> ColoredString {
        let label = level.to_string();
        match level {
            LogLevel::Info => label.cyan(),
            LogLevel::Success => label.green(),
            LogLevel::Warning => label.yellow(),
            LogLevel::Error => label.red(),
        }
    }

    fn colored_status(status: &StatusIndicator) -> ColoredString {
        match status.severity {
            Severity::Ready => status.label.green(),
            Severity::Busy | Severity::Warn => status.label.yellow(),
            Severity::Error => status.label.red(),
        }
    }
}

impl Frontend for ConsoleFrontend {
    fn render_log(&mut self, entries: &[LogEntry]) {
        if let Some(entry) = entries.last() {
            let line = format!(
                "{} {}: {}",
                format!("[{}]", entry.timestamp.format("%H:%M:%S")).dimmed(),
                Self::colored_level(entry.level),
                entry.message
            );
            self.emit(line);
        }
    }

    fn render_result(&mut self, result: &TaskResult) {
        let body = match result {
            TaskResult::File(path) => format!("File generated: {}", path.display())
                .green()
                .to_string(),
            TaskResult::Text(text) => text.clone(),
            TaskResult::Record(fields) => format_record(fields),
        };
        self.emit(format!("\n{}\n{}", "Result".bold().underline(), body));
    }

    fn render_error(&mut self, message: &str, detail: &str) {
        self.emit(format!(
            "\n{}\n{}\n\nDetails:\n{}",
            "Result".bold().underline(),
            message.red(),
            detail.dimmed()
        ));
    }

    fn render_status(&mut self, status: &StatusIndicator) {
        self.emit(format!("● {}", Self::colored_status(status)));
    }

    fn show_busy(&mut self, busy: bool) {
        if busy {
            let spinner = ProgressBar::new_spinner();
            spinner.enable_steady_tick(Duration::from_millis(120));
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                    .template("{spinner} [{elapsed_precise}] {msg}")
                    .expect("Failed to set spinner template"),
            );
            spinner.set_message("Working...");
            self.spinner = Some(spinner);
        } else if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn clear_result(&mut self) {
        // console history cannot be un-printed; nothing to do
    }
}

/// Formats an ordered key/value report for the terminal.
///
/// Multi-line values are treated as lists: the first few lines are shown
/// with the remainder elided. Long single-line values are cut off with an
/// ellipsis. Everything else prints as `key: value`.
pub fn format_record(fields: &[(String, String)]) -> String {
    let mut out = String::new();
    for (key, value) in fields {
        if value.contains('\n') {
            let lines: Vec<&str> = value.lines().collect();
            out.push_str(&format!("{}:\n", key));
            for line in lines.iter().take(LIST_PREVIEW_LIMIT) {
                out.push_str(&format!("  - {}\n", line));
            }
            if lines.len() > LIST_PREVIEW_LIMIT {
                out.push_str(&format!("  ... and {} more\n", lines.len() - LIST_PREVIEW_LIMIT));
            }
        } else if value.chars().count() > VALUE_PREVIEW_LIMIT {
            let preview: String = value.chars().take(VALUE_PREVIEW_LIMIT).collect();
            out.push_str(&format!("{}: {}...\n", key, preview));
        } else {
            out.push_str(&format!("{}: {}\n", key, value));
        }
    }
    out
}
