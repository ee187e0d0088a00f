use crate::core::log::{LogBuffer, LogEntry, LogLevel};
use crate::core::TaskResult;
use crate::ui::Frontend;
use chrono::Local;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// Width of the separator line in saved log snapshots
const SNAPSHOT_SEPARATOR_WIDTH: usize = 50;

/// Severity classes of the status indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Idle, waiting for input
    Ready,
    /// A task is running
    Busy,
    /// Something degraded
    Warn,
    /// The last operation failed
    Error,
}

/// The single current status of the application, overwritten on every
/// transition; no history is kept
#[derive(Debug, Clone)]
pub struct StatusIndicator {
    pub label: String,
    pub severity: Severity,
}

/// Log and status context owned by the interactive layer.
///
/// Owns the bounded activity log, the current status indicator and the
/// display frontend. Background workers never touch it directly; all
/// mutation happens on the interactive task through the coordinator's
/// routing, which is what makes the buffer safe without locks.
#[derive(Debug)]
pub struct Sink {
    buffer: LogBuffer,
    status: StatusIndicator,
    frontend: Box<dyn Frontend>,
    logs_dir: PathBuf,
}

impl Sink {
    /// Creates the sink with an empty log and a Ready status
    ///
    /// # Arguments
    /// * `max_entries` - Bound of the activity log buffer
    /// * `logs_dir` - Directory snapshots are saved under
    /// * `frontend` - Display surface renders are delegated to
    pub fn new(max_entries: usize, logs_dir: PathBuf, frontend: Box<dyn Frontend>) -> Self {
        Self {
            buffer: LogBuffer::new(max_entries),
            status: StatusIndicator {
                label: "Ready".to_string(),
                severity: Severity::Ready,
            },
            frontend,
            logs_dir,
        }
    }

    /// Appends a timestamped entry and re-renders the observable log view.
    ///
    /// The full ordered buffer is handed to the frontend on every append;
    /// frontends may render incrementally as long as the visible order and
    /// content stay identical.
    pub fn append(&mut self, message: &str, level: LogLevel) {
        self.buffer.push(LogEntry::now(message, level));
        self.frontend.render_log(self.buffer.entries());
    }

    /// Overwrites the status indicator and re-renders it
    pub fn set_status(&mut self, label: &str, severity: Severity) {
        self.status = StatusIndicator {
            label: label.to_string(),
            severity,
        };
        self.frontend.render_status(&self.status);
    }

    /// Empties the activity log and the result surface.
    ///
    /// The status indicator is left untouched.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.frontend.render_log(&[]);
        self.frontend.clear_result();
    }

    /// Hands a successful result to the result surface
    pub fn display_result(&mut self, result: &TaskResult) {
        self.frontend.render_result(result);
    }

    /// Hands a failure to the result surface: short message plus detail
    pub fn display_error(&mut self, message: &str, detail: &str) {
        self.frontend.render_error(message, detail);
    }

    /// Shows or hides the indeterminate busy indicator
    pub fn show_busy(&mut self, busy: bool) {
        self.frontend.show_busy(busy);
    }

    /// Re-renders the current status without changing it
    pub fn refresh_status(&mut self) {
        self.frontend.render_status(&self.status);
    }

    /// Current status indicator
    pub fn status(&self) -> &StatusIndicator {
        &self.status
    }

    /// Read access to the buffered entries
    pub fn log(&self) -> &LogBuffer {
        &self.buffer
    }

    /// The whole activity log rendered one line per entry
    pub fn rendered_log(&self) -> String {
        self.buffer.render_all()
    }

    /// Writes a snapshot file under the configured logs directory.
    ///
    /// Layout: a `Log generado el: <DD/MM/YYYY HH:MM:SS>` header line, a
    /// 50-character `=` separator line, a blank line, then the content
    /// verbatim, UTF-8. Returns the written path; I/O failures go back to
    /// the caller.
    pub fn save_to_file(&self, content: &str, filename: Option<&str>) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.logs_dir)?;

        let name = match filename {
            Some(name) => name.to_string(),
            None => format!("log_{}.txt", Local::now().format("%Y%m%d_%H%M%S")),
        };
        let path = self.logs_dir.join(name);

        let snapshot = format!(
            "Log generado el: {}\n{}\n\n{}",
            Local::now().format("%d/%m/%Y %H:%M:%S"),
            "=".repeat(SNAPSHOT_SEPARATOR_WIDTH),
            content
        );
        fs::write(&path, snapshot)?;
        debug!("log snapshot written to {}", path.display());
        Ok(path)
    }
}
