mod app;
mod console;

pub use app::*;
pub use console::*;

use crate::core::{LogEntry, StatusIndicator, TaskResult};
use std::fmt::Debug;

/// Display surface the execution core renders into.
///
/// The interactive layer provides an implementation; the core only hands it
/// data and never reaches into presentation details.
pub trait Frontend: Debug {
    /// Re-renders the activity log; entries are ordered oldest first
    fn render_log(&mut self, entries: &[LogEntry]);

    /// Shows a successful task result
    fn render_result(&mut self, result: &TaskResult);

    /// Shows a failure: short message plus the full diagnostic detail
    fn render_error(&mut self, message: &str, detail: &str);

    /// Reflects a status indicator transition
    fn render_status(&mut self, status: &StatusIndicator);

    /// Shows or hides the indeterminate busy indicator
    fn show_busy(&mut self, busy: bool);

    /// Empties the result surface
    fn clear_result(&mut self);
}
