use std::path::PathBuf;

/// Value produced by a task that finished normally.
///
/// Tasks return one of three shapes: the path of a generated artifact,
/// free-form text, or an ordered key/value report.
#[derive(Debug, Clone)]
pub enum TaskResult {
    /// Path of a file written by the task
    File(PathBuf),
    /// Free-form text, e.g. an LLM reply
    Text(String),
    /// Ordered key/value report, e.g. a page-extraction summary
    Record(Vec<(String, String)>),
}

/// Outcome reported by a worker for one submission
#[derive(Debug, Clone)]
pub enum TaskOutcome {
    /// The task has started; carries a short notice for the activity log
    Progress(String),
    /// The task finished and produced a result
    Completed(TaskResult),
    /// The task failed; `message` is the short human-readable form,
    /// `detail` the full diagnostic text
    Failed { message: String, detail: String },
}

impl TaskOutcome {
    /// Whether this outcome ends the task's lifecycle
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TaskOutcome::Progress(_))
    }
}
