use crate::core::sink::{Severity, Sink};
use crate::core::worker::{TaskFuture, TaskWorker};
use crate::core::{LogLevel, TaskOutcome};
use crate::event::WorkerEvent;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// One in-flight submission
#[derive(Debug)]
struct ActiveTask {
    generation: u64,
    label: String,
    cancel: CancellationToken,
    join: JoinHandle<()>,
}

/// Enforces the single-active-task policy and routes worker outcomes.
///
/// At most one submission is active at any instant. Submitting while a task
/// is active supersedes it: the old worker's cancellation token is
/// triggered and its join handle awaited, and any outcome the old task
/// still reports is recognized by its stale generation tag and dropped
/// without touching the activity log. There is no queueing; a submission
/// always replaces, never waits.
///
/// Routing runs on the interactive task, which keeps every sink mutation on
/// one thread.
#[derive(Debug)]
pub struct Coordinator {
    self_tx: UnboundedSender<WorkerEvent>,
    self_rx: UnboundedReceiver<WorkerEvent>,
    active: Option<ActiveTask>,
    generation: u64,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl Coordinator {
    pub fn new() -> Self {
        let (self_tx, self_rx) = unbounded_channel();
        Self {
            self_tx,
            self_rx,
            active: None,
            generation: 0,
        }
    }

    /// Starts a task, superseding the active one if there is any.
    ///
    /// Side effects: the status indicator switches to Busy with a label
    /// derived from the task label, and the busy indicator is shown.
    ///
    /// # Arguments
    /// * `label` - Human-readable task name used for status and diagnostics
    /// * `task` - The task future to drive in the background
    /// * `sink` - Log/status context, mutated on this task only
    pub async fn submit(&mut self, label: &str, task: TaskFuture, sink: &mut Sink) {
        if let Some(active) = self.active.take() {
            info!(
                "superseding '{}' (generation {})",
                active.label, active.generation
            );
            active.cancel.cancel();
            // the worker observes the token at its next poll, so this
            // resolves promptly even mid-request
            let _ = active.join.await;
        }

        self.generation += 1;
        let cancel = CancellationToken::new();
        let worker = TaskWorker::new(self.generation, cancel.clone(), self.self_tx.clone());
        debug!(
            "submitting '{}' as generation {} (worker {})",
            label, self.generation, worker.task_id
        );
        let join = worker.spawn(task);

        self.active = Some(ActiveTask {
            generation: self.generation,
            label: label.to_string(),
            cancel,
            join,
        });

        sink.set_status(&format!("Processing: {}", label), Severity::Busy);
        sink.show_busy(true);
    }

    /// Routes one worker event into the sink.
    ///
    /// Events from a superseded generation are dropped silently; stale
    /// results never reach the activity log.
    pub fn route(&mut self, event: WorkerEvent, sink: &mut Sink) {
        let current = match &self.active {
            Some(active) => active.generation,
            None => {
                debug!(
                    "discarding outcome from generation {}: no active task",
                    event.generation
                );
                return;
            }
        };
        if event.generation != current {
            debug!(
                "discarding stale outcome from superseded generation {}",
                event.generation
            );
            return;
        }

        match event.outcome {
            TaskOutcome::Progress(notice) => {
                sink.append(&notice, LogLevel::Info);
            }
            TaskOutcome::Completed(result) => {
                sink.append("Task completed successfully", LogLevel::Success);
                sink.display_result(&result);
                self.finish(sink);
            }
            TaskOutcome::Failed { message, detail } => {
                sink.append(&format!("Error: {}", message), LogLevel::Error);
                sink.display_error(&message, &detail);
                self.finish(sink);
            }
        }
    }

    /// Receives the next worker event; pends while none is queued
    pub async fn recv(&mut self) -> Option<WorkerEvent> {
        self.self_rx.recv().await
    }

    /// Whether a submission is currently active
    pub fn is_busy(&self) -> bool {
        self.active.is_some()
    }

    /// Label of the active submission, if any
    pub fn active_label(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.label.as_str())
    }

    /// Cancels the active submission, if any, and waits for its worker
    pub async fn shutdown(&mut self) {
        if let Some(active) = self.active.take() {
            info!("cancelling '{}' before shutdown", active.label);
            active.cancel.cancel();
            let _ = active.join.await;
        }
    }

    /// Terminal bookkeeping: drop the handle, hide the busy indicator,
    /// return the status to Ready
    fn finish(&mut self, sink: &mut Sink) {
        self.active = None;
        sink.show_busy(false);
        sink.set_status("Ready", Severity::Ready);
    }
}
