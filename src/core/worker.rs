use crate::core::{TaskOutcome, TaskResult};
use crate::errors::TaskError;
use crate::event::WorkerEvent;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Fixed notice emitted when a worker picks up its task
pub const STARTING_NOTICE: &str = "starting task";

/// The future a submission resolves to
pub type TaskFuture = BoxFuture<'static, Result<TaskResult, TaskError>>;

/// Background execution unit for exactly one task.
///
/// The worker emits one `Progress` event immediately on start, then exactly
/// one terminal event: `Completed` if the task future resolves `Ok`, or
/// `Failed` if it resolves `Err` or panics. Nothing is emitted after the
/// terminal event. A cancelled worker stops at its next poll and stays
/// silent; its in-flight I/O future is simply dropped.
#[derive(Debug)]
pub struct TaskWorker {
    /// Identifier used in diagnostics
    pub task_id: String,
    /// Generation tag stamped on every event this worker sends
    pub generation: u64,
    /// Cooperative cancellation signal observed between polls
    cancel: CancellationToken,
    /// Channel to the coordinator
    tx: UnboundedSender<WorkerEvent>,
}

impl TaskWorker {
    /// Creates a worker for one submission
    ///
    /// # Arguments
    /// * `generation` - Generation tag for this submission's events
    /// * `cancel` - Token the coordinator triggers on supersession
    /// * `tx` - Channel sender towards the coordinator
    pub fn new(
        generation: u64,
        cancel: CancellationToken,
        tx: UnboundedSender<WorkerEvent>,
    ) -> Self {
        Self {
            task_id: uuid::Uuid::new_v4().to_string(),
            generation,
            cancel,
            tx,
        }
    }

    /// Spawns the worker onto the runtime and returns its join handle
    pub fn spawn(self, task: TaskFuture) -> JoinHandle<()> {
        tokio::spawn(self.run(task))
    }

    /// Drives the task to its terminal outcome, unless cancelled first
    pub async fn run(self, task: TaskFuture) {
        debug!(
            "worker {} starting (generation {})",
            self.task_id, self.generation
        );
        self.send(TaskOutcome::Progress(STARTING_NOTICE.to_string()));

        let guarded = AssertUnwindSafe(task).catch_unwind();
        tokio::select! {
            _ = self.cancel.cancelled() => {
                debug!("worker {} cancelled, dropping task", self.task_id);
            }
            result = guarded => {
                let outcome = match result {
                    Ok(Ok(value)) => TaskOutcome::Completed(value),
                    Ok(Err(err)) => TaskOutcome::Failed {
                        message: err.to_string(),
                        detail: err.detail(),
                    },
                    Err(panic) => {
                        let message = panic_message(panic.as_ref());
                        warn!("worker {} caught a panic: {}", self.task_id, message);
                        TaskOutcome::Failed {
                            detail: format!("task panicked: {}", message),
                            message,
                        }
                    }
                };
                self.send(outcome);
            }
        }
    }

    fn send(&self, outcome: TaskOutcome) {
        if self
            .tx
            .send(WorkerEvent::new(self.generation, outcome))
            .is_err()
        {
            debug!(
                "worker {} dropping outcome, receiver closed",
                self.task_id
            );
        }
    }
}

/// Renders a panic payload as text; most panics carry a `&str` or `String`
fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "task panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    fn ok_task(text: &str) -> TaskFuture {
        let text = text.to_string();
        async move { Ok(TaskResult::Text(text)) }.boxed()
    }

    #[tokio::test]
    async fn emits_progress_then_completed() {
        let (tx, mut rx) = unbounded_channel();
        let worker = TaskWorker::new(1, CancellationToken::new(), tx);
        worker.spawn(ok_task("done")).await.unwrap();

        let first = rx.recv().await.unwrap();
        assert_eq!(first.generation, 1);
        assert!(matches!(first.outcome, TaskOutcome::Progress(ref msg) if msg == STARTING_NOTICE));

        let second = rx.recv().await.unwrap();
        assert!(matches!(second.outcome, TaskOutcome::Completed(TaskResult::Text(ref t)) if t == "done"));

        // sender dropped with the worker, nothing further arrives
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn emits_failed_with_message_and_detail() {
        let (tx, mut rx) = unbounded_channel();
        let worker = TaskWorker::new(3, CancellationToken::new(), tx);
        let task: TaskFuture =
            async { Err(TaskError::InvalidInput("empty title".to_string())) }.boxed();
        worker.spawn(task).await.unwrap();

        let _progress = rx.recv().await.unwrap();
        let terminal = rx.recv().await.unwrap();
        match terminal.outcome {
            TaskOutcome::Failed { message, detail } => {
                assert!(!message.is_empty());
                assert!(message.contains("empty title"));
                assert!(detail.contains("empty title"));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn converts_a_panic_into_failed() {
        let (tx, mut rx) = unbounded_channel();
        let worker = TaskWorker::new(9, CancellationToken::new(), tx);
        let task: TaskFuture = async { panic!("boom") }.boxed();
        worker.spawn(task).await.unwrap();

        let _progress = rx.recv().await.unwrap();
        let terminal = rx.recv().await.unwrap();
        match terminal.outcome {
            TaskOutcome::Failed { message, detail } => {
                assert_eq!(message, "boom");
                assert!(detail.contains("task panicked"));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn cancelled_worker_sends_no_terminal_event() {
        let (tx, mut rx) = unbounded_channel();
        let cancel = CancellationToken::new();
        let worker = TaskWorker::new(5, cancel.clone(), tx);

        cancel.cancel();
        let task: TaskFuture = futures::future::pending().boxed();
        worker.spawn(task).await.unwrap();

        // the starting notice may have been sent before the token was
        // observed, but no terminal event ever follows
        while let Some(event) = rx.recv().await {
            assert!(!event.outcome.is_terminal());
        }
    }
}
