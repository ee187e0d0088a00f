use crate::core::TaskOutcome;

/// Message sent from a background worker to the coordinator.
///
/// Every event carries the generation of the submission that produced it so
/// the coordinator can recognize and discard outcomes from a superseded
/// task, even if that task ran to completion in the background.
#[derive(Debug, Clone)]
pub struct WorkerEvent {
    /// Generation counter value of the submission that produced this event
    pub generation: u64,

    /// The outcome being reported
    pub outcome: TaskOutcome,
}

impl WorkerEvent {
    pub fn new(generation: u64, outcome: TaskOutcome) -> Self {
        Self {
            generation,
            outcome,
        }
    }
}
