//! Core module containing the task execution and logging machinery
//!
//! This module contains:
//! - The bounded, leveled activity log and status indicator
//! - The worker that drives one task to its outcome
//! - The coordinator enforcing the single-active-task policy
//! - The sink context the interactive layer observes

mod coordinator;
mod log;
mod outcome;
mod sink;
mod worker;

pub use coordinator::*;
pub use log::*;
pub use outcome::*;
pub use sink::*;
pub use worker::*;
