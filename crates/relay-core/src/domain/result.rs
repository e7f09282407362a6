//! AsyncResult - tracking handle for a published task.
//!
//! # Scope
//! The handle only names the job (id, task, queue). Waiting on or fetching
//! the task's outcome belongs to a result backend, which this crate does not
//! provide.

use serde::{Deserialize, Serialize};

use super::ids::TaskId;

/// Tracking handle for a published task.
///
/// Only identifies the job; polling a result backend is not part of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsyncResult {
    task_id: TaskId,
    task_name: String,
    queue: String,
}

impl AsyncResult {
    pub fn new(task_id: TaskId, task_name: impl Into<String>, queue: impl Into<String>) -> Self {
        Self {
            task_id,
            task_name: task_name.into(),
            queue: queue.into(),
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    pub fn queue(&self) -> &str {
        &self.queue
    }
}
