//! Publisher port: the broker-facing side of a dispatch.

use async_trait::async_trait;

use crate::domain::{Args, ExecutionOptions, Kwargs, RelayError, TaskId};

/// Places a named job on a broker and returns a tracking handle.
///
/// Implementations own everything past argument validation: id generation
/// when `task_id` is `None`, default routing, serialization, transport and
/// retry. The call should return as soon as the job is accepted, not when
/// it has run.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Handle returned to the caller; task definitions never look inside it.
    type Handle: Send;

    async fn enqueue(
        &self,
        task_name: &str,
        args: Args,
        kwargs: Kwargs,
        task_id: Option<TaskId>,
        options: Option<ExecutionOptions>,
    ) -> Result<Self::Handle, RelayError>;
}

