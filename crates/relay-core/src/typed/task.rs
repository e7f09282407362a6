//! TaskDefinition - a named task bound to a publisher.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use super::request::DispatchRequest;
use crate::domain::{Args, ExecutionOptions, Kwargs, RelayError};
use crate::ports::Publisher;

/// A named unit of deferred work.
///
/// Holds a shared reference to the publisher and the task name, both fixed at
/// construction. Dispatching validates the arguments, makes exactly one
/// `enqueue` call and hands back whatever the publisher returned. It keeps no
/// state between calls, so one definition can be cloned into many tasks and
/// used concurrently.
///
/// ```ignore
/// let add = client.create_task("task.add");
/// let handle = relay_core::delay!(add, 1, 2).await?;
/// ```
pub struct TaskDefinition<P: ?Sized> {
    publisher: Arc<P>,
    name: String,
}

impl<P: ?Sized> Clone for TaskDefinition<P> {
    fn clone(&self) -> Self {
        Self {
            publisher: Arc::clone(&self.publisher),
            name: self.name.clone(),
        }
    }
}

impl<P: ?Sized> fmt::Debug for TaskDefinition<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskDefinition")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<P: Publisher + ?Sized> TaskDefinition<P> {
    /// Bind `name` to `publisher`. The name is not checked; naming rules
    /// belong to the broker.
    pub fn new(publisher: Arc<P>, name: impl Into<String>) -> Self {
        Self {
            publisher,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn publisher(&self) -> &Arc<P> {
        &self.publisher
    }

    /// Positional-only shorthand for [`dispatch`](Self::dispatch).
    ///
    /// See the [`delay!`](crate::delay) macro for the variadic form.
    pub async fn delay(&self, args: impl Into<Args>) -> Result<P::Handle, RelayError> {
        self.dispatch(Some(args.into()), None, None).await
    }

    /// Enqueue this task.
    ///
    /// Absent `args`/`kwargs` are sent as empty containers. `options` goes to
    /// the publisher exactly as given, `None` included, and no task id is
    /// supplied.
    pub async fn dispatch(
        &self,
        args: Option<Args>,
        kwargs: Option<Kwargs>,
        options: Option<ExecutionOptions>,
    ) -> Result<P::Handle, RelayError> {
        let request = DispatchRequest {
            args: args.unwrap_or_default(),
            kwargs: kwargs.unwrap_or_default(),
            options,
            task_id: None,
        };
        self.send(request).await
    }

    /// [`dispatch`](Self::dispatch) for untyped input.
    ///
    /// `null` counts as absent. Rejects any other non-array `args` or
    /// non-object `kwargs` with `InvalidArgumentShape` before the publisher
    /// is touched.
    pub async fn dispatch_value(
        &self,
        args: Option<Value>,
        kwargs: Option<Value>,
        options: Option<ExecutionOptions>,
    ) -> Result<P::Handle, RelayError> {
        let request = match DispatchRequest::from_values(args, kwargs, options) {
            Ok(request) => request,
            Err(err) => {
                warn!(task = %self.name, error = %err, "rejected dispatch");
                return Err(err);
            }
        };
        self.send(request).await
    }

    /// Enqueue a prepared request, including its `task_id` if set.
    pub async fn send(&self, request: DispatchRequest) -> Result<P::Handle, RelayError> {
        let DispatchRequest {
            args,
            kwargs,
            options,
            task_id,
        } = request;

        debug!(
            task = %self.name,
            args = args.len(),
            kwargs = kwargs.len(),
            queue = options.as_ref().and_then(|o| o.queue.as_deref()),
            "dispatching task"
        );

        self.publisher
            .enqueue(&self.name, args, kwargs, task_id, options)
            .await
    }
}

/// Variadic [`TaskDefinition::delay`]: `delay!(task, 1, "two", [3])`.
///
/// Each argument is converted with `serde_json::json!`. Expands to the
/// `delay` future, so it still needs `.await`.
#[macro_export]
macro_rules! delay {
    ($task:expr $(, $arg:expr)* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::__private::serde_json::Value> =
            ::std::vec![$($crate::__private::serde_json::json!($arg)),*];
        $task.delay(args)
    }};
}
