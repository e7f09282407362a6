//! DispatchRequest: the arguments of one dispatch, after validation.

use serde_json::Value;

use crate::domain::{Args, ExecutionOptions, Kwargs, RelayError, TaskId};

/// Everything a single dispatch hands to the publisher besides the task name.
///
/// Built per call and consumed by [`TaskDefinition::send`](super::TaskDefinition::send);
/// nothing keeps it around afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchRequest {
    pub args: Args,
    pub kwargs: Kwargs,
    pub options: Option<ExecutionOptions>,
    /// `None` leaves id generation to the publisher.
    pub task_id: Option<TaskId>,
}

impl DispatchRequest {
    /// Build a request from untyped caller input.
    ///
    /// `args` must be an array and `kwargs` an object when present; absent or
    /// `null` values default to empty. Fails with `InvalidArgumentShape` otherwise.
    pub fn from_values(
        args: Option<Value>,
        kwargs: Option<Value>,
        options: Option<ExecutionOptions>,
    ) -> Result<Self, RelayError> {
        let args = args.map(Args::from_value).transpose()?.unwrap_or_default();
        let kwargs = kwargs.map(Kwargs::from_value).transpose()?.unwrap_or_default();
        Ok(Self {
            args,
            kwargs,
            options,
            task_id: None,
        })
    }

    pub fn with_options(mut self, options: ExecutionOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_task_id(mut self, task_id: TaskId) -> Self {
        self.task_id = Some(task_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_values_default_to_empty() {
        let req = DispatchRequest::from_values(None, None, None).unwrap();
        assert!(req.args.is_empty());
        assert!(req.kwargs.is_empty());
        assert_eq!(req.options, None);
        assert_eq!(req.task_id, None);
    }

    #[test]
    fn null_values_count_as_absent() {
        let req = DispatchRequest::from_values(Some(Value::Null), Some(Value::Null), None).unwrap();
        assert_eq!(req, DispatchRequest::default());
    }

    #[test]
    fn args_are_checked_before_kwargs() {
        let err = DispatchRequest::from_values(Some(json!("x")), Some(json!([1])), None).unwrap_err();
        assert!(matches!(
            err,
            RelayError::InvalidArgumentShape {
                argument: crate::domain::ArgumentKind::Args,
                ..
            }
        ));
    }

    #[test]
    fn options_are_kept_verbatim() {
        let opts = ExecutionOptions::new().queue("fast").extra("shadow", "v2");
        let req = DispatchRequest::from_values(Some(json!([])), Some(json!({})), Some(opts.clone()))
            .unwrap();
        assert_eq!(req.options, Some(opts));
    }
}
