//! Execution options attached to a single dispatch.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Routing and scheduling hints for one dispatch.
///
/// Every field is optional. The task definition passes the whole struct to
/// the publisher untouched; interpreting it (default queue, eta, ...) is the
/// publisher's job. Unknown keys are kept in `extra` so callers can carry
/// broker-specific options without a new release.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionOptions {
    /// Target queue, overriding the task's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_key: Option<String>,

    /// 0 (lowest) to 255.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,

    /// Delay before the task becomes eligible to run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countdown_secs: Option<u64>,

    /// Discard the task if it has not started this many seconds after publish.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_secs: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExecutionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(mut self, queue: impl Into<String>) -> Self {
        self.queue = Some(queue.into());
        self
    }

    pub fn routing_key(mut self, routing_key: impl Into<String>) -> Self {
        self.routing_key = Some(routing_key.into());
        self
    }

    pub fn priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn countdown_secs(mut self, secs: u64) -> Self {
        self.countdown_secs = Some(secs);
        self
    }

    pub fn expires_secs(mut self, secs: u64) -> Self {
        self.expires_secs = Some(secs);
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
