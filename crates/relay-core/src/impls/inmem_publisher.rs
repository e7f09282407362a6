//! InMemoryPublisher - development publisher that keeps messages in memory.
//!
//! Resolves routing the way a broker-facing publisher would (default queue,
//! generated ids, eta/expiry from the clock) and appends the resulting
//! [`TaskMessage`] to a per-queue FIFO. Nothing is sent anywhere.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::app::PublisherConfig;
use crate::domain::{
    Args, AsyncResult, ExecutionOptions, Kwargs, RelayError, TaskId, TaskMessage,
};
use crate::observability::PublishCounts;
use crate::ports::{Clock, IdGenerator, Publisher, SystemClock, UlidGenerator};

#[derive(Default)]
struct State {
    queues: HashMap<String, VecDeque<TaskMessage>>,
    published: u64,
    rejected: u64,
}

pub struct InMemoryPublisher {
    config: PublisherConfig,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    state: Mutex<State>,
}

impl InMemoryPublisher {
    pub fn new(config: PublisherConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Use `clock` both for timestamps and for the time part of generated ids.
    pub fn with_clock<C: Clock + Clone + 'static>(config: PublisherConfig, clock: C) -> Self {
        Self {
            config,
            clock: Arc::new(clock.clone()),
            ids: Arc::new(UlidGenerator::new(clock)),
            state: Mutex::new(State::default()),
        }
    }

    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    /// Messages waiting on `queue`, oldest first. Leaves them in place.
    pub async fn pending(&self, queue: &str) -> Vec<TaskMessage> {
        let state = self.state.lock().await;
        state
            .queues
            .get(queue)
            .map(|q| q.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Remove and return everything waiting on `queue`, oldest first.
    pub async fn drain(&self, queue: &str) -> Vec<TaskMessage> {
        let mut state = self.state.lock().await;
        state
            .queues
            .remove(queue)
            .map(Vec::from)
            .unwrap_or_default()
    }

    pub async fn counts(&self) -> PublishCounts {
        let state = self.state.lock().await;
        PublishCounts {
            published: state.published,
            rejected: state.rejected,
            pending: state
                .queues
                .iter()
                .filter(|(_, q)| !q.is_empty())
                .map(|(name, q)| (name.clone(), q.len()))
                .collect(),
        }
    }

    fn build_message(
        &self,
        task_name: &str,
        args: Args,
        kwargs: Kwargs,
        task_id: Option<TaskId>,
        options: Option<ExecutionOptions>,
    ) -> TaskMessage {
        let options = options.unwrap_or_default();
        let now = self.clock.now();
        // Out-of-range offsets leave the field unset rather than panicking.
        let after = |secs: u64| {
            i64::try_from(secs)
                .ok()
                .and_then(Duration::try_seconds)
                .and_then(|d| now.checked_add_signed(d))
        };

        TaskMessage {
            id: task_id.unwrap_or_else(|| self.ids.generate_task_id()),
            task: task_name.to_string(),
            args,
            kwargs,
            queue: options
                .queue
                .unwrap_or_else(|| self.config.default_queue.clone()),
            routing_key: options.routing_key,
            priority: options.priority,
            eta: options.countdown_secs.and_then(after),
            expires: options.expires_secs.and_then(after),
            created_at: now,
        }
    }
}

impl Default for InMemoryPublisher {
    fn default() -> Self {
        Self::new(PublisherConfig::default())
    }
}

#[async_trait]
impl Publisher for InMemoryPublisher {
    type Handle = AsyncResult;

    async fn enqueue(
        &self,
        task_name: &str,
        args: Args,
        kwargs: Kwargs,
        task_id: Option<TaskId>,
        options: Option<ExecutionOptions>,
    ) -> Result<AsyncResult, RelayError> {
        let message = self.build_message(task_name, args, kwargs, task_id, options);

        let mut state = self.state.lock().await;
        let len = state.queues.get(&message.queue).map_or(0, VecDeque::len);
        if let Some(max) = self.config.max_queue_len
            && len >= max
        {
            state.rejected += 1;
            warn!(task = task_name, queue = %message.queue, max, "queue full, rejecting task");
            return Err(RelayError::publish(format!(
                "queue {} is full ({max} messages)",
                message.queue
            )));
        }

        let handle = AsyncResult::new(message.id, task_name, message.queue.clone());
        debug!(task = task_name, id = %message.id, queue = %message.queue, "task published");
        state
            .queues
            .entry(message.queue.clone())
            .or_default()
            .push_back(message);
        state.published += 1;
        Ok(handle)
    }
}
