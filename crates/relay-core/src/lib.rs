//! relay-core
//!
//! Client-side task dispatch for a distributed task queue.
//!
//! - **domain**: ids, arguments, execution options, messages, errors
//! - **ports**: `Publisher`, `Clock`, `IdGenerator`
//! - **typed**: `TaskDefinition`, `DispatchRequest`, the `delay!` macro
//! - **app**: `Client`, `PublisherConfig`
//! - **impls**: `InMemoryPublisher`

pub mod app;
pub mod domain;
pub mod impls;
pub mod observability;
pub mod ports;
pub mod typed;

pub use app::{Client, PublisherConfig};
pub use domain::{Args, AsyncResult, ExecutionOptions, Kwargs, RelayError, TaskId};
pub use ports::Publisher;
pub use typed::{DispatchRequest, TaskDefinition};

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}
