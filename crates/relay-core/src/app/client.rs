//! Client - owns the publisher and creates task definitions.
//!
//! # Usage
//! ```ignore
//! let client = Client::in_memory(PublisherConfig::default());
//! let add = client.create_task("task.add");
//! let handle = relay_core::delay!(add, 1, 2).await?;
//! ```

use std::sync::Arc;

use crate::app::PublisherConfig;
use crate::impls::InMemoryPublisher;
use crate::ports::Publisher;
use crate::typed::TaskDefinition;

/// Entry point for callers: owns the publisher and hands out task definitions.
///
/// Every [`TaskDefinition`] created here shares the same publisher, so the
/// client can be dropped while definitions are still alive.
pub struct Client<P: ?Sized> {
    publisher: Arc<P>,
}

impl<P: ?Sized> Clone for Client<P> {
    fn clone(&self) -> Self {
        Self {
            publisher: Arc::clone(&self.publisher),
        }
    }
}

impl<P: Publisher + ?Sized> Client<P> {
    pub fn new(publisher: Arc<P>) -> Self {
        Self { publisher }
    }

    pub fn publisher(&self) -> &Arc<P> {
        &self.publisher
    }

    pub fn create_task(&self, name: impl Into<String>) -> TaskDefinition<P> {
        TaskDefinition::new(Arc::clone(&self.publisher), name)
    }
}

impl Client<InMemoryPublisher> {
    pub fn in_memory(config: PublisherConfig) -> Self {
        Self::new(Arc::new(InMemoryPublisher::new(config)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_share_the_client_publisher() {
        let client = Client::in_memory(PublisherConfig::default());

        let add = client.create_task("task.add");
        let mul = client.create_task("task.mul");

        assert_eq!(add.name(), "task.add");
        assert_eq!(mul.name(), "task.mul");
        assert!(Arc::ptr_eq(add.publisher(), client.publisher()));
        assert!(Arc::ptr_eq(mul.publisher(), client.publisher()));
    }
}
