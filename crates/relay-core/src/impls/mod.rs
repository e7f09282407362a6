//! Port implementations for development and tests.
//!
//! Broker-backed publishers live in their own crates.

pub mod inmem_publisher;

pub use self::inmem_publisher::InMemoryPublisher;
