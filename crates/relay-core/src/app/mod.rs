//! Caller-facing wiring: the client and its configuration.

pub mod client;
pub mod config;

pub use self::client::Client;
pub use self::config::PublisherConfig;
