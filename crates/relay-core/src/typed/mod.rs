//! Typed dispatch API.
//!
//! [`TaskDefinition`] is what callers hold; [`DispatchRequest`] is the
//! validated argument bundle one dispatch turns into.

pub mod request;
pub mod task;

pub use self::request::DispatchRequest;
pub use self::task::TaskDefinition;
