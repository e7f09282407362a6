//! Domain model (ids, arguments, options, messages, errors).

pub mod args;
pub mod errors;
pub mod ids;
pub mod message;
pub mod options;
pub mod result;

pub use args::{Args, Kwargs};
pub use errors::{ArgumentKind, RelayError};
pub use ids::TaskId;
pub use message::TaskMessage;
pub use options::ExecutionOptions;
pub use result::AsyncResult;
