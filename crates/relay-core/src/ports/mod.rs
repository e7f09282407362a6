//! Ports: the seams to the outside world.
//!
//! Each trait hides one collaborator (broker publisher, wall clock, id
//! source) so the dispatch path can be exercised with in-memory or fixed
//! implementations.

pub mod clock;
pub mod id_generator;
pub mod publisher;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::publisher::Publisher;
