//! Worker primitives shared by vesta state stores.
//!
//! * [`GenerationClock`] / [`GenerationGate`] tag asynchronous requests so that
//!   only the latest-issued one may publish its result.
//! * [`spawn`] runs detached work on the ambient tokio runtime, falling back to
//!   a small shared runtime when called outside of one.

mod class;
mod spawn;
mod token;

pub use class::TaskClass;
pub use spawn::spawn;
pub use token::{Generation, GenerationClock, GenerationGate};
