//! Background refresh of values that are expensive to compute.
//!
//! A [`RefreshScheduler`] caches the last value produced by an update
//! function and recomputes it on a worker thread at most once per interval,
//! so the render path only pays for the very first computation.

pub mod clock;
pub mod errors;
pub mod scheduler;

pub use clock::{Clock, SystemClock};
pub use errors::RefreshError;
pub use scheduler::{RefreshScheduler, UpdateError, UpdateResult};
