//! External process collaborators.
//!
//! Segments never spawn processes directly; they go through a
//! [`CommandRunner`] so that lookups and output parsing can be exercised
//! against canned output in tests.

pub mod errors;
pub mod operations;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use errors::ProcessError;
pub use operations::{SystemRunner, decode_line};
pub use traits::CommandRunner;
pub use types::{LineStream, ProcessLines};
