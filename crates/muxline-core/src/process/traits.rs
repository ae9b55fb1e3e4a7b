//! Process runner trait definition.

use crate::process::errors::ProcessError;
use crate::process::types::LineStream;

/// Interface to the processes a segment depends on.
///
/// [`SystemRunner`](crate::process::SystemRunner) is the real implementation.
/// Implementations must be shareable across the render thread and the
/// background refresh thread.
pub trait CommandRunner: Send + Sync {
    /// Check if an executable is available in PATH.
    fn exists(&self, name: &str) -> bool;

    /// Run `argv` to completion and return its decoded stdout.
    ///
    /// A non-zero exit status is not an error: whatever the process printed
    /// on stdout is returned.
    fn output(&self, argv: &[&str]) -> Result<String, ProcessError>;

    /// Spawn `argv` and return a lazy stream over its stdout lines.
    fn read_lines(&self, argv: &[&str]) -> Result<LineStream, ProcessError>;
}
