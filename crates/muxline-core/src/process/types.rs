use std::io::{BufRead, BufReader};
use std::process::{Child, ChildStdout};

use tracing::debug;

use crate::process::operations::decode_line;

/// Lazy, finite sequence of decoded output lines.
pub type LineStream = Box<dyn Iterator<Item = String> + Send>;

/// Stdout lines of a spawned child process.
///
/// The stream ends when the child closes stdout or a read fails. Dropping it
/// closes the pipe, kills the child if it is still running and reaps it, so
/// reading only the first line never leaves a zombie behind.
#[derive(Debug)]
pub struct ProcessLines {
    program: String,
    child: Child,
    reader: Option<BufReader<ChildStdout>>,
}

impl ProcessLines {
    pub(crate) fn new(program: String, child: Child, stdout: ChildStdout) -> Self {
        Self {
            program,
            child,
            reader: Some(BufReader::new(stdout)),
        }
    }
}

impl Iterator for ProcessLines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let reader = self.reader.as_mut()?;
        let mut buf = Vec::new();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                self.reader = None;
                None
            }
            Ok(_) => Some(decode_line(&buf)),
            Err(e) => {
                debug!(
                    event = "core.process.read_failed",
                    program = %self.program,
                    error = %e
                );
                self.reader = None;
                None
            }
        }
    }
}

impl Drop for ProcessLines {
    fn drop(&mut self) {
        self.reader = None;

        match self.child.try_wait() {
            Ok(Some(_)) => {}
            Ok(None) => {
                if let Err(e) = self.child.kill() {
                    debug!(
                        event = "core.process.kill_failed",
                        program = %self.program,
                        error = %e
                    );
                }
                if let Err(e) = self.child.wait() {
                    debug!(
                        event = "core.process.wait_failed",
                        program = %self.program,
                        error = %e
                    );
                }
            }
            Err(e) => {
                debug!(
                    event = "core.process.wait_failed",
                    program = %self.program,
                    error = %e
                );
            }
        }
    }
}
