//! Canned-output runner for tests, available with the `test-support` feature.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, PoisonError};

use crate::process::errors::ProcessError;
use crate::process::operations::decode_line;
use crate::process::traits::CommandRunner;
use crate::process::types::LineStream;

/// Runner answering from a table of argv -> stdout.
///
/// Unknown argvs produce empty output, like a tmux query outside a session.
#[derive(Debug, Default)]
pub struct FakeRunner {
    executables: HashSet<String>,
    outputs: Mutex<HashMap<Vec<String>, String>>,
    failing: Mutex<bool>,
    calls: Mutex<Vec<Vec<String>>>,
}

fn key(argv: &[&str]) -> Vec<String> {
    argv.iter().map(|s| s.to_string()).collect()
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_executable(mut self, name: &str) -> Self {
        self.executables.insert(name.to_string());
        self
    }

    pub fn with_output(self, argv: &[&str], stdout: &str) -> Self {
        self.set_output(argv, stdout);
        self
    }

    pub fn set_output(&self, argv: &[&str], stdout: &str) {
        self.outputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key(argv), stdout.to_string());
    }

    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap_or_else(PoisonError::into_inner) = failing;
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn run(&self, argv: &[&str]) -> Result<String, ProcessError> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(key(argv));
        if *self.failing.lock().unwrap_or_else(PoisonError::into_inner) {
            return Err(ProcessError::SpawnFailed {
                program: argv.first().map(|s| s.to_string()).unwrap_or_default(),
                message: "simulated spawn failure".to_string(),
            });
        }
        Ok(self
            .outputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key(argv))
            .cloned()
            .unwrap_or_default())
    }
}

impl CommandRunner for FakeRunner {
    fn exists(&self, name: &str) -> bool {
        self.executables.contains(name)
    }

    fn output(&self, argv: &[&str]) -> Result<String, ProcessError> {
        self.run(argv)
    }

    fn read_lines(&self, argv: &[&str]) -> Result<LineStream, ProcessError> {
        let stdout = self.run(argv)?;
        let lines: Vec<String> = stdout
            .as_bytes()
            .split_inclusive(|byte| *byte == b'\n')
            .map(decode_line)
            .collect();
        Ok(Box::new(lines.into_iter()))
    }
}
