use std::process::{Command, Stdio};

use tracing::debug;

use crate::process::errors::ProcessError;
use crate::process::traits::CommandRunner;
use crate::process::types::{LineStream, ProcessLines};

/// Runs real processes found through PATH.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

/// Split an argv into program and arguments, rejecting an empty argv.
fn split_argv<'a>(argv: &'a [&'a str]) -> Result<(&'a str, &'a [&'a str]), ProcessError> {
    argv.split_first()
        .map(|(program, args)| (*program, args))
        .ok_or(ProcessError::EmptyCommand)
}

/// Decode one raw output line, dropping only its `\n` terminator.
///
/// Anything else, including a trailing `\r`, is kept verbatim. Invalid UTF-8
/// is replaced rather than rejected: the text only ends up on a status line.
pub fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    String::from_utf8_lossy(line).into_owned()
}

impl CommandRunner for SystemRunner {
    fn exists(&self, name: &str) -> bool {
        which::which(name).is_ok()
    }

    fn output(&self, argv: &[&str]) -> Result<String, ProcessError> {
        let (program, args) = split_argv(argv)?;

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ProcessError::SpawnFailed {
                program: program.to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(
                event = "core.process.exit_nonzero",
                program = program,
                code = output.status.code().unwrap_or(-1),
                stderr = %stderr.trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn read_lines(&self, argv: &[&str]) -> Result<LineStream, ProcessError> {
        let (program, args) = split_argv(argv)?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ProcessError::SpawnFailed {
                program: program.to_string(),
                message: e.to_string(),
            })?;

        let Some(stdout) = child.stdout.take() else {
            // Reap before reporting; the child is useless without its pipe.
            if let Err(e) = child.kill() {
                debug!(event = "core.process.kill_failed", program = program, error = %e);
            }
            if let Err(e) = child.wait() {
                debug!(event = "core.process.wait_failed", program = program, error = %e);
            }
            return Err(ProcessError::MissingStdout {
                program: program.to_string(),
            });
        };

        debug!(event = "core.process.spawn_completed", program = program);

        Ok(Box::new(ProcessLines::new(
            program.to_string(),
            child,
            stdout,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_line_strips_newline_only() {
        assert_eq!(decode_line(b"abc\n"), "abc");
        assert_eq!(decode_line(b"abc\r\n"), "abc\r");
        assert_eq!(decode_line(b"abc\r"), "abc\r");
        assert_eq!(decode_line(b"abc"), "abc");
        assert_eq!(decode_line(b"\n"), "");
    }

    #[test]
    fn test_decode_line_keeps_inner_whitespace() {
        assert_eq!(decode_line(b"  L:0.50 0.40  \n"), "  L:0.50 0.40  ");
    }

    #[test]
    fn test_decode_line_replaces_invalid_utf8() {
        assert_eq!(decode_line(b"a\xffb\n"), "a\u{fffd}b");
    }

    #[test]
    fn test_empty_argv_is_rejected() {
        let runner = SystemRunner::new();
        assert!(matches!(runner.output(&[]), Err(ProcessError::EmptyCommand)));
        assert!(matches!(
            runner.read_lines(&[]),
            Err(ProcessError::EmptyCommand)
        ));
    }

    #[test]
    fn test_missing_binary_is_spawn_failure() {
        let runner = SystemRunner::new();
        let result = runner.output(&["muxline-definitely-not-installed-binary"]);
        assert!(matches!(result, Err(ProcessError::SpawnFailed { .. })));
        assert!(!runner.exists("muxline-definitely-not-installed-binary"));
    }

    #[cfg(unix)]
    mod unix {
        use super::super::*;
        use std::fs;
        use std::path::PathBuf;
        use tempfile::TempDir;

        /// Scripts are run through `sh`, never exec'd directly.
        fn write_script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
            let path = dir.path().join(name);
            fs::write(&path, format!("{body}\n")).unwrap();
            path
        }

        #[test]
        fn test_output_returns_stdout() {
            let runner = SystemRunner::new();
            let out = runner.output(&["sh", "-c", "printf 'main\\nother\\n'"]).unwrap();
            assert_eq!(out, "main\nother\n");
        }

        #[test]
        fn test_output_ignores_exit_status() {
            let runner = SystemRunner::new();
            let out = runner
                .output(&["sh", "-c", "printf 'partial'; echo oops >&2; exit 3"])
                .unwrap();
            assert_eq!(out, "partial");
        }

        #[test]
        fn test_read_lines_yields_decoded_lines() {
            let dir = TempDir::new().unwrap();
            let script = write_script(
                &dir,
                "stats",
                "echo 'C:23%'\nprintf 'carriage\\r\\n'\necho 'last'",
            );
            let script = script.to_str().unwrap();

            let runner = SystemRunner::new();
            let lines: Vec<String> = runner.read_lines(&["sh", script]).unwrap().collect();
            assert_eq!(
                lines,
                vec!["C:23%".to_string(), "carriage\r".to_string(), "last".to_string()]
            );
        }

        #[test]
        fn test_read_lines_empty_output() {
            let runner = SystemRunner::new();
            let mut lines = runner.read_lines(&["true"]).unwrap();
            assert!(lines.next().is_none());
            assert!(lines.next().is_none());
        }

        #[test]
        fn test_dropping_stream_after_first_line_kills_child() {
            let dir = TempDir::new().unwrap();
            let script = write_script(&dir, "forever", "echo first\nwhile true; do sleep 1; done");
            let script = script.to_str().unwrap();

            let runner = SystemRunner::new();
            let mut lines = runner.read_lines(&["sh", script]).unwrap();
            assert_eq!(lines.next().as_deref(), Some("first"));
            // Must return promptly instead of waiting on the endless loop.
            drop(lines);
        }

        #[test]
        fn test_exists_finds_common_binary() {
            let runner = SystemRunner::new();
            assert!(runner.exists("sh"));
        }
    }
}
