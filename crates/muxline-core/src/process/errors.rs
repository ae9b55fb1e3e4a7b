use crate::errors::MuxlineError;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Cannot run an empty command")]
    EmptyCommand,

    #[error("Failed to spawn '{program}': {message}")]
    SpawnFailed { program: String, message: String },

    #[error("Process '{program}' has no stdout pipe")]
    MissingStdout { program: String },
}

impl MuxlineError for ProcessError {
    fn error_code(&self) -> &'static str {
        match self {
            ProcessError::EmptyCommand => "PROCESS_EMPTY_COMMAND",
            ProcessError::SpawnFailed { .. } => "PROCESS_SPAWN_FAILED",
            ProcessError::MissingStdout { .. } => "PROCESS_MISSING_STDOUT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_failed_display() {
        let error = ProcessError::SpawnFailed {
            program: "tmux".to_string(),
            message: "No such file or directory".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to spawn 'tmux': No such file or directory"
        );
        assert_eq!(error.error_code(), "PROCESS_SPAWN_FAILED");
        assert!(!error.is_user_error());
    }
}
