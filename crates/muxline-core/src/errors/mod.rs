use std::error::Error;

/// Base trait for all muxline errors
pub trait MuxlineError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error was caused by user input (config values, segment names)
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Unknown segment '{name}'. Supported segments: attached_clients, mem_cpu_load")]
    UnknownSegment { name: String },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl MuxlineError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::UnknownSegment { .. } => "UNKNOWN_SEGMENT",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. }
                | ConfigError::InvalidConfiguration { .. }
                | ConfigError::UnknownSegment { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_across_modules() {
        let errors: Vec<Box<dyn MuxlineError>> = vec![
            Box::new(ConfigError::ConfigParseError {
                message: "bad".to_string(),
            }),
            Box::new(crate::process::ProcessError::EmptyCommand),
            Box::new(crate::refresh::RefreshError::InvalidInterval {
                interval: std::time::Duration::ZERO,
            }),
        ];

        let user_errors: Vec<bool> = errors.iter().map(|e| e.is_user_error()).collect();
        assert_eq!(user_errors, vec![true, false, true]);
        assert!(errors.iter().all(|e| !e.error_code().is_empty()));
    }

    #[test]
    fn test_unknown_segment_display() {
        let error = ConfigError::UnknownSegment {
            name: "battery".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unknown segment 'battery'. Supported segments: attached_clients, mem_cpu_load"
        );
        assert_eq!(error.error_code(), "UNKNOWN_SEGMENT");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_invalid_configuration_is_user_error() {
        let error = ConfigError::InvalidConfiguration {
            message: "num_average_load must be between 0 and 3, got 4".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration: num_average_load must be between 0 and 3, got 4"
        );
        assert_eq!(error.error_code(), "INVALID_CONFIGURATION");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_io_error_is_not_user_error() {
        let error = ConfigError::from(std::io::Error::other("disk gone"));
        assert_eq!(error.error_code(), "CONFIG_IO_ERROR");
        assert!(!error.is_user_error());
    }
}
