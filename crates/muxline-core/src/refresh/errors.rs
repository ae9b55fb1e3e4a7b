use std::time::Duration;

use crate::errors::MuxlineError;

#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("Refresh interval must be positive, got {interval:?}")]
    InvalidInterval { interval: Duration },
}

impl MuxlineError for RefreshError {
    fn error_code(&self) -> &'static str {
        match self {
            RefreshError::InvalidInterval { .. } => "REFRESH_INVALID_INTERVAL",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

impl From<RefreshError> for crate::errors::ConfigError {
    fn from(e: RefreshError) -> Self {
        crate::errors::ConfigError::InvalidConfiguration {
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigError;

    #[test]
    fn test_invalid_interval_becomes_config_error() {
        let error = RefreshError::InvalidInterval {
            interval: Duration::ZERO,
        };
        assert_eq!(error.error_code(), "REFRESH_INVALID_INTERVAL");

        let config_error = ConfigError::from(error);
        assert_eq!(
            config_error.to_string(),
            "Invalid configuration: Refresh interval must be positive, got 0ns"
        );
    }
}
