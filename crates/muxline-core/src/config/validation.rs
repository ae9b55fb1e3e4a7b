//! Range checks for segment configuration.

use std::time::Duration;

use crate::config::defaults::MAX_NUM_AVERAGE_LOAD;
use crate::config::types::SegmentsConfig;
use crate::errors::ConfigError;

pub(crate) fn check_minimum_attached(minimum: u32) -> Result<(), ConfigError> {
    if minimum == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "attached_clients.minimum must be at least 1, got 0".to_string(),
        });
    }
    Ok(())
}

pub(crate) fn check_refresh_interval(secs: f64) -> Result<(), ConfigError> {
    let representable = Duration::try_from_secs_f64(secs).is_ok_and(|d| !d.is_zero());
    if !secs.is_finite() || secs <= 0.0 || !representable {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "mem_cpu_load.refresh_interval must be a positive number of seconds, got {}",
                secs
            ),
        });
    }
    Ok(())
}

pub(crate) fn check_num_average_load(count: u8) -> Result<(), ConfigError> {
    if count > MAX_NUM_AVERAGE_LOAD {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "mem_cpu_load.num_average_load must be between 0 and {}, got {}",
                MAX_NUM_AVERAGE_LOAD, count
            ),
        });
    }
    Ok(())
}

/// Validate every configured value, with defaults filled in.
///
/// Memory modes need no check here: unknown names already fail to parse.
pub fn validate_config(config: &SegmentsConfig) -> Result<(), ConfigError> {
    check_minimum_attached(config.attached_clients.minimum())?;
    check_refresh_interval(config.mem_cpu_load.refresh_interval())?;
    check_num_average_load(config.mem_cpu_load.num_average_load())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&SegmentsConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_minimum_rejected() {
        let mut config = SegmentsConfig::default();
        config.attached_clients.minimum = Some(0);
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("attached_clients.minimum"));
    }

    #[test]
    fn test_refresh_interval_must_be_positive_and_finite() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, 1e300, 1e-12] {
            let mut config = SegmentsConfig::default();
            config.mem_cpu_load.refresh_interval = Some(bad);
            assert!(validate_config(&config).is_err(), "{bad} should be rejected");
        }

        let mut config = SegmentsConfig::default();
        config.mem_cpu_load.refresh_interval = Some(0.25);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_num_average_load_range() {
        for ok in 0..=3 {
            let mut config = SegmentsConfig::default();
            config.mem_cpu_load.num_average_load = Some(ok);
            assert!(validate_config(&config).is_ok());
        }

        let mut config = SegmentsConfig::default();
        config.mem_cpu_load.num_average_load = Some(4);
        let err = validate_config(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: mem_cpu_load.num_average_load must be between 0 and 3, got 4"
        );
    }
}
