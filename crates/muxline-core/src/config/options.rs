//! Validated, immutable segment options.
//!
//! Built once when a segment is constructed; out-of-range values are rejected
//! here so nothing on the render path can fail on configuration.

use std::time::Duration;

use crate::config::defaults::{
    DEFAULT_MINIMUM_ATTACHED, DEFAULT_NUM_AVERAGE_LOAD, DEFAULT_NUM_CPU_BARS,
    DEFAULT_REFRESH_INTERVAL_SECS,
};
use crate::config::types::{AttachedClientsConfig, MemCpuLoadConfig, MemoryMode};
use crate::config::validation::{
    check_minimum_attached, check_num_average_load, check_refresh_interval,
};
use crate::errors::ConfigError;

/// Options for the `attached_clients` segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachedClientsOptions {
    minimum: u32,
}

impl AttachedClientsOptions {
    pub fn new(minimum: u32) -> Result<Self, ConfigError> {
        check_minimum_attached(minimum)?;
        Ok(Self { minimum })
    }

    pub fn from_config(config: &AttachedClientsConfig) -> Result<Self, ConfigError> {
        Self::new(config.minimum())
    }

    pub fn minimum(&self) -> u32 {
        self.minimum
    }
}

impl Default for AttachedClientsOptions {
    fn default() -> Self {
        Self {
            minimum: DEFAULT_MINIMUM_ATTACHED,
        }
    }
}

/// Options for the `mem_cpu_load` segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemCpuLoadOptions {
    refresh_interval: f64,
    num_cpu_bars: u32,
    memory_mode: MemoryMode,
    num_average_load: u8,
}

impl MemCpuLoadOptions {
    pub fn new(
        refresh_interval: f64,
        num_cpu_bars: u32,
        memory_mode: MemoryMode,
        num_average_load: u8,
    ) -> Result<Self, ConfigError> {
        check_refresh_interval(refresh_interval)?;
        check_num_average_load(num_average_load)?;
        Ok(Self {
            refresh_interval,
            num_cpu_bars,
            memory_mode,
            num_average_load,
        })
    }

    pub fn from_config(config: &MemCpuLoadConfig) -> Result<Self, ConfigError> {
        Self::new(
            config.refresh_interval(),
            config.num_cpu_bars(),
            config.memory_mode(),
            config.num_average_load(),
        )
    }

    /// Refresh interval in seconds.
    pub fn refresh_interval(&self) -> f64 {
        self.refresh_interval
    }

    /// Refresh interval as a [`Duration`].
    pub fn refresh_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.refresh_interval)
            .unwrap_or(Duration::from_secs(1))
    }

    pub fn num_cpu_bars(&self) -> u32 {
        self.num_cpu_bars
    }

    pub fn memory_mode(&self) -> MemoryMode {
        self.memory_mode
    }

    pub fn num_average_load(&self) -> u8 {
        self.num_average_load
    }
}

impl Default for MemCpuLoadOptions {
    fn default() -> Self {
        Self {
            refresh_interval: DEFAULT_REFRESH_INTERVAL_SECS,
            num_cpu_bars: DEFAULT_NUM_CPU_BARS,
            memory_mode: MemoryMode::Default,
            num_average_load: DEFAULT_NUM_AVERAGE_LOAD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config_defaults() {
        let from_empty = MemCpuLoadOptions::from_config(&MemCpuLoadConfig::default()).unwrap();
        assert_eq!(from_empty, MemCpuLoadOptions::default());

        let attached = AttachedClientsOptions::from_config(&AttachedClientsConfig::default());
        assert_eq!(attached.unwrap(), AttachedClientsOptions::default());
    }

    #[test]
    fn test_invalid_values_rejected_at_construction() {
        assert!(AttachedClientsOptions::new(0).is_err());
        assert!(MemCpuLoadOptions::new(1.0, 10, MemoryMode::Default, 4).is_err());
        assert!(MemCpuLoadOptions::new(0.0, 10, MemoryMode::Default, 3).is_err());
    }

    #[test]
    fn test_refresh_duration() {
        let options = MemCpuLoadOptions::new(2.5, 10, MemoryMode::Free, 2).unwrap();
        assert_eq!(options.refresh_duration(), Duration::from_millis(2500));
        assert_eq!(options.memory_mode(), MemoryMode::Free);
        assert_eq!(options.num_average_load(), 2);
    }
}
