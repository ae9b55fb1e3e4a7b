//! Default values for segment configuration.

use crate::config::types::{AttachedClientsConfig, MemCpuLoadConfig, MemoryMode};

/// Attached clients needed before the count is shown.
pub const DEFAULT_MINIMUM_ATTACHED: u32 = 1;

/// Seconds between `tmux-mem-cpu-load` runs.
pub const DEFAULT_REFRESH_INTERVAL_SECS: f64 = 1.0;

/// Bars in the CPU usage graph.
pub const DEFAULT_NUM_CPU_BARS: u32 = 10;

/// Load averages shown (1, 5 and 15 minutes).
pub const DEFAULT_NUM_AVERAGE_LOAD: u8 = 3;

/// Largest number of load averages `tmux-mem-cpu-load` can print.
pub const MAX_NUM_AVERAGE_LOAD: u8 = 3;

impl AttachedClientsConfig {
    /// Returns the minimum attached count, defaulting to 1.
    pub fn minimum(&self) -> u32 {
        self.minimum.unwrap_or(DEFAULT_MINIMUM_ATTACHED)
    }
}

impl MemCpuLoadConfig {
    /// Returns the refresh interval in seconds, defaulting to 1.0.
    pub fn refresh_interval(&self) -> f64 {
        self.refresh_interval
            .unwrap_or(DEFAULT_REFRESH_INTERVAL_SECS)
    }

    /// Returns the number of CPU bars, defaulting to 10.
    pub fn num_cpu_bars(&self) -> u32 {
        self.num_cpu_bars.unwrap_or(DEFAULT_NUM_CPU_BARS)
    }

    /// Returns the memory mode, defaulting to [`MemoryMode::Default`].
    pub fn memory_mode(&self) -> MemoryMode {
        self.memory_mode.unwrap_or_default()
    }

    /// Returns the number of load averages, defaulting to 3.
    pub fn num_average_load(&self) -> u8 {
        self.num_average_load.unwrap_or(DEFAULT_NUM_AVERAGE_LOAD)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::types::{MemoryMode, SegmentsConfig};

    #[test]
    fn test_segments_config_defaults() {
        let config = SegmentsConfig::default();
        assert_eq!(config.attached_clients.minimum(), 1);
        assert_eq!(config.mem_cpu_load.refresh_interval(), 1.0);
        assert_eq!(config.mem_cpu_load.num_cpu_bars(), 10);
        assert_eq!(config.mem_cpu_load.memory_mode(), MemoryMode::Default);
        assert_eq!(config.mem_cpu_load.num_average_load(), 3);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: SegmentsConfig = toml::from_str(
            r#"
[mem_cpu_load]
num_cpu_bars = 4
"#,
        )
        .unwrap();

        assert_eq!(config.mem_cpu_load.num_cpu_bars(), 4);
        assert_eq!(config.mem_cpu_load.refresh_interval(), 1.0);
        assert_eq!(config.mem_cpu_load.num_average_load(), 3);
        assert_eq!(config.attached_clients.minimum(), 1);
    }

    #[test]
    fn test_explicit_zero_preserved() {
        // serde defaults only apply to missing fields
        let config: SegmentsConfig = toml::from_str(
            r#"
[mem_cpu_load]
num_average_load = 0
"#,
        )
        .unwrap();
        assert_eq!(config.mem_cpu_load.num_average_load(), 0);
    }
}
