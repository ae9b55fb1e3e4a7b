//! Configuration type definitions.
//!
//! These mirror the TOML file. Every field is optional so that a project file
//! can override a single value from the user file; the resolved, validated
//! values live in [`options`](super::options).
//!
//! # Example Configuration
//!
//! ```toml
//! [attached_clients]
//! minimum = 1
//!
//! [mem_cpu_load]
//! refresh_interval = 1.0
//! num_cpu_bars = 10
//! memory_mode = "default"
//! num_average_load = 3
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SegmentsConfig {
    /// Settings for the `attached_clients` segment
    #[serde(default)]
    pub attached_clients: AttachedClientsConfig,

    /// Settings for the `mem_cpu_load` segment
    #[serde(default)]
    pub mem_cpu_load: MemCpuLoadConfig,
}

/// `[attached_clients]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AttachedClientsConfig {
    /// Minimum number of attached clients for the segment to be visible.
    /// Default: 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<u32>,
}

/// `[mem_cpu_load]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MemCpuLoadConfig {
    /// Seconds between refreshes. Default: 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_interval: Option<f64>,

    /// Number of bars in the CPU usage graph. Default: 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_cpu_bars: Option<u32>,

    /// How memory usage is printed. Default: `default`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_mode: Option<MemoryMode>,

    /// Number of load averages (1, 5, 15 minutes) to show, 0 to 3. Default: 3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_average_load: Option<u8>,
}

/// Memory display modes understood by `tmux-mem-cpu-load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemoryMode {
    /// Used/total ratio
    #[default]
    Default,
    /// Total free memory
    Free,
    /// Used memory as a percentage
    Percentage,
}

impl MemoryMode {
    /// Get the canonical string name for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryMode::Default => "default",
            MemoryMode::Free => "free",
            MemoryMode::Percentage => "percentage",
        }
    }

    /// Value passed to `tmux-mem-cpu-load -m`.
    pub fn code(&self) -> &'static str {
        match self {
            MemoryMode::Default => "0",
            MemoryMode::Free => "1",
            MemoryMode::Percentage => "2",
        }
    }

    /// Parse a mode from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(MemoryMode::Default),
            "free" => Some(MemoryMode::Free),
            "percentage" => Some(MemoryMode::Percentage),
            _ => None,
        }
    }

    /// Get all supported modes.
    pub fn all() -> &'static [MemoryMode] {
        &[MemoryMode::Default, MemoryMode::Free, MemoryMode::Percentage]
    }
}

impl std::fmt::Display for MemoryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MemoryMode {
    type Err = crate::errors::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::errors::ConfigError::InvalidConfiguration {
            message: format!(
                "Unknown memory_mode '{}'. Supported: {}",
                s,
                MemoryMode::all()
                    .iter()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        })
    }
}
