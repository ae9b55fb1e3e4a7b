//! # Configuration System
//!
//! TOML configuration for the segments.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.muxline/config.toml`
//! 3. **Project config** - `./.muxline/config.toml`
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.muxline/config.toml
//! [attached_clients]
//! minimum = 2
//!
//! [mem_cpu_load]
//! refresh_interval = 2.0
//! num_cpu_bars = 5
//! memory_mode = "percentage"
//! num_average_load = 1
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use muxline_core::config::{MemCpuLoadOptions, SegmentsConfig};
//!
//! fn example() -> Result<(), muxline_core::errors::ConfigError> {
//!     let config = SegmentsConfig::load_hierarchy()?;
//!     let options = MemCpuLoadOptions::from_config(&config.mem_cpu_load)?;
//!     assert!(options.num_average_load() <= 3);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod options;
pub mod types;
pub mod validation;

pub use options::{AttachedClientsOptions, MemCpuLoadOptions};
pub use types::{AttachedClientsConfig, MemCpuLoadConfig, MemoryMode, SegmentsConfig};
pub use validation::validate_config;

impl SegmentsConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
