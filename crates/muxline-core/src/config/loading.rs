//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.muxline/config.toml`
//! 3. **Project config** - `./.muxline/config.toml`

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::types::{AttachedClientsConfig, MemCpuLoadConfig, SegmentsConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

const CONFIG_DIR: &str = ".muxline";
const CONFIG_FILE: &str = "config.toml";

fn is_file_not_found(e: &ConfigError) -> bool {
    matches!(e, ConfigError::IoError { source } if source.kind() == std::io::ErrorKind::NotFound)
}

/// Path of the user config file, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Path of the project config file relative to the working directory.
pub fn project_config_path() -> Result<PathBuf, ConfigError> {
    Ok(std::env::current_dir()?.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.muxline/config.toml`)
/// 3. Project config (`./.muxline/config.toml`)
///
/// # Errors
///
/// Returns an error if a file cannot be parsed or validation fails. Missing
/// config files are not errors.
pub fn load_hierarchy() -> Result<SegmentsConfig, ConfigError> {
    let mut paths = Vec::new();
    if let Some(user) = user_config_path() {
        paths.push(user);
    }
    paths.push(project_config_path()?);

    load_from_paths(&paths)
}

/// Load and merge the given config files in order, then validate.
pub fn load_from_paths(paths: &[PathBuf]) -> Result<SegmentsConfig, ConfigError> {
    let mut config = SegmentsConfig::default();

    for path in paths {
        match load_config_file(path) {
            Ok(file_config) => {
                info!(event = "core.config.file_loaded", path = %path.display());
                config = merge_configs(config, file_config);
            }
            Err(e) if is_file_not_found(&e) => {
                debug!(event = "core.config.file_missing", path = %path.display());
            }
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<SegmentsConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Each field is taken from the override only when it was set there.
pub fn merge_configs(base: SegmentsConfig, override_config: SegmentsConfig) -> SegmentsConfig {
    SegmentsConfig {
        attached_clients: AttachedClientsConfig {
            minimum: override_config
                .attached_clients
                .minimum
                .or(base.attached_clients.minimum),
        },
        mem_cpu_load: MemCpuLoadConfig {
            refresh_interval: override_config
                .mem_cpu_load
                .refresh_interval
                .or(base.mem_cpu_load.refresh_interval),
            num_cpu_bars: override_config
                .mem_cpu_load
                .num_cpu_bars
                .or(base.mem_cpu_load.num_cpu_bars),
            memory_mode: override_config
                .mem_cpu_load
                .memory_mode
                .or(base.mem_cpu_load.memory_mode),
            num_average_load: override_config
                .mem_cpu_load
                .num_average_load
                .or(base.mem_cpu_load.num_average_load),
        },
    }
}
