//! muxline-core: tmux status-line segments
//!
//! Two segments for a statusline host: the number of tmux clients attached
//! to the active session, and a CPU/memory/load summary printed by
//! `tmux-mem-cpu-load` and refreshed in the background.
//!
//! # Main Entry Points
//!
//! - [`segments`] - The segments, the [`Segment`] trait and the registry
//! - [`refresh`] - [`RefreshScheduler`], the background-refresh value cache
//! - [`config`] - Configuration loading and validated segment options
//! - [`process`] - Process lookup and output reading behind [`CommandRunner`]
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use muxline_core::{SegmentsConfig, SystemRunner, build_all, render_all};
//!
//! fn example() -> Result<(), muxline_core::errors::ConfigError> {
//!     let config = SegmentsConfig::load_hierarchy()?;
//!     let segments = build_all(&config, Arc::new(SystemRunner::new()))?;
//!     for fragment in render_all(&segments) {
//!         println!("{}", fragment.contents);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod errors;
pub mod logging;
pub mod process;
pub mod refresh;
pub mod segments;
pub mod tmux;

// Re-export commonly used types at crate root for convenience
pub use config::{AttachedClientsOptions, MemCpuLoadOptions, MemoryMode, SegmentsConfig};
pub use errors::{ConfigError, MuxlineError};
pub use process::{CommandRunner, ProcessError, SystemRunner};
pub use refresh::{Clock, RefreshError, RefreshScheduler, SystemClock, UpdateResult};
pub use segments::{
    AttachedClientsSegment, Fragment, MemCpuLoadSegment, Segment, SegmentType, build_all,
    build_segment, render_all,
};

// Re-export logging initialization
pub use logging::init_logging;
