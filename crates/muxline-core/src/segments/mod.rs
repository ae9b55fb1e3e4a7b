//! Status-line segments.
//!
//! # Architecture
//!
//! - [`Segment`] - Trait every segment implements (compute, then render)
//! - [`Fragment`] - One styled piece of status-line text
//! - [`attached_clients`] - Count of tmux clients attached to the session
//! - [`mem_cpu_load`] - CPU/memory/load summary refreshed in the background
//! - [`registry`] - Build segments by name from configuration

pub mod attached_clients;
pub mod mem_cpu_load;
pub mod registry;
pub mod traits;
pub mod types;

pub use attached_clients::AttachedClientsSegment;
pub use mem_cpu_load::MemCpuLoadSegment;
pub use registry::{build_all, build_segment, is_valid_segment, render_all, valid_segment_names};
pub use traits::Segment;
pub use types::{Fragment, SegmentType};
