//! Build segments by name from configuration.

use std::sync::Arc;

use tracing::{debug, info};

use super::attached_clients::AttachedClientsSegment;
use super::mem_cpu_load::MemCpuLoadSegment;
use super::traits::Segment;
use super::types::{Fragment, SegmentType};
use crate::config::{AttachedClientsOptions, MemCpuLoadOptions, SegmentsConfig};
use crate::errors::ConfigError;
use crate::process::CommandRunner;

/// Check if a segment name is known (case-insensitive).
pub fn is_valid_segment(name: &str) -> bool {
    SegmentType::parse(name).is_some()
}

/// Get all segment names, in display order.
pub fn valid_segment_names() -> Vec<&'static str> {
    SegmentType::all().iter().map(|t| t.as_str()).collect()
}

fn build_by_type(
    segment_type: SegmentType,
    config: &SegmentsConfig,
    runner: Arc<dyn CommandRunner>,
) -> Result<Box<dyn Segment>, ConfigError> {
    let segment: Box<dyn Segment> = match segment_type {
        SegmentType::AttachedClients => Box::new(AttachedClientsSegment::new(
            AttachedClientsOptions::from_config(&config.attached_clients)?,
            runner,
        )),
        SegmentType::MemCpuLoad => Box::new(MemCpuLoadSegment::new(
            MemCpuLoadOptions::from_config(&config.mem_cpu_load)?,
            runner,
        )?),
    };

    debug!(event = "core.segment.build_completed", segment = %segment_type);
    Ok(segment)
}

/// Build one segment by name (case-insensitive).
///
/// # Errors
///
/// `UnknownSegment` for names not in [`valid_segment_names`], or
/// `InvalidConfiguration` when the segment's options are out of range.
pub fn build_segment(
    name: &str,
    config: &SegmentsConfig,
    runner: Arc<dyn CommandRunner>,
) -> Result<Box<dyn Segment>, ConfigError> {
    let segment_type = SegmentType::parse(name).ok_or_else(|| ConfigError::UnknownSegment {
        name: name.to_string(),
    })?;
    build_by_type(segment_type, config, runner)
}

/// Build every segment in display order, sharing one runner.
pub fn build_all(
    config: &SegmentsConfig,
    runner: Arc<dyn CommandRunner>,
) -> Result<Vec<Box<dyn Segment>>, ConfigError> {
    let segments = SegmentType::all()
        .iter()
        .map(|segment_type| build_by_type(*segment_type, config, Arc::clone(&runner)))
        .collect::<Result<Vec<_>, _>>()?;

    info!(event = "core.segment.build_all_completed", count = segments.len());
    Ok(segments)
}

/// Fragments of every visible segment, in order.
pub fn render_all(segments: &[Box<dyn Segment>]) -> Vec<Fragment> {
    segments
        .iter()
        .filter_map(|segment| segment.fragments())
        .flatten()
        .collect()
}
