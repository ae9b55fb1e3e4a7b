//! CPU, memory and load-average summary from `tmux-mem-cpu-load`.
//!
//! Running the aggregator takes long enough that it must stay off the render
//! path, so the segment serves its last output from a [`RefreshScheduler`]
//! and reruns the tool at most once per `refresh_interval`.

use std::sync::Arc;

use tracing::debug;

use crate::config::MemCpuLoadOptions;
use crate::errors::ConfigError;
use crate::process::CommandRunner;
use crate::refresh::{Clock, RefreshScheduler, SystemClock, UpdateResult};
use crate::segments::traits::Segment;
use crate::segments::types::{Fragment, SegmentType};

/// Aggregator executable looked up in PATH.
pub const AGGREGATOR_BINARY: &str = "tmux-mem-cpu-load";

const DESCRIPTION: &str = "\
CPU usage with a bar graph, memory usage and system load averages, as printed by
tmux-mem-cpu-load (https://github.com/thewtex/tmux-mem-cpu-load). Hidden when the
tool is not installed.

Options:
  refresh_interval (float, default 1.0): seconds between refreshes, must be positive.
  num_cpu_bars (int, default 10): bars in the CPU usage graph.
  memory_mode (str, default \"default\"): \"default\" prints used/total,
    \"free\" prints free memory, \"percentage\" prints used memory as a percentage.
  num_average_load (int, default 3): load averages to show (1, 5, 15 minutes), 0 to 3.";

/// Full argv for one aggregator run.
///
/// The interval is printed with a decimal point (`1.0`, `2.5`).
pub fn aggregator_argv(options: &MemCpuLoadOptions) -> Vec<String> {
    vec![
        AGGREGATOR_BINARY.to_string(),
        "-g".to_string(),
        options.num_cpu_bars().to_string(),
        "-i".to_string(),
        format!("{:?}", options.refresh_interval()),
        "-a".to_string(),
        options.num_average_load().to_string(),
        "-m".to_string(),
        options.memory_mode().code().to_string(),
    ]
}

/// Run the aggregator once and return its first output line.
///
/// A missing executable or empty output yields `Ok(None)`; a spawn failure is
/// an error for the scheduler to log.
pub fn update_stats(runner: &dyn CommandRunner, options: &MemCpuLoadOptions) -> UpdateResult<String> {
    if !runner.exists(AGGREGATOR_BINARY) {
        debug!(
            event = "core.segment.mem_cpu_load_skipped",
            reason = "tmux-mem-cpu-load not found"
        );
        return Ok(None);
    }

    let argv = aggregator_argv(options);
    let argv: Vec<&str> = argv.iter().map(String::as_str).collect();
    let mut lines = runner.read_lines(&argv)?;
    Ok(lines.next())
}

/// Fragments for a stored aggregator line; empty or absent shows nothing.
pub fn render_stats(stats: Option<&str>) -> Option<Vec<Fragment>> {
    match stats {
        Some(stats) if !stats.is_empty() => Some(vec![Fragment::new(
            stats,
            SegmentType::MemCpuLoad.as_str(),
        )]),
        _ => None,
    }
}

/// Background-refreshed `tmux-mem-cpu-load` segment.
pub struct MemCpuLoadSegment {
    options: MemCpuLoadOptions,
    runner: Arc<dyn CommandRunner>,
    scheduler: RefreshScheduler<String>,
}

impl MemCpuLoadSegment {
    pub fn new(
        options: MemCpuLoadOptions,
        runner: Arc<dyn CommandRunner>,
    ) -> Result<Self, ConfigError> {
        Self::with_clock(options, runner, Arc::new(SystemClock))
    }

    /// Like [`new`](Self::new) with an explicit time source for the scheduler.
    pub fn with_clock(
        options: MemCpuLoadOptions,
        runner: Arc<dyn CommandRunner>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        let update_runner = Arc::clone(&runner);
        let scheduler = RefreshScheduler::with_clock(
            SegmentType::MemCpuLoad.as_str(),
            options.refresh_duration(),
            clock,
            move |_previous| update_stats(update_runner.as_ref(), &options),
        )?;

        Ok(Self {
            options,
            runner,
            scheduler,
        })
    }

    pub fn options(&self) -> &MemCpuLoadOptions {
        &self.options
    }

    pub fn scheduler(&self) -> &RefreshScheduler<String> {
        &self.scheduler
    }

    /// Run the aggregator now, bypassing the scheduler.
    ///
    /// The previous value is not needed: each run is independent.
    pub fn update(&self, _previous: Option<&str>) -> UpdateResult<String> {
        update_stats(self.runner.as_ref(), &self.options)
    }
}

impl Segment for MemCpuLoadSegment {
    fn name(&self) -> &'static str {
        SegmentType::MemCpuLoad.as_str()
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn compute(&self) -> Option<String> {
        self.scheduler
            .current_value()
            .map(|stats| String::clone(&stats))
    }

    fn render(&self, value: Option<&str>) -> Option<Vec<Fragment>> {
        render_stats(value)
    }
}
