//! Number of tmux clients attached to the active session.

use std::sync::Arc;

use tracing::debug;

use crate::config::AttachedClientsOptions;
use crate::process::CommandRunner;
use crate::segments::traits::Segment;
use crate::segments::types::{Fragment, SegmentType};
use crate::tmux;

const DESCRIPTION: &str = "\
Number of tmux clients attached to the currently active session.

Options:
  minimum (int, default 1): fewest attached clients for the segment to be visible.";

/// Count clients attached to the active session.
///
/// Returns `None` when there is no active session or fewer than `minimum`
/// clients are attached. Two tmux invocations per call, no caching.
pub fn attached_clients(runner: &dyn CommandRunner, minimum: u32) -> Option<String> {
    let session = tmux::active_session_name(runner)?;
    let count = tmux::attached_client_count(runner, &session);

    debug!(
        event = "core.segment.attached_clients_counted",
        session = %session,
        count = count,
        minimum = minimum
    );

    if count < minimum as usize {
        None
    } else {
        Some(count.to_string())
    }
}

/// Synchronous segment wrapping [`attached_clients`].
pub struct AttachedClientsSegment {
    options: AttachedClientsOptions,
    runner: Arc<dyn CommandRunner>,
}

impl AttachedClientsSegment {
    pub fn new(options: AttachedClientsOptions, runner: Arc<dyn CommandRunner>) -> Self {
        Self { options, runner }
    }

    pub fn options(&self) -> &AttachedClientsOptions {
        &self.options
    }
}

impl Segment for AttachedClientsSegment {
    fn name(&self) -> &'static str {
        SegmentType::AttachedClients.as_str()
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn compute(&self) -> Option<String> {
        attached_clients(self.runner.as_ref(), self.options.minimum())
    }

    fn render(&self, value: Option<&str>) -> Option<Vec<Fragment>> {
        value.map(|count| vec![Fragment::new(count, self.name())])
    }
}
