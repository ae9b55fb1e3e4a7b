use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize JSON logging on stderr.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted (default).
///
/// Hosts that install their own subscriber should not call this; the segments
/// only emit `tracing` events and never require a subscriber to be present.
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(quiet: bool) -> bool {
    let directive = if quiet { "muxline_core=error" } else { "muxline_core=info" };

    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        // Other tests may already have installed a subscriber, so only the
        // second call's result is predictable.
        init_logging(true);
        assert!(!init_logging(false));
    }
}
