use tracing::debug;

use crate::process::CommandRunner;

/// Name of the multiplexer binary looked up in PATH.
pub const TMUX_BINARY: &str = "tmux";

/// Run `tmux <args>` and return its stdout.
///
/// Spawn failures, such as tmux not being installed, are reported as empty
/// output. They are only logged at debug level since this runs on every render.
pub fn tmux_output(runner: &dyn CommandRunner, args: &[&str]) -> String {
    let mut argv = Vec::with_capacity(args.len() + 1);
    argv.push(TMUX_BINARY);
    argv.extend_from_slice(args);

    match runner.output(&argv) {
        Ok(stdout) => stdout,
        Err(e) => {
            debug!(
                event = "core.tmux.query_failed",
                subcommand = args.first().copied().unwrap_or_default(),
                error = %e
            );
            String::new()
        }
    }
}

/// Name of the session the current pane belongs to.
///
/// Returns `None` only when `list-panes` printed nothing at all. Output that
/// is only whitespace still yields a (blank) session name.
pub fn active_session_name(runner: &dyn CommandRunner) -> Option<String> {
    let output = tmux_output(runner, &["list-panes", "-F", "#{session_name}"]);
    if output.is_empty() {
        debug!(event = "core.tmux.no_session");
        return None;
    }

    let session = output.trim_end().split('\n').next().unwrap_or_default();
    Some(session.to_string())
}

/// Number of clients attached to `session`.
///
/// Counts the pieces left after stripping trailing whitespace and splitting on
/// newlines, so an empty client list counts as one.
pub fn attached_client_count(runner: &dyn CommandRunner, session: &str) -> usize {
    let output = tmux_output(runner, &["list-clients", "-t", session]);
    output.trim_end().split('\n').count()
}
