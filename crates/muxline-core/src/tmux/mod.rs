//! tmux queries used by the segments.
//!
//! Every query degrades to empty output when tmux cannot be run, so callers
//! only ever deal with text.

pub mod operations;

pub use operations::{TMUX_BINARY, active_session_name, attached_client_count, tmux_output};
