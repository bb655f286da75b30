pub mod event_loop_main;
pub mod host;
pub mod terminal;

pub use event_loop_main::{run_app, RunOptions};
pub use host::{Host, HostMessage, HISTORY_LIMIT, HISTORY_PANE, LINES_PANE};
