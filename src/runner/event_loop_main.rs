use std::time::Duration;

use anyhow::Context;
use tracing::{debug, info};

use crate::config::KeyBindings;
use crate::input::{poll, read_event, InputEvent};
use crate::runner::host::Host;
use crate::runner::terminal::{init_terminal, restore_terminal};
use crate::ui::Colors;

/// Everything the demo host needs to start.
pub struct RunOptions {
    pub items: Vec<String>,
    pub keybindings: KeyBindings,
    pub colors: Colors,
    pub mouse_enabled: bool,
}

pub fn run_app(opts: RunOptions) -> anyhow::Result<()> {
    let mut terminal = init_terminal(opts.mouse_enabled).context("initializing terminal")?;
    info!(items = opts.items.len(), mouse = opts.mouse_enabled, "starting list host");

    let mut host = Host::new(opts.items, opts.keybindings, opts.colors);

    // Run the loop in a closure so the terminal is restored on error too.
    let result = (|| -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| {
                host.layout(f.area());
                host.draw(f);
            })?;

            if !poll(Duration::from_millis(100))? {
                continue;
            }
            match read_event()? {
                InputEvent::Key(key) => {
                    if host.handle_key(&key) {
                        break;
                    }
                }
                InputEvent::Mouse(me) => host.handle_mouse(&me),
                InputEvent::Resize(w, h) => debug!(w, h, "terminal resized"),
                InputEvent::Other => {}
            }
        }
        Ok(())
    })();

    restore_terminal(terminal).context("restoring terminal")?;
    result
}
