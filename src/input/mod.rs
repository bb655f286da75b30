//! Thin wrappers over crossterm input so the rest of the crate refers to a
//! single set of event types.

pub mod keyboard;
pub mod mouse;

pub use keyboard::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};

/// Terminal events the runner cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(mouse::MouseEvent),
    Resize(u16, u16),
    Other,
}

impl From<Event> for InputEvent {
    fn from(ev: Event) -> Self {
        match ev {
            Event::Key(k) => InputEvent::Key(k),
            Event::Mouse(m) => InputEvent::Mouse(m.into()),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}

/// Wait up to `timeout` for an event to become available.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event, blocking until one arrives.
pub fn read_event() -> io::Result<InputEvent> {
    event::read().map(InputEvent::from)
}
