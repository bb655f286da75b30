//! Routes keyboard and pointer events to a [`ScrollList`].
//!
//! The handlers own no state. Each event is applied to the list completely
//! and the caller gets an [`Outcome`] telling it whether anything is left for
//! the host to do: transfer focus, or handle the event itself.

use tracing::trace;

use super::ScrollList;
use crate::config::keybinds::Action;
use crate::input::keyboard::is_release;
use crate::input::mouse::{MouseEvent, MouseEventKind};
use crate::input::KeyEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Next,
    Prev,
}

/// What the host should do after the list saw an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The list handled the event.
    Consumed,
    /// The list asks its container to move focus.
    Focus(FocusDirection),
    /// The list has no use for the event; the host should handle it.
    Forward,
}

/// Apply a key press to `list` using its key bindings.
pub fn handle_key(list: &mut ScrollList, key: &KeyEvent) -> Outcome {
    if is_release(key) {
        return Outcome::Forward;
    }
    let Some(action) = list.keybindings().action_for(key) else {
        return Outcome::Forward;
    };
    trace!(?action, "list key");
    match action {
        Action::ScrollLeft => list.scroll_left(),
        Action::ScrollRight => list.scroll_right(),
        Action::Up => list.move_up(),
        Action::Down => list.move_down(),
        Action::PageUp => list.page_up(),
        Action::PageDown => list.page_down(),
        Action::Home => list.jump_home(),
        Action::End => list.jump_end(),
        Action::FocusNext => return Outcome::Focus(FocusDirection::Next),
        Action::FocusPrev => return Outcome::Focus(FocusDirection::Prev),
        Action::Activate => {
            if list.selected().is_some() {
                list.confirm();
            }
        }
    }
    Outcome::Consumed
}

/// Apply a pointer event given in list-relative coordinates.
///
/// Wheel events scroll without touching the selection. A primary click in
/// the content rectangle selects and activates the line under it; clicks on
/// rows past the last line are swallowed. Anything else, including clicks on
/// the scrollbar column and row, is forwarded.
pub fn handle_mouse(list: &mut ScrollList, ev: &MouseEvent) -> Outcome {
    match ev.kind {
        MouseEventKind::ScrollUp => {
            list.scroll_up();
            Outcome::Consumed
        }
        MouseEventKind::ScrollDown => {
            list.scroll_down();
            Outcome::Consumed
        }
        _ if ev.is_primary_down() => {
            let (width, height) = list.viewport();
            if ev.column < width.saturating_sub(1) && ev.row < height.saturating_sub(1) {
                list.select_at(usize::from(ev.row));
                Outcome::Consumed
            } else {
                Outcome::Forward
            }
        }
        _ => Outcome::Forward,
    }
}
