// Mouse event type with just the fields the list needs.
pub use crossterm::event::{MouseButton, MouseEventKind};

/// A pointer event at `(column, row)`.
///
/// Coordinates are absolute terminal cells when read from the terminal; the
/// host translates them with [`MouseEvent::relative_to`] before handing them
/// to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub column: u16,
    pub row: u16,
    pub kind: MouseEventKind,
}

impl MouseEvent {
    pub fn new(kind: MouseEventKind, column: u16, row: u16) -> Self {
        MouseEvent { column, row, kind }
    }

    /// The same event with coordinates made relative to `(x, y)`, or `None`
    /// when the event lies above or left of that origin.
    pub fn relative_to(&self, x: u16, y: u16) -> Option<MouseEvent> {
        Some(MouseEvent {
            column: self.column.checked_sub(x)?,
            row: self.row.checked_sub(y)?,
            kind: self.kind,
        })
    }

    pub fn is_primary_down(&self) -> bool {
        matches!(self.kind, MouseEventKind::Down(MouseButton::Left))
    }
}

impl From<crossterm::event::MouseEvent> for MouseEvent {
    fn from(me: crossterm::event::MouseEvent) -> Self {
        MouseEvent {
            column: me.column,
            row: me.row,
            kind: me.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_to_translates_and_rejects_outside() {
        let me = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 10, 5);
        let rel = me.relative_to(4, 2).unwrap();
        assert_eq!((rel.column, rel.row), (6, 3));
        assert!(rel.is_primary_down());
        assert!(me.relative_to(11, 0).is_none());
    }
}
