// Keyboard input helpers and type aliases.
pub use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Key releases are reported on some platforms; lists only react to
/// presses and repeats.
pub fn is_release(ev: &KeyEvent) -> bool {
    ev.kind == KeyEventKind::Release
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_check() {
        let mut up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert!(!is_release(&up));
        up.kind = KeyEventKind::Repeat;
        assert!(!is_release(&up));
        up.kind = KeyEventKind::Release;
        assert!(is_release(&up));
    }
}
