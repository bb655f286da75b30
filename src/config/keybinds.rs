// Key bindings for list navigation.
//
// `KeyBindings` maps key presses to the `Action`s the list understands. The
// defaults are the classic list keys (arrows, paging, Home/End, Tab and
// Enter). Settings may replace the keys of any action through a
// `[keybinds]` table such as `down = ["Down", "j"]`.

use std::collections::{BTreeMap, HashMap};

use crate::errors::ListError;
use crate::input::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    ScrollLeft,
    ScrollRight,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    FocusNext,
    FocusPrev,
    Activate,
}

impl Action {
    pub const ALL: [Action; 11] = [
        Action::ScrollLeft,
        Action::ScrollRight,
        Action::Up,
        Action::Down,
        Action::PageUp,
        Action::PageDown,
        Action::Home,
        Action::End,
        Action::FocusNext,
        Action::FocusPrev,
        Action::Activate,
    ];

    /// Name used in settings files.
    pub fn name(self) -> &'static str {
        match self {
            Action::ScrollLeft => "scroll_left",
            Action::ScrollRight => "scroll_right",
            Action::Up => "up",
            Action::Down => "down",
            Action::PageUp => "page_up",
            Action::PageDown => "page_down",
            Action::Home => "home",
            Action::End => "end",
            Action::FocusNext => "focus_next",
            Action::FocusPrev => "focus_prev",
            Action::Activate => "activate",
        }
    }

    pub fn from_name(name: &str) -> Option<Action> {
        Action::ALL.iter().copied().find(|a| a.name() == name)
    }

    fn default_keys(self) -> &'static [&'static str] {
        match self {
            Action::ScrollLeft => &["Left"],
            Action::ScrollRight => &["Right"],
            Action::Up => &["Up"],
            Action::Down => &["Down"],
            Action::PageUp => &["PageUp"],
            Action::PageDown => &["PageDown"],
            Action::Home => &["Home"],
            Action::End => &["End"],
            Action::FocusNext => &["Tab"],
            Action::FocusPrev => &["BackTab", "Shift+Tab"],
            Action::Activate => &["Enter"],
        }
    }
}

/// A key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let mut modifiers = modifiers;
        // Terminals report the shifted character itself ('K') and send
        // BackTab with SHIFT set; drop SHIFT so those match plain specs.
        if matches!(code, KeyCode::Char(_) | KeyCode::BackTab) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        KeySpec { code, modifiers }
    }

    /// Parse `"Ctrl+n"`, `"Shift+Tab"`, `"PageDown"`, `"F5"` or a single
    /// character such as `"j"`.
    pub fn parse(spec: &str) -> Result<KeySpec, ListError> {
        let bad = || ListError::Config(format!("unrecognised key `{}`", spec));
        let mut parts: Vec<&str> = spec.split('+').collect();
        // "Ctrl++" binds the plus key
        if spec == "+" || spec.ends_with("++") {
            parts.pop();
            parts.pop();
            parts.push("+");
        }
        let key = parts.pop().filter(|k| !k.is_empty()).ok_or_else(bad)?;

        let mut modifiers = KeyModifiers::NONE;
        for m in parts {
            match m.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return Err(bad()),
            }
        }

        let mut chars = key.chars();
        let code = match (chars.next(), chars.next()) {
            (Some(c), None) => KeyCode::Char(c),
            _ => match key.to_ascii_lowercase().as_str() {
                "left" => KeyCode::Left,
                "right" => KeyCode::Right,
                "up" => KeyCode::Up,
                "down" => KeyCode::Down,
                "pageup" | "pgup" => KeyCode::PageUp,
                "pagedown" | "pgdn" => KeyCode::PageDown,
                "home" => KeyCode::Home,
                "end" => KeyCode::End,
                "tab" => KeyCode::Tab,
                "backtab" => KeyCode::BackTab,
                "enter" | "return" => KeyCode::Enter,
                "esc" | "escape" => KeyCode::Esc,
                "backspace" => KeyCode::Backspace,
                "delete" | "del" => KeyCode::Delete,
                "insert" | "ins" => KeyCode::Insert,
                "space" => KeyCode::Char(' '),
                k => match k.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                    Some(n) if (1..=24).contains(&n) => KeyCode::F(n),
                    _ => return Err(bad()),
                },
            },
        };
        Ok(KeySpec::new(code, modifiers))
    }
}

/// Lookup table from key presses to list actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    keys: HashMap<KeySpec, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut kb = KeyBindings {
            keys: HashMap::new(),
        };
        for action in Action::ALL {
            for spec in action.default_keys() {
                if let Ok(key) = KeySpec::parse(spec) {
                    kb.keys.insert(key, action);
                }
            }
        }
        kb
    }
}

impl KeyBindings {
    /// Defaults with the keys of every action named in `overrides` replaced.
    pub fn from_overrides(overrides: &BTreeMap<String, Vec<String>>) -> Result<Self, ListError> {
        let mut kb = KeyBindings::default();
        for (name, specs) in overrides {
            let action = Action::from_name(name)
                .ok_or_else(|| ListError::Config(format!("unknown key binding action `{}`", name)))?;
            kb.keys.retain(|_, a| *a != action);
            for spec in specs {
                kb.keys.insert(KeySpec::parse(spec)?, action);
            }
        }
        Ok(kb)
    }

    /// Bind `key` to `action`, replacing whatever it did before.
    pub fn bind(&mut self, key: KeySpec, action: Action) {
        self.keys.insert(key, action);
    }

    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.keys
            .get(&KeySpec::new(key.code, key.modifiers))
            .copied()
    }

    pub fn is_bound(&self, action: Action, key: &KeyEvent) -> bool {
        self.action_for(key) == Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn defaults_cover_list_keys() {
        let kb = KeyBindings::default();
        assert_eq!(kb.action_for(&ev(KeyCode::Up, KeyModifiers::NONE)), Some(Action::Up));
        assert_eq!(kb.action_for(&ev(KeyCode::End, KeyModifiers::NONE)), Some(Action::End));
        assert_eq!(kb.action_for(&ev(KeyCode::Enter, KeyModifiers::NONE)), Some(Action::Activate));
        assert_eq!(kb.action_for(&ev(KeyCode::Char('q'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn shift_tab_and_backtab_both_focus_previous() {
        let kb = KeyBindings::default();
        assert!(kb.is_bound(Action::FocusPrev, &ev(KeyCode::BackTab, KeyModifiers::SHIFT)));
        assert!(kb.is_bound(Action::FocusPrev, &ev(KeyCode::Tab, KeyModifiers::SHIFT)));
        assert!(kb.is_bound(Action::FocusNext, &ev(KeyCode::Tab, KeyModifiers::NONE)));
    }

    #[test]
    fn parse_modifiers_and_names() {
        let k = KeySpec::parse("Ctrl+n").unwrap();
        assert_eq!(k.code, KeyCode::Char('n'));
        assert_eq!(k.modifiers, KeyModifiers::CONTROL);
        assert_eq!(KeySpec::parse("pgdn").unwrap().code, KeyCode::PageDown);
        assert_eq!(KeySpec::parse("F5").unwrap().code, KeyCode::F(5));
        assert_eq!(KeySpec::parse("Ctrl++").unwrap().code, KeyCode::Char('+'));
        assert!(KeySpec::parse("Hyper+x").is_err());
        assert!(KeySpec::parse("NotAKey").is_err());
        assert!(KeySpec::parse("").is_err());
    }

    #[test]
    fn overrides_replace_action_keys() {
        let mut o = BTreeMap::new();
        o.insert("down".to_string(), vec!["j".to_string(), "Down".to_string()]);
        o.insert("up".to_string(), vec!["k".to_string()]);
        let kb = KeyBindings::from_overrides(&o).unwrap();
        assert!(kb.is_bound(Action::Down, &ev(KeyCode::Char('j'), KeyModifiers::NONE)));
        assert!(kb.is_bound(Action::Down, &ev(KeyCode::Down, KeyModifiers::NONE)));
        assert!(kb.is_bound(Action::Up, &ev(KeyCode::Char('k'), KeyModifiers::NONE)));
        assert_eq!(kb.action_for(&ev(KeyCode::Up, KeyModifiers::NONE)), None);
    }

    #[test]
    fn bind_replaces_previous_action() {
        let mut kb = KeyBindings::default();
        kb.bind(KeySpec::parse("Shift+K").unwrap(), Action::Up);
        kb.bind(KeySpec::parse("Enter").unwrap(), Action::End);
        assert!(kb.is_bound(Action::Up, &ev(KeyCode::Char('K'), KeyModifiers::SHIFT)));
        assert!(kb.is_bound(Action::End, &ev(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn unknown_override_action_is_rejected() {
        let mut o = BTreeMap::new();
        o.insert("launch".to_string(), vec!["x".to_string()]);
        assert!(matches!(KeyBindings::from_overrides(&o), Err(ListError::Config(_))));
    }
}
