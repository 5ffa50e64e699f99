//! Keybinding definitions
//!
//! Every shortcut the review screen understands lives in [`KEYBINDINGS`]. The
//! key handler resolves presses through [`lookup`] and the hint line is built
//! from the same table, so the two cannot drift apart.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    MoveUp,
    MoveDown,
    MoveFirst,
    MoveLast,
    Clear,
    Refresh,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// The action triggered
    pub action: KeyAction,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Active while the transaction list is shown
    List,
    /// Active while the error view is shown
    Error,
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding {
        key: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        action: KeyAction::Quit,
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        action: KeyAction::Quit,
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        action: KeyAction::Quit,
        description: "Quit",
        context: KeyContext::Global,
    },
    // List
    Keybinding {
        key: KeyCode::Up,
        modifiers: KeyModifiers::NONE,
        action: KeyAction::MoveUp,
        description: "Move up",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Char('k'),
        modifiers: KeyModifiers::NONE,
        action: KeyAction::MoveUp,
        description: "Move up",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Down,
        modifiers: KeyModifiers::NONE,
        action: KeyAction::MoveDown,
        description: "Move down",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Char('j'),
        modifiers: KeyModifiers::NONE,
        action: KeyAction::MoveDown,
        description: "Move down",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Home,
        modifiers: KeyModifiers::NONE,
        action: KeyAction::MoveFirst,
        description: "Go to top",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Char('g'),
        modifiers: KeyModifiers::NONE,
        action: KeyAction::MoveFirst,
        description: "Go to top",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::End,
        modifiers: KeyModifiers::NONE,
        action: KeyAction::MoveLast,
        description: "Go to bottom",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Char('G'),
        modifiers: KeyModifiers::SHIFT,
        action: KeyAction::MoveLast,
        description: "Go to bottom",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::NONE,
        action: KeyAction::Clear,
        description: "Mark cleared",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        action: KeyAction::Clear,
        description: "Mark cleared",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Char('r'),
        modifiers: KeyModifiers::NONE,
        action: KeyAction::Refresh,
        description: "Refresh",
        context: KeyContext::List,
    },
    // Error
    Keybinding {
        key: KeyCode::Char('r'),
        modifiers: KeyModifiers::NONE,
        action: KeyAction::Refresh,
        description: "Retry",
        context: KeyContext::Error,
    },
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context || kb.context == KeyContext::Global)
        .collect()
}

/// Resolve a key press to an action within a context
///
/// Shift is ignored for character keys since terminals disagree on whether
/// they report it for capitals.
pub fn lookup(context: KeyContext, key: &KeyEvent) -> Option<KeyAction> {
    let modifiers = match key.code {
        KeyCode::Char(_) => key.modifiers - KeyModifiers::SHIFT,
        _ => key.modifiers,
    };

    get_keybindings(context)
        .into_iter()
        .find(|kb| {
            let expected = match kb.key {
                KeyCode::Char(_) => kb.modifiers - KeyModifiers::SHIFT,
                _ => kb.modifiers,
            };
            kb.key == key.code && expected == modifiers
        })
        .map(|kb| kb.action)
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match kb.key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(&key_str);
    parts.join("+")
}

/// One-line summary of the bindings for a context, e.g. `↑/k:Move up`
///
/// Bindings sharing a description are grouped; Ctrl combinations are left out
/// to keep the line short.
pub fn hint_line(context: KeyContext) -> String {
    let mut groups: Vec<(&'static str, Vec<String>)> = Vec::new();

    let bindings = KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .chain(KEYBINDINGS.iter().filter(|kb| kb.context == KeyContext::Global))
        .filter(|kb| !kb.modifiers.contains(KeyModifiers::CONTROL));

    for kb in bindings {
        let key = format_keybinding(kb);
        match groups.iter_mut().find(|(desc, _)| *desc == kb.description) {
            Some((_, keys)) => keys.push(key),
            None => groups.push((kb.description, vec![key])),
        }
    }

    groups
        .into_iter()
        .map(|(desc, keys)| format!("{}:{}", keys.join("/"), desc))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_list_navigation_keys() {
        let none = KeyModifiers::NONE;
        assert_eq!(lookup(KeyContext::List, &key(KeyCode::Up, none)), Some(KeyAction::MoveUp));
        assert_eq!(lookup(KeyContext::List, &key(KeyCode::Char('k'), none)), Some(KeyAction::MoveUp));
        assert_eq!(lookup(KeyContext::List, &key(KeyCode::Char('j'), none)), Some(KeyAction::MoveDown));
        assert_eq!(lookup(KeyContext::List, &key(KeyCode::Home, none)), Some(KeyAction::MoveFirst));
        assert_eq!(lookup(KeyContext::List, &key(KeyCode::End, none)), Some(KeyAction::MoveLast));
        assert_eq!(lookup(KeyContext::List, &key(KeyCode::Enter, none)), Some(KeyAction::Clear));
    }

    #[test]
    fn test_capital_g_with_or_without_shift() {
        assert_eq!(
            lookup(KeyContext::List, &key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(KeyAction::MoveLast)
        );
        assert_eq!(
            lookup(KeyContext::List, &key(KeyCode::Char('G'), KeyModifiers::NONE)),
            Some(KeyAction::MoveLast)
        );
    }

    #[test]
    fn test_ctrl_c_quits_but_c_clears() {
        assert_eq!(
            lookup(KeyContext::List, &key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            lookup(KeyContext::List, &key(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(KeyAction::Clear)
        );
    }

    #[test]
    fn test_error_context_has_no_navigation() {
        assert_eq!(lookup(KeyContext::Error, &key(KeyCode::Down, KeyModifiers::NONE)), None);
        assert_eq!(
            lookup(KeyContext::Error, &key(KeyCode::Char('r'), KeyModifiers::NONE)),
            Some(KeyAction::Refresh)
        );
        assert_eq!(
            lookup(KeyContext::Error, &key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn test_format_keybinding() {
        let ctrl_c = KEYBINDINGS
            .iter()
            .find(|kb| kb.modifiers.contains(KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(format_keybinding(ctrl_c), "Ctrl+c");
    }

    #[test]
    fn test_hint_line_groups_keys() {
        let hints = hint_line(KeyContext::List);
        assert!(hints.starts_with("↑/k:Move up  ↓/j:Move down"));
        assert!(hints.contains("c/Enter:Mark cleared"));
        assert!(hints.ends_with("q/Esc:Quit"));
        assert!(!hints.contains("Ctrl"));
    }

    #[test]
    fn test_error_hint_line() {
        assert_eq!(hint_line(KeyContext::Error), "r:Retry  q/Esc:Quit");
    }
}
