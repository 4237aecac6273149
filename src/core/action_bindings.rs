use crate::core::event::Action;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }
}

impl From<&KeyEvent> for KeyBinding {
    fn from(event: &KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }
}

/// Maps key chords to wizard actions. Keys not bound here fall through to
/// the focused input.
pub struct ActionBindings {
    bindings: HashMap<KeyBinding, Action>,
}

fn default_bindings() -> Vec<(KeyBinding, Action)> {
    use KeyCode::*;
    use KeyModifiers as Mods;

    vec![
        (KeyBinding::new(Char('c'), Mods::CONTROL), Action::Exit),
        (KeyBinding::new(Esc, Mods::NONE), Action::Cancel),
        (KeyBinding::new(Tab, Mods::NONE), Action::NextInput),
        (KeyBinding::new(BackTab, Mods::SHIFT), Action::PrevInput),
        (KeyBinding::new(Char('b'), Mods::CONTROL), Action::Back),
        (KeyBinding::new(Backspace, Mods::CONTROL), Action::DeleteWord),
        (KeyBinding::new(Char('w'), Mods::CONTROL), Action::DeleteWord),
        (
            KeyBinding::new(Delete, Mods::CONTROL),
            Action::DeleteWordForward,
        ),
    ]
}

impl ActionBindings {
    pub fn new() -> Self {
        Self {
            bindings: default_bindings().into_iter().collect(),
        }
    }

    pub fn bind(&mut self, key: KeyBinding, action: Action) {
        self.bindings.insert(key, action);
    }

    pub fn unbind(&mut self, key: &KeyBinding) {
        self.bindings.remove(key);
    }

    pub fn resolve(&self, key_event: &KeyEvent) -> Option<Action> {
        self.bindings.get(&KeyBinding::from(key_event)).cloned()
    }
}

impl Default for ActionBindings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ActionBindings;
    use crate::core::event::Action;
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn plain_characters_are_not_bound() {
        let bindings = ActionBindings::new();
        let event = KeyEvent {
            code: KeyCode::Char('b'),
            modifiers: KeyModifiers::NONE,
        };
        assert!(bindings.resolve(&event).is_none());

        let event = KeyEvent {
            code: KeyCode::Char('b'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert!(matches!(bindings.resolve(&event), Some(Action::Back)));
    }
}
