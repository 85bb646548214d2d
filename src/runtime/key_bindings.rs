use crate::runtime::command::Command;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

#[derive(Default)]
pub struct KeyBindings {
    bindings: HashMap<KeyBinding, Command>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut manager = Self::default();
        manager.install_defaults();
        manager
    }

    pub fn bind(&mut self, key: KeyBinding, command: Command) {
        self.bindings.insert(key, command);
    }

    pub fn unbind(&mut self, key: &KeyBinding) {
        self.bindings.remove(key);
    }

    pub fn resolve(&self, event: KeyEvent) -> Option<Command> {
        self.bindings.get(&KeyBinding::from_event(event)).copied()
    }

    fn install_defaults(&mut self) {
        self.bind(KeyBinding::ctrl(KeyCode::Char('c')), Command::Exit);
        self.bind(KeyBinding::key(KeyCode::Char('q')), Command::Exit);
        self.bind(KeyBinding::key(KeyCode::Esc), Command::Exit);

        self.bind(KeyBinding::key(KeyCode::Right), Command::Next);
        self.bind(KeyBinding::key(KeyCode::Char('n')), Command::Next);
        self.bind(KeyBinding::key(KeyCode::Tab), Command::Next);

        self.bind(KeyBinding::key(KeyCode::Left), Command::Prev);
        self.bind(KeyBinding::key(KeyCode::Char('p')), Command::Prev);
        self.bind(
            KeyBinding::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Command::Prev,
        );

        self.bind(KeyBinding::key(KeyCode::Enter), Command::Submit);

        // Digit keys are the header links: 1 jumps to the first step.
        for (offset, ch) in ('1'..='9').enumerate() {
            self.bind(KeyBinding::key(KeyCode::Char(ch)), Command::GoTo(offset));
        }
    }
}
