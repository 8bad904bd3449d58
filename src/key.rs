//! Key bindings shared by the list view and the application loop.
//!
//! A [`Binding`] groups the key presses that trigger one action together with
//! the short help text shown for it.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A key code plus the modifiers that must accompany it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    pub key: String,
    pub desc: String,
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub keys: Vec<KeyPress>,
    pub help: Help,
}

impl Binding {
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
        }
    }

    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns true if `msg` is one of this binding's key presses.
    ///
    /// Shift is ignored for character keys, since terminals already report
    /// the shifted character itself.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        let code = msg.key;
        let modifiers = match code {
            KeyCode::Char(_) => msg.modifiers.difference(KeyModifiers::SHIFT),
            _ => msg.modifiers,
        };
        self.keys
            .iter()
            .any(|k| k.code == code && k.modifiers == modifiers)
    }
}

/// Something that can describe its key bindings for a help line.
pub trait KeyMap {
    fn short_help(&self) -> Vec<&Binding>;
}

/// Renders `keymap`'s short help as `key desc • key desc`.
pub fn help_line<K: KeyMap + ?Sized>(keymap: &K) -> String {
    keymap
        .short_help()
        .iter()
        .filter(|b| !b.help.key.is_empty())
        .map(|b| format!("{} {}", b.help.key, b.help.desc))
        .collect::<Vec<_>>()
        .join(" • ")
}
