//! Key → action bindings for overlay input.
//!
//! The host engine reports raw key taps; fragments look up which key an
//! action is bound to and poll that key each frame. Bindings persist with
//! the overlay config, so the map is serde-serializable.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actions the overlay layer can bind keys to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BindAction {
    /// Open the chat field, or close it and send.
    ToggleChat,
    /// Close the chat field without sending.
    HideChat,
}

impl BindAction {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "TOGGLECHAT" => Some(Self::ToggleChat),
            "HIDECHAT" => Some(Self::HideChat),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToggleChat => "TOGGLECHAT",
            Self::HideChat => "HIDECHAT",
        }
    }
}

/// A default key assignment: key name → action.
struct DefaultKey {
    key: &'static str,
    action: BindAction,
}

const DEFAULT_KEYS: &[DefaultKey] = &[
    DefaultKey { key: "ENTER", action: BindAction::ToggleChat },
    DefaultKey { key: "ESCAPE", action: BindAction::HideChat },
];

/// Key name → action mapping with rebind support.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct KeyBindings {
    keys: HashMap<String, BindAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = DEFAULT_KEYS
            .iter()
            .map(|dk| (dk.key.to_string(), dk.action))
            .collect();
        Self { keys }
    }
}

impl KeyBindings {
    /// Action bound to `key`, if any.
    pub fn action_for(&self, key: &str) -> Option<BindAction> {
        self.keys.get(key).copied()
    }

    /// First key bound to `action`, if any.
    pub fn key_for(&self, action: BindAction) -> Option<&str> {
        self.keys
            .iter()
            .find(|(_, a)| **a == action)
            .map(|(k, _)| k.as_str())
    }

    /// Bind or unbind a key. `None` clears the binding.
    pub fn set(&mut self, key: &str, action: Option<BindAction>) {
        match action {
            Some(a) => {
                self.keys.insert(key.to_string(), a);
            }
            None => {
                self.keys.remove(key);
            }
        }
    }
}
