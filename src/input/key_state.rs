use std::collections::HashMap;

use crate::traits::input::KeyCode;

/// Down/up state of every key seen so far.
///
/// Keys are never removed; a released key stays in the map as `false`.
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    keys: HashMap<KeyCode, bool>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update state when a key is pressed. Returns true if it was up before.
    pub fn on_press(&mut self, key: KeyCode) -> bool {
        !self.keys.insert(key, true).unwrap_or(false)
    }

    /// Update state when a key is released. Returns true if it was down before.
    pub fn on_release(&mut self, key: KeyCode) -> bool {
        self.keys.insert(key, false).unwrap_or(false)
    }

    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.keys.get(&key).copied().unwrap_or(false)
    }

    /// Number of keys currently held down.
    pub fn pressed_count(&self) -> usize {
        self.keys.values().filter(|&&down| down).count()
    }
}
